//! Request body validation for product writes.
//!
//! Converts a JSON object into the typed field sets the storage layer
//! accepts. All fields are checked before returning so that one response
//! reports every problem. Unknown keys, including `id`, are ignored.
//!
//! | Check | Message |
//! |-------|---------|
//! | required key absent | `This field is required.` |
//! | value is `null` | `This field may not be null.` |
//! | blank name | `This field may not be blank.` |
//! | not a string | `Not a valid string.` |
//! | name too long | `Ensure this field has no more than 255 characters.` |
//! | bad price | see [`PriceError`] |

use catalog_persistence::error::FieldErrors;
use catalog_persistence::types::{NAME_MAX_LENGTH, NewProduct, Price, PriceError, ProductChanges};
use serde_json::{Map, Value};

/// Message for a required field that is absent.
pub const REQUIRED: &str = "This field is required.";
/// Message for an explicit `null`.
pub const NOT_NULL: &str = "This field may not be null.";
/// Message for a blank name.
pub const NOT_BLANK: &str = "This field may not be blank.";
/// Message for a value that cannot be read as a string.
pub const NOT_A_STRING: &str = "Not a valid string.";

/// Which fields a write must supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Create and full update: `name` and `price` are required.
    Complete,
    /// Partial update: every field is optional.
    Partial,
}

/// Validates a body for create or full update.
///
/// A missing `description` becomes the empty string.
pub fn new_product(body: &Map<String, Value>) -> Result<NewProduct, FieldErrors> {
    let fields = ProductFields::read(body, Mode::Complete)?;

    match (fields.name, fields.price) {
        (Some(name), Some(price)) => Ok(NewProduct {
            name,
            price,
            description: fields.description.unwrap_or_default(),
        }),
        (name, price) => {
            let mut errors = FieldErrors::new();
            if name.is_none() {
                errors.add("name", REQUIRED);
            }
            if price.is_none() {
                errors.add("price", REQUIRED);
            }
            Err(errors)
        }
    }
}

/// Validates a body for partial update.
///
/// Only the keys present in the body are checked and returned.
pub fn product_changes(body: &Map<String, Value>) -> Result<ProductChanges, FieldErrors> {
    let fields = ProductFields::read(body, Mode::Partial)?;

    Ok(ProductChanges {
        name: fields.name,
        price: fields.price,
        description: fields.description,
    })
}

/// Parsed writable fields, each present only if supplied and valid.
struct ProductFields {
    name: Option<String>,
    price: Option<Price>,
    description: Option<String>,
}

impl ProductFields {
    fn read(body: &Map<String, Value>, mode: Mode) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = match body.get("name") {
            None => {
                if mode == Mode::Complete {
                    errors.add("name", REQUIRED);
                }
                None
            }
            Some(value) => match name_value(value) {
                Ok(name) => Some(name),
                Err(message) => {
                    errors.add("name", message);
                    None
                }
            },
        };

        let price = match body.get("price") {
            None => {
                if mode == Mode::Complete {
                    errors.add("price", REQUIRED);
                }
                None
            }
            Some(value) => match price_value(value) {
                Ok(price) => Some(price),
                Err(message) => {
                    errors.add("price", message);
                    None
                }
            },
        };

        let description = match body.get("description") {
            None => None,
            Some(value) => match string_value(value) {
                Ok(description) => Some(description),
                Err(message) => {
                    errors.add("description", message);
                    None
                }
            },
        };

        errors.into_result()?;

        Ok(Self {
            name,
            price,
            description,
        })
    }
}

/// Reads a string field, trimming surrounding whitespace.
///
/// Numbers are accepted and rendered as text; booleans, arrays and objects
/// are not.
fn string_value(value: &Value) -> Result<String, String> {
    match value {
        Value::Null => Err(NOT_NULL.to_string()),
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(NOT_A_STRING.to_string()),
    }
}

fn name_value(value: &Value) -> Result<String, String> {
    let name = string_value(value)?;

    if name.is_empty() {
        return Err(NOT_BLANK.to_string());
    }

    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(format!(
            "Ensure this field has no more than {} characters.",
            NAME_MAX_LENGTH
        ));
    }

    Ok(name)
}

/// Reads a price from a JSON string or number.
fn price_value(value: &Value) -> Result<Price, String> {
    let parsed = match value {
        Value::Null => return Err(NOT_NULL.to_string()),
        Value::String(s) => Price::parse(s),
        Value::Number(n) => Price::parse(&n.to_string()),
        _ => Err(PriceError::Invalid),
    };

    parsed.map_err(|e| e.to_string())
}
