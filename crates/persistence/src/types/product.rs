//! Product records and the field sets used to write them.

use serde::{Deserialize, Serialize};

use super::price::Price;
use crate::error::FieldErrors;

/// Maximum length of a product name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

/// A stored product.
///
/// This is the representation returned by every read and write. The `id`
/// is assigned by the store and never changes.
///
/// ```
/// use catalog_persistence::types::{Price, Product};
///
/// let product = Product {
///     id: 1,
///     name: "Laptop".to_string(),
///     price: Price::parse("1200").unwrap(),
///     description: String::new(),
/// };
/// let json = serde_json::to_value(&product).unwrap();
/// assert_eq!(json["price"], "1200.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name, never blank.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Free-form description, empty when not supplied.
    pub description: String,
}

/// A complete set of writable product fields.
///
/// Used for creates and full updates, where every field is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Description; empty when the client sent none.
    pub description: String,
}

impl NewProduct {
    /// Creates a field set with an empty description.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks the invariants the store relies on.
    ///
    /// The name must contain something other than whitespace and fit within
    /// [`NAME_MAX_LENGTH`] characters.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "This field may not be blank.");
        } else if self.name.chars().count() > NAME_MAX_LENGTH {
            errors.add(
                "name",
                format!(
                    "Ensure this field has no more than {} characters.",
                    NAME_MAX_LENGTH
                ),
            );
        }
        errors.into_result()
    }
}

/// A subset of product fields for a partial update.
///
/// `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    /// New name, if changing.
    pub name: Option<String>,
    /// New price, if changing.
    pub price: Option<Price>,
    /// New description, if changing.
    pub description: Option<String>,
}

impl ProductChanges {
    /// Returns true if no field is being changed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.description.is_none()
    }

    /// Merges these changes over an existing product.
    ///
    /// Fields that were not supplied keep the value from `current`.
    pub fn apply_to(&self, current: &Product) -> NewProduct {
        NewProduct {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            price: self.price.unwrap_or(current.price),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
        }
    }
}
