//! Error types for the persistence layer.
//!
//! Errors are split by category: resource state, validation of the values
//! the store is asked to persist, and failures of the backend itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No product with the given id exists.
    #[error("product not found: {id}")]
    NotFound { id: i64 },
}

/// Errors raised when a product violates a store invariant.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more fields are invalid.
    #[error("invalid product: {errors}")]
    InvalidProduct { errors: FieldErrors },
}

/// Errors raised by the underlying database driver or pool.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A stored value could not be decoded.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Validation messages keyed by field name.
///
/// Serializes as a JSON object mapping each field to its ordered list of
/// messages, e.g. `{"name": ["This field is required."]}`. Keys are kept
/// sorted so responses are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty set of field errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Creates a set holding a single message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Returns true when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the field has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Iterates over fields and their messages in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Converts into `Err` when any error was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<FieldErrors> for StorageError {
    fn from(errors: FieldErrors) -> Self {
        StorageError::Validation(ValidationError::InvalidProduct { errors })
    }
}

/// A pool checkout only fails once `connection_timeout` elapses with every
/// connection in use.
#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.add("price", "A valid number is required.");
        errors.add("name", "This field is required.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": ["This field is required."],
                "price": ["A valid number is required."]
            })
        );
    }

    #[test]
    fn test_field_errors_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("price", "first");
        errors.add("price", "second");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("price").unwrap(), ["first", "second"]);
    }

    #[test]
    fn test_field_errors_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());
        assert!(FieldErrors::single("name", "x").into_result().is_err());
    }

    #[test]
    fn test_not_found_display() {
        let err = StorageError::from(ResourceError::NotFound { id: 42 });
        assert_eq!(err.to_string(), "product not found: 42");
    }

    #[test]
    fn test_validation_display() {
        let err = StorageError::from(FieldErrors::single("name", "This field may not be blank."));
        assert_eq!(
            err.to_string(),
            "invalid product: name: This field may not be blank."
        );
    }
}
