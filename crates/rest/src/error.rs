//! Error types for the catalog REST API.
//!
//! Every error renders as a JSON object body with an appropriate status:
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | NotFound | 404 | `{"detail": "Not found."}` |
//! | Validation | 400 | `{"<field>": ["<message>", ...], ...}` |
//! | BadRequest | 400 | `{"detail": "<message>"}` |
//! | UnsupportedMediaType | 415 | `{"detail": "Unsupported media type ..."}` |
//! | ServiceUnavailable | 503 | `{"detail": "<message>"}` |
//! | InternalError | 500 | `{"detail": "<message>"}` |
//!
//! Storage errors from the persistence layer convert through [`From`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_persistence::error::{
    BackendError, FieldErrors, ResourceError, StorageError, ValidationError,
};
use std::fmt;
use tracing::error;

/// Field key used for errors that are not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// No product at the requested path (HTTP 404).
    NotFound,

    /// One or more request fields are invalid (HTTP 400).
    Validation {
        /// Messages keyed by field.
        errors: FieldErrors,
    },

    /// The request could not be understood (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The body was sent with a non-JSON content type (HTTP 415).
    UnsupportedMediaType {
        /// The rejected content type.
        content_type: String,
    },

    /// A dependency is not ready to serve requests (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Builds a validation error holding one message for one field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        RestError::Validation {
            errors: FieldErrors::single(field, message),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Validation { .. } | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound => write!(f, "Not found."),
            RestError::Validation { errors } => write!(f, "Invalid request: {}", errors),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            RestError::NotFound => detail("Not found."),
            RestError::Validation { errors } => {
                serde_json::to_value(&errors).unwrap_or_else(|_| detail("Invalid request."))
            }
            RestError::BadRequest { message } => detail(&message),
            RestError::UnsupportedMediaType { content_type } => detail(&format!(
                "Unsupported media type \"{}\" in request.",
                content_type
            )),
            RestError::ServiceUnavailable { message } => detail(&message),
            RestError::InternalError { message } => {
                error!(error = %message, "Internal server error");
                detail(&message)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Creates a `{"detail": ...}` error body.
fn detail(message: &str) -> serde_json::Value {
    serde_json::json!({ "detail": message })
}

// Conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { .. } => RestError::NotFound,
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidProduct { errors } => RestError::Validation { errors },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::PoolExhausted { .. } => RestError::ServiceUnavailable {
                message: err.to_string(),
            },
            _ => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<FieldErrors> for RestError {
    fn from(errors: FieldErrors) -> Self {
        RestError::Validation { errors }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: RestError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(RestError::NotFound.to_string(), "Not found.");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_json(RestError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"detail": "Not found."}));
    }

    #[tokio::test]
    async fn test_validation_body_is_field_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", "This field is required.");
        errors.add("price", "A valid number is required.");

        let (status, body) = body_json(RestError::Validation { errors }).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"][0], "This field is required.");
        assert_eq!(body["price"][0], "A valid number is required.");
    }

    #[tokio::test]
    async fn test_unsupported_media_type_body() {
        let (status, body) = body_json(RestError::UnsupportedMediaType {
            content_type: "text/plain".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            body["detail"],
            "Unsupported media type \"text/plain\" in request."
        );
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err: RestError = StorageError::Resource(ResourceError::NotFound { id: 3 }).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_validation_maps_to_400() {
        let err: RestError =
            StorageError::from(FieldErrors::single("name", "This field may not be blank.")).into();
        match err {
            RestError::Validation { errors } => assert!(errors.contains("name")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pool_exhausted_is_503_detail() {
        let err: RestError = StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
        .into();

        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            serde_json::json!({"detail": "connection pool exhausted for sqlite"})
        );
    }

    #[test]
    fn test_backend_errors_map_to_5xx() {
        let pool: RestError = BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        }
        .into();
        assert_eq!(pool.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let internal: RestError = BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: "disk I/O error".to_string(),
            source: None,
        }
        .into();
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
