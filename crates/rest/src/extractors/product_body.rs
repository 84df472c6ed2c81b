//! Product request body extractor.
//!
//! Reads the request body as a JSON object, producing REST-framework style
//! errors for the ways a body can be unusable.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::{NON_FIELD_ERRORS, RestError};

/// Axum extractor for a JSON object request body.
///
/// An empty body is treated as an empty object. A missing `Content-Type`
/// is treated as JSON.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_rest::extractors::ProductBody;
///
/// async fn handler(ProductBody(body): ProductBody) {
///     println!("name: {:?}", body.get("name"));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductBody(pub Map<String, Value>);

impl ProductBody {
    /// Consumes the extractor and returns the inner map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Returns a reference to the inner map.
    pub fn inner(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Error type for body extraction failures.
#[derive(Debug, Error)]
pub enum ProductBodyRejection {
    /// The body could not be read (e.g. it exceeded the size limit).
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),
    /// The body was sent with a non-JSON content type.
    #[error("unsupported content type: {0}")]
    UnsupportedMediaType(String),
    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// The body is valid JSON but not an object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(Value),
}

impl IntoResponse for ProductBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            ProductBodyRejection::Body(rejection) => {
                let body = serde_json::json!({ "detail": rejection.body_text() });
                return (rejection.status(), Json(body)).into_response();
            }
            ProductBodyRejection::UnsupportedMediaType(content_type) => {
                RestError::UnsupportedMediaType { content_type }
            }
            ProductBodyRejection::InvalidJson(message) => RestError::BadRequest {
                message: format!("JSON parse error - {}", message),
            },
            ProductBodyRejection::NotAnObject(Value::Null) => {
                RestError::field(NON_FIELD_ERRORS, "No data provided")
            }
            ProductBodyRejection::NotAnObject(value) => RestError::field(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    json_type_name(&value)
                ),
            ),
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = ProductBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Own the header value before the request is consumed
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = Bytes::from_request(req, state).await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ProductBody::default());
        }

        if let Some(content_type) = content_type {
            if !is_json_content_type(&content_type) {
                return Err(ProductBodyRejection::UnsupportedMediaType(content_type));
            }
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ProductBodyRejection::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(ProductBody(map)),
            other => Err(ProductBodyRejection::NotAnObject(other)),
        }
    }
}

/// Returns true for `application/json` and `application/*+json` types.
fn is_json_content_type(content_type: &str) -> bool {
    let Ok(mime) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

/// Names a JSON value's type the way API clients see it in error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
