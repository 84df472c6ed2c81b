//! Product id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// The `{id}` path segment of a product-detail route.
///
/// A segment that is not an integer cannot name a product, so it is
/// rejected with the same 404 an unknown id would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parses a raw path segment.
    pub fn parse(segment: &str) -> Option<Self> {
        segment.parse().ok().map(ProductId)
    }

    /// Returns the numeric id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::NotFound)?;

        ProductId::parse(&segment).ok_or(RestError::NotFound)
    }
}
