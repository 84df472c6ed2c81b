//! Partial update handler: `PATCH /products/{id}/`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_persistence::core::ProductStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{ProductBody, ProductBodyRejection, ProductId};
use crate::state::AppState;
use crate::validation;

/// Handler for changing some fields of a product.
///
/// Only fields present in the body are validated and written; the rest
/// keep their stored values. An empty body changes nothing.
///
/// # Response
///
/// - `200 OK` - The product after the change
/// - `400 Bad Request` - Field errors for the supplied fields
/// - `404 Not Found` - No product with that id (reported before any body
///   errors)
pub async fn patch_handler<S>(
    State(state): State<AppState<S>>,
    ProductId(id): ProductId,
    body: Result<ProductBody, ProductBodyRejection>,
) -> RestResult<Response>
where
    S: ProductStorage + Send + Sync,
{
    debug!(id = %id, "Processing patch request");

    if !state.storage().exists(id).await? {
        return Err(RestError::NotFound);
    }

    // Body errors only count once the product is known to exist
    let body = match body {
        Ok(ProductBody(body)) => body,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    debug!(id = %id, fields = body.len(), "Applying partial update");

    let changes = validation::product_changes(&body)?;
    let updated = state.storage().partial_update(id, changes).await?;

    debug!(id = %id, "Product patched");

    Ok((StatusCode::OK, Json(updated)).into_response())
}
