//! Full update handler: `PUT /products/{id}/`

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

/// Handler for replacing a product.
///
/// The body is validated like a create. An omitted `description` is reset
/// to the empty string.
///
/// # Response
///
/// - `200 OK` - The updated product
/// - `400 Bad Request` - Field errors keyed by field name
/// - `404 Not Found` - No product with that id (reported before any body
///   errors)
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    ProductId(id): ProductId,
    body: Result<ProductBody, ProductBodyRejection>,
) -> RestResult<Response>
where
    S: ProductStorage + Send + Sync,
{
    debug!(id = %id, "Processing update request");

    if !state.storage().exists(id).await? {
        return Err(RestError::NotFound);
    }

    // Body errors only count once the product is known to exist
    let body = match body {
        Ok(ProductBody(body)) => body,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    let product = validation::new_product(&body)?;
    let updated = state.storage().update(id, product).await?;

    debug!(id = %id, "Product updated");

    Ok((StatusCode::OK, Json(updated)).into_response())
}
