//! Retrieve handler: `GET /products/{id}/`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_persistence::core::ProductStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::ProductId;
use crate::state::AppState;

/// Handler for retrieving one product.
///
/// # Response
///
/// - `200 OK` - The product
/// - `404 Not Found` - No product with that id, or the id is not an integer
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    ProductId(id): ProductId,
) -> RestResult<Response>
where
    S: ProductStorage + Send + Sync,
{
    debug!(id = %id, "Processing read request");

    match state.storage().read(id).await? {
        Some(product) => Ok((StatusCode::OK, Json(product)).into_response()),
        None => {
            debug!(id = %id, "Product not found");
            Err(RestError::NotFound)
        }
    }
}
