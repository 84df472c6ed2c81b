//! Delete handler: `DELETE /products/{id}/`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_persistence::core::ProductStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ProductId;
use crate::state::AppState;

/// Handler for deleting a product.
///
/// Deletion is permanent; the id is never handed out again.
///
/// # Response
///
/// - `204 No Content` - Product deleted
/// - `404 Not Found` - No product with that id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    ProductId(id): ProductId,
) -> RestResult<Response>
where
    S: ProductStorage + Send + Sync,
{
    debug!(id = %id, "Processing delete request");

    state.storage().delete(id).await?;

    debug!(id = %id, "Product deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
