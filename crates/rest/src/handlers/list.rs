//! List handler: `GET /products/`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_persistence::core::ProductStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Returns every product in creation order.
///
/// # Response
///
/// - `200 OK` - JSON array of products (possibly empty)
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ProductStorage + Send + Sync,
{
    debug!("Processing list request");

    let products = state.storage().list().await?;

    debug!(count = products.len(), "Returning products");

    Ok((StatusCode::OK, Json(products)).into_response())
}
