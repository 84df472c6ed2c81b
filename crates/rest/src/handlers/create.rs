//! Create handler: `POST /products/`

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use catalog_persistence::core::ProductStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::ProductBody;
use crate::routing::reverse;
use crate::state::AppState;
use crate::validation;

/// Handler for product creation.
///
/// The server assigns the id; any `id` in the body is ignored.
///
/// # Request body
///
/// `{"name": string, "price": decimal-string, "description"?: string}`
///
/// # Response
///
/// - `201 Created` - The stored product, with `Location` set to its
///   product-detail path
/// - `400 Bad Request` - Field errors keyed by field name
///
/// # Example
///
/// ```http
/// POST /products/ HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Test Product", "price": "99.99"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    ProductBody(body): ProductBody,
) -> RestResult<Response>
where
    S: ProductStorage + Send + Sync,
{
    debug!("Processing create request");

    let product = validation::new_product(&body)?;
    let created = state.storage().create(product).await?;

    let location = reverse::product_detail(created.id);
    let location = HeaderValue::from_str(&location).map_err(|e| RestError::InternalError {
        message: format!("Invalid Location header: {}", e),
    })?;

    debug!(id = %created.id, "Product created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}
