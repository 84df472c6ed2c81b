//! Product route configuration.

use axum::{Router, routing::get};
use catalog_persistence::core::ProductStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all catalog REST API routes.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness check
/// - `GET /_readiness` - Readiness check
///
/// ## Collection (`product-list`)
/// - `GET /products/` - List
/// - `POST /products/` - Create
///
/// ## Instance (`product-detail`)
/// - `GET /products/{id}/` - Retrieve
/// - `PUT /products/{id}/` - Full update
/// - `PATCH /products/{id}/` - Partial update
/// - `DELETE /products/{id}/` - Delete
///
/// Each product route also answers without the trailing slash.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ProductStorage + Send + Sync + 'static,
{
    Router::new()
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<S>))
        // Collection routes
        .route(
            "/products/",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/products",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // Instance routes
        .route(
            "/products/{id}/",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .patch(handlers::patch_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .route(
            "/products/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .patch(handlers::patch_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // State
        .with_state(state)
}
