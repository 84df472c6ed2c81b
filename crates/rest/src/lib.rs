//! # catalog-rest - Product Catalog RESTful API
//!
//! This crate serves the product catalog over HTTP. It exposes list, create,
//! retrieve, full update, partial update and delete for a single `Product`
//! resource, on top of any [`ProductStorage`] backend.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_rest::{create_app, ServerConfig};
//! use catalog_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("catalog.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | list | GET | `/products/` | 200 |
//! | create | POST | `/products/` | 201 |
//! | retrieve | GET | `/products/{id}/` | 200 |
//! | full update | PUT | `/products/{id}/` | 200 |
//! | partial update | PATCH | `/products/{id}/` | 200 |
//! | delete | DELETE | `/products/{id}/` | 204 |
//!
//! Product bodies look like
//! `{"id": 1, "name": "Laptop", "price": "1200.00", "description": ""}`.
//! Prices are decimal strings with exactly two decimal places.
//!
//! ## Error Handling
//!
//! | HTTP Status | Body | Description |
//! |-------------|------|-------------|
//! | 400 | `{"<field>": ["..."]}` | Field validation failed |
//! | 400 | `{"detail": "JSON parse error - ..."}` | Malformed JSON |
//! | 404 | `{"detail": "Not found."}` | Unknown or non-integer id |
//! | 415 | `{"detail": "Unsupported media type ..."}` | Non-JSON body |
//! | 500 | `{"detail": "..."}` | Storage failure |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and response bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`validation`] - Request body validation
//! - [`extractors`] - Axum extractors for ids and bodies
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`routing`] - Route configuration and reverse lookup

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode};
use catalog_persistence::core::ProductStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ProductStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the product routes together with the middleware stack: tracing,
/// request timeout, body size limit, and optionally CORS and request ids.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_rest::{create_app_with_config, ServerConfig};
/// use catalog_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: ProductStorage + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(service_builder);

    // SetRequestId must wrap PropagateRequestId
    if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    } else {
        router
    }
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at startup. `RUST_LOG`, when set, overrides `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "catalog={level},catalog_rest={level},catalog_persistence={level},tower_http=debug",
            level = level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

