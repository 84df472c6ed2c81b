//! REST API test harness.
//!
//! Builds test servers over an in-memory SQLite backend.

use std::sync::Arc;

use axum_test::TestServer;
use catalog_persistence::backends::sqlite::SqliteBackend;

use catalog_rest::{AppState, ServerConfig, create_app_with_config, routing};

/// Creates an initialized in-memory backend.
pub fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    backend
}

/// Creates a test server over the bare product routes.
///
/// The backend is returned so tests can seed and inspect storage directly.
pub fn create_test_server() -> (TestServer, Arc<SqliteBackend>) {
    let backend = Arc::new(create_backend());

    let state = AppState::new(Arc::clone(&backend), ServerConfig::for_testing());
    let app = routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Creates a test server over the full application, middleware included.
pub fn create_app_server(config: ServerConfig) -> TestServer {
    let app = create_app_with_config(create_backend(), config);
    TestServer::new(app).expect("Failed to create test server")
}
