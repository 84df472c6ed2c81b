//! Application state for the catalog REST API.
//!
//! Handlers share the storage backend and the server configuration through
//! [`AppState`].

use std::sync::Arc;

use catalog_persistence::core::ProductStorage;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`ProductStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use catalog_rest::{AppState, ServerConfig};
/// use catalog_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// S sits behind an Arc, so it does not need to be Clone itself
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ProductStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_persistence::error::StorageResult;
    use catalog_persistence::types::{NewProduct, Product};

    // Storage stub; only the name and count are reachable from these tests
    struct MockStorage;

    #[async_trait]
    impl ProductStorage for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn list(&self) -> StorageResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn create(&self, _product: NewProduct) -> StorageResult<Product> {
            unimplemented!()
        }

        async fn read(&self, _id: i64) -> StorageResult<Option<Product>> {
            Ok(None)
        }

        async fn update(&self, _id: i64, _product: NewProduct) -> StorageResult<Product> {
            unimplemented!()
        }

        async fn delete(&self, _id: i64) -> StorageResult<()> {
            unimplemented!()
        }

        async fn count(&self) -> StorageResult<u64> {
            Ok(0)
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::default());

        assert_eq!(state.storage().backend_name(), "mock");
        assert_eq!(state.config().port, 8080);
    }

    #[test]
    fn test_app_state_config_access() {
        let config = ServerConfig {
            max_body_size: 4096,
            ..Default::default()
        };
        let state = AppState::new(Arc::new(MockStorage), config);

        assert_eq!(state.config().max_body_size, 4096);
    }

    #[test]
    fn test_app_state_clone_shares_storage() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::default());
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.storage, &cloned.storage));
    }
}
