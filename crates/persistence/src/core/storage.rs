//! Core product storage trait.
//!
//! This module defines the [`ProductStorage`] trait, which provides the
//! create, read, update and delete operations for products.

use async_trait::async_trait;

use crate::error::{ResourceError, StorageError, StorageResult};
use crate::types::{NewProduct, Product, ProductChanges};

/// Core storage trait for products.
///
/// Implementations assign ids, keep products in creation order and enforce
/// the [`NewProduct::validate`] invariants on every write. Deletes are
/// permanent.
///
/// # Example
///
/// ```ignore
/// use catalog_persistence::core::ProductStorage;
/// use catalog_persistence::types::{NewProduct, Price, ProductChanges};
///
/// async fn example<S: ProductStorage>(storage: &S) -> Result<(), StorageError> {
///     let created = storage
///         .create(NewProduct::new("Keyboard", Price::parse("75.00")?))
///         .await?;
///
///     let changes = ProductChanges {
///         description: Some("Mechanical".to_string()),
///         ..Default::default()
///     };
///     let updated = storage.partial_update(created.id, changes).await?;
///     assert_eq!(updated.name, "Keyboard");
///
///     storage.delete(created.id).await?;
///     assert!(!storage.exists(created.id).await?);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ProductStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every product in creation order.
    async fn list(&self) -> StorageResult<Vec<Product>>;

    /// Persists a new product and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - If the field set breaks an invariant
    async fn create(&self, product: NewProduct) -> StorageResult<Product>;

    /// Reads a product by id.
    ///
    /// Returns `None` if no product has that id.
    async fn read(&self, id: i64) -> StorageResult<Option<Product>>;

    /// Replaces every field of an existing product.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the product doesn't exist
    /// * `StorageError::Validation` - If the field set breaks an invariant
    async fn update(&self, id: i64, product: NewProduct) -> StorageResult<Product>;

    /// Applies a subset of fields to an existing product.
    ///
    /// The existing record is read, the supplied fields are merged over it
    /// and the result is written back. Fields not present in `changes` keep
    /// their stored values.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the product doesn't exist
    /// * `StorageError::Validation` - If the merged product breaks an invariant
    async fn partial_update(&self, id: i64, changes: ProductChanges) -> StorageResult<Product> {
        let current = self
            .read(id)
            .await?
            .ok_or(StorageError::Resource(ResourceError::NotFound { id }))?;

        if changes.is_empty() {
            return Ok(current);
        }

        self.update(id, changes.apply_to(&current)).await
    }

    /// Permanently removes a product.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the product doesn't exist
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Checks whether a product exists.
    async fn exists(&self, id: i64) -> StorageResult<bool> {
        Ok(self.read(id).await?.is_some())
    }

    /// Returns the number of stored products.
    async fn count(&self) -> StorageResult<u64>;
}
