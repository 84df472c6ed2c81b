//! ProductStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

use crate::core::ProductStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{NewProduct, Price, Product};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

/// Raw column values of a `products` row.
struct ProductRow {
    id: i64,
    name: String,
    price: String,
    description: String,
}

impl ProductRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            description: row.get(3)?,
        })
    }

    fn into_product(self) -> StorageResult<Product> {
        let price = Price::parse(&self.price).map_err(|e| {
            serialization_error(format!(
                "Stored price '{}' for product {} is unreadable: {}",
                self.price, self.id, e
            ))
        })?;

        Ok(Product {
            id: self.id,
            name: self.name,
            price,
            description: self.description,
        })
    }
}

#[async_trait]
impl ProductStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self) -> StorageResult<Vec<Product>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare("SELECT id, name, price, description FROM products ORDER BY id ASC")
            .map_err(|e| internal_error(format!("Failed to prepare list query: {}", e)))?;

        let rows = stmt
            .query_map([], ProductRow::from_row)
            .map_err(|e| internal_error(format!("Failed to list products: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error(format!("Failed to read product row: {}", e)))?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn create(&self, product: NewProduct) -> StorageResult<Product> {
        product.validate()?;

        let conn = self.get_connection()?;
        conn.execute(
            "INSERT INTO products (name, price, description) VALUES (?1, ?2, ?3)",
            params![product.name, product.price.to_string(), product.description],
        )
        .map_err(|e| internal_error(format!("Failed to insert product: {}", e)))?;

        let id = conn.last_insert_rowid();
        debug!(id, "Product inserted");

        Ok(Product {
            id,
            name: product.name,
            price: product.price,
            description: product.description,
        })
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Product>> {
        let conn = self.get_connection()?;

        let row = conn
            .query_row(
                "SELECT id, name, price, description FROM products WHERE id = ?1",
                params![id],
                ProductRow::from_row,
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read product: {}", e)))?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn update(&self, id: i64, product: NewProduct) -> StorageResult<Product> {
        product.validate()?;

        let conn = self.get_connection()?;
        let affected = conn
            .execute(
                "UPDATE products SET name = ?1, price = ?2, description = ?3 WHERE id = ?4",
                params![product.name, product.price.to_string(), product.description, id],
            )
            .map_err(|e| internal_error(format!("Failed to update product: {}", e)))?;

        if affected == 0 {
            return Err(StorageError::Resource(ResourceError::NotFound { id }));
        }

        debug!(id, "Product updated");

        Ok(Product {
            id,
            name: product.name,
            price: product.price,
            description: product.description,
        })
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;
        let affected = conn
            .execute("DELETE FROM products WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete product: {}", e)))?;

        if affected == 0 {
            return Err(StorageError::Resource(ResourceError::NotFound { id }));
        }

        debug!(id, "Product deleted");
        Ok(())
    }

    async fn exists(&self, id: i64) -> StorageResult<bool> {
        let conn = self.get_connection()?;
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )
        .map_err(|e| internal_error(format!("Failed to check product existence: {}", e)))
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count products: {}", e)))?;

        u64::try_from(count).map_err(|e| internal_error(format!("Invalid product count: {}", e)))
    }
}
