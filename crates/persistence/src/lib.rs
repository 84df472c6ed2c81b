//! Product Catalog Persistence Layer
//!
//! This crate stores and retrieves products for the catalog service. It
//! defines the product model, the [`ProductStorage`] trait the REST layer is
//! written against, and the SQLite backend that implements it.
//!
//! # Architecture
//!
//! - [`types`] - Product, price and write field sets
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! use catalog_persistence::backends::sqlite::SqliteBackend;
//! use catalog_persistence::core::ProductStorage;
//! use catalog_persistence::types::{NewProduct, Price};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let laptop = backend
//!     .create(NewProduct::new("Laptop", Price::parse("1200.00")?))
//!     .await?;
//! assert_eq!(laptop.price.to_string(), "1200.00");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use core::ProductStorage;
pub use error::{FieldErrors, StorageError, StorageResult};
pub use types::{NewProduct, Price, Product, ProductChanges};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
