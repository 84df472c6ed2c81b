//! SQLite backend implementation.
//!
//! Supports both in-memory databases (used by the test suites) and
//! file-based databases.
//!
//! # Example
//!
//! ```no_run
//! use catalog_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE products (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL CHECK (length(trim(name)) > 0),
//!     price TEXT NOT NULL,          -- canonical two-decimal text
//!     description TEXT NOT NULL DEFAULT ''
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
