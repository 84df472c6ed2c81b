//! Core storage traits and abstractions.
//!
//! - [`ProductStorage`] - CRUD operations over products
//!
//! Backends in [`crate::backends`] implement these traits; the REST layer
//! is generic over them.

pub mod storage;

pub use storage::ProductStorage;
