//! Core types for the persistence layer.
//!
//! - [`Product`] - A stored product
//! - [`NewProduct`] - The full field set written on create and full update
//! - [`ProductChanges`] - The partial field set written on partial update
//! - [`Price`] - Two-decimal fixed-point price

pub mod price;
pub mod product;

pub use price::{DECIMAL_PLACES, MAX_DIGITS, Price, PriceError};
pub use product::{NAME_MAX_LENGTH, NewProduct, Product, ProductChanges};
