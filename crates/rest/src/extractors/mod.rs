//! Axum extractors for catalog requests.
//!
//! - [`ProductBody`] - JSON object request body for product writes
//! - [`ProductId`] - Product id path segment

mod product_body;
mod product_id;

pub use product_body::{ProductBody, ProductBodyRejection};
pub use product_id::ProductId;
