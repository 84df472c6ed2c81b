//! Route configuration for the catalog REST API.
//!
//! This module maps HTTP paths to handlers and resolves route names back
//! to paths.

pub mod product_routes;
pub mod reverse;

pub use product_routes::create_routes;
pub use reverse::reverse;
