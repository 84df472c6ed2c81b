//! HTTP request handlers for product interactions.
//!
//! - [`list`] - List every product
//! - [`create`] - Create a product
//! - [`read`] - Retrieve a product by id
//! - [`update`] - Replace a product
//! - [`patch`] - Change some fields of a product
//! - [`delete`] - Delete a product
//! - [`health`] - Health, liveness and readiness endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod patch;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use patch::patch_handler;
pub use read::read_handler;
pub use update::update_handler;
