//! Test fixtures for REST API testing.

use catalog_persistence::backends::sqlite::SqliteBackend;
use catalog_persistence::core::ProductStorage;
use catalog_persistence::types::{NewProduct, Price, Product};
use serde_json::{Value, json};

/// A complete, valid create payload.
pub fn product_data() -> Value {
    json!({
        "name": "Test Product",
        "price": "99.99",
        "description": "A fantastic test product."
    })
}

/// Builder for seeding products straight into storage.
#[derive(Debug, Clone)]
pub struct ProductFixture {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl Default for ProductFixture {
    fn default() -> Self {
        Self {
            name: "Default Product".to_string(),
            price: "10.00".to_string(),
            description: "A default product for testing.".to_string(),
        }
    }
}

impl ProductFixture {
    /// Creates a fixture with the given name and price.
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Stores the product and returns it with its assigned id.
    pub async fn create(self, backend: &SqliteBackend) -> Product {
        let price = Price::parse(&self.price).expect("fixture price must be valid");
        backend
            .create(NewProduct::new(self.name, price).with_description(self.description))
            .await
            .expect("Failed to seed product")
    }
}

/// Seeds the default product.
pub async fn create_product(backend: &SqliteBackend) -> Product {
    ProductFixture::default().create(backend).await
}
