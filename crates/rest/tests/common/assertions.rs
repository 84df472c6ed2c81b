//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the body is `{"detail": "Not found."}`.
pub fn assert_not_found_body(response: &TestResponse) {
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({"detail": "Not found."}));
}

/// Asserts that a field error body names `field` with `message` first.
pub fn assert_field_error(body: &Value, field: &str, message: &str) {
    let messages = body
        .get(field)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("Expected errors for '{}', got {}", field, body));
    assert_eq!(
        messages.first().and_then(Value::as_str),
        Some(message),
        "Unexpected message for '{}': {}",
        field,
        body
    );
}

/// Asserts that a product body has exactly the public product keys.
pub fn assert_product_shape(body: &Value) {
    let object = body
        .as_object()
        .unwrap_or_else(|| panic!("Expected a product object, got {}", body));
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["description", "id", "name", "price"]);
    assert!(body["id"].is_i64());
    assert!(body["price"].is_string());
}
