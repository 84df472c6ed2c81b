//! Named routes and reverse lookup.
//!
//! Route names let handlers build URLs without hard-coding path layouts.

/// Name of the collection route (`/products/`).
pub const PRODUCT_LIST: &str = "product-list";

/// Name of the single-product route (`/products/{id}/`).
pub const PRODUCT_DETAIL: &str = "product-detail";

/// Path of the product collection.
pub fn product_list() -> String {
    "/products/".to_string()
}

/// Path of a single product.
pub fn product_detail(id: i64) -> String {
    format!("/products/{}/", id)
}

/// Resolves a route name to a path.
///
/// `product-detail` needs an id; `product-list` takes none. Returns `None`
/// for unknown names or a mismatched id argument.
///
/// ```
/// use catalog_rest::routing::reverse::reverse;
///
/// assert_eq!(reverse("product-list", None).as_deref(), Some("/products/"));
/// assert_eq!(reverse("product-detail", Some(7)).as_deref(), Some("/products/7/"));
/// assert_eq!(reverse("product-detail", None), None);
/// ```
pub fn reverse(name: &str, id: Option<i64>) -> Option<String> {
    match (name, id) {
        (PRODUCT_LIST, None) => Some(product_list()),
        (PRODUCT_DETAIL, Some(id)) => Some(product_detail(id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_known_routes() {
        assert_eq!(reverse(PRODUCT_LIST, None), Some("/products/".to_string()));
        assert_eq!(
            reverse(PRODUCT_DETAIL, Some(12)),
            Some("/products/12/".to_string())
        );
    }

    #[test]
    fn test_reverse_rejects_bad_arguments() {
        assert_eq!(reverse(PRODUCT_LIST, Some(1)), None);
        assert_eq!(reverse(PRODUCT_DETAIL, None), None);
        assert_eq!(reverse("order-list", None), None);
    }
}
