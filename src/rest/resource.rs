//! Admin REST resources addressed by the tasks.

use urlencoding::encode;

/// A Shopify entity type and the REST paths and JSON keys it uses.
///
/// # Example
///
/// ```rust
/// use shopify_tasks::rest::ResourceKind;
///
/// assert_eq!(ResourceKind::Product.collection_path(), "products.json");
/// assert_eq!(ResourceKind::Product.member_path("42"), "products/42.json");
/// assert_eq!(ResourceKind::Order.plural_key(), "orders");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `products`
    Product,
    /// `customers`
    Customer,
    /// `orders`
    Order,
}

impl ResourceKind {
    /// Name used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Customer => "Customer",
            Self::Order => "Order",
        }
    }

    /// JSON key wrapping a single resource.
    #[must_use]
    pub const fn singular_key(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Customer => "customer",
            Self::Order => "order",
        }
    }

    /// JSON key wrapping a list of resources; also the path segment.
    #[must_use]
    pub const fn plural_key(self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Customer => "customers",
            Self::Order => "orders",
        }
    }

    /// Path of the collection, relative to the versioned base path.
    #[must_use]
    pub fn collection_path(self) -> String {
        format!("{}.json", self.plural_key())
    }

    /// Path of one member. The id is percent-encoded.
    #[must_use]
    pub fn member_path(self, id: &str) -> String {
        format!("{}/{}.json", self.plural_key(), encode(id))
    }

    /// Wraps a payload under the singular key, e.g. `{"product": {...}}`.
    #[must_use]
    pub fn wrap(self, payload: &serde_json::Value) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(self.singular_key().to_string(), payload.clone());
        serde_json::Value::Object(body)
    }
}
