//! Payload extraction for successful responses.
//!
//! Shopify wraps every payload in a key named after the resource:
//! `{"product": {...}}` for one item and `{"orders": [...]}` for a list.
//! A missing key is not an error; it produces `None` or an empty page.

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpResponse, PageInfo};
use crate::rest::ResourceKind;

/// One page of a list endpoint.
///
/// `Page<T>` implements `Deref<Target = [T]>`, so it can be iterated and
/// indexed like a slice.
///
/// # Example
///
/// ```rust
/// use shopify_tasks::rest::Page;
/// use shopify_tasks::PageInfo;
///
/// let page = Page::new(vec![1, 2, 3], PageInfo::default());
/// assert_eq!(page.len(), 3);
/// assert_eq!(page[0], 1);
/// assert!(!page.page_info.has_next_page());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Cursors for the neighbouring pages.
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a page from its items and cursors.
    #[must_use]
    pub const fn new(items: Vec<T>, page_info: PageInfo) -> Self {
        Self { items, page_info }
    }

    /// Drops every item past `limit`.
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.items.truncate(limit);
        self
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Returns the object under the resource's singular key.
#[must_use]
pub fn extract_single(response: &HttpResponse, resource: ResourceKind) -> Option<Value> {
    response
        .body
        .get(resource.singular_key())
        .filter(|value| !value.is_null())
        .cloned()
}

/// Returns the list under the resource's plural key with the response's cursors.
#[must_use]
pub fn extract_page(response: &HttpResponse, resource: ResourceKind) -> Page<Value> {
    let items = response
        .body
        .get(resource.plural_key())
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    Page::new(items, response.page_info.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn ok(body: Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    #[test]
    fn test_extract_single_present() {
        let response = ok(json!({"product": {"id": 1, "title": "Hat"}}));
        assert_eq!(
            extract_single(&response, ResourceKind::Product),
            Some(json!({"id": 1, "title": "Hat"}))
        );
    }

    #[test]
    fn test_extract_single_absent_or_null() {
        assert_eq!(extract_single(&ok(json!({})), ResourceKind::Product), None);
        assert_eq!(
            extract_single(&ok(json!({"customer": null})), ResourceKind::Customer),
            None
        );
    }

    #[test]
    fn test_extract_page_absent_key_is_empty() {
        let page = extract_page(&ok(json!({})), ResourceKind::Order);
        assert!(page.is_empty());
        assert_eq!(page.page_info, PageInfo::default());
    }

    #[test]
    fn test_extract_page_items() {
        let page = extract_page(
            &ok(json!({"orders": [{"id": 1}, {"id": 2}]})),
            ResourceKind::Order,
        );
        assert_eq!(page.len(), 2);
        assert_eq!(page[1], json!({"id": 2}));
    }

    #[test]
    fn test_truncated_caps_items() {
        let page = Page::new((0..10).collect::<Vec<_>>(), PageInfo::default()).truncated(5);
        assert_eq!(page.into_items(), vec![0, 1, 2, 3, 4]);
    }
}
