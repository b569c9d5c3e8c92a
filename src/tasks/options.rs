//! Options shared by the read tasks.
//!
//! The write tasks (`create_product`, `update_product`, `delete_product`)
//! take a bare [`ErrorPolicy`] as their options.

use serde::Deserialize;

use crate::rest::DEFAULT_LIMIT;
use crate::tasks::ErrorPolicy;

/// Options for tasks that fetch one resource by id.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SingleResourceOptions {
    /// Field projection, sent as `fields=a,b`. Empty means every field.
    pub fields: Vec<String>,
    /// Failure handling.
    #[serde(flatten)]
    pub policy: ErrorPolicy,
}

/// Options for tasks that fetch a page of resources.
///
/// # Example
///
/// ```rust
/// use shopify_tasks::tasks::ListOptions;
///
/// let options: ListOptions = serde_json::from_str(r#"{"limit": 10}"#).unwrap();
/// assert_eq!(options.limit, 10);
/// assert!(options.policy.throw_error_on_failure);
///
/// let defaults = ListOptions::default();
/// assert_eq!(defaults.limit, 50);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListOptions {
    /// Field projection, sent as `fields=a,b`.
    pub fields: Vec<String>,
    /// Cursor taken from a previous page's [`PageInfo`](crate::PageInfo).
    pub page_info: Option<String>,
    /// Page size, 1 to 250.
    pub limit: u32,
    /// Failure handling.
    #[serde(flatten)]
    pub policy: ErrorPolicy,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            page_info: None,
            limit: DEFAULT_LIMIT,
            policy: ErrorPolicy::default(),
        }
    }
}
