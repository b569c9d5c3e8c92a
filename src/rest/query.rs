//! Filters for the list endpoints and their query-string rendering.
//!
//! Parameters are emitted in a fixed order and only when set, so two
//! equal queries always render the same URL.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, HttpRequest, HttpRequestBuilder, InvalidHttpRequestError};
use crate::rest::ResourceKind;

/// Default page size for list requests.
pub const DEFAULT_LIMIT: u32 = 50;

/// Largest page size Shopify accepts.
pub const MAX_LIMIT: u32 = 250;

/// Order `status` filter.
///
/// `Any` is Shopify's own default and is never sent on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Open orders only.
    Open,
    /// Closed orders only.
    Closed,
    /// Cancelled orders only.
    Cancelled,
    /// Every order regardless of status.
    #[default]
    Any,
}

impl OrderStatus {
    /// Wire value for the `status` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
            Self::Any => "any",
        }
    }
}

/// Filters for `GET customers.json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerQuery {
    /// Only customers created at or after this instant.
    pub created_at_min: Option<DateTime<Utc>>,
    /// Only customers created at or before this instant.
    pub created_at_max: Option<DateTime<Utc>>,
    /// Field projection; blank entries are ignored.
    pub fields: Vec<String>,
    /// Page size.
    pub limit: u32,
    /// Cursor from a previous page.
    pub page_info: Option<String>,
}

impl Default for CustomerQuery {
    fn default() -> Self {
        Self {
            created_at_min: None,
            created_at_max: None,
            fields: Vec::new(),
            limit: DEFAULT_LIMIT,
            page_info: None,
        }
    }
}

impl CustomerQuery {
    /// Builds the `GET customers.json` request.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidHttpRequestError`] from the request builder.
    pub fn to_request(&self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let builder =
            HttpRequest::builder(HttpMethod::Get, ResourceKind::Customer.collection_path());
        let builder = with_created_range(builder, self.created_at_min, self.created_at_max);
        with_paging(builder, &self.fields, self.limit, self.page_info.as_deref()).build()
    }
}

/// Filters for `GET orders.json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderQuery {
    /// Only orders created at or after this instant.
    pub created_at_min: Option<DateTime<Utc>>,
    /// Only orders created at or before this instant.
    pub created_at_max: Option<DateTime<Utc>>,
    /// Order status filter.
    pub status: OrderStatus,
    /// Fulfillment status filter, passed through as given.
    pub fulfillment_status: Option<String>,
    /// Field projection; blank entries are ignored.
    pub fields: Vec<String>,
    /// Page size.
    pub limit: u32,
    /// Cursor from a previous page.
    pub page_info: Option<String>,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            created_at_min: None,
            created_at_max: None,
            status: OrderStatus::Any,
            fulfillment_status: None,
            fields: Vec::new(),
            limit: DEFAULT_LIMIT,
            page_info: None,
        }
    }
}

impl OrderQuery {
    /// Builds the `GET orders.json` request.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidHttpRequestError`] from the request builder.
    pub fn to_request(&self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let builder = HttpRequest::builder(HttpMethod::Get, ResourceKind::Order.collection_path());
        let mut builder = with_created_range(builder, self.created_at_min, self.created_at_max);

        if self.status != OrderStatus::Any {
            builder = builder.query_param("status", self.status.as_str());
        }
        builder = builder
            .optional_query_param("fulfillment_status", self.fulfillment_status.as_deref());

        with_paging(builder, &self.fields, self.limit, self.page_info.as_deref()).build()
    }
}

/// Joins a field projection into Shopify's comma-separated form.
///
/// Returns `None` when no non-blank field remains.
#[must_use]
pub fn fields_param(fields: &[String]) -> Option<String> {
    let joined = fields
        .iter()
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Renders an instant as RFC 3339 with a `Z` suffix, e.g. `2025-01-01T00:00:00Z`.
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn with_created_range(
    builder: HttpRequestBuilder,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
) -> HttpRequestBuilder {
    builder
        .optional_query_param("created_at_min", min.map(format_timestamp).as_deref())
        .optional_query_param("created_at_max", max.map(format_timestamp).as_deref())
}

fn with_paging(
    builder: HttpRequestBuilder,
    fields: &[String],
    limit: u32,
    page_info: Option<&str>,
) -> HttpRequestBuilder {
    builder
        .optional_query_param("fields", fields_param(fields).as_deref())
        .query_param("limit", limit.to_string())
        .optional_query_param("page_info", page_info)
}
