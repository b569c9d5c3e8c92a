//! HTTP response types for the Shopify connector tasks.
//!
//! This module provides the [`HttpResponse`] type and the [`PageInfo`]
//! cursor pair parsed from Shopify's `Link` header.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;

/// Pagination cursors parsed from the `Link` header.
///
/// Shopify uses cursor-based pagination: each list response may carry a
/// `Link` header with `<url>; rel="next"` and `<url>; rel="previous"`
/// entries whose URLs embed an opaque `page_info` value. Pass either cursor
/// back as the `page_info` option to fetch that page.
///
/// # Example
///
/// ```rust
/// use shopify_tasks::PageInfo;
///
/// let link = r#"<https://shop.myshopify.com/admin/api/2024-10/orders.json?limit=5&page_info=abc>; rel="next""#;
/// let info = PageInfo::from_link_headers([link]);
/// assert_eq!(info.next_page.as_deref(), Some("abc"));
/// assert!(info.previous_page.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Cursor for the next page, if there is one.
    pub next_page: Option<String>,
    /// Cursor for the previous page, if there is one.
    pub previous_page: Option<String>,
}

impl PageInfo {
    const CURSOR_KEY: &'static str = "page_info=";

    /// Parses cursors from one or more `Link` header values.
    ///
    /// Each value is a comma-separated list of `<url>; rel="..."` segments
    /// and the header itself may be repeated. Only `next` and `previous`
    /// relations are read; if either appears more than once the last one
    /// wins. Segments without a `page_info` parameter are skipped, so a
    /// malformed header simply yields no cursors.
    #[must_use]
    pub fn from_link_headers<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut info = Self::default();

        for value in values {
            for segment in value.as_ref().split(',') {
                let slot = if segment.contains(r#"rel="next""#) {
                    &mut info.next_page
                } else if segment.contains(r#"rel="previous""#) {
                    &mut info.previous_page
                } else {
                    continue;
                };

                if let Some(cursor) = Self::extract_cursor(segment) {
                    *slot = Some(cursor);
                }
            }
        }

        info
    }

    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page.is_some()
    }

    /// Extracts and percent-decodes the `page_info` value of one segment.
    ///
    /// The value ends at the closing `>` of the URL or at the next `&`.
    fn extract_cursor(segment: &str) -> Option<String> {
        let start = segment.find(Self::CURSOR_KEY)? + Self::CURSOR_KEY.len();
        let rest = &segment[start..];
        let end = rest.find(|c| c == '>' || c == '&').unwrap_or(rest.len());
        let raw = rest[..end].trim();

        if raw.is_empty() {
            return None;
        }

        let decoded = urlencoding::decode(raw).map_or_else(|_| raw.to_string(), Cow::into_owned);
        Some(decoded)
    }
}

/// An HTTP response from the Shopify API.
///
/// Responses are kept regardless of status; callers decide how a
/// non-2xx code is reported.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Pagination cursors parsed from every `Link` header value.
    pub page_info: PageInfo,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Link` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let page_info = headers
            .get("link")
            .map(PageInfo::from_link_headers)
            .unwrap_or_default();

        Self {
            code,
            headers,
            body,
            page_info,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Returns the human-readable error text of a failed response.
    ///
    /// This is the `errors` member when present (a string is returned
    /// verbatim, anything else as JSON), otherwise the whole body.
    #[must_use]
    pub fn error_text(&self) -> String {
        match self.body.get("errors") {
            Some(serde_json::Value::String(text)) => text.clone(),
            Some(errors) => errors.to_string(),
            None => self.body.to_string(),
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
