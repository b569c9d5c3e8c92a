//! Classification of failed Admin REST responses.
//!
//! # Error Handling
//!
//! A non-2xx response is mapped onto one of three variants, checked in
//! this order:
//!
//! - **404** with a known id: [`RemoteApiError::NotFound`]
//! - error text containing `expected String to be a id` with a known id:
//!   [`RemoteApiError::InvalidIdFormat`]
//! - **anything else**: [`RemoteApiError::Api`]
//!
//! The order matters: a 404 whose body also complains about the id format
//! is still reported as not found.
//!
//! # Example
//!
//! ```rust
//! use shopify_tasks::rest::{RemoteApiError, ResourceKind};
//! use shopify_tasks::clients::HttpResponse;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let response = HttpResponse::new(404, HashMap::new(), json!({"errors": "Not Found"}));
//! let error = RemoteApiError::from_http_response(&response, ResourceKind::Product, Some("123"));
//! assert_eq!(error.to_string(), "Product with ID '123' was not found.");
//! ```

use thiserror::Error;

use crate::clients::HttpResponse;
use crate::rest::ResourceKind;

/// Error type for non-2xx Admin REST responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteApiError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with ID '{id}' was not found.")]
    NotFound {
        /// The display name of the resource (e.g., "Product").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Shopify rejected the id itself as malformed.
    #[error("Invalid {resource} ID format: '{id}'. {resource} ID should be a valid numeric value.")]
    InvalidIdFormat {
        /// The display name of the resource.
        resource: &'static str,
        /// The rejected ID.
        id: String,
    },

    /// Any other non-2xx response.
    #[error("Shopify API error: {status} - {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The `errors` member of the body, or the body itself.
        message: String,
    },
}

impl RemoteApiError {
    /// Substring Shopify uses when a path id is not a valid identifier.
    pub const MALFORMED_ID_MARKER: &'static str = "expected String to be a id";

    /// Creates a `RemoteApiError` from a failed response.
    ///
    /// `id` is the identifier the request addressed; list and create
    /// requests pass `None` and are always classified as
    /// [`RemoteApiError::Api`].
    #[must_use]
    pub fn from_http_response(
        response: &HttpResponse,
        resource: ResourceKind,
        id: Option<&str>,
    ) -> Self {
        let message = response.error_text();

        match id {
            Some(id) if response.code == 404 => Self::NotFound {
                resource: resource.label(),
                id: id.to_string(),
            },
            Some(id) if message.contains(Self::MALFORMED_ID_MARKER) => Self::InvalidIdFormat {
                resource: resource.label(),
                id: id.to_string(),
            },
            _ => Self::Api {
                status: response.code,
                message,
            },
        }
    }

    /// Returns the HTTP status for generic API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::InvalidIdFormat { .. } => None,
        }
    }
}
