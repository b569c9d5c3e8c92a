//! Error types for the Shopify connector tasks.
//!
//! Every failure a task can hit is one of four kinds:
//!
//! - [`ValidationError`]: a required parameter is missing or malformed,
//!   detected before any network activity
//! - [`TransportError`]: the HTTP call itself failed or was cancelled
//! - [`RemoteApiError`]: Shopify answered with a non-2xx status
//! - [`ParseError`]: the response body was not valid JSON
//!
//! [`TaskError`] aggregates them so the error policy has a single type to
//! decide on.
//!
//! # Example
//!
//! ```rust
//! use shopify_tasks::{TaskError, ValidationError};
//!
//! let error: TaskError = ValidationError::MissingField { field: "ShopName" }.into();
//! assert_eq!(error.to_string(), "ShopName is required");
//! ```

use thiserror::Error;

pub use crate::clients::{InvalidHttpRequestError, ParseError, TransportError};
pub use crate::rest::RemoteApiError;

/// Errors raised while validating task parameters.
///
/// These are always detected before a transport is created, so a task
/// failing validation never touches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or absent.
    #[error("{field} is required")]
    MissingField {
        /// The name of the missing field, as the host platform labels it.
        field: &'static str,
    },

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// The API host override is not an absolute http(s) URL.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A payload is present but is not a JSON object.
    #[error("{field} must be a JSON object")]
    InvalidPayload {
        /// The name of the payload field.
        field: &'static str,
    },

    /// Page size is outside the range Shopify accepts.
    #[error("Limit must be between 1 and 250, got {limit}")]
    LimitOutOfRange {
        /// The rejected limit.
        limit: u32,
    },
}

/// Unified error type for every task failure.
///
/// The error policy consumes this type; it is also what
/// [`ErrorInfo::additional_info`](crate::tasks::ErrorInfo::additional_info)
/// and [`TaskFailure::source`](std::error::Error::source) expose.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Parameter validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be sent or completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Shopify returned a non-2xx response.
    #[error(transparent)]
    Remote(#[from] RemoteApiError),

    /// The response body could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TaskError {
    /// Returns `true` if the task was stopped by its cancellation token.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }
}

impl From<InvalidHttpRequestError> for TaskError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Transport(TransportError::InvalidRequest(error))
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(error))
    }
}
