//! HTTP-level error types.
//!
//! # Error Handling
//!
//! - [`TransportError`]: the request never produced a usable response
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`ParseError`]: a response arrived but its body is not JSON
//!
//! Non-2xx responses are not errors at this layer; they are classified by
//! [`RemoteApiError`](crate::rest::RemoteApiError) once the resource and id
//! are known.

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST/PUT requests
/// - Body provided without `body_type`
///
/// # Example
///
/// ```rust
/// use shopify_tasks::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// The request could not be completed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller's cancellation token fired while the request was in flight.
    #[error("The operation was cancelled.")]
    Cancelled,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

/// The response body could not be parsed as JSON.
#[derive(Debug, Error)]
#[error("Failed to parse Shopify response (status {status}): {source}")]
pub struct ParseError {
    /// HTTP status of the response whose body failed to parse.
    pub status: u16,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}
