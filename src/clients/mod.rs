//! HTTP client types for Shopify API communication.
//!
//! This module provides the transport layer the tasks are built on. It
//! handles request building, the single network round trip, JSON body
//! parsing and `Link` header pagination.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client, scoped to one task invocation
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`PageInfo`]: `next`/`previous` cursors from the `Link` header
//! - [`TransportError`], [`ParseError`], [`InvalidHttpRequestError`]:
//!   failures at this layer
//!
//! # Retry Behavior
//!
//! None. Each call issues exactly one request.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{InvalidHttpRequestError, ParseError, TransportError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PageInfo};
