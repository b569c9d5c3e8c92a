//! HTTP client for Shopify API communication.
//!
//! This module provides the [`HttpClient`] type, which sends exactly one
//! authenticated request per call. There is no retry loop.

use std::collections::HashMap;

use crate::clients::errors::ParseError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopConnection;
use crate::error::TaskError;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client for making requests to the Shopify Admin API.
///
/// The client handles:
/// - Base URI and versioned base path from a validated [`ShopConnection`]
/// - Default headers including User-Agent and access token
/// - JSON body parsing
/// - Shopify-specific header parsing
///
/// A client is meant to live for a single task invocation; the underlying
/// connection pool is released when it is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_tasks::clients::{HttpClient, HttpRequest, HttpMethod};
/// use shopify_tasks::config::{Connection, VersionRequirement};
///
/// let shop = Connection::new("my-store", "shpat_token", "2024-10")
///     .validate(VersionRequirement::Required)?;
/// let client = HttpClient::new(&shop)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products/1.json").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given connection.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying reqwest client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(connection: &ShopConnection) -> Result<Self, TaskError> {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Shopify Tasks v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            connection.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: connection.base_uri(),
            base_path: connection.base_path(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request would be sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            request.path_and_query()
        )
    }

    /// Sends an HTTP request to the Shopify API.
    ///
    /// Any status code is returned as an [`HttpResponse`]; deciding what a
    /// non-2xx code means is left to the caller, which knows the resource.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Transport`] if the request is invalid or the
    /// network call fails, and [`TaskError::Parse`] if the body is not JSON.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TaskError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending Shopify request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).map_err(|source| ParseError {
                status: code,
                source,
            })?
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        tracing::debug!(status = code, path = %request.path, "Received Shopify response");

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
