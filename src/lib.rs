//! # Shopify Tasks
//!
//! Workflow connector tasks that each wrap a single Shopify Admin REST API
//! call: create, get, update and delete products, fetch customers, and
//! page through customers and orders.
//!
//! ## Overview
//!
//! This crate provides:
//! - Task functions in [`tasks`], one per operation, with a uniform
//!   `(input, connection, options, cancel)` signature
//! - A raw [`Connection`](config::Connection) validated into typed newtypes
//!   before any request is built
//! - A throw-or-return [`ErrorPolicy`](tasks::ErrorPolicy) with optional
//!   custom message prefix
//! - Cursor pagination through the `Link` header, exposed as [`PageInfo`]
//! - A [`ShopifyApi`](rest::ShopifyApi) trait so tests can replace the
//!   network
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_tasks::config::Connection;
//! use shopify_tasks::tasks::{get_product, ProductIdInput, SingleResourceOptions};
//! use tokio_util::sync::CancellationToken;
//!
//! let connection = Connection::new("my-store", "shpat_token", "2025-10");
//! let input = ProductIdInput { product_id: "632910392".to_string() };
//!
//! let result = get_product(
//!     &input,
//!     &connection,
//!     &SingleResourceOptions::default(),
//!     &CancellationToken::new(),
//! )
//! .await?;
//!
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! ```
//!
//! ## Returning Failures Instead of Raising Them
//!
//! ```rust,ignore
//! use shopify_tasks::tasks::{get_product, ErrorPolicy, SingleResourceOptions};
//!
//! let options = SingleResourceOptions {
//!     fields: vec!["id".into(), "title".into()],
//!     policy: ErrorPolicy::returning().with_message("Product lookup failed:"),
//! };
//!
//! let result = get_product(&input, &connection, &options, &cancel).await?;
//! if let Some(error) = result.error() {
//!     // "Product lookup failed: Product with ID '1' was not found."
//!     eprintln!("{}", error.message);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every task receives its connection explicitly
//! - **Fail-fast validation**: missing parameters never reach the network
//! - **One request per call**: no retries, no rate-limit handling
//! - **Scoped transport**: the HTTP client lives for one task invocation
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod tasks;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, Connection, ShopConnection, ShopDomain};
pub use error::{TaskError, ValidationError};

pub use clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, PageInfo};

pub use rest::{Page, RemoteApiError, RestShopifyApi, ShopifyApi};
pub use tasks::{ErrorInfo, ErrorPolicy, TaskFailure, TaskResult};
