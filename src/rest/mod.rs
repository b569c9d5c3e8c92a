//! Admin REST API layer.
//!
//! This module turns task-level operations into Admin REST calls and their
//! responses back into payloads or classified errors.
//!
//! # Overview
//!
//! - [`ShopifyApi`]: the transport trait the tasks call through
//! - [`RestShopifyApi`]: the [`HttpClient`](crate::clients::HttpClient)-backed implementation
//! - [`ResourceKind`]: paths and JSON keys for products, customers and orders
//! - [`CustomerQuery`] and [`OrderQuery`]: list filters
//! - [`Page`]: one page of list results with its cursors
//! - [`RemoteApiError`]: classification of non-2xx responses
//!
//! # Endpoints
//!
//! | Operation        | Request                                   |
//! |------------------|-------------------------------------------|
//! | create product   | `POST {base}/products.json`               |
//! | get product      | `GET {base}/products/{id}.json`           |
//! | update product   | `PUT {base}/products/{id}.json`           |
//! | delete product   | `DELETE {base}/products/{id}.json`        |
//! | get customer     | `GET {base}/customers/{id}.json`          |
//! | list customers   | `GET {base}/customers.json`               |
//! | list orders      | `GET {base}/orders.json`                  |
//!
//! `{base}` is `https://{shop}.myshopify.com/admin/api/{version}`.

mod api;
mod errors;
mod query;
mod resource;
mod response;

pub use api::{RestShopifyApi, ShopifyApi};
pub use errors::RemoteApiError;
pub use query::{
    fields_param, format_timestamp, CustomerQuery, OrderQuery, OrderStatus, DEFAULT_LIMIT,
    MAX_LIMIT,
};
pub use resource::ResourceKind;
pub use response::{extract_page, extract_single, Page};
