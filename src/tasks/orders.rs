//! The order listing task.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::{Connection, VersionRequirement};
use crate::error::TaskError;
use crate::rest::{OrderQuery, OrderStatus, Page, ShopifyApi};
use crate::tasks::timestamp;
use crate::tasks::transport::{cancellable, ApiHandle};
use crate::tasks::validate::check_limit;
use crate::tasks::{ListOptions, TaskFailure, TaskResult};

/// Input for [`get_orders`].
///
/// # Example
///
/// ```rust
/// use shopify_tasks::tasks::OrdersInput;
/// use shopify_tasks::rest::OrderStatus;
///
/// let input: OrdersInput = serde_json::from_str(
///     r#"{"status": "open", "created_at_min": "2025-01-01"}"#,
/// ).unwrap();
/// assert_eq!(input.status, OrderStatus::Open);
/// assert_eq!(
///     input.created_at_min.map(|instant| instant.to_rfc3339()),
///     Some("2025-01-01T00:00:00+00:00".to_string())
/// );
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrdersInput {
    /// Only orders created at or after this instant.
    #[serde(deserialize_with = "timestamp::deserialize_optional")]
    pub created_at_min: Option<DateTime<Utc>>,
    /// Only orders created at or before this instant.
    #[serde(deserialize_with = "timestamp::deserialize_optional")]
    pub created_at_max: Option<DateTime<Utc>>,
    /// Order status; `any` is not sent.
    pub status: OrderStatus,
    /// Fulfillment status, e.g. `shipped` or `unfulfilled`.
    pub fulfillment_status: Option<String>,
}

/// Fetches one page of orders.
///
/// A blank API version falls back to the latest stable one. The page never
/// holds more than `options.limit` items; follow
/// [`PageInfo::next_page`](crate::PageInfo::next_page) for the rest.
///
/// # Errors
///
/// Returns [`TaskFailure`] in throw mode.
pub async fn get_orders(
    input: &OrdersInput,
    connection: &Connection,
    options: &ListOptions,
    cancel: &CancellationToken,
) -> Result<TaskResult<Page<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_orders(input, connection, options, cancel, None).await)
}

/// [`get_orders`] over an injected transport.
///
/// # Errors
///
/// See [`get_orders`].
pub async fn get_orders_with(
    input: &OrdersInput,
    connection: &Connection,
    options: &ListOptions,
    cancel: &CancellationToken,
    api: &dyn ShopifyApi,
) -> Result<TaskResult<Page<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_orders(input, connection, options, cancel, Some(api)).await)
}

async fn run_get_orders(
    input: &OrdersInput,
    connection: &Connection,
    options: &ListOptions,
    cancel: &CancellationToken,
    api: Option<&dyn ShopifyApi>,
) -> Result<Page<Value>, TaskError> {
    let shop = connection.validate(VersionRequirement::DefaultToLatest)?;
    let limit = check_limit(options.limit)?;

    let query = OrderQuery {
        created_at_min: input.created_at_min,
        created_at_max: input.created_at_max,
        status: input.status,
        fulfillment_status: input.fulfillment_status.clone(),
        fields: options.fields.clone(),
        limit,
        page_info: options.page_info.clone(),
    };

    let handle = ApiHandle::acquire(api, &shop)?;
    tracing::debug!(
        shop = %shop.shop(),
        limit,
        status = query.status.as_str(),
        "Listing orders"
    );
    let page = cancellable(cancel, handle.api().list_orders(&query)).await?;
    Ok(page.truncated(limit as usize))
}
