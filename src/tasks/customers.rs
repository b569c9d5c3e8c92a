//! Customer tasks: fetch one customer, or a page of customers.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::{Connection, VersionRequirement};
use crate::error::TaskError;
use crate::rest::{CustomerQuery, Page, ShopifyApi};
use crate::tasks::timestamp;
use crate::tasks::transport::{cancellable, ApiHandle};
use crate::tasks::validate::{check_limit, required_text};
use crate::tasks::{ListOptions, SingleResourceOptions, TaskFailure, TaskResult};

/// Input for [`get_customer`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerIdInput {
    /// Numeric customer id.
    pub customer_id: String,
}

/// Input for [`get_customers`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomersInput {
    /// Only customers created at or after this instant.
    #[serde(deserialize_with = "timestamp::deserialize_optional")]
    pub created_at_min: Option<DateTime<Utc>>,
    /// Only customers created at or before this instant.
    #[serde(deserialize_with = "timestamp::deserialize_optional")]
    pub created_at_max: Option<DateTime<Utc>>,
}

/// Fetches one customer by id.
///
/// Requires an explicit API version.
///
/// # Errors
///
/// Returns [`TaskFailure`] in throw mode.
pub async fn get_customer(
    input: &CustomerIdInput,
    connection: &Connection,
    options: &SingleResourceOptions,
    cancel: &CancellationToken,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_customer(input, connection, options, cancel, None).await)
}

/// [`get_customer`] over an injected transport.
///
/// # Errors
///
/// See [`get_customer`].
pub async fn get_customer_with(
    input: &CustomerIdInput,
    connection: &Connection,
    options: &SingleResourceOptions,
    cancel: &CancellationToken,
    api: &dyn ShopifyApi,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_customer(input, connection, options, cancel, Some(api)).await)
}

async fn run_get_customer(
    input: &CustomerIdInput,
    connection: &Connection,
    options: &SingleResourceOptions,
    cancel: &CancellationToken,
    api: Option<&dyn ShopifyApi>,
) -> Result<Option<Value>, TaskError> {
    let shop = connection.validate(VersionRequirement::Required)?;
    let customer_id = required_text(&input.customer_id, "CustomerId")?;

    let handle = ApiHandle::acquire(api, &shop)?;
    tracing::debug!(shop = %shop.shop(), customer_id, "Fetching customer");
    cancellable(cancel, handle.api().get_customer(customer_id, &options.fields)).await
}

/// Fetches one page of customers.
///
/// A blank API version falls back to the latest stable one. The page never
/// holds more than `options.limit` items.
///
/// # Errors
///
/// Returns [`TaskFailure`] in throw mode.
pub async fn get_customers(
    input: &CustomersInput,
    connection: &Connection,
    options: &ListOptions,
    cancel: &CancellationToken,
) -> Result<TaskResult<Page<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_customers(input, connection, options, cancel, None).await)
}

/// [`get_customers`] over an injected transport.
///
/// # Errors
///
/// See [`get_customers`].
pub async fn get_customers_with(
    input: &CustomersInput,
    connection: &Connection,
    options: &ListOptions,
    cancel: &CancellationToken,
    api: &dyn ShopifyApi,
) -> Result<TaskResult<Page<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_customers(input, connection, options, cancel, Some(api)).await)
}

async fn run_get_customers(
    input: &CustomersInput,
    connection: &Connection,
    options: &ListOptions,
    cancel: &CancellationToken,
    api: Option<&dyn ShopifyApi>,
) -> Result<Page<Value>, TaskError> {
    let shop = connection.validate(VersionRequirement::DefaultToLatest)?;
    let limit = check_limit(options.limit)?;

    let query = CustomerQuery {
        created_at_min: input.created_at_min,
        created_at_max: input.created_at_max,
        fields: options.fields.clone(),
        limit,
        page_info: options.page_info.clone(),
    };

    let handle = ApiHandle::acquire(api, &shop)?;
    tracing::debug!(shop = %shop.shop(), limit, "Listing customers");
    let page = cancellable(cancel, handle.api().list_customers(&query)).await?;
    Ok(page.truncated(limit as usize))
}
