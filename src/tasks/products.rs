//! Product tasks: create, get, update and delete.
//!
//! These tasks need an explicit API version; a blank one fails with
//! `ApiVersion is required`.

use serde::Deserialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::{Connection, VersionRequirement};
use crate::error::TaskError;
use crate::rest::ShopifyApi;
use crate::tasks::transport::{cancellable, ApiHandle};
use crate::tasks::validate::{required_payload, required_text};
use crate::tasks::{ErrorPolicy, SingleResourceOptions, TaskFailure, TaskResult};

/// Input for [`get_product`] and [`delete_product`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProductIdInput {
    /// Numeric product id.
    pub product_id: String,
}

/// Input for [`create_product`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreateProductInput {
    /// Product attributes, sent as `{"product": product_data}`.
    pub product_data: Option<Value>,
}

/// Input for [`update_product`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateProductInput {
    /// Numeric product id.
    pub product_id: String,
    /// Attributes to change, sent as `{"product": product_data}`.
    pub product_data: Option<Value>,
}

/// Creates a product and returns it as Shopify stored it.
///
/// # Errors
///
/// Returns [`TaskFailure`] in throw mode when validation, the request or
/// the response fails.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_tasks::config::Connection;
/// use shopify_tasks::tasks::{create_product, CreateProductInput, ErrorPolicy};
/// use serde_json::json;
/// use tokio_util::sync::CancellationToken;
///
/// let input = CreateProductInput { product_data: Some(json!({"title": "Hat"})) };
/// let connection = Connection::new("my-store", "shpat_token", "2025-10");
/// let result = create_product(
///     &input,
///     &connection,
///     &ErrorPolicy::default(),
///     &CancellationToken::new(),
/// )
/// .await?;
/// let product = result.into_data().flatten();
/// ```
pub async fn create_product(
    input: &CreateProductInput,
    connection: &Connection,
    options: &ErrorPolicy,
    cancel: &CancellationToken,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options.apply(run_create_product(input, connection, cancel, None).await)
}

/// [`create_product`] over an injected transport.
///
/// # Errors
///
/// See [`create_product`].
pub async fn create_product_with(
    input: &CreateProductInput,
    connection: &Connection,
    options: &ErrorPolicy,
    cancel: &CancellationToken,
    api: &dyn ShopifyApi,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options.apply(run_create_product(input, connection, cancel, Some(api)).await)
}

async fn run_create_product(
    input: &CreateProductInput,
    connection: &Connection,
    cancel: &CancellationToken,
    api: Option<&dyn ShopifyApi>,
) -> Result<Option<Value>, TaskError> {
    let shop = connection.validate(VersionRequirement::Required)?;
    let product = required_payload(input.product_data.as_ref(), "ProductData")?;

    let handle = ApiHandle::acquire(api, &shop)?;
    tracing::debug!(shop = %shop.shop(), "Creating product");
    cancellable(cancel, handle.api().create_product(product)).await
}

/// Fetches one product by id.
///
/// # Errors
///
/// Returns [`TaskFailure`] in throw mode. A 404 is reported as
/// `Product with ID '{id}' was not found.`
pub async fn get_product(
    input: &ProductIdInput,
    connection: &Connection,
    options: &SingleResourceOptions,
    cancel: &CancellationToken,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_product(input, connection, options, cancel, None).await)
}

/// [`get_product`] over an injected transport.
///
/// # Errors
///
/// See [`get_product`].
pub async fn get_product_with(
    input: &ProductIdInput,
    connection: &Connection,
    options: &SingleResourceOptions,
    cancel: &CancellationToken,
    api: &dyn ShopifyApi,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options
        .policy
        .apply(run_get_product(input, connection, options, cancel, Some(api)).await)
}

async fn run_get_product(
    input: &ProductIdInput,
    connection: &Connection,
    options: &SingleResourceOptions,
    cancel: &CancellationToken,
    api: Option<&dyn ShopifyApi>,
) -> Result<Option<Value>, TaskError> {
    let shop = connection.validate(VersionRequirement::Required)?;
    let product_id = required_text(&input.product_id, "ProductId")?;

    let handle = ApiHandle::acquire(api, &shop)?;
    tracing::debug!(shop = %shop.shop(), product_id, "Fetching product");
    cancellable(cancel, handle.api().get_product(product_id, &options.fields)).await
}

/// Updates a product and returns its new state.
///
/// # Errors
///
/// Returns [`TaskFailure`] in throw mode.
pub async fn update_product(
    input: &UpdateProductInput,
    connection: &Connection,
    options: &ErrorPolicy,
    cancel: &CancellationToken,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options.apply(run_update_product(input, connection, cancel, None).await)
}

/// [`update_product`] over an injected transport.
///
/// # Errors
///
/// See [`update_product`].
pub async fn update_product_with(
    input: &UpdateProductInput,
    connection: &Connection,
    options: &ErrorPolicy,
    cancel: &CancellationToken,
    api: &dyn ShopifyApi,
) -> Result<TaskResult<Option<Value>>, TaskFailure> {
    options.apply(run_update_product(input, connection, cancel, Some(api)).await)
}

async fn run_update_product(
    input: &UpdateProductInput,
    connection: &Connection,
    cancel: &CancellationToken,
    api: Option<&dyn ShopifyApi>,
) -> Result<Option<Value>, TaskError> {
    let shop = connection.validate(VersionRequirement::Required)?;
    let product_id = required_text(&input.product_id, "ProductId")?;
    let product = required_payload(input.product_data.as_ref(), "ProductData")?;

    let handle = ApiHandle::acquire(api, &shop)?;
    tracing::debug!(shop = %shop.shop(), product_id, "Updating product");
    cancellable(cancel, handle.api().update_product(product_id, product)).await
}

/// Deletes a product.
///
/// # Errors
///
/// Returns [`TaskFailure`] in throw mode.
pub async fn delete_product(
    input: &ProductIdInput,
    connection: &Connection,
    options: &ErrorPolicy,
    cancel: &CancellationToken,
) -> Result<TaskResult<()>, TaskFailure> {
    options.apply(run_delete_product(input, connection, cancel, None).await)
}

/// [`delete_product`] over an injected transport.
///
/// # Errors
///
/// See [`delete_product`].
pub async fn delete_product_with(
    input: &ProductIdInput,
    connection: &Connection,
    options: &ErrorPolicy,
    cancel: &CancellationToken,
    api: &dyn ShopifyApi,
) -> Result<TaskResult<()>, TaskFailure> {
    options.apply(run_delete_product(input, connection, cancel, Some(api)).await)
}

async fn run_delete_product(
    input: &ProductIdInput,
    connection: &Connection,
    cancel: &CancellationToken,
    api: Option<&dyn ShopifyApi>,
) -> Result<(), TaskError> {
    let shop = connection.validate(VersionRequirement::Required)?;
    let product_id = required_text(&input.product_id, "ProductId")?;

    let handle = ApiHandle::acquire(api, &shop)?;
    tracing::debug!(shop = %shop.shop(), product_id, "Deleting product");
    cancellable(cancel, handle.api().delete_product(product_id)).await
}
