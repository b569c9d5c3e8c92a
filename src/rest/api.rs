//! The Admin REST operations the tasks need, behind a trait.
//!
//! [`ShopifyApi`] is the seam between the task layer and the network. The
//! production implementation, [`RestShopifyApi`], owns an [`HttpClient`]
//! for the duration of one task invocation. Tests substitute their own
//! implementation to observe calls without a server.

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ShopConnection;
use crate::error::TaskError;
use crate::rest::query::{fields_param, CustomerQuery, OrderQuery};
use crate::rest::response::{extract_page, extract_single};
use crate::rest::{Page, RemoteApiError, ResourceKind};

/// Transport for the operations exposed as tasks.
///
/// Every method issues at most one request. Non-2xx responses come back as
/// [`TaskError::Remote`].
#[async_trait]
pub trait ShopifyApi: Send + Sync {
    /// `POST products.json`. Returns the created product.
    async fn create_product(&self, product: &Value) -> Result<Option<Value>, TaskError>;

    /// `GET products/{id}.json`.
    async fn get_product(
        &self,
        product_id: &str,
        fields: &[String],
    ) -> Result<Option<Value>, TaskError>;

    /// `PUT products/{id}.json`. Returns the updated product.
    async fn update_product(
        &self,
        product_id: &str,
        product: &Value,
    ) -> Result<Option<Value>, TaskError>;

    /// `DELETE products/{id}.json`.
    async fn delete_product(&self, product_id: &str) -> Result<(), TaskError>;

    /// `GET customers/{id}.json`.
    async fn get_customer(
        &self,
        customer_id: &str,
        fields: &[String],
    ) -> Result<Option<Value>, TaskError>;

    /// `GET customers.json`.
    async fn list_customers(&self, query: &CustomerQuery) -> Result<Page<Value>, TaskError>;

    /// `GET orders.json`.
    async fn list_orders(&self, query: &OrderQuery) -> Result<Page<Value>, TaskError>;
}

/// [`ShopifyApi`] over the Admin REST API.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_tasks::config::{Connection, VersionRequirement};
/// use shopify_tasks::rest::{RestShopifyApi, ShopifyApi};
///
/// let shop = Connection::new("my-store", "shpat_token", "2025-10")
///     .validate(VersionRequirement::Required)?;
/// let api = RestShopifyApi::new(&shop)?;
/// let product = api.get_product("632910392", &[]).await?;
/// ```
#[derive(Debug)]
pub struct RestShopifyApi {
    client: HttpClient,
}

impl RestShopifyApi {
    /// Creates a transport for the given connection.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be created.
    pub fn new(connection: &ShopConnection) -> Result<Self, TaskError> {
        Ok(Self {
            client: HttpClient::new(connection)?,
        })
    }

    async fn send(
        &self,
        request: HttpRequest,
        resource: ResourceKind,
        id: Option<&str>,
    ) -> Result<HttpResponse, TaskError> {
        let response = self.client.request(request).await?;

        if response.is_ok() {
            Ok(response)
        } else {
            tracing::debug!(
                status = response.code,
                request_id = response.request_id().unwrap_or_default(),
                resource = resource.label(),
                "Shopify returned an error response"
            );
            Err(RemoteApiError::from_http_response(&response, resource, id).into())
        }
    }

    async fn fetch_member(
        &self,
        resource: ResourceKind,
        id: &str,
        fields: &[String],
    ) -> Result<Option<Value>, TaskError> {
        let request = HttpRequest::builder(HttpMethod::Get, resource.member_path(id))
            .optional_query_param("fields", fields_param(fields).as_deref())
            .build()?;

        let response = self.send(request, resource, Some(id)).await?;
        Ok(extract_single(&response, resource))
    }
}

#[async_trait]
impl ShopifyApi for RestShopifyApi {
    async fn create_product(&self, product: &Value) -> Result<Option<Value>, TaskError> {
        let resource = ResourceKind::Product;
        let request = HttpRequest::builder(HttpMethod::Post, resource.collection_path())
            .body(resource.wrap(product))
            .body_type(DataType::Json)
            .build()?;

        let response = self.send(request, resource, None).await?;
        Ok(extract_single(&response, resource))
    }

    async fn get_product(
        &self,
        product_id: &str,
        fields: &[String],
    ) -> Result<Option<Value>, TaskError> {
        self.fetch_member(ResourceKind::Product, product_id, fields).await
    }

    async fn update_product(
        &self,
        product_id: &str,
        product: &Value,
    ) -> Result<Option<Value>, TaskError> {
        let resource = ResourceKind::Product;
        let request = HttpRequest::builder(HttpMethod::Put, resource.member_path(product_id))
            .body(resource.wrap(product))
            .body_type(DataType::Json)
            .build()?;

        let response = self.send(request, resource, Some(product_id)).await?;
        Ok(extract_single(&response, resource))
    }

    async fn delete_product(&self, product_id: &str) -> Result<(), TaskError> {
        let resource = ResourceKind::Product;
        let request =
            HttpRequest::builder(HttpMethod::Delete, resource.member_path(product_id)).build()?;

        self.send(request, resource, Some(product_id)).await?;
        Ok(())
    }

    async fn get_customer(
        &self,
        customer_id: &str,
        fields: &[String],
    ) -> Result<Option<Value>, TaskError> {
        self.fetch_member(ResourceKind::Customer, customer_id, fields).await
    }

    async fn list_customers(&self, query: &CustomerQuery) -> Result<Page<Value>, TaskError> {
        let resource = ResourceKind::Customer;
        let response = self.send(query.to_request()?, resource, None).await?;
        Ok(extract_page(&response, resource))
    }

    async fn list_orders(&self, query: &OrderQuery) -> Result<Page<Value>, TaskError> {
        let resource = ResourceKind::Order;
        let response = self.send(query.to_request()?, resource, None).await?;
        Ok(extract_page(&response, resource))
    }
}
