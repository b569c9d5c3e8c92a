//! End-to-end tests for the tasks over real HTTP.
//!
//! Each test starts a `wiremock` server and points the connection at it
//! through `api_host`, so requests travel through `RestShopifyApi` and
//! `HttpClient` exactly as they would against a shop.

use serde_json::json;
use shopify_tasks::config::Connection;
use shopify_tasks::rest::{OrderStatus, RemoteApiError};
use shopify_tasks::tasks::{
    create_product, delete_product, get_customer, get_customers, get_orders, get_product,
    update_product, CreateProductInput, CustomerIdInput, CustomersInput, ErrorPolicy, ListOptions,
    OrdersInput, ProductIdInput, SingleResourceOptions, UpdateProductInput,
};
use shopify_tasks::TaskError;
use tokio_test::{assert_err, assert_ok};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "/admin/api/2025-10";

/// Creates a connection that sends every request to the mock server.
fn mock_connection(server: &MockServer, version: &str) -> Connection {
    Connection::new("test-shop", "shpat_test_token", version).with_api_host(server.uri())
}

fn product_id(id: &str) -> ProductIdInput {
    ProductIdInput {
        product_id: id.to_string(),
    }
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_get_product_sends_auth_headers_and_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/products/632910392.json")))
        .and(header("X-Shopify-Access-Token", "shpat_test_token"))
        .and(header("Accept", "application/json"))
        .and(query_param("fields", "id,title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 632_910_392, "title": "IPod Nano - 8GB"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = SingleResourceOptions {
        fields: vec!["id".to_string(), "title".to_string()],
        ..SingleResourceOptions::default()
    };

    let result = assert_ok!(
        get_product(
            &product_id("632910392"),
            &mock_connection(&server, "2025-10"),
            &options,
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(
        result.into_data().flatten(),
        Some(json!({"id": 632_910_392, "title": "IPod Nano - 8GB"}))
    );
}

#[tokio::test]
async fn test_get_product_without_fields_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/products/1.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"product": {"id": 1}})))
        .mount(&server)
        .await;

    assert_ok!(
        get_product(
            &product_id("1"),
            &mock_connection(&server, "2025-10"),
            &SingleResourceOptions::default(),
            &CancellationToken::new(),
        )
        .await
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_create_product_wraps_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/products.json")))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"product": {"title": "Burton Custom Freestyle 151"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {"id": 1_072_481_042, "title": "Burton Custom Freestyle 151"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = assert_ok!(
        create_product(
            &CreateProductInput {
                product_data: Some(json!({"title": "Burton Custom Freestyle 151"})),
            },
            &mock_connection(&server, "2025-10"),
            &ErrorPolicy::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(
        result.into_data().flatten().unwrap()["id"],
        json!(1_072_481_042)
    );
}

#[tokio::test]
async fn test_create_product_validation_failure_reports_errors_member() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/products.json")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}})),
        )
        .mount(&server)
        .await;

    let failure = assert_err!(
        create_product(
            &CreateProductInput {
                product_data: Some(json!({"body_html": "no title"})),
            },
            &mock_connection(&server, "2025-10"),
            &ErrorPolicy::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(
        failure.message(),
        r#"Shopify API error: 422 - {"title":["can't be blank"]}"#
    );
}

#[tokio::test]
async fn test_update_product_uses_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{BASE}/products/42.json")))
        .and(body_json(json!({"product": {"title": "New title"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 42, "title": "New title"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = assert_ok!(
        update_product(
            &UpdateProductInput {
                product_id: "42".to_string(),
                product_data: Some(json!({"title": "New title"})),
            },
            &mock_connection(&server, "2025-10"),
            &ErrorPolicy::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(
        result.into_data().flatten(),
        Some(json!({"id": 42, "title": "New title"}))
    );
}

#[tokio::test]
async fn test_delete_product_accepts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{BASE}/products/42.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let result = assert_ok!(
        delete_product(
            &product_id("42"),
            &mock_connection(&server, "2025-10"),
            &ErrorPolicy::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert!(result.is_success());
}

// ============================================================================
// Failure classification
// ============================================================================

#[tokio::test]
async fn test_404_wins_over_malformed_id_text() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{BASE}/products/abc.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": "expected String to be a id"
        })))
        .mount(&server)
        .await;

    let failure = assert_err!(
        delete_product(
            &product_id("abc"),
            &mock_connection(&server, "2025-10"),
            &ErrorPolicy::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(failure.message(), "Product with ID 'abc' was not found.");
}

#[tokio::test]
async fn test_malformed_id_on_400() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/customers/abc.json")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": {"id": "expected String to be a id"}
        })))
        .mount(&server)
        .await;

    let failure = assert_err!(
        get_customer(
            &CustomerIdInput {
                customer_id: "abc".to_string()
            },
            &mock_connection(&server, "2025-10"),
            &SingleResourceOptions::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert!(matches!(
        failure.cause(),
        TaskError::Remote(RemoteApiError::InvalidIdFormat { .. })
    ));
    assert_eq!(
        failure.message(),
        "Invalid Customer ID format: 'abc'. Customer ID should be a valid numeric value."
    );
}

#[tokio::test]
async fn test_update_product_malformed_id_on_400() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{BASE}/products/abc.json")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": {"id": "expected String to be a id"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let failure = assert_err!(
        update_product(
            &UpdateProductInput {
                product_id: "abc".to_string(),
                product_data: Some(json!({"title": "New title"})),
            },
            &mock_connection(&server, "2025-10"),
            &ErrorPolicy::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(
        failure.message(),
        "Invalid Product ID format: 'abc'. Product ID should be a valid numeric value."
    );
    assert!(matches!(
        failure.into_cause(),
        TaskError::Remote(RemoteApiError::InvalidIdFormat { .. })
    ));
}

#[tokio::test]
async fn test_get_customer_not_found_in_return_mode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/customers/999.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let options = SingleResourceOptions {
        policy: ErrorPolicy::returning().with_message("Customer sync:"),
        ..SingleResourceOptions::default()
    };

    let result = assert_ok!(
        get_customer(
            &CustomerIdInput {
                customer_id: "999".to_string()
            },
            &mock_connection(&server, "2025-10"),
            &options,
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(
        result.error().unwrap().message,
        "Customer sync: Customer with ID '999' was not found."
    );
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/products/1.json")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let failure = assert_err!(
        get_product(
            &product_id("1"),
            &mock_connection(&server, "2025-10"),
            &SingleResourceOptions::default(),
            &CancellationToken::new(),
        )
        .await
    );

    match failure.cause() {
        TaskError::Parse(error) => assert_eq!(error.status, 502),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

// ============================================================================
// Lists and pagination
// ============================================================================

#[tokio::test]
async fn test_get_orders_query_and_link_cursors() {
    let server = MockServer::start().await;
    let link = format!(
        "<{uri}{BASE}/orders.json?limit=5&page_info=prev%3D%3D>; rel=\"previous\", \
         <{uri}{BASE}/orders.json?limit=5&page_info=next123>; rel=\"next\"",
        uri = server.uri()
    );

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/orders.json")))
        .and(query_param("created_at_min", "2025-01-01T00:00:00Z"))
        .and(query_param("status", "open"))
        .and(query_param("fulfillment_status", "shipped"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_json(json!({"orders": [{"id": 1}, {"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let input = OrdersInput {
        created_at_min: Some("2025-01-01T00:00:00Z".parse().unwrap()),
        status: OrderStatus::Open,
        fulfillment_status: Some("shipped".to_string()),
        ..OrdersInput::default()
    };
    let options = ListOptions {
        limit: 5,
        ..ListOptions::default()
    };

    let result = assert_ok!(
        get_orders(
            &input,
            &mock_connection(&server, "2025-10"),
            &options,
            &CancellationToken::new(),
        )
        .await
    );

    let page = result.into_data().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.page_info.next_page.as_deref(), Some("next123"));
    assert_eq!(page.page_info.previous_page.as_deref(), Some("prev=="));
}

#[tokio::test]
async fn test_get_orders_omits_status_any() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/orders.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&server)
        .await;

    assert_ok!(
        get_orders(
            &OrdersInput::default(),
            &mock_connection(&server, "2025-10"),
            &ListOptions::default(),
            &CancellationToken::new(),
        )
        .await
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=50"));
}

#[tokio::test]
async fn test_get_orders_never_exceeds_limit() {
    let server = MockServer::start().await;
    let orders: Vec<_> = (0..9).map(|id| json!({ "id": id })).collect();

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/orders.json")))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": orders})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions {
        limit: 5,
        ..ListOptions::default()
    };

    let result = assert_ok!(
        get_orders(
            &OrdersInput::default(),
            &mock_connection(&server, "2025-10"),
            &options,
            &CancellationToken::new(),
        )
        .await
    );

    let page = result.into_data().unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page.items[0], json!({"id": 0}));
    assert_eq!(page.items[4], json!({"id": 4}));
}

#[tokio::test]
async fn test_get_orders_date_only_filter_sent_as_utc_midnight() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/orders.json")))
        .and(query_param("created_at_min", "2024-01-01T00:00:00Z"))
        .and(query_param("created_at_max", "2024-01-31T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let input: OrdersInput = serde_json::from_value(json!({
        "created_at_min": "2024-01-01",
        "created_at_max": "2024-01-31"
    }))
    .unwrap();

    let result = assert_ok!(
        get_orders(
            &input,
            &mock_connection(&server, "2025-10"),
            &ListOptions::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert!(result.into_data().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_customers_truncates_and_defaults_version() {
    let server = MockServer::start().await;
    let customers: Vec<_> = (0..8).map(|id| json!({ "id": id })).collect();

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/customers.json"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": customers})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions {
        limit: 5,
        ..ListOptions::default()
    };

    let result = assert_ok!(
        get_customers(
            &CustomersInput::default(),
            &mock_connection(&server, ""),
            &options,
            &CancellationToken::new(),
        )
        .await
    );

    let page = result.into_data().unwrap();
    assert_eq!(page.len(), 5);
    assert!(!page.page_info.has_next_page());
}

#[tokio::test]
async fn test_list_failure_is_generic_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/customers.json")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "errors": "[API] Invalid API key or access token (unrecognized login or wrong password)"
            })),
        )
        .mount(&server)
        .await;

    let failure = assert_err!(
        get_customers(
            &CustomersInput::default(),
            &mock_connection(&server, "2025-10"),
            &ListOptions::default(),
            &CancellationToken::new(),
        )
        .await
    );

    assert_eq!(
        failure.message(),
        "Shopify API error: 401 - [API] Invalid API key or access token (unrecognized login or wrong password)"
    );
}
