//! End-to-end tests for `CoinGateClient` against local servers.
//!
//! Each test points the client at a `mockito` server and checks what was
//! dispatched (method, path, headers, query, form body) and how the response
//! was classified.

use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use rust_decimal::Decimal;
use std::str::FromStr;

use coingate::prelude::*;

const ORDER_JSON: &str = r#"{
    "id": 1,
    "status": "new",
    "do_not_convert": false,
    "price_currency": "EUR",
    "price_amount": "10.0",
    "lightning_network": false,
    "receive_currency": "EUR",
    "receive_amount": "",
    "created_at": "2022-10-10T10:12:11+00:00",
    "order_id": "",
    "payment_url": "https://pay-sandbox.coingate.com/invoice/abc",
    "underpaid_amount": "0",
    "overpaid_amount": "0",
    "is_refundable": false,
    "token": "tok"
}"#;

fn client_for(server: &ServerGuard, api_key: Option<&str>) -> CoinGateClient {
    let mut builder = CoinGateClient::builder().base_url(server.url());
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    builder.build().unwrap()
}

// =============================================================================
// Headers & configuration
// =============================================================================

#[tokio::test]
async fn test_ping_without_api_key_sends_no_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/ping")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", Matcher::Missing)
        .match_header(
            "user-agent",
            Matcher::Regex(r"^CoinGate/v2 \(Rust Library v[0-9A-Za-z.\-]+\)$".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ping":"pong","time":"2022-01-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let ping = client.public().ping().await.unwrap();

    assert_eq!(ping.ping, "pong");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_key_sent_as_token_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/ping")
        .match_header("authorization", "Token K")
        .with_status(200)
        .with_body(r#"{"ping":"pong","time":"2022-01-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("K"));
    client.public().ping().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_app_info_appended_to_user_agent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/ping")
        .match_header(
            "user-agent",
            Matcher::Regex(r"^CoinGate/v2 \(Rust Library v.+, MyShop v1\.2\.3\)$".to_string()),
        )
        .with_status(200)
        .with_body(r#"{"ping":"pong","time":"2022-01-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let client = client_for(&server, None);
    client.set_app_info("MyShop", "1.2.3").await;
    client.public().ping().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_configuration_read_at_call_time() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/orders/1")
        .match_header("authorization", "Token X")
        .with_status(200)
        .with_body(ORDER_JSON.replace(r#""token": "tok""#, r#""orderable_type": "ApiApp", "orderable_id": 1, "payment_address": "addr""#))
        .create_async()
        .await;

    let client = client_for(&server, None);
    let orders = client.orders();

    client.set_timeout(Some(Duration::from_secs(5))).await;
    client.set_api_key(Some("X".to_string())).await;

    let resolved = client.resolve(Endpoint::get("v2/orders/1")).await.unwrap();
    assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));

    let order = orders.get(1).await.unwrap();
    assert_eq!(order.base.id, 1);
    mock.assert_async().await;
}

// =============================================================================
// Bodies & queries
// =============================================================================

#[tokio::test]
async fn test_create_order_sends_form_body_without_absent_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/orders")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact(
            "price_amount=10&price_currency=EUR&receive_currency=EUR&title=Cart".to_string(),
        ))
        .with_status(200)
        .with_body(ORDER_JSON)
        .create_async()
        .await;

    let client = client_for(&server, Some("K"));
    let request = CreateOrder::new(Decimal::from(10), "EUR", "EUR").with_title("Cart");
    let order = client.orders().create(&request).await.unwrap();

    assert_eq!(order.token, "tok");
    assert_eq!(order.base.price_amount, Decimal::from(10));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_order_list_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/orders")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("sort".into(), "created_at_desc".into()),
            Matcher::UrlEncoded("created_at[from]".into(), "2022-01-01".into()),
        ]))
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(
            r#"{"current_page": 2, "per_page": 100, "total_orders": 0, "total_pages": 1, "orders": []}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, Some("K"));
    let params = OrderListParams::new()
        .with_page(2)
        .with_sort(OrderSort::CreatedAtDesc)
        .with_created_range(chrono::NaiveDate::from_ymd_opt(2022, 1, 1), None);
    let page = client.orders().list(&params).await.unwrap();

    assert_eq!(page.current_page, 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refund_listing_pages_through_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/orders/5/refunds")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"current_page": 1, "per_page": 10, "total_refunds": 0, "total_pages": 0, "refunds": []}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, Some("K"));
    let page = client
        .refunds()
        .list_for_order(5, PageParams::new().with_page(1).with_per_page(10))
        .await
        .unwrap();

    assert!(page.refunds.is_empty());
    mock.assert_async().await;
}

// =============================================================================
// Plain-text endpoints
// =============================================================================

#[tokio::test]
async fn test_merchant_rate_lowercases_path_and_parses_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/rates/merchant/eth/eur")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("1204.55")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let rate = client.public().merchant_rate("ETH", "EUR").await.unwrap();

    assert_eq!(rate, Some(Decimal::from_str("1204.55").unwrap()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trader_rate_empty_body_means_no_rate() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/rates/trader/sell/nan/nan")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let rate = client
        .public()
        .trader_rate(TradeSide::Sell, "NAN", "NAN")
        .await
        .unwrap();

    assert_eq!(rate, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ip_addresses_with_separator() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/ips-v4")
        .match_query(Matcher::UrlEncoded("separator".into(), "|".into()))
        .with_status(200)
        .with_body("10.0.0.1|10.0.0.2")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let ips = client.public().ip_addresses(Some("|")).await.unwrap();

    assert_eq!(ips.split('|').count(), 2);
    mock.assert_async().await;
}

// =============================================================================
// Error classification
// =============================================================================

#[tokio::test]
async fn test_checkout_missing_order_maps_to_order_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v2/orders/1/checkout")
        .with_status(404)
        .with_body(r#"{"message": "Order does not exist", "reason": "OrderNotFound", "errors": null}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("K"));
    let err = client
        .orders()
        .checkout(1, &CheckoutRequest::new("EUR"))
        .await
        .unwrap_err();

    match err {
        ApiError::OrderNotFound(details) => {
            assert_eq!(details.status_code, 404);
            assert_eq!(details.message.as_deref(), Some("Order does not exist"));
            assert!(details.errors.is_none());
        }
        other => panic!("expected OrderNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_errors_keep_order() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v2/orders")
        .with_status(422)
        .with_body(
            r#"{"message": "Order is not valid", "reason": "OrderIsNotValid",
               "errors": ["Api order base success_url is not valid", "Api order base cancel_url is not valid"]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, Some("K"));
    let request = CreateOrder::new(Decimal::from(10), "EUR", "EUR")
        .with_success_url("nope")
        .with_cancel_url("nope");
    let err = client.orders().create(&request).await.unwrap_err();

    assert_eq!(err.kind(), Some(ErrorReason::OrderIsNotValid));
    assert_eq!(
        err.details().unwrap().errors.as_deref(),
        Some(
            &[
                "Api order base success_url is not valid".to_string(),
                "Api order base cancel_url is not valid".to_string(),
            ][..]
        )
    );
}

#[tokio::test]
async fn test_bad_auth_token() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/ledger/accounts/acc-1")
        .with_status(401)
        .with_body(r#"{"message": "Auth Token is not valid", "reason": "BadAuthToken"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("wrong"));
    let err = client.ledger().get("acc-1").await.unwrap_err();

    assert!(matches!(err, ApiError::BadAuthToken(_)));
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_unknown_reason_is_preserved() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/withdrawals/3")
        .with_status(400)
        .with_body(r#"{"reason": "SomethingElse", "message": "?"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("K"));
    let err = client.withdrawals().get(3).await.unwrap_err();

    match err {
        ApiError::Api { reason, details } => {
            assert_eq!(reason.as_deref(), Some("SomethingElse"));
            assert_eq!(details.status_code, 400);
        }
        other => panic!("expected generic Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_failure_carries_status_only() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/currencies")
        .with_status(503)
        .with_body("<html>Service Unavailable</html>")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let err = client
        .public()
        .currencies(&CurrencyListParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { status_code: 503 }));
}

#[tokio::test]
async fn test_unexpected_success_shape_is_deserialize_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/platforms")
        .match_query(Matcher::UrlEncoded("enabled".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"not": "a list"}"#)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let err = client.public().platforms(Some(true)).await.unwrap_err();

    assert!(matches!(err, ApiError::Deserialize(_)));
}

#[tokio::test]
async fn test_transport_fault_surfaces_as_http_error() {
    // Nothing listens on port 1.
    let client = CoinGateClient::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.public().ping().await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
    assert!(err.details().is_none());
}

// =============================================================================
// Raw socket servers
// =============================================================================

#[tokio::test]
async fn test_elapsed_deadline_is_a_timeout() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold the connection without ever answering.
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let client = CoinGateClient::builder()
        .base_url(format!("http://{}", addr))
        .build()
        .unwrap();
    client.set_timeout(Some(Duration::from_millis(300))).await;

    let err = client.public().ping().await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
    assert!(err.is_timeout());
    server.abort();
}

#[tokio::test]
async fn test_truncated_failure_body_is_a_transport_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Promise a 100-byte body, send a fragment, then hang up.
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await.unwrap();
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\n{\"reason\":")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = CoinGateClient::builder()
        .base_url(format!("http://{}", addr))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.public().ping().await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
    assert!(err.details().is_none());
    server.await.unwrap();
}
