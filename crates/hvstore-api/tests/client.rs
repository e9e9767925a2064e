//! Integration tests for `StoreClient` using wiremock HTTP mocks.

use hvstore_api::{ApiError, StoreClient};
use hvstore_core::{
    checkout, Cart, CheckoutOutcome, CreatePaymentRequest, PaymentMethod, ProductRef, Route,
};
use rust_decimal_macros::dec;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str, token: Option<&str>) -> StoreClient {
    StoreClient::with_base_url(base_url, 30, "hvstore-test", token.map(str::to_owned))
        .expect("client construction should not fail")
}

fn order_json(id: &str, status: &str, final_price: u64) -> serde_json::Value {
    serde_json::json!({
        "order_Id": id,
        "user_Id": "user-123456789",
        "voucher_Id": null,
        "totalPrice": final_price,
        "discountAmount": 0,
        "finalPrice": final_price,
        "shippingAddress": "12 Lê Lợi, Huế",
        "phoneNumber": 905123456,
        "orderDate": "2025-03-14T09:30:00",
        "status": status,
        "orderDetails": []
    })
}

#[tokio::test]
async fn list_orders_parses_orders_and_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Order/all"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            order_json("1", "paid", 150_000),
            order_json("2", "pending", 99_000),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/api", server.uri()), Some("tok-1"));
    let orders = client.list_orders().await.expect("should parse orders");

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order_id, "1");
    assert_eq!(orders[0].final_price, dec!(150000));
    assert_eq!(orders[0].phone_number, "905123456");
    assert!(orders[0].is_qualifying());
    assert!(!orders[1].is_qualifying());
}

#[tokio::test]
async fn requests_without_token_carry_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Order/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let orders = client.list_orders().await.expect("empty list should parse");
    assert!(orders.is_empty());

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    assert!(!received[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn get_order_returns_detail_lines() {
    let server = MockServer::start().await;

    let mut body = order_json("ORD-7", "completed", 300_000);
    body["orderDetails"] = serde_json::json!([
        { "product_Id": "P1", "productName": "Vòng trầm", "quantity": 2, "price": 100000, "totalPrice": 200000 },
        { "product_Id": 42, "price": 100000 }
    ]);

    Mock::given(method("GET"))
        .and(path("/Order/ORD-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let order = client.get_order("ORD-7").await.expect("should parse order");

    assert_eq!(order.order_details.len(), 2);
    assert_eq!(order.order_details[0].product_name.as_deref(), Some("Vòng trầm"));
    assert_eq!(order.order_details[0].line_total(), dec!(200000));
    assert_eq!(order.order_details[1].product_id.as_deref(), Some("42"));
    assert_eq!(order.order_details[1].quantity, None);
}

#[tokio::test]
async fn dashboard_stats_unwraps_summary() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/DashBoard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "ok",
            "summary": { "totalProducts": 120, "totalOrders": 45, "totalUsers": 30 }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let summary = client.dashboard_stats().await.expect("should parse stats");

    assert_eq!(summary.total_products, 120);
    assert_eq!(summary.total_orders, 45);
    assert_eq!(summary.total_users, 30);
}

#[tokio::test]
async fn error_status_keeps_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Order/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "message": "Không tìm thấy đơn hàng" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.get_order("missing").await.unwrap_err();

    assert!(
        matches!(err, ApiError::Status { status: 404, .. }),
        "expected Status(404), got: {err:?}"
    );
    assert_eq!(err.backend_message(), Some("Không tìm thấy đơn hàng"));
}

#[tokio::test]
async fn error_status_without_json_body_has_no_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Order/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.list_orders().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.backend_message().is_none());
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/DashBoard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.dashboard_stats().await.unwrap_err();

    assert!(
        matches!(err, ApiError::Deserialize { ref context, .. } if context == "DashBoard/stats"),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn create_vnpay_payment_posts_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payments/vnpay/create"))
        .and(body_json(serde_json::json!({
            "orderId": "ORD-1",
            "amount": 270000.0,
            "returnUrl": "/pay_success",
            "failUrl": "/pay_fail"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "paymentUrl": "https://sandbox.vnpayment.vn/pay?token=abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let response = client
        .create_vnpay_payment(&CreatePaymentRequest {
            order_id: Some("ORD-1".into()),
            amount: dec!(270000),
            return_url: Some("/pay_success".into()),
            fail_url: Some("/pay_fail".into()),
        })
        .await
        .expect("should create payment");

    assert_eq!(
        response.payment_url.as_deref(),
        Some("https://sandbox.vnpayment.vn/pay?token=abc")
    );
}

#[tokio::test]
async fn checkout_without_payment_url_goes_to_fail_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payments/vnpay/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let mut cart = Cart::new();
    cart.add(
        &ProductRef {
            id: Some("9".into()),
            name: "Nhẫn bạc".into(),
            price: dec!(350000),
            image: String::new(),
        },
        1,
    );

    let client = test_client(&server.uri(), None);
    let outcome = checkout(&cart, PaymentMethod::VnPay, None, &client).await;
    assert_eq!(outcome, CheckoutOutcome::Navigate(Route::PayFail));
}
