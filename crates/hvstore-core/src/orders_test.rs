use chrono::{Datelike, Timelike};
use rust_decimal_macros::dec;

use super::*;

#[test]
fn deserializes_full_order_from_backend_json() {
    let json = serde_json::json!({
        "order_Id": "ORD-1",
        "user_Id": "0f3a9c2e-1111-2222-3333-444455556666",
        "voucher_Id": null,
        "totalPrice": 200000,
        "discountAmount": 20000,
        "finalPrice": 180000,
        "shippingAddress": "12 Lê Lợi, Quận 1",
        "phoneNumber": 901234567,
        "orderDate": "2025-03-14T09:30:00",
        "status": "Paid",
        "orderDetails": [
            { "product_Id": "P1", "quantity": 2, "price": 100000, "productName": "Vòng tay" }
        ]
    });

    let order: Order = serde_json::from_value(json).expect("order should deserialize");
    assert_eq!(order.order_id, "ORD-1");
    assert_eq!(order.phone_number, "901234567");
    assert_eq!(order.final_price, dec!(180000));
    assert!(order.voucher_id.is_none());
    assert_eq!(order.status(), OrderStatus::Paid);
    assert_eq!(order.order_details.len(), 1);
    assert_eq!(order.order_details[0].line_total(), dec!(200000));
}

#[test]
fn tolerates_null_details_and_missing_fields() {
    let json = serde_json::json!({
        "order_Id": 42,
        "status": "pending",
        "orderDetails": null
    });
    let order: Order = serde_json::from_value(json).unwrap();
    assert_eq!(order.order_id, "42");
    assert!(order.order_details.is_empty());
    assert_eq!(order.final_price, Decimal::ZERO);
    assert!(!order.is_qualifying());
}

#[test]
fn status_parse_is_case_insensitive() {
    assert_eq!(OrderStatus::parse("COMPLETED"), OrderStatus::Completed);
    assert_eq!(OrderStatus::parse(" paid "), OrderStatus::Paid);
    assert_eq!(OrderStatus::parse("Processing"), OrderStatus::Processing);
    assert!(OrderStatus::parse("Completed").is_qualifying());
    assert!(!OrderStatus::parse("pending").is_qualifying());
}

#[test]
fn unknown_status_passes_through_verbatim() {
    let status = OrderStatus::parse("Refunded");
    assert_eq!(status, OrderStatus::Other("Refunded".to_string()));
    assert_eq!(status.label(), "Refunded");
    assert!(!status.is_qualifying());
}

#[test]
fn status_labels_are_vietnamese() {
    assert_eq!(OrderStatus::Paid.label(), "Đã thanh toán");
    assert_eq!(OrderStatus::Completed.label(), "Hoàn thành");
    assert_eq!(OrderStatus::Pending.label(), "Đang chờ");
    assert_eq!(OrderStatus::Processing.label(), "Xử lý");
}

#[test]
fn line_total_prefers_positive_precomputed_total() {
    let detail = OrderDetail {
        price: Some(dec!(10)),
        quantity: Some(3),
        total_price: Some(dec!(25)),
        ..OrderDetail::default()
    };
    assert_eq!(detail.line_total(), dec!(25));
}

#[test]
fn line_total_falls_back_when_total_is_zero_or_missing() {
    let zero_total = OrderDetail {
        price: Some(dec!(10)),
        quantity: Some(3),
        total_price: Some(Decimal::ZERO),
        ..OrderDetail::default()
    };
    assert_eq!(zero_total.line_total(), dec!(30));

    let missing = OrderDetail {
        price: Some(dec!(10.5)),
        quantity: Some(2),
        ..OrderDetail::default()
    };
    assert_eq!(missing.line_total(), dec!(21.0));
}

#[test]
fn negative_line_total_is_kept_not_rebuilt() {
    let detail = OrderDetail {
        price: Some(dec!(10)),
        quantity: Some(1),
        total_price: Some(dec!(-5)),
        ..OrderDetail::default()
    };
    assert_eq!(detail.line_total(), dec!(-5));
}

#[test]
fn null_money_fields_read_as_zero() {
    let order: Order = serde_json::from_value(serde_json::json!({
        "order_Id": "7",
        "status": "paid",
        "totalPrice": null,
        "finalPrice": 100,
        "discountAmount": null,
        "orderDate": "2025-01-05"
    }))
    .unwrap();
    assert_eq!(order.total_price, Decimal::ZERO);
    assert_eq!(order.discount_amount, Decimal::ZERO);
    assert_eq!(order.final_price, dec!(100));
}

#[test]
fn line_total_is_zero_without_price_or_quantity() {
    let detail = OrderDetail {
        price: Some(dec!(10)),
        ..OrderDetail::default()
    };
    assert_eq!(detail.line_total(), Decimal::ZERO);
}

#[test]
fn parses_date_only_strings() {
    let dt = parse_order_date("2025-01-05").expect("date-only should parse");
    assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 1, 5));
    assert_eq!(dt.hour(), 0);
}

#[test]
fn parses_offset_less_datetimes_with_fractions() {
    let dt = parse_order_date("2025-11-30T23:15:42.1234567").unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 11, 30));
    assert_eq!(dt.minute(), 15);
}

#[test]
fn parses_rfc3339_keeping_wall_clock() {
    let dt = parse_order_date("2024-12-31T23:30:00+07:00").unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 12, 31));
}

#[test]
fn rejects_garbage_dates() {
    assert!(parse_order_date("").is_none());
    assert!(parse_order_date("not a date").is_none());
    assert!(parse_order_date("2025-13-01").is_none());
}

#[test]
fn short_user_id_truncates_to_eight_chars() {
    let order = Order {
        order_id: "1".into(),
        user_id: "abcdefghijkl".into(),
        voucher_id: None,
        total_price: Decimal::ZERO,
        discount_amount: Decimal::ZERO,
        final_price: Decimal::ZERO,
        shipping_address: String::new(),
        phone_number: String::new(),
        order_date: String::new(),
        status: "paid".into(),
        order_details: Vec::new(),
    };
    assert_eq!(order.short_user_id(), "abcdefgh...");
}

#[test]
fn dashboard_summary_reads_camel_case() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
        "totalProducts": 120,
        "totalOrders": 45,
        "totalUsers": 300
    }))
    .unwrap();
    assert_eq!(summary.total_products, 120);
    assert_eq!(summary.total_orders, 45);
    assert_eq!(summary.total_users, 300);
}
