//! Order types as the storefront backend returns them.
//!
//! Wire names follow the backend's mixed casing (`order_Id`, `finalPrice`),
//! and most fields tolerate `null` or absence because the list endpoint
//! returns sparser records than the detail endpoint.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A customer order with its line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(rename = "order_Id", deserialize_with = "string_or_number")]
    pub order_id: String,
    #[serde(rename = "user_Id", default, deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(rename = "voucher_Id", default)]
    pub voucher_id: Option<String>,
    #[serde(rename = "totalPrice", default, deserialize_with = "decimal_or_null")]
    pub total_price: Decimal,
    #[serde(rename = "discountAmount", default, deserialize_with = "decimal_or_null")]
    pub discount_amount: Decimal,
    #[serde(rename = "finalPrice", default, deserialize_with = "decimal_or_null")]
    pub final_price: Decimal,
    #[serde(rename = "shippingAddress", default, deserialize_with = "string_or_number")]
    pub shipping_address: String,
    /// The backend sends this as either a number or a string.
    #[serde(rename = "phoneNumber", default, deserialize_with = "string_or_number")]
    pub phone_number: String,
    /// Raw date string; see [`parse_order_date`].
    #[serde(rename = "orderDate", default, deserialize_with = "string_or_number")]
    pub order_date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(rename = "orderDetails", default, deserialize_with = "vec_or_null")]
    pub order_details: Vec<OrderDetail>,
}

impl Order {
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        OrderStatus::parse(&self.status)
    }

    /// `true` when the order counts towards revenue ("paid" or "completed").
    #[must_use]
    pub fn is_qualifying(&self) -> bool {
        self.status().is_qualifying()
    }

    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_order_date(&self.order_date)
    }

    /// First 8 characters of the user id followed by `...`, as shown in the
    /// order list.
    #[must_use]
    pub fn short_user_id(&self) -> String {
        let head: String = self.user_id.chars().take(8).collect();
        format!("{head}...")
    }
}

/// One line item of an [`Order`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    #[serde(rename = "orderDetail_Id", default, deserialize_with = "opt_string_or_number")]
    pub order_detail_id: Option<String>,
    #[serde(rename = "order_Id", default, deserialize_with = "opt_string_or_number")]
    pub order_id: Option<String>,
    #[serde(rename = "product_Id", default, deserialize_with = "opt_string_or_number")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(rename = "totalPrice", default)]
    pub total_price: Option<Decimal>,
    #[serde(rename = "productName", default)]
    pub product_name: Option<String>,
    #[serde(rename = "productImageUrl", default)]
    pub product_image_url: Option<String>,
}

impl OrderDetail {
    /// Revenue of this line.
    ///
    /// Uses the precomputed `total_price` unless it is absent or zero, then
    /// `price × quantity`, otherwise zero. A negative total is returned as is.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        if let Some(total) = self.total_price.filter(|t| !t.is_zero()) {
            return total;
        }
        match (self.price, self.quantity) {
            (Some(price), Some(quantity)) => price * Decimal::from(quantity),
            _ => Decimal::ZERO,
        }
    }
}

/// Lifecycle status of an order.
///
/// Unknown values are kept verbatim in [`OrderStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Paid,
    Completed,
    Pending,
    Processing,
    Other(String),
}

impl OrderStatus {
    /// Case-insensitive parse. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "paid" => Self::Paid,
            "completed" => Self::Completed,
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            _ => Self::Other(raw.to_string()),
        }
    }

    #[must_use]
    pub fn is_qualifying(&self) -> bool {
        matches!(self, Self::Paid | Self::Completed)
    }

    /// Badge text shown in the back-office.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Paid => "Đã thanh toán",
            Self::Completed => "Hoàn thành",
            Self::Pending => "Đang chờ",
            Self::Processing => "Xử lý",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Store-wide counters from `/DashBoard/stats`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_users: u64,
}

/// Parses the backend's ISO-ish order date.
///
/// Accepts RFC 3339 (the wall-clock time in the given offset is kept),
/// offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`, the same with a space
/// separator, and bare `YYYY-MM-DD` (midnight). Returns `None` for anything
/// else.
#[must_use]
pub fn parse_order_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn decimal_or_null<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
