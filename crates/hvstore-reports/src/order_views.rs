//! Display models for the back-office order list and order detail pages.

use chrono::{Datelike, NaiveDateTime, Timelike};
use hvstore_api::ApiError;
use hvstore_core::{format_currency, Order, OrderDetail};
use rust_decimal::Decimal;
use serde::Serialize;

pub const LIST_ERROR_FALLBACK: &str = "Không thể tải danh sách đơn hàng";
pub const DETAIL_ERROR_FALLBACK: &str = "Không thể tải chi tiết đơn hàng";

const NOT_AVAILABLE: &str = "N/A";

/// One row of the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderListRow {
    pub id: String,
    pub user: String,
    pub date: String,
    pub address: String,
    pub phone: String,
    pub status: String,
    pub final_price: String,
}

impl OrderListRow {
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: format!("#{}", order.order_id),
            user: order.short_user_id(),
            date: order
                .parsed_date()
                .map_or_else(|| NOT_AVAILABLE.to_owned(), short_date),
            address: order.shipping_address.clone(),
            phone: order.phone_number.clone(),
            status: order.status().label().to_owned(),
            final_price: format_currency(order.final_price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl OrderLineView {
    /// `position` is the zero-based index of the line, used in the fallback name.
    #[must_use]
    pub fn from_detail(detail: &OrderDetail, position: usize) -> Self {
        let name = detail
            .product_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| match detail.product_id.as_deref() {
                Some(id) if !id.is_empty() => format!("Product {id}"),
                _ => format!("Product {}", position + 1),
            });
        Self {
            name,
            quantity: detail.quantity.unwrap_or(0),
            unit_price: money_or_na(detail.price),
            line_total: money_or_na(detail.total_price),
        }
    }
}

/// Everything the order detail page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailView {
    pub title: String,
    pub date: String,
    pub status: String,
    pub shipping_address: String,
    pub phone: String,
    pub user_id: String,
    pub total_price: String,
    /// Present only when the order has a discount.
    pub discount: Option<String>,
    pub voucher: Option<String>,
    pub final_price: String,
    pub lines: Vec<OrderLineView>,
}

impl OrderDetailView {
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        let shipping_address = if order.shipping_address.trim().is_empty() {
            NOT_AVAILABLE.to_owned()
        } else {
            order.shipping_address.clone()
        };
        let discount = (order.discount_amount > Decimal::ZERO)
            .then(|| format!("-{}", format_currency(order.discount_amount)));

        Self {
            title: format!("Chi tiết đơn hàng: #{}", order.order_id),
            date: order
                .parsed_date()
                .map_or_else(|| NOT_AVAILABLE.to_owned(), long_date),
            status: order.status().label().to_owned(),
            shipping_address,
            phone: order.phone_number.clone(),
            user_id: order.user_id.clone(),
            total_price: format_currency(order.total_price),
            discount,
            voucher: order.voucher_id.clone().filter(|v| !v.is_empty()),
            final_price: format_currency(order.final_price),
            lines: order
                .order_details
                .iter()
                .enumerate()
                .map(|(i, d)| OrderLineView::from_detail(d, i))
                .collect(),
        }
    }
}

/// Message for a failed order list fetch: the backend's, else the fallback.
#[must_use]
pub fn list_error_message(err: &ApiError) -> String {
    err.backend_message()
        .unwrap_or(LIST_ERROR_FALLBACK)
        .to_owned()
}

/// Message for a failed order detail fetch: the backend's, else the fallback.
#[must_use]
pub fn detail_error_message(err: &ApiError) -> String {
    err.backend_message()
        .unwrap_or(DETAIL_ERROR_FALLBACK)
        .to_owned()
}

/// `dd/mm/yyyy`.
fn short_date(date: NaiveDateTime) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `14 tháng 3, 2025 lúc 09:30`.
fn long_date(date: NaiveDateTime) -> String {
    format!(
        "{:02} tháng {}, {} lúc {:02}:{:02}",
        date.day(),
        date.month(),
        date.year(),
        date.hour(),
        date.minute()
    )
}

fn money_or_na(amount: Option<Decimal>) -> String {
    amount
        .filter(|a| !a.is_zero())
        .map_or_else(|| NOT_AVAILABLE.to_owned(), format_currency)
}
