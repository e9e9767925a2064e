//! Top-product ranking by revenue.
//!
//! Orders listed by `/Order/all` may arrive without their detail lines. Those
//! are fetched one at a time through an [`OrderLookup`]; an order whose
//! lookup fails is left out of the ranking and reported in
//! [`TopProductsReport::excluded`].

use std::collections::HashMap;
use std::future::Future;

use hvstore_api::{ApiError, StoreClient};
use hvstore_core::{Order, OrderDetail};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Number of products kept in the ranking.
pub const TOP_PRODUCT_LIMIT: usize = 4;

/// Image used when a line item has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Fetches one order with its full detail list.
pub trait OrderLookup {
    type Error: std::fmt::Display;

    fn order_by_id(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<Order, Self::Error>> + Send;
}

impl OrderLookup for StoreClient {
    type Error = ApiError;

    fn order_by_id(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<Order, Self::Error>> + Send {
        self.get_order(order_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedProduct {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
    pub quantity: u64,
    /// Share of the ranked products' combined revenue, 0..=100.
    pub percentage: u32,
    pub image: String,
}

/// An order left out of the ranking because its details could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedOrder {
    pub order_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopProductsReport {
    pub products: Vec<RankedProduct>,
    pub excluded: Vec<ExcludedOrder>,
}

impl TopProductsReport {
    /// `true` when every qualifying order contributed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.excluded.is_empty()
    }
}

/// Ranks products over the qualifying orders, looking up orders that came
/// without detail lines.
///
/// Lookups run sequentially, one per order that needs one.
pub async fn rank_top_products<L>(orders: &[Order], lookup: &L) -> TopProductsReport
where
    L: OrderLookup,
{
    let mut acc = Accumulator::default();
    let mut excluded = Vec::new();

    for order in orders.iter().filter(|o| o.is_qualifying()) {
        if !order.order_details.is_empty() {
            acc.add_lines(&order.order_details);
            continue;
        }

        match lookup.order_by_id(&order.order_id).await {
            Ok(full) => acc.add_lines(&full.order_details),
            Err(e) => {
                tracing::warn!(
                    order_id = %order.order_id,
                    error = %e,
                    "order details unavailable, excluding from ranking"
                );
                excluded.push(ExcludedOrder {
                    order_id: order.order_id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    TopProductsReport {
        products: acc.into_ranking(),
        excluded,
    }
}

/// Ranks products using only the detail lines already on each order.
#[must_use]
pub fn rank_top_products_embedded(orders: &[Order]) -> Vec<RankedProduct> {
    let mut acc = Accumulator::default();
    for order in orders.iter().filter(|o| o.is_qualifying()) {
        acc.add_lines(&order.order_details);
    }
    acc.into_ranking()
}

struct ProductTotals {
    id: String,
    name: String,
    image: String,
    revenue: Decimal,
    quantity: u64,
}

/// Per-product sums in first-seen order.
#[derive(Default)]
struct Accumulator {
    products: Vec<ProductTotals>,
    index: HashMap<String, usize>,
}

impl Accumulator {
    fn add_lines(&mut self, lines: &[OrderDetail]) {
        for line in lines {
            self.add_line(line);
        }
    }

    fn add_line(&mut self, line: &OrderDetail) {
        let Some(product_id) = line.product_id.as_deref().filter(|id| !id.is_empty()) else {
            return;
        };
        let revenue = line.line_total();
        if revenue <= Decimal::ZERO {
            return;
        }
        let quantity = match line.quantity {
            Some(q) if q > 0 => u64::from(q),
            _ => 1,
        };

        let slot = match self.index.get(product_id) {
            Some(&i) => i,
            None => {
                self.products.push(ProductTotals {
                    id: product_id.to_owned(),
                    name: line
                        .product_name
                        .clone()
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| format!("Product {product_id}")),
                    image: line
                        .product_image_url
                        .clone()
                        .filter(|u| !u.is_empty())
                        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
                    revenue: Decimal::ZERO,
                    quantity: 0,
                });
                let i = self.products.len() - 1;
                self.index.insert(product_id.to_owned(), i);
                i
            }
        };

        let entry = &mut self.products[slot];
        entry.revenue += revenue;
        entry.quantity = entry.quantity.saturating_add(quantity);
    }

    fn into_ranking(self) -> Vec<RankedProduct> {
        let mut products = self.products;
        // stable: ties keep first-seen order
        products.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        products.truncate(TOP_PRODUCT_LIMIT);

        let kept_total: Decimal = products.iter().map(|p| p.revenue).sum();

        products
            .into_iter()
            .map(|p| RankedProduct {
                percentage: percentage_of(p.revenue, kept_total),
                id: p.id,
                name: p.name,
                revenue: p.revenue,
                quantity: p.quantity,
                image: p.image,
            })
            .collect()
    }
}

/// `round_half_up(part / total × 100)`, or 0 when `total` is zero.
fn percentage_of(part: Decimal, total: Decimal) -> u32 {
    if total.is_zero() {
        return 0;
    }
    let pct = (part / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    pct.to_u32().unwrap_or(0)
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;
