//! The statistics page: counters, monthly revenue chart and top products.

use hvstore_api::StoreClient;
use hvstore_core::{format_count, format_currency, DashboardSummary, Order};
use serde::Serialize;

use crate::chart::ChartLayout;
use crate::error::StatisticsError;
use crate::ranking::{rank_top_products, OrderLookup, TopProductsReport};
use crate::revenue::{monthly_revenue, MonthlyRevenuePoint};

/// Shown instead of the top-product table when nothing ranked.
pub const NO_PRODUCT_DATA: &str = "Không có dữ liệu sản phẩm";

/// One dashboard counter, e.g. "Tổng số đơn hàng: 45 đơn".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub suffix: &'static str,
}

impl StatCard {
    /// Grouped value followed by the unit, e.g. `1.234 sản phẩm`.
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{} {}", format_count(self.value), self.suffix)
    }
}

/// A ranked product with its revenue already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProductRow {
    pub id: String,
    pub name: String,
    pub revenue: String,
    pub percentage: u32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsPage {
    pub year: i32,
    pub summary: DashboardSummary,
    pub revenue: Vec<MonthlyRevenuePoint>,
    pub chart: ChartLayout,
    pub top_products: TopProductsReport,
}

impl StatisticsPage {
    #[must_use]
    pub fn stat_cards(&self) -> [StatCard; 3] {
        [
            StatCard {
                label: "Tổng số sản phẩm",
                value: self.summary.total_products,
                suffix: "sản phẩm",
            },
            StatCard {
                label: "Tổng số đơn hàng",
                value: self.summary.total_orders,
                suffix: "đơn",
            },
            StatCard {
                label: "Tổng số khách hàng",
                value: self.summary.total_users,
                suffix: "người",
            },
        ]
    }

    #[must_use]
    pub fn top_product_rows(&self) -> Vec<TopProductRow> {
        self.top_products
            .products
            .iter()
            .map(|p| TopProductRow {
                id: p.id.clone(),
                name: p.name.clone(),
                revenue: format_currency(p.revenue),
                percentage: p.percentage,
                image: p.image.clone(),
            })
            .collect()
    }

    /// [`NO_PRODUCT_DATA`] when the ranking is empty.
    #[must_use]
    pub fn empty_products_message(&self) -> Option<&'static str> {
        self.top_products.products.is_empty().then_some(NO_PRODUCT_DATA)
    }
}

/// Loads everything the statistics page shows for `year`.
///
/// The dashboard counters and the order list are fetched concurrently.
/// Orders listed without detail lines are then looked up one by one; those
/// lookups never fail the page and end up in
/// [`TopProductsReport::excluded`] instead. Dropping the returned future
/// cancels whatever requests are still in flight.
///
/// # Errors
///
/// Returns [`StatisticsError`] if either the counters or the order list
/// cannot be fetched.
pub async fn load_statistics(
    client: &StoreClient,
    year: i32,
) -> Result<StatisticsPage, StatisticsError> {
    let (summary, orders) = tokio::try_join!(client.dashboard_stats(), client.list_orders())
        .map_err(|e| {
            tracing::error!(error = %e, "failed to load statistics");
            StatisticsError::from(e)
        })?;

    tracing::info!(year, orders = orders.len(), "loaded orders for statistics");
    let page = build_statistics(summary, &orders, year, client).await;
    if !page.top_products.is_complete() {
        tracing::warn!(
            excluded = page.top_products.excluded.len(),
            "top products computed without some orders"
        );
    }
    Ok(page)
}

/// Derives the page from already-fetched data.
pub async fn build_statistics<L>(
    summary: DashboardSummary,
    orders: &[Order],
    year: i32,
    lookup: &L,
) -> StatisticsPage
where
    L: OrderLookup,
{
    let revenue = monthly_revenue(orders, year);
    let chart = ChartLayout::from_series(&revenue);
    let top_products = rank_top_products(orders, lookup).await;

    StatisticsPage {
        year,
        summary,
        revenue,
        chart,
        top_products,
    }
}
