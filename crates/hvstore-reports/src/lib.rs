//! Back-office reporting over the storefront's orders.
//!
//! Aggregation ([`revenue`], [`ranking`]) is pure apart from the optional
//! per-order lookup. [`chart`] turns a monthly series into plot geometry and
//! [`statistics`] wires the whole statistics page together.

pub mod chart;
pub mod error;
pub mod order_views;
pub mod ranking;
pub mod revenue;
pub mod statistics;

pub use chart::{ChartLayout, PlotFrame, PlotPoint, Tooltip};
pub use error::StatisticsError;
pub use order_views::{
    detail_error_message, list_error_message, OrderDetailView, OrderLineView, OrderListRow,
};
pub use ranking::{
    rank_top_products, rank_top_products_embedded, ExcludedOrder, OrderLookup, RankedProduct,
    TopProductsReport,
};
pub use revenue::{monthly_revenue, monthly_revenue_current_year, MonthlyRevenuePoint};
pub use statistics::{
    build_statistics, load_statistics, StatCard, StatisticsPage, TopProductRow, NO_PRODUCT_DATA,
};
