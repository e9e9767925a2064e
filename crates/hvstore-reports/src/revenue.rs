//! Monthly revenue series for the statistics chart.

use chrono::{Datelike, Local};
use hvstore_core::Order;
use rust_decimal::Decimal;
use serde::Serialize;

/// Revenue for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenuePoint {
    /// 1 = January.
    pub month: u32,
    pub value: Decimal,
}

/// Sums `final_price` per month over the qualifying orders dated in `year`.
///
/// Always returns 12 points, January first, with zeros for empty months.
/// Orders whose date does not parse are skipped.
#[must_use]
pub fn monthly_revenue(orders: &[Order], year: i32) -> Vec<MonthlyRevenuePoint> {
    let mut totals = [Decimal::ZERO; 12];

    for order in orders.iter().filter(|o| o.is_qualifying()) {
        let Some(date) = order.parsed_date() else {
            tracing::debug!(
                order_id = %order.order_id,
                raw = %order.order_date,
                "skipping order with unparseable date"
            );
            continue;
        };
        if date.year() != year {
            continue;
        }
        // month0() is 0..=11 by construction
        if let Some(slot) = usize::try_from(date.month0())
            .ok()
            .and_then(|i| totals.get_mut(i))
        {
            *slot += order.final_price;
        }
    }

    (1u32..)
        .zip(totals)
        .map(|(month, value)| MonthlyRevenuePoint { month, value })
        .collect()
}

/// [`monthly_revenue`] for the local calendar year.
#[must_use]
pub fn monthly_revenue_current_year(orders: &[Order]) -> Vec<MonthlyRevenuePoint> {
    monthly_revenue(orders, Local::now().year())
}
