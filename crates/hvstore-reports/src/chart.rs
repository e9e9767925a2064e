//! Geometry for the monthly revenue line chart.
//!
//! Coordinates are percentages of the plot area: `x` runs left to right,
//! `y` runs top to bottom, so a point at the ceiling sits at `y = 0`.

use hvstore_core::format_currency;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::revenue::MonthlyRevenuePoint;

const MILLION: i64 = 1_000_000;
const Y_LABEL_COUNT: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub month: u32,
    pub value: Decimal,
    pub x_pct: f64,
    pub y_pct: f64,
}

/// Pixel size of the plot and its offset inside the chart container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Hover tooltip for one point, positioned in container pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub value: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    points: Vec<PlotPoint>,
    ceiling_millions: u64,
    y_labels: Vec<u64>,
}

impl ChartLayout {
    #[must_use]
    pub fn from_series(series: &[MonthlyRevenuePoint]) -> Self {
        let max = series
            .iter()
            .map(|p| p.value)
            .fold(Decimal::ONE, Decimal::max);
        let ceiling_millions = (max / Decimal::from(MILLION))
            .ceil()
            .to_u64()
            .unwrap_or(u64::MAX)
            .max(1);
        let ceiling_value = Decimal::from(ceiling_millions) * Decimal::from(MILLION);

        let last = series.len().saturating_sub(1).max(1);
        let points = series
            .iter()
            .enumerate()
            .map(|(i, p)| PlotPoint {
                month: p.month,
                value: p.value,
                x_pct: ratio_pct(Decimal::from(i), Decimal::from(last)),
                y_pct: 100.0 - ratio_pct(p.value, ceiling_value),
            })
            .collect();

        // round(c × i / 4), half up
        let steps = Decimal::from(Y_LABEL_COUNT - 1);
        let y_labels = (0..Y_LABEL_COUNT)
            .map(|i| {
                (Decimal::from(ceiling_millions) * Decimal::from(i) / steps)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u64()
                    .unwrap_or(u64::MAX)
            })
            .collect();

        Self {
            points,
            ceiling_millions,
            y_labels,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// Top of the y axis, in millions.
    #[must_use]
    pub fn ceiling_millions(&self) -> u64 {
        self.ceiling_millions
    }

    #[must_use]
    pub fn ceiling_value(&self) -> Decimal {
        Decimal::from(self.ceiling_millions) * Decimal::from(MILLION)
    }

    /// Y-axis labels in millions, bottom first.
    #[must_use]
    pub fn y_labels(&self) -> &[u64] {
        &self.y_labels
    }

    /// One label per point: the month number.
    #[must_use]
    pub fn x_labels(&self) -> Vec<String> {
        self.points.iter().map(|p| month_short_label(p.month)).collect()
    }

    /// SVG `points` attribute, e.g. `0%,100% 9.09…%,80%`.
    #[must_use]
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{}%,{}%", p.x_pct, p.y_pct))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn tooltip(&self, index: usize, frame: &PlotFrame) -> Option<Tooltip> {
        let point = self.points.get(index)?;
        Some(Tooltip {
            title: month_name(point.month),
            value: format_currency(point.value),
            x: point.x_pct / 100.0 * frame.width + frame.offset_x,
            y: point.y_pct / 100.0 * frame.height + frame.offset_y,
        })
    }
}

/// `Tháng N`.
#[must_use]
pub fn month_name(month: u32) -> String {
    format!("Tháng {month}")
}

fn month_short_label(month: u32) -> String {
    if (1..=12).contains(&month) {
        month.to_string()
    } else {
        format!("T{month}")
    }
}

fn ratio_pct(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    (part / whole * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}
