//! Plain-text rendering of the revenue chart.

use std::fmt::Write as _;

use hvstore_reports::ChartLayout;

/// Rows in the plot; the 5 y labels land on every other row.
const CHART_ROWS: usize = 9;
const COLUMN_WIDTH: usize = 4;

/// Draws the chart as text: y labels in millions on the left, one `*` per
/// point, month numbers along the bottom.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn render_chart(layout: &ChartLayout) -> String {
    let points = layout.points();
    let last_row = CHART_ROWS - 1;

    // Row of each point, 0 = top.
    let point_rows: Vec<usize> = points
        .iter()
        .map(|p| {
            // y_pct is clamped, so the cast stays within 0..=last_row
            let scaled = (p.y_pct.clamp(0.0, 100.0) / 100.0 * last_row as f64).round();
            (scaled as usize).min(last_row)
        })
        .collect();

    let labels: Vec<u64> = layout.y_labels().iter().rev().copied().collect();
    let label_width = labels
        .iter()
        .map(|l| format!("{l}M").len())
        .max()
        .unwrap_or(2);

    let mut out = String::new();
    for row in 0..CHART_ROWS {
        let label = if row % 2 == 0 {
            labels
                .get(row / 2)
                .map(|l| format!("{l}M"))
                .unwrap_or_default()
        } else {
            String::new()
        };
        let _ = write!(out, "{label:>label_width$} |");
        for point_row in &point_rows {
            let cell = if *point_row == row { "*" } else { " " };
            let _ = write!(out, "{cell:^COLUMN_WIDTH$}");
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "{:>label_width$} +{}\n{:>label_width$}  ",
        "",
        "-".repeat(points.len() * COLUMN_WIDTH),
        ""
    );
    for label in layout.x_labels() {
        let _ = write!(out, "{label:^COLUMN_WIDTH$}");
    }
    out.push('\n');
    out
}
