//! `stats` subcommand: the statistics page as text or JSON.

use chrono::{Datelike, Local};
use hvstore_api::StoreClient;
use hvstore_reports::{load_statistics, StatisticsPage};

use crate::render::render_chart;

/// Loads and prints the statistics page for `year` (default: this year).
///
/// # Errors
///
/// Returns the localized statistics error if the counters or the order list
/// cannot be fetched, or a serialization error with `--json`.
pub(crate) async fn run_stats(
    client: &StoreClient,
    year: Option<i32>,
    json: bool,
) -> anyhow::Result<()> {
    let year = year.unwrap_or_else(|| Local::now().year());
    let page = load_statistics(client, year).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    print_page(&page);
    Ok(())
}

fn print_page(page: &StatisticsPage) {
    println!("Thống kê {}", page.year);
    println!();
    for card in page.stat_cards() {
        println!("{:<22}{}", card.label, card.display_value());
    }
    println!();

    println!("Tổng doanh số từng tháng");
    print!("{}", render_chart(&page.chart));
    println!();

    println!("Sản phẩm bán chạy");
    if let Some(message) = page.empty_products_message() {
        println!("{message}");
    } else {
        println!("{:<6}{:<32}{:>20}{:>6}", "ID", "NAME", "REVENUE", "%");
        for row in page.top_product_rows() {
            println!(
                "{:<6}{:<32}{:>20}{:>5}%",
                row.id, row.name, row.revenue, row.percentage
            );
        }
    }

    if !page.top_products.is_complete() {
        println!();
        println!(
            "warning: {} order(s) left out because their details could not be loaded:",
            page.top_products.excluded.len()
        );
        for excluded in &page.top_products.excluded {
            println!("  #{}: {}", excluded.order_id, excluded.reason);
        }
    }
}
