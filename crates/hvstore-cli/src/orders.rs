//! `orders` subcommands: the back-office order list and order detail.

use clap::Subcommand;
use hvstore_api::StoreClient;
use hvstore_core::OrderStatus;
use hvstore_reports::{detail_error_message, list_error_message, OrderDetailView, OrderListRow};

#[derive(Debug, Subcommand)]
pub enum OrdersCommands {
    /// List all orders
    List {
        /// Only show orders with this status (e.g. paid, pending)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one order with its items
    Show {
        /// Order id
        order_id: String,
    },
}

/// Prints the order table.
///
/// # Errors
///
/// Returns the backend's message (or a generic one) if the list cannot be fetched.
pub(crate) async fn run_orders_list(
    client: &StoreClient,
    status_filter: Option<&str>,
) -> anyhow::Result<()> {
    let orders = client.list_orders().await.map_err(|e| {
        tracing::error!(error = %e, "order list fetch failed");
        anyhow::anyhow!(list_error_message(&e))
    })?;

    let wanted = status_filter.map(OrderStatus::parse);
    let rows: Vec<OrderListRow> = orders
        .iter()
        .filter(|o| wanted.as_ref().is_none_or(|w| o.status() == *w))
        .map(OrderListRow::from_order)
        .collect();

    if rows.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    println!(
        "{:<12}{:<14}{:<12}{:<14}{:<16}{:>20}  ADDRESS",
        "ORDER", "USER", "DATE", "PHONE", "STATUS", "TOTAL"
    );
    for row in &rows {
        println!(
            "{:<12}{:<14}{:<12}{:<14}{:<16}{:>20}  {}",
            row.id, row.user, row.date, row.phone, row.status, row.final_price, row.address
        );
    }
    println!();
    println!("{} orders", rows.len());

    Ok(())
}

/// Prints one order's detail page.
///
/// # Errors
///
/// Returns the backend's message (or a generic one) if the order cannot be fetched.
pub(crate) async fn run_orders_show(client: &StoreClient, order_id: &str) -> anyhow::Result<()> {
    let order = client.get_order(order_id).await.map_err(|e| {
        tracing::error!(order_id, error = %e, "order detail fetch failed");
        anyhow::anyhow!(detail_error_message(&e))
    })?;
    let view = OrderDetailView::from_order(&order);

    println!("{}", view.title);
    println!("{}", view.date);
    println!("Trạng thái: {}", view.status);
    println!();
    println!("Địa chỉ giao hàng");
    println!("  {}", view.shipping_address);
    println!("  Điện thoại: {}", view.phone);
    println!("  User ID: {}", view.user_id);
    println!();

    if view.lines.is_empty() {
        println!("(no items)");
    } else {
        println!("{:<32}{:>6}{:>20}{:>20}", "PRODUCT", "QTY", "PRICE", "TOTAL");
        for line in &view.lines {
            println!(
                "{:<32}{:>6}{:>20}{:>20}",
                line.name, line.quantity, line.unit_price, line.line_total
            );
        }
    }
    println!();

    println!("{:<20}{:>20}", "Tạm tính", view.total_price);
    if let Some(discount) = &view.discount {
        println!("{:<20}{:>20}", "Giảm giá", discount);
    }
    if let Some(voucher) = &view.voucher {
        println!("{:<20}{:>20}", "Voucher", voucher);
    }
    println!("{:<20}{:>20}", "Tổng cộng", view.final_price);

    Ok(())
}
