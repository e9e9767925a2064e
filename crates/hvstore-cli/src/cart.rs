//! `cart` subcommand and the `ID:NAME:PRICE[:QTY]` item syntax shared with
//! `checkout`.

use hvstore_core::{format_vnd, MemoryStore, ProductRef, Session};
use rust_decimal::Decimal;

/// A product and how many of it to put in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: ProductRef,
    pub quantity: u32,
}

/// Parses `ID:NAME:PRICE[:QTY]`. An empty ID means the product has none.
pub(crate) fn parse_cart_line(raw: &str) -> Result<CartLine, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (id, name, price, quantity) = match parts.as_slice() {
        [id, name, price] => (*id, *name, *price, None),
        [id, name, price, qty] => (*id, *name, *price, Some(*qty)),
        _ => return Err(format!("expected ID:NAME:PRICE[:QTY], got \"{raw}\"")),
    };

    if name.trim().is_empty() {
        return Err("product name must not be empty".to_owned());
    }
    let price: Decimal = price
        .trim()
        .parse()
        .map_err(|e| format!("invalid price \"{price}\": {e}"))?;
    if price.is_sign_negative() {
        return Err(format!("price must not be negative, got {price}"));
    }
    let quantity = match quantity {
        Some(q) => q
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid quantity \"{q}\": {e}"))?,
        None => 1,
    };
    if quantity == 0 {
        return Err("quantity must be at least 1".to_owned());
    }

    let id = id.trim();
    Ok(CartLine {
        product: ProductRef {
            id: (!id.is_empty()).then(|| id.to_owned()),
            name: name.trim().to_owned(),
            price,
            image: String::new(),
        },
        quantity,
    })
}

/// Adds `lines` to the session cart.
pub(crate) fn fill_cart(session: &mut Session<MemoryStore>, lines: &[CartLine]) {
    for line in lines {
        session.cart_mut().add(&line.product, line.quantity);
    }
}

pub(crate) fn run_cart(session: &mut Session<MemoryStore>, lines: &[CartLine], remove: &[String]) {
    fill_cart(session, lines);
    for id in remove {
        if !session.cart_mut().remove(id) {
            tracing::warn!(id = %id, "not in cart, nothing removed");
        }
    }
    print_cart(session);
}

pub(crate) fn print_cart(session: &Session<MemoryStore>) {
    let cart = session.cart();
    if cart.is_empty() {
        println!("Giỏ hàng trống");
        return;
    }

    println!("{:<10}{:<32}{:>6}{:>18}", "CODE", "NAME", "QTY", "TOTAL");
    for item in cart.items() {
        println!(
            "{:<10}{:<32}{:>6}{:>18}",
            item.display_code(),
            item.name,
            item.quantity,
            format_vnd(item.line_total())
        );
    }

    let totals = cart.totals();
    println!();
    println!("{:<20}{:>18}", "Sản phẩm", totals.item_count);
    println!("{:<20}{:>18}", "Tạm tính", format_vnd(totals.subtotal));
    let shipping = if totals.shipping.is_zero() {
        "Miễn phí".to_owned()
    } else {
        format_vnd(totals.shipping)
    };
    println!("{:<20}{:>18}", "Phí vận chuyển", shipping);
    println!("{:<20}{:>18}", "Tổng cộng", format_vnd(totals.total));
}
