//! `route` and `payment-return`: read storefront locations.

use hvstore_core::{format_vnd, AmountSource, PaymentReturn, Route};

pub(crate) fn run_route(href: &str) {
    let route = Route::from_href(href);
    println!("page: {}", route.key());
    match &route {
        Route::ProductDetail { id } => println!("product: {id}"),
        Route::Search { category } if !category.is_empty() => println!("category: {category}"),
        _ => {}
    }
    println!("path: {route}");
}

pub(crate) fn run_payment_return(query: &str) {
    match PaymentReturn::from_query(query) {
        PaymentReturn::Succeeded(receipt) => {
            println!("Thanh toán thành công");
            println!("Mã đơn hàng: {}", receipt.order_id);
            if let Some(amount) = receipt.amount {
                let note = match amount.source {
                    AmountSource::ProviderMinorUnits => "",
                    AmountSource::Guessed => " (scale guessed)",
                };
                println!("Số tiền: {}{note}", format_vnd(amount.value));
            }
        }
        PaymentReturn::Failed { message } => {
            println!("Thanh toán thất bại");
            println!("{message}");
        }
    }
}
