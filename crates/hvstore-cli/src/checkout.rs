//! `checkout` subcommand.

use clap::ValueEnum;
use hvstore_api::StoreClient;
use hvstore_core::{checkout, CheckoutOutcome, MemoryStore, PaymentMethod, Session};

use crate::cart::{fill_cart, print_cart, CartLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Pay online through VNPay
    Vnpay,
    /// Cash on delivery
    Cod,
}

impl From<MethodArg> for PaymentMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Vnpay => PaymentMethod::VnPay,
            MethodArg::Cod => PaymentMethod::Cod,
        }
    }
}

pub(crate) async fn run_checkout(
    client: &StoreClient,
    session: &mut Session<MemoryStore>,
    lines: &[CartLine],
    method: PaymentMethod,
    order_id: Option<String>,
) {
    fill_cart(session, lines);
    print_cart(session);
    println!();

    match checkout(session.cart(), method, order_id, client).await {
        CheckoutOutcome::Nothing => println!("cart is empty, nothing to check out"),
        CheckoutOutcome::Navigate(route) => println!("navigate: {route}"),
        CheckoutOutcome::Redirect(url) => println!("redirect: {url}"),
    }
}
