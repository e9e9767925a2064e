//! Checkout flow: decide where the shopper goes after pressing "pay".

use std::future::Future;

use crate::cart::Cart;
use crate::payment::{CreatePaymentRequest, CreatePaymentResponse};
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    VnPay,
    /// Cash on delivery.
    Cod,
}

/// Anything that can open a payment session with the provider.
pub trait PaymentGateway {
    type Error: std::fmt::Display;

    fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> impl Future<Output = Result<CreatePaymentResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Empty cart; nothing happens.
    Nothing,
    /// Stay in the app and show this page.
    Navigate(Route),
    /// Leave the app for the provider's payment page.
    Redirect(String),
}

/// Runs checkout for `cart`.
///
/// Cash on delivery goes straight to the success page. `VNPay` asks the
/// gateway for a payment URL and falls back to the failure page when the
/// call fails or returns no URL.
pub async fn checkout<G>(
    cart: &Cart,
    method: PaymentMethod,
    order_id: Option<String>,
    gateway: &G,
) -> CheckoutOutcome
where
    G: PaymentGateway,
{
    if cart.is_empty() {
        return CheckoutOutcome::Nothing;
    }

    match method {
        PaymentMethod::Cod => CheckoutOutcome::Navigate(Route::PaySuccess),
        PaymentMethod::VnPay => {
            let request = CreatePaymentRequest {
                order_id,
                amount: cart.totals().total,
                return_url: Some(Route::PaySuccess.to_path()),
                fail_url: Some(Route::PayFail.to_path()),
            };
            match gateway.create_payment(&request).await {
                Ok(CreatePaymentResponse {
                    payment_url: Some(url),
                }) if !url.is_empty() => CheckoutOutcome::Redirect(url),
                Ok(_) => {
                    tracing::warn!("payment gateway returned no payment URL");
                    CheckoutOutcome::Navigate(Route::PayFail)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "payment creation failed");
                    CheckoutOutcome::Navigate(Route::PayFail)
                }
            }
        }
    }
}
