//! Payment provider (VNPay) request and return types.
//!
//! The return page is reached with the provider's query string appended.
//! The amount in that query string is ambiguous: `vnp_Amount` is in the
//! provider's minor units (×100), while the backend's own `amount`
//! parameter has been seen both scaled and unscaled. [`AmountSource`]
//! records which reading was applied so callers can tell a guess from a
//! definite value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::route::query_param;

/// Response code the provider uses for a successful transaction.
pub const SUCCESS_RESPONSE_CODE: &str = "00";

const GENERIC_FAILURE: &str = "Thanh toán không thành công. Vui lòng thử lại.";

/// Body of `POST /payments/vnpay/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<String>,
}

/// Response of `POST /payments/vnpay/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    #[serde(default)]
    pub payment_url: Option<String>,
}

/// How a [`PaymentAmount`] was derived from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSource {
    /// `vnp_Amount`, divided by 100.
    ProviderMinorUnits,
    /// `amount`, divided by 100 only if it is a positive multiple of 100.
    Guessed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentAmount {
    pub value: Decimal,
    pub source: AmountSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// `orderId`, else `vnp_TxnRef`, else `—`.
    pub order_id: String,
    pub amount: Option<PaymentAmount>,
}

/// What the payment return page should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentReturn {
    Succeeded(PaymentReceipt),
    Failed { message: String },
}

impl PaymentReturn {
    /// Reads a return query string (with or without the leading `?`).
    ///
    /// A `vnp_ResponseCode` other than `00` is a failure. Anything else,
    /// including no response code at all (cash-on-delivery), is a success.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let response_code = query_param(query, "vnp_ResponseCode");
        if let Some(code) = response_code
            .as_deref()
            .filter(|c| *c != SUCCESS_RESPONSE_CODE)
        {
            let message = query_param(query, "message")
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| Self::failure_message(Some(code)));
            return Self::Failed { message };
        }

        let order_id = query_param(query, "orderId")
            .filter(|v| !v.is_empty())
            .or_else(|| query_param(query, "vnp_TxnRef").filter(|v| !v.is_empty()))
            .unwrap_or_else(|| "\u{2014}".to_string());

        Self::Succeeded(PaymentReceipt {
            order_id,
            amount: read_amount(query),
        })
    }

    /// Default failure text, mentioning the provider code when there is one.
    #[must_use]
    pub fn failure_message(response_code: Option<&str>) -> String {
        match response_code {
            Some(code) => {
                format!("Thanh toán không thành công (mã {code}). Vui lòng thử lại.")
            }
            None => GENERIC_FAILURE.to_string(),
        }
    }
}

fn read_amount(query: &str) -> Option<PaymentAmount> {
    let hundred = Decimal::ONE_HUNDRED;

    if let Some(raw) = query_param(query, "amount").filter(|v| !v.is_empty()) {
        let n = parse_amount(&raw)?;
        let value = if n > Decimal::ZERO && (n % hundred).is_zero() {
            n / hundred
        } else {
            n
        };
        return Some(PaymentAmount {
            value,
            source: AmountSource::Guessed,
        });
    }

    let raw = query_param(query, "vnp_Amount").filter(|v| !v.is_empty())?;
    let n = parse_amount(&raw)?;
    Some(PaymentAmount {
        value: n / hundred,
        source: AmountSource::ProviderMinorUnits,
    })
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    match raw.trim().parse::<Decimal>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!(raw, error = %e, "ignoring unparseable payment amount");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn receipt(query: &str) -> PaymentReceipt {
        match PaymentReturn::from_query(query) {
            PaymentReturn::Succeeded(r) => r,
            other @ PaymentReturn::Failed { .. } => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn provider_amount_is_divided_by_100() {
        let r = receipt("?vnp_ResponseCode=00&vnp_TxnRef=ORD-9&vnp_Amount=15000000");
        assert_eq!(r.order_id, "ORD-9");
        assert_eq!(
            r.amount,
            Some(PaymentAmount {
                value: dec!(150000),
                source: AmountSource::ProviderMinorUnits,
            })
        );
    }

    #[test]
    fn backend_amount_divisible_by_100_is_guessed_scaled() {
        let r = receipt("orderId=A1&amount=15000000");
        let amount = r.amount.unwrap();
        assert_eq!(amount.value, dec!(150000));
        assert_eq!(amount.source, AmountSource::Guessed);
    }

    #[test]
    fn backend_amount_not_divisible_by_100_is_kept() {
        let r = receipt("orderId=A1&amount=150050");
        assert_eq!(r.amount.unwrap().value, dec!(150050));
    }

    #[test]
    fn backend_amount_wins_over_provider_amount() {
        let r = receipt("amount=250000&vnp_Amount=25000000");
        let amount = r.amount.unwrap();
        assert_eq!(amount.value, dec!(2500));
        assert_eq!(amount.source, AmountSource::Guessed);
    }

    #[test]
    fn order_id_falls_back_to_txn_ref_then_dash() {
        assert_eq!(receipt("orderId=X&vnp_TxnRef=Y").order_id, "X");
        assert_eq!(receipt("vnp_TxnRef=Y").order_id, "Y");
        assert_eq!(receipt("").order_id, "\u{2014}");
    }

    #[test]
    fn unparseable_amount_is_omitted() {
        assert!(receipt("amount=abc").amount.is_none());
        assert!(receipt("").amount.is_none());
    }

    #[test]
    fn non_success_code_is_a_failure_with_code_in_message() {
        assert_eq!(
            PaymentReturn::from_query("vnp_ResponseCode=24"),
            PaymentReturn::Failed {
                message: "Thanh toán không thành công (mã 24). Vui lòng thử lại.".into()
            }
        );
    }

    #[test]
    fn explicit_message_overrides_default_failure_text() {
        assert_eq!(
            PaymentReturn::from_query("vnp_ResponseCode=11&message=H%E1%BA%BFt%20h%E1%BA%A1n"),
            PaymentReturn::Failed {
                message: "Hết hạn".into()
            }
        );
    }

    #[test]
    fn generic_failure_message_without_code() {
        assert_eq!(
            PaymentReturn::failure_message(None),
            "Thanh toán không thành công. Vui lòng thử lại."
        );
    }

    #[test]
    fn create_request_serializes_camel_case_and_skips_empty() {
        let req = CreatePaymentRequest {
            order_id: Some("ORD-1".into()),
            amount: dec!(329999),
            return_url: None,
            fail_url: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["orderId"], "ORD-1");
        assert!(json.get("returnUrl").is_none());
        assert_eq!(json["amount"], serde_json::json!(329_999.0));
    }
}
