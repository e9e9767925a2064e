//! HTTP client for the storefront backend.
//!
//! Every request carries `Authorization: Bearer <token>` when the client was
//! built with a token. Non-2xx responses become [`ApiError::Status`], keeping
//! the body's `message` field so views can show the backend's own wording.

use std::time::Duration;

use hvstore_core::{
    AppConfig, CreatePaymentRequest, CreatePaymentResponse, DashboardSummary, Order,
    PaymentGateway,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{DashboardStatsResponse, ErrorBody};

/// Client for the storefront REST API.
///
/// Use [`StoreClient::new`] with the loaded config, or
/// [`StoreClient::with_base_url`] to point at a mock server in tests.
pub struct StoreClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .finish_non_exhaustive()
    }
}

impl StoreClient {
    /// Builds a client from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`ApiError::InvalidBaseUrl`] if the configured base URL does not parse.
    pub fn new(config: &AppConfig, token: Option<String>) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            token,
        )
    }

    /// Builds a client against an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`ApiError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        token: Option<String>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining keeps the `/api` prefix.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// `GET /Order/all`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] on a non-2xx response.
    /// - [`ApiError::Http`] on network failure or timeout.
    /// - [`ApiError::Deserialize`] if the body is not an order list.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint(&["Order", "all"]);
        self.send_json(self.client.get(url.clone()), &url, "Order/all")
            .await
    }

    /// `GET /Order/{id}`, which includes the full detail list.
    ///
    /// # Errors
    ///
    /// Same as [`StoreClient::list_orders`].
    pub async fn get_order(&self, order_id: &str) -> Result<Order, ApiError> {
        let url = self.endpoint(&["Order", order_id]);
        self.send_json(
            self.client.get(url.clone()),
            &url,
            &format!("Order/{order_id}"),
        )
        .await
    }

    /// `GET /DashBoard/stats`, unwrapped to its `summary`.
    ///
    /// # Errors
    ///
    /// Same as [`StoreClient::list_orders`].
    pub async fn dashboard_stats(&self) -> Result<DashboardSummary, ApiError> {
        let url = self.endpoint(&["DashBoard", "stats"]);
        let envelope: DashboardStatsResponse = self
            .send_json(self.client.get(url.clone()), &url, "DashBoard/stats")
            .await?;
        Ok(envelope.summary)
    }

    /// `POST /payments/vnpay/create`.
    ///
    /// # Errors
    ///
    /// Same as [`StoreClient::list_orders`].
    pub async fn create_vnpay_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<CreatePaymentResponse, ApiError> {
        let url = self.endpoint(&["payments", "vnpay", "create"]);
        self.send_json(
            self.client.post(url.clone()).json(request),
            &url,
            "payments/vnpay/create",
        )
        .await
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
        context: &str,
    ) -> Result<T, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        tracing::debug!(%url, "sending backend request");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            tracing::warn!(
                status = status.as_u16(),
                %url,
                message = message.as_deref().unwrap_or(""),
                "backend returned error status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

impl PaymentGateway for StoreClient {
    type Error = ApiError;

    fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> impl std::future::Future<Output = Result<CreatePaymentResponse, Self::Error>> + Send
    {
        self.create_vnpay_payment(request)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
