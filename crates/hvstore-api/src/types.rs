//! Response envelopes that only exist on the wire.

use hvstore_core::DashboardSummary;
use serde::Deserialize;

/// Body of `GET /DashBoard/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStatsResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub summary: DashboardSummary,
}

/// Any JSON error body; only `message` is read.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
