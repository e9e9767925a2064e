//! Typed HTTP client for the storefront backend.

pub mod client;
pub mod error;
pub mod types;

pub use client::StoreClient;
pub use error::ApiError;
pub use types::DashboardStatsResponse;
