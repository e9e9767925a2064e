use hvstore_api::ApiError;
use thiserror::Error;

/// Text shown whenever the statistics page cannot be built.
pub const STATISTICS_ERROR_MESSAGE: &str = "Không thể tải thống kê. Vui lòng thử lại sau.";

/// The statistics page failed to load.
///
/// Displays as one localized message whatever went wrong. The cause stays
/// reachable through [`std::error::Error::source`] for logging.
#[derive(Debug, Error)]
#[error("{}", STATISTICS_ERROR_MESSAGE)]
pub struct StatisticsError {
    #[source]
    source: ApiError,
}

impl StatisticsError {
    #[must_use]
    pub fn cause(&self) -> &ApiError {
        &self.source
    }
}

impl From<ApiError> for StatisticsError {
    fn from(source: ApiError) -> Self {
        Self { source }
    }
}
