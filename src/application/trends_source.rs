// Source trait for the trend document
use crate::domain::trends::DashboardDocument;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Why the document could not be loaded. The viewer sees the same message
/// for every variant; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for trend data failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("trend data request returned status {0}")]
    Status(StatusCode),

    #[error("trend data is not a valid document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait TrendsSource: Send + Sync {
    /// Fetch the document once, no retries.
    async fn fetch_document(&self) -> Result<DashboardDocument, FetchError>;
}
