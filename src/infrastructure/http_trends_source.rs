// HTTP trend source - GET data/trends.json with a cache-busting timestamp
use crate::application::trends_source::{FetchError, TrendsSource};
use crate::domain::trends::DashboardDocument;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

pub const DOCUMENT_PATH: &str = "data/trends.json";

#[derive(Debug, Clone)]
pub struct HttpTrendsSource {
    client: reqwest::Client,
    origin: String,
}

impl HttpTrendsSource {
    pub fn new(origin: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    /// `t` only defeats intermediate caches; the server ignores it.
    fn document_url(&self, epoch_millis: i64) -> String {
        format!("{}/{}?t={}", self.origin, DOCUMENT_PATH, epoch_millis)
    }
}

#[async_trait]
impl TrendsSource for HttpTrendsSource {
    async fn fetch_document(&self) -> Result<DashboardDocument, FetchError> {
        let url = self.document_url(Utc::now().timestamp_millis());
        tracing::debug!("Fetching trend data from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
