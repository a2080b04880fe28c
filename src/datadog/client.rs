use serde::de::DeserializeOwned;

use crate::config::DatadogConfig;
use crate::series::ScopedSeries;

use super::model::{ErrorBody, MetricQuery, Monitor};

/// Client for the Datadog v1 API
///
/// No request timeout is configured: the poll loop has nothing better to
/// do than wait, and a hung request shows up as a stalled cycle log.
#[derive(Debug, Clone)]
pub struct DatadogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    app_key: String,
}

impl DatadogClient {
    pub fn new(config: &DatadogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url(),
            api_key: config.api_key.clone(),
            app_key: config.app_key.clone(),
        }
    }

    /// Fetch monitor details, including its query and threshold options
    pub async fn monitor(&self, id: u64) -> Result<Monitor, ApiError> {
        let url = format!("{}/api/v1/monitor/{}", self.base_url, id);

        let response = self
            .request(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    /// Query series for `query` over `[from, to]`, seconds since the epoch
    pub async fn query_series(
        &self,
        query: &str,
        from: i64,
        to: i64,
    ) -> Result<Vec<ScopedSeries>, ApiError> {
        let url = format!("{}/api/v1/query", self.base_url);

        let response = self
            .request(&url)
            .query(&[
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("query", query.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: MetricQuery = decode(response).await?;
        Ok(body.series.into_iter().map(Into::into).collect())
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("DD-API-KEY", &self.api_key)
            .header("DD-APPLICATION-KEY", &self.app_key)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .filter(|e| !e.errors.is_empty())
            .map(|e| e.errors.join("; "))
            .unwrap_or(body);
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Datadog returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}
