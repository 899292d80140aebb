//! API client for communicating with the wellness service

use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;
use wellness_core::{
    BmiRequest, BmiResult, HealthResponse, PredictionRequest, PredictionResult, ReadinessResponse,
};

/// API client for the wellness service
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

/// Error body returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        Self::parse(response).await
    }

    /// GET a probe endpoint; a 503 still carries a meaningful body
    pub async fn probe<T: DeserializeOwned>(&self, path: &str) -> Result<(StatusCode, T)> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if status != StatusCode::SERVICE_UNAVAILABLE && !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response.json().await.context("Failed to parse response")?;
        Ok((status, body))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        response.json().await.context("Failed to parse response")
    }

    async fn api_error(response: Response) -> anyhow::Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        anyhow::anyhow!("API error ({}): {}", status, message)
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.post("health-prediction", request).await
    }

    pub async fn bmi(&self, request: &BmiRequest) -> Result<BmiResult> {
        self.post("bmi", request).await
    }

    pub async fn health(&self) -> Result<(StatusCode, HealthResponse)> {
        self.probe("healthz").await
    }

    pub async fn readiness(&self) -> Result<(StatusCode, ReadinessResponse)> {
        self.probe("readyz").await
    }
}
