//! HTTP+JSON implementation of [`SeparatorService`] built on reqwest.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::{
    AlgorithmsResponse, ComputeRequest, ComputeResponse, ErrorBody, HealthResponse,
    SeparatorService, VersionResponse, ALGORITHMS_PATH, COMPUTE_PATH, HEALTH_PATH, VERSION_PATH,
};
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/health`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::from(e)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        info!(method = "GET", path, "API request");
        let response = self
            .client
            .get(self.endpoint(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(&self, path: &str, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        info!(status = status.as_u16(), path, "API response");
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail_message());
            warn!(status = status.as_u16(), path, ?detail, "API error response");
            return Err(ApiError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!(path, error = %e, "undecodable API response");
            ApiError::Malformed(e.to_string())
        })
    }
}

impl SeparatorService for HttpService {
    async fn compute(&self, request: ComputeRequest) -> Result<ComputeResponse, ApiError> {
        info!(
            method = "POST",
            path = COMPUTE_PATH,
            red = request.red_points.len(),
            blue = request.blue_points.len(),
            algorithm = request.algorithm.wire_name(),
            "API request"
        );
        let response = self
            .client
            .post(self.endpoint(COMPUTE_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.decode(COMPUTE_PATH, response).await
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json(HEALTH_PATH).await
    }

    async fn algorithms(&self) -> Result<AlgorithmsResponse, ApiError> {
        self.get_json(ALGORITHMS_PATH).await
    }

    async fn version(&self) -> Result<VersionResponse, ApiError> {
        self.get_json(VERSION_PATH).await
    }
}
