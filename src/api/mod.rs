//! Contract with the remote separator service.
//!
//! The service is modelled as an opaque capability, [`SeparatorService`].
//! [`http::HttpService`] talks to the real HTTP+JSON API; tests plug in their
//! own implementation. [`client::ServiceClient`] runs whichever service it is
//! given on a background runtime and feeds the outcomes back to the UI thread.

pub mod client;
pub mod http;

use std::collections::BTreeMap;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::data::geometry::{Algorithm, Point, Shape};
use crate::error::ApiError;

pub const COMPUTE_PATH: &str = "/api/compute-separators";
pub const HEALTH_PATH: &str = "/api/health";
pub const ALGORITHMS_PATH: &str = "/api/algorithms";
pub const VERSION_PATH: &str = "/api/version";

/// Body of `POST /api/compute-separators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeRequest {
    pub red_points: Vec<Point>,
    pub blue_points: Vec<Point>,
    pub algorithm: Algorithm,
    pub save_to_db: bool,
}

/// Successful response of `POST /api/compute-separators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeResponse {
    #[serde(default)]
    pub computation_id: Option<i64>,
    pub shapes: Vec<Shape>,
    pub blue_covered: usize,
    pub red_covered: usize,
    pub total_red: usize,
    pub total_blue: usize,
    pub execution_time_ms: f64,
    /// Algorithm as reported by the service; spelling may differ from the request.
    pub algorithm: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Error body the service attaches to non-success responses.
///
/// `detail` is kept as raw JSON: validation failures carry a list of
/// problems there instead of a single string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ErrorBody {
    /// The detail message, only when the service sent a plain string.
    pub fn detail_message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub database_connected: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One entry of the `GET /api/algorithms` catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub description: String,
    #[serde(default)]
    pub use_case: Option<String>,
}

/// Catalog keyed by algorithm wire name.
pub type AlgorithmsResponse = BTreeMap<String, AlgorithmInfo>;

/// Response of `GET /api/version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
    pub mode: String,
    pub api_prefix: String,
}

/// The remote separator computation, seen as an abstract capability.
///
/// Nothing is assumed about determinism: two identical requests may yield
/// different shapes.
pub trait SeparatorService: Send + Sync + 'static {
    fn compute(
        &self,
        request: ComputeRequest,
    ) -> impl Future<Output = Result<ComputeResponse, ApiError>> + Send;

    fn health(&self) -> impl Future<Output = Result<HealthResponse, ApiError>> + Send;

    fn algorithms(&self) -> impl Future<Output = Result<AlgorithmsResponse, ApiError>> + Send;

    fn version(&self) -> impl Future<Output = Result<VersionResponse, ApiError>> + Send;
}
