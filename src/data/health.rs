//! Service health and the informational catalog fetched at startup.
//!
//! Neither record takes part in the editing flow: a failed probe downgrades
//! the connectivity indicator and nothing else.

use tracing::{info, warn};

use crate::api::{AlgorithmInfo, AlgorithmsResponse, HealthResponse, VersionResponse};
use crate::error::ApiError;

use super::geometry::Algorithm;

pub const UNKNOWN_VERSION: &str = "unknown";

/// Last known state of the service.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub version: String,
    pub database_connected: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// Record synthesized when the probe itself fails.
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            message: message.into(),
            version: UNKNOWN_VERSION.to_string(),
            database_connected: false,
        }
    }
}

impl From<HealthResponse> for HealthStatus {
    fn from(r: HealthResponse) -> Self {
        Self {
            status: r.status,
            message: r.message,
            version: r.version,
            database_connected: r.database_connected,
        }
    }
}

/// One-shot health probe state.
///
/// `status` is `None` only until the probe resolves; afterwards it always
/// holds a displayable record, healthy or not.
#[derive(Debug, Clone, Default)]
pub struct HealthMonitor {
    started: bool,
    status: Option<HealthStatus>,
}

impl HealthMonitor {
    /// Mark the probe as started. Returns `false` if it already was, so the
    /// caller fires at most one probe.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn is_pending(&self) -> bool {
        self.started && self.status.is_none()
    }

    pub fn status(&self) -> Option<&HealthStatus> {
        self.status.as_ref()
    }

    pub fn resolve(&mut self, outcome: Result<HealthResponse, ApiError>) {
        let status = match outcome {
            Ok(r) => {
                info!(status = %r.status, version = %r.version, "API health");
                HealthStatus::from(r)
            }
            Err(e) => {
                warn!(error = %e, "API health check failed");
                HealthStatus::unhealthy(e.to_string())
            }
        };
        self.status = Some(status);
    }
}

/// Algorithm descriptions and service version, fetched once for display.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    algorithms: Option<AlgorithmsResponse>,
    version: Option<VersionResponse>,
}

impl ServiceCatalog {
    pub fn algorithm(&self, algorithm: Algorithm) -> Option<&AlgorithmInfo> {
        self.algorithms.as_ref()?.get(algorithm.wire_name())
    }

    pub fn version(&self) -> Option<&VersionResponse> {
        self.version.as_ref()
    }

    pub fn resolve_algorithms(&mut self, outcome: Result<AlgorithmsResponse, ApiError>) {
        match outcome {
            Ok(map) => self.algorithms = Some(map),
            Err(e) => warn!(error = %e, "failed to fetch algorithm information"),
        }
    }

    pub fn resolve_version(&mut self, outcome: Result<VersionResponse, ApiError>) {
        match outcome {
            Ok(v) => self.version = Some(v),
            Err(e) => warn!(error = %e, "failed to fetch version"),
        }
    }
}
