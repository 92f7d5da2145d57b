use separator_viz::api::{AlgorithmInfo, AlgorithmsResponse, HealthResponse};
use separator_viz::data::health::{HealthMonitor, ServiceCatalog, UNKNOWN_VERSION};
use separator_viz::panels::StatusPanel;
use separator_viz::{Algorithm, ApiError};

#[test]
fn probe_starts_only_once() {
    let mut health = HealthMonitor::default();
    assert!(!health.is_pending());
    assert!(health.start());
    assert!(health.is_pending());
    assert!(!health.start());
}

#[test]
fn refused_connection_is_synthesized_as_unhealthy() {
    let mut health = HealthMonitor::default();
    health.start();
    health.resolve(Err(ApiError::Transport("connection refused".to_string())));

    let status = health.status().unwrap();
    assert_eq!(status.status, "unhealthy");
    assert_eq!(status.message, "connection refused");
    assert_eq!(status.version, UNKNOWN_VERSION);
    assert!(!status.database_connected);
    assert!(!health.is_pending());
    assert_eq!(StatusPanel::badge(&health).0, StatusPanel::DISCONNECTED_LABEL);
}

#[test]
fn healthy_response_is_kept_verbatim() {
    let mut health = HealthMonitor::default();
    assert_eq!(StatusPanel::badge(&health).0, StatusPanel::CHECKING_LABEL);
    health.start();
    health.resolve(Ok(HealthResponse {
        status: "healthy".to_string(),
        message: "API is running".to_string(),
        version: "1.0.0".to_string(),
        database_connected: true,
        timestamp: None,
    }));
    let status = health.status().unwrap();
    assert!(status.is_healthy());
    assert_eq!(status.version, "1.0.0");
    assert_eq!(StatusPanel::badge(&health).0, StatusPanel::CONNECTED_LABEL);
}

#[test]
fn catalog_is_looked_up_by_wire_name() {
    let mut catalog = ServiceCatalog::default();
    assert!(catalog.algorithm(Algorithm::TwoSquares).is_none());

    let mut map = AlgorithmsResponse::new();
    map.insert(
        "squares".to_string(),
        AlgorithmInfo {
            name: "Two Squares".to_string(),
            time_complexity: "O(n log n)".to_string(),
            space_complexity: "O(n)".to_string(),
            description: "Two axis-aligned squares".to_string(),
            use_case: None,
        },
    );
    catalog.resolve_algorithms(Ok(map));
    assert_eq!(
        catalog.algorithm(Algorithm::TwoSquares).map(|i| i.time_complexity.as_str()),
        Some("O(n log n)")
    );
    assert!(catalog.algorithm(Algorithm::TwoRectangles).is_none());
}

#[test]
fn catalog_failures_leave_it_empty() {
    let mut catalog = ServiceCatalog::default();
    catalog.resolve_version(Err(ApiError::Timeout(std::time::Duration::from_secs(30))));
    assert!(catalog.version().is_none());
}
