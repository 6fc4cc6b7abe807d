#![forbid(unsafe_code)]
//! Pulseboard model SSOT.
//!
//! All catalog data is defined once at process start and immutable for the
//! process lifetime; there is no create/update/delete path anywhere in the
//! system. The quality and health reports are deliberately one shared object
//! for every service id, not per-service data.

mod catalog;
mod metrics;
mod readiness;
mod service;

pub use catalog::{Catalog, CoverageBands, ServiceFilter, Summary};
pub use metrics::{
    CoverageMetric, DeploymentHealth, HealthReport, ObservabilityHealth, PerformanceHealth,
    QualityReport, ReliabilityHealth, SecurityHealth, TrendMetric, TREND_POINTS,
};
pub use readiness::{
    readiness_score, DeploymentMetrics, QualityGates, ReadinessBand, ReleaseReadiness,
    API_COVERAGE_GATE, INTEGRATION_COVERAGE_GATE, PERFORMANCE_GATE_MS, UNIT_COVERAGE_GATE,
};
pub use service::{
    Badge, ServiceId, ServiceRecord, ServiceStatus, ValidationError, DIRECTOR_MAX_LEN,
    NAME_MAX_LEN,
};

pub const CRATE_NAME: &str = "pulseboard-model";
