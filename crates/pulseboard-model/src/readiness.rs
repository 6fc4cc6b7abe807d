// SPDX-License-Identifier: Apache-2.0

use crate::service::ServiceRecord;
use serde::{Deserialize, Serialize};

pub const UNIT_COVERAGE_GATE: u32 = 90;
pub const INTEGRATION_COVERAGE_GATE: u32 = 85;
pub const API_COVERAGE_GATE: u32 = 80;
pub const PERFORMANCE_GATE_MS: u32 = 200;

const COVERAGE_WEIGHT: f64 = 0.6;
const ERROR_RATE_WEIGHT: f64 = 0.3;
const UPTIME_WEIGHT: f64 = 0.1;

/// Pass/fail checks derived from a service's metrics against fixed
/// thresholds. The security scan gate is always green in the mock data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QualityGates {
    pub unit_test_coverage: bool,
    pub integration_test_coverage: bool,
    pub api_test_coverage: bool,
    pub security_scan: bool,
    pub performance_test: bool,
}

impl QualityGates {
    #[must_use]
    pub fn evaluate(service: &ServiceRecord) -> Self {
        Self {
            unit_test_coverage: service.coverage >= UNIT_COVERAGE_GATE,
            integration_test_coverage: service.coverage >= INTEGRATION_COVERAGE_GATE,
            api_test_coverage: service.coverage >= API_COVERAGE_GATE,
            security_scan: true,
            performance_test: service.avg_response_time < PERFORMANCE_GATE_MS,
        }
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        [
            self.unit_test_coverage,
            self.integration_test_coverage,
            self.api_test_coverage,
            self.security_scan,
            self.performance_test,
        ]
        .iter()
        .filter(|g| **g)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploymentMetrics {
    pub last_deployment: String,
    pub deployment_frequency: String,
    pub rollback_rate: String,
    pub change_failure_rate: String,
}

impl DeploymentMetrics {
    /// Constant deployment figures, independent of the service.
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            last_deployment: "2024-01-15T10:30:00Z".to_string(),
            deployment_frequency: "2x per day".to_string(),
            rollback_rate: "2%".to_string(),
            change_failure_rate: "1.5%".to_string(),
        }
    }
}

/// Weighted readiness score, the single authoritative formula:
/// coverage at 60%, inverted error rate at 30%, uptime at 10%.
#[must_use]
pub fn readiness_score(service: &ServiceRecord) -> u32 {
    let weighted = f64::from(service.coverage) * COVERAGE_WEIGHT
        + (100.0 - service.error_rate) * ERROR_RATE_WEIGHT
        + service.uptime * UPTIME_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReleaseReadiness {
    pub quality_gates: QualityGates,
    pub deployment_metrics: DeploymentMetrics,
    pub readiness_score: u32,
}

impl ReleaseReadiness {
    #[must_use]
    pub fn evaluate(service: &ServiceRecord) -> Self {
        Self {
            quality_gates: QualityGates::evaluate(service),
            deployment_metrics: DeploymentMetrics::baseline(),
            readiness_score: readiness_score(service),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessBand {
    Ready,
    AlmostReady,
    NeedsWork,
    NotReady,
}

impl ReadinessBand {
    #[must_use]
    pub const fn for_score(score: u32) -> Self {
        if score >= 90 {
            Self::Ready
        } else if score >= 80 {
            Self::AlmostReady
        } else if score >= 70 {
            Self::NeedsWork
        } else {
            Self::NotReady
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::AlmostReady => "Almost Ready",
            Self::NeedsWork => "Needs Work",
            Self::NotReady => "Not Ready",
        }
    }
}
