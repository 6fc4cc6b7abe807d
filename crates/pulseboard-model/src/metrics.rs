// SPDX-License-Identifier: Apache-2.0

use crate::service::ValidationError;
use serde::{Deserialize, Serialize};

/// Every trend series in the fixtures is exactly 30 points (one per day).
pub const TREND_POINTS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendMetric<T> {
    pub value: T,
    pub trend: Vec<T>,
}

impl<T> TrendMetric<T> {
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        check_trend_len(name, self.trend.len())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CoverageMetric {
    pub coverage: u32,
    pub pass_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollbacks: Option<u32>,
    pub trend: Vec<u32>,
}

impl CoverageMetric {
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        if self.coverage > 100 {
            return Err(ValidationError(format!(
                "{name} coverage must be within 0-100, got {}",
                self.coverage
            )));
        }
        if !(0.0..=100.0).contains(&self.pass_rate) {
            return Err(ValidationError(format!(
                "{name} pass rate must be within 0-100, got {}",
                self.pass_rate
            )));
        }
        check_trend_len(name, self.trend.len())
    }
}

fn check_trend_len(name: &str, len: usize) -> Result<(), ValidationError> {
    if len != TREND_POINTS {
        return Err(ValidationError(format!(
            "{name} trend must hold exactly {TREND_POINTS} points, got {len}"
        )));
    }
    Ok(())
}

/// The quality report shared by every service id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QualityReport {
    pub unit_testing: CoverageMetric,
    pub integration_testing: CoverageMetric,
    pub component_testing: CoverageMetric,
    pub api_integration_testing: CoverageMetric,
    pub user_journey_testing: CoverageMetric,
    pub defect_slippage_ratio: TrendMetric<f64>,
    pub defects_slipped_to_production: TrendMetric<u32>,
    pub production_incidents: TrendMetric<u32>,
}

impl QualityReport {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.unit_testing.validate("unitTesting")?;
        self.integration_testing.validate("integrationTesting")?;
        self.component_testing.validate("componentTesting")?;
        self.api_integration_testing.validate("apiIntegrationTesting")?;
        self.user_journey_testing.validate("userJourneyTesting")?;
        self.defect_slippage_ratio.validate("defectSlippageRatio")?;
        self.defects_slipped_to_production
            .validate("defectsSlippedToProduction")?;
        self.production_incidents.validate("productionIncidents")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PerformanceHealth {
    pub avg_response_time: u32,
    pub p95_latency: u32,
    pub p99_latency: u32,
    pub throughput: u32,
    pub concurrent_capacity: u32,
    pub autoscaling_responsiveness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReliabilityHealth {
    pub uptime: f64,
    pub mttr: u32,
    pub mtbf: u32,
    pub error_rate: f64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SecurityHealth {
    pub auth_coverage: u32,
    pub security_patch_lead_time: u32,
    pub audit_logging_completeness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploymentHealth {
    pub deployment_frequency: u32,
    pub change_failure_rate: f64,
    pub lead_time_to_production: u32,
    pub rollback_time: u32,
    pub build_test_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ObservabilityHealth {
    pub trace_completeness: u32,
    pub time_to_detect: u32,
}

/// The health/ops report shared by every service id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HealthReport {
    pub performance: PerformanceHealth,
    pub reliability: ReliabilityHealth,
    pub security: SecurityHealth,
    pub deployment: DeploymentHealth,
    pub observability: ObservabilityHealth,
}
