// SPDX-License-Identifier: Apache-2.0

use crate::metrics::{
    CoverageMetric, DeploymentHealth, HealthReport, ObservabilityHealth, PerformanceHealth,
    QualityReport, ReliabilityHealth, SecurityHealth, TrendMetric,
};
use crate::service::{Badge, ServiceId, ServiceRecord, ServiceStatus, ValidationError};
use serde::{Deserialize, Serialize};

/// Case-insensitive substring predicates over the service list. Both
/// predicates must match (logical AND); an absent or empty needle matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    name_contains: Option<String>,
    director_contains: Option<String>,
}

impl ServiceFilter {
    #[must_use]
    pub fn new(name_contains: Option<String>, director_contains: Option<String>) -> Self {
        Self {
            name_contains: name_contains.filter(|s| !s.is_empty()),
            director_contains: director_contains.filter(|s| !s.is_empty()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_contains.is_none() && self.director_contains.is_none()
    }

    #[must_use]
    pub fn name_contains(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }

    #[must_use]
    pub fn director_contains(&self) -> Option<&str> {
        self.director_contains.as_deref()
    }

    #[must_use]
    pub fn matches(&self, service: &ServiceRecord) -> bool {
        let name_ok = self
            .name_contains
            .as_deref()
            .map_or(true, |needle| contains_ignore_case(&service.name, needle));
        let director_ok = self
            .director_contains
            .as_deref()
            .map_or(true, |needle| contains_ignore_case(&service.director, needle));
        name_ok && director_ok
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Summary {
    pub total_services: usize,
    pub healthy_services: usize,
    pub average_coverage: f64,
    pub average_uptime: f64,
}

/// Service counts per coverage band, mirroring the overview gauges:
/// excellent >= 90, good 80-89, fair 70-79, poor < 70.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageBands {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl CoverageBands {
    #[must_use]
    pub fn for_services(services: &[ServiceRecord]) -> Self {
        let mut bands = Self {
            excellent: 0,
            good: 0,
            fair: 0,
            poor: 0,
        };
        for service in services {
            match service.coverage {
                90.. => bands.excellent += 1,
                80..=89 => bands.good += 1,
                70..=79 => bands.fair += 1,
                _ => bands.poor += 1,
            }
        }
        bands
    }
}

/// The immutable in-memory dataset: five service records plus the shared
/// quality and health reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
    quality: QualityReport,
    health: HealthReport,
}

impl Catalog {
    #[must_use]
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    #[must_use]
    pub fn quality(&self) -> &QualityReport {
        &self.quality
    }

    #[must_use]
    pub fn health(&self) -> &HealthReport {
        &self.health
    }

    #[must_use]
    pub fn service(&self, id: ServiceId) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Catalog order is preserved; filtering never reorders.
    #[must_use]
    pub fn filtered(&self, filter: &ServiceFilter) -> Vec<&ServiceRecord> {
        self.services.iter().filter(|s| filter.matches(s)).collect()
    }

    /// Distinct director names in first-occurrence order.
    #[must_use]
    pub fn directors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for service in &self.services {
            if !seen.contains(&service.director.as_str()) {
                seen.push(service.director.as_str());
            }
        }
        seen
    }

    /// Up to `n` services ranked by descending coverage. Sorts a borrowed
    /// index, so catalog order stays intact for every other endpoint.
    #[must_use]
    pub fn top_by_coverage(&self, n: usize) -> Vec<&ServiceRecord> {
        let mut ranked: Vec<&ServiceRecord> = self.services.iter().collect();
        ranked.sort_by(|a, b| b.coverage.cmp(&a.coverage));
        ranked.truncate(n);
        ranked
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let total = self.services.len();
        if total == 0 {
            return Summary {
                total_services: 0,
                healthy_services: 0,
                average_coverage: 0.0,
                average_uptime: 0.0,
            };
        }
        let healthy = self
            .services
            .iter()
            .filter(|s| s.status == ServiceStatus::Healthy)
            .count();
        let coverage_sum: f64 = self.services.iter().map(|s| f64::from(s.coverage)).sum();
        let uptime_sum: f64 = self.services.iter().map(|s| s.uptime).sum();
        Summary {
            total_services: total,
            healthy_services: healthy,
            average_coverage: coverage_sum / total as f64,
            average_uptime: uptime_sum / total as f64,
        }
    }

    #[must_use]
    pub fn coverage_bands(&self) -> CoverageBands {
        CoverageBands::for_services(&self.services)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for service in &self.services {
            service.validate()?;
        }
        let mut ids: Vec<ServiceId> = self.services.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        for pair in ids.windows(2) {
            if pair[0] == pair[1] {
                return Err(ValidationError(format!("duplicate service id: {}", pair[0])));
            }
        }
        self.quality.validate()?;
        Ok(())
    }

    /// The builtin mock dataset. Field values match the original dashboard
    /// fixtures exactly, including the pre-baked 30-point trend series.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            services: builtin_services(),
            quality: builtin_quality(),
            health: builtin_health(),
        }
    }
}

fn builtin_services() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord {
            id: ServiceId::new(1),
            name: "User Service".to_string(),
            director: "John Smith".to_string(),
            status: ServiceStatus::Healthy,
            coverage: 95,
            badge: Badge::Platinum,
            avg_response_time: 120,
            p95_latency: 250,
            throughput: 1500,
            uptime: 99.9,
            error_rate: 0.1,
        },
        ServiceRecord {
            id: ServiceId::new(2),
            name: "Payment Service".to_string(),
            director: "Sarah Johnson".to_string(),
            status: ServiceStatus::Warning,
            coverage: 85,
            badge: Badge::Gold,
            avg_response_time: 180,
            p95_latency: 350,
            throughput: 800,
            uptime: 99.5,
            error_rate: 0.3,
        },
        ServiceRecord {
            id: ServiceId::new(3),
            name: "Notification Service".to_string(),
            director: "Mike Davis".to_string(),
            status: ServiceStatus::Critical,
            coverage: 65,
            badge: Badge::Bronze,
            avg_response_time: 300,
            p95_latency: 600,
            throughput: 400,
            uptime: 98.2,
            error_rate: 1.2,
        },
        ServiceRecord {
            id: ServiceId::new(4),
            name: "Analytics Service".to_string(),
            director: "Lisa Wang".to_string(),
            status: ServiceStatus::Healthy,
            coverage: 92,
            badge: Badge::Platinum,
            avg_response_time: 150,
            p95_latency: 280,
            throughput: 1200,
            uptime: 99.8,
            error_rate: 0.2,
        },
        ServiceRecord {
            id: ServiceId::new(5),
            name: "Auth Service".to_string(),
            director: "David Brown".to_string(),
            status: ServiceStatus::Healthy,
            coverage: 88,
            badge: Badge::Gold,
            avg_response_time: 90,
            p95_latency: 200,
            throughput: 2000,
            uptime: 99.9,
            error_rate: 0.05,
        },
    ]
}

fn builtin_quality() -> QualityReport {
    QualityReport {
        unit_testing: CoverageMetric {
            coverage: 92,
            pass_rate: 98.5,
            rollbacks: None,
            trend: vec![
                95, 93, 91, 94, 92, 93, 95, 92, 91, 94, 92, 93, 95, 92, 91, 94, 92, 93, 95, 92,
                91, 94, 92, 93, 95, 92, 91, 94, 92, 93,
            ],
        },
        integration_testing: CoverageMetric {
            coverage: 87,
            pass_rate: 96.2,
            rollbacks: None,
            trend: vec![
                88, 86, 89, 87, 85, 88, 86, 89, 87, 85, 88, 86, 89, 87, 85, 88, 86, 89, 87, 85,
                88, 86, 89, 87, 85, 88, 86, 89, 87, 85,
            ],
        },
        component_testing: CoverageMetric {
            coverage: 78,
            pass_rate: 94.1,
            rollbacks: None,
            trend: vec![
                80, 77, 79, 76, 78, 80, 77, 79, 76, 78, 80, 77, 79, 76, 78, 80, 77, 79, 76, 78,
                80, 77, 79, 76, 78, 80, 77, 79, 76, 78,
            ],
        },
        api_integration_testing: CoverageMetric {
            coverage: 85,
            pass_rate: 97.3,
            rollbacks: Some(2),
            trend: vec![
                86, 84, 87, 85, 83, 86, 84, 87, 85, 83, 86, 84, 87, 85, 83, 86, 84, 87, 85, 83,
                86, 84, 87, 85, 83, 86, 84, 87, 85, 83,
            ],
        },
        user_journey_testing: CoverageMetric {
            coverage: 82,
            pass_rate: 95.8,
            rollbacks: None,
            trend: vec![
                83, 81, 84, 82, 80, 83, 81, 84, 82, 80, 83, 81, 84, 82, 80, 83, 81, 84, 82, 80,
                83, 81, 84, 82, 80, 83, 81, 84, 82, 80,
            ],
        },
        defect_slippage_ratio: TrendMetric {
            value: 2.3,
            trend: vec![
                2.1, 2.5, 2.0, 2.8, 2.2, 2.4, 2.1, 2.6, 2.3, 2.0, 2.7, 2.2, 2.5, 2.1, 2.9, 2.3,
                2.0, 2.4, 2.2, 2.6, 2.1, 2.8, 2.3, 2.0, 2.5, 2.2, 2.7, 2.1, 2.4, 2.3,
            ],
        },
        defects_slipped_to_production: TrendMetric {
            value: 5,
            trend: vec![
                4, 6, 3, 7, 5, 4, 6, 3, 5, 4, 7, 5, 4, 6, 3, 5, 4, 6, 5, 3, 7, 4, 5, 6, 3, 5, 4,
                6, 5, 5,
            ],
        },
        production_incidents: TrendMetric {
            value: 2,
            trend: vec![
                1, 3, 2, 1, 4, 2, 1, 3, 2, 1, 2, 3, 1, 2, 4, 1, 3, 2, 1, 2, 3, 1, 2, 4, 1, 3, 2,
                1, 2, 2,
            ],
        },
    }
}

fn builtin_health() -> HealthReport {
    HealthReport {
        performance: PerformanceHealth {
            avg_response_time: 150,
            p95_latency: 300,
            p99_latency: 500,
            throughput: 1200,
            concurrent_capacity: 500,
            autoscaling_responsiveness: 95,
        },
        reliability: ReliabilityHealth {
            uptime: 99.8,
            mttr: 15,
            mtbf: 720,
            error_rate: 0.2,
            success_rate: 99.8,
        },
        security: SecurityHealth {
            auth_coverage: 98,
            security_patch_lead_time: 2,
            audit_logging_completeness: 95,
        },
        deployment: DeploymentHealth {
            deployment_frequency: 12,
            change_failure_rate: 2.5,
            lead_time_to_production: 4,
            rollback_time: 8,
            build_test_duration: 15,
        },
        observability: ObservabilityHealth {
            trace_completeness: 92,
            time_to_detect: 3,
        },
    }
}
