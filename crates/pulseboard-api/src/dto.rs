// SPDX-License-Identifier: Apache-2.0

use pulseboard_model::{HealthReport, QualityReport, ReleaseReadiness, ServiceRecord, Summary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceQualityDto {
    pub service: ServiceRecord,
    pub quality: QualityReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceHealthDto {
    pub service: ServiceRecord,
    pub health: HealthReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReleaseReadinessDto {
    pub service: ServiceRecord,
    pub release_readiness: ReleaseReadiness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OverviewDto {
    pub top_services: Vec<ServiceRecord>,
    pub summary: Summary,
}
