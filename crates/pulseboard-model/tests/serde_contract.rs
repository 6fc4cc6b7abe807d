// SPDX-License-Identifier: Apache-2.0

use pulseboard_model::{Catalog, HealthReport, QualityReport, ReleaseReadiness, ServiceRecord};
use serde_json::Value;

fn builtin_first_service_json() -> Value {
    let catalog = Catalog::builtin();
    serde_json::to_value(&catalog.services()[0]).expect("service encode")
}

#[test]
fn service_record_uses_original_wire_field_names() {
    let value = builtin_first_service_json();
    let object = value.as_object().expect("service object");
    for key in [
        "id",
        "name",
        "director",
        "status",
        "coverage",
        "badge",
        "avgResponseTime",
        "p95Latency",
        "throughput",
        "uptime",
        "errorRate",
    ] {
        assert!(object.contains_key(key), "missing wire field {key}");
    }
    assert_eq!(object.len(), 11, "unexpected extra wire fields");
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["badge"], "platinum");
    assert_eq!(value["id"], 1);
}

#[test]
fn service_record_rejects_unknown_fields() {
    let raw = r#"{
      "id": 1, "name": "X", "director": "Y", "status": "healthy",
      "coverage": 90, "badge": "gold", "avgResponseTime": 100,
      "p95Latency": 200, "throughput": 500, "uptime": 99.0,
      "errorRate": 0.1, "extra": true
    }"#;
    assert!(serde_json::from_str::<ServiceRecord>(raw).is_err());
}

#[test]
fn quality_report_wire_shape_matches_original() {
    let catalog = Catalog::builtin();
    let value = serde_json::to_value(catalog.quality()).expect("quality encode");
    let object = value.as_object().expect("quality object");
    for key in [
        "unitTesting",
        "integrationTesting",
        "componentTesting",
        "apiIntegrationTesting",
        "userJourneyTesting",
        "defectSlippageRatio",
        "defectsSlippedToProduction",
        "productionIncidents",
    ] {
        assert!(object.contains_key(key), "missing quality section {key}");
    }
    assert_eq!(value["unitTesting"]["passRate"], 98.5);
    // rollbacks only appears on the API-integration metric
    assert_eq!(value["apiIntegrationTesting"]["rollbacks"], 2);
    assert!(value["unitTesting"].get("rollbacks").is_none());
}

#[test]
fn health_report_wire_shape_matches_original() {
    let catalog = Catalog::builtin();
    let value = serde_json::to_value(catalog.health()).expect("health encode");
    for section in [
        "performance",
        "reliability",
        "security",
        "deployment",
        "observability",
    ] {
        assert!(value.get(section).is_some(), "missing health section {section}");
    }
    assert_eq!(value["performance"]["avgResponseTime"], 150);
    assert_eq!(value["reliability"]["errorRate"], 0.2);
    assert_eq!(value["security"]["authCoverage"], 98);
    assert_eq!(value["deployment"]["changeFailureRate"], 2.5);
    assert_eq!(value["observability"]["traceCompleteness"], 92);
}

#[test]
fn release_readiness_wire_shape_matches_original() {
    let catalog = Catalog::builtin();
    let service = &catalog.services()[0];
    let value =
        serde_json::to_value(ReleaseReadiness::evaluate(service)).expect("readiness encode");
    for gate in [
        "unitTestCoverage",
        "integrationTestCoverage",
        "apiTestCoverage",
        "securityScan",
        "performanceTest",
    ] {
        assert!(value["qualityGates"].get(gate).is_some(), "missing gate {gate}");
    }
    assert_eq!(
        value["deploymentMetrics"]["lastDeployment"],
        "2024-01-15T10:30:00Z"
    );
    assert!(value["readinessScore"].is_u64());
}

#[test]
fn reports_round_trip_through_json() {
    let catalog = Catalog::builtin();
    let quality_json = serde_json::to_string(catalog.quality()).expect("quality encode");
    let decoded: QualityReport = serde_json::from_str(&quality_json).expect("quality decode");
    assert_eq!(&decoded, catalog.quality());

    let health_json = serde_json::to_string(catalog.health()).expect("health encode");
    let decoded: HealthReport = serde_json::from_str(&health_json).expect("health decode");
    assert_eq!(&decoded, catalog.health());
}
