// SPDX-License-Identifier: Apache-2.0

use pulseboard_model::Catalog;
use pulseboard_server::{build_router, AppState};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_server() -> std::net::SocketAddr {
    let app = build_router(AppState::new(Catalog::builtin()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    addr: std::net::SocketAddr,
    path: &str,
    extra_header: Option<(&str, &str)>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\n");
    if let Some((name, value)) = extra_header {
        req.push_str(&format!("{name}: {value}\r\n"));
    }
    req.push_str("Connection: close\r\n\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, head.to_string(), body.to_string())
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.eq_ignore_ascii_case(name) {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

#[tokio::test]
async fn services_list_returns_all_five_in_catalog_order() {
    let addr = spawn_server().await;
    let (status, head, body) = send_raw(addr, "/api/services", None).await;
    assert_eq!(status, 200);
    assert!(header_value(&head, "x-request-id").is_some());

    let services: Value = serde_json::from_str(&body).expect("services json");
    let list = services.as_array().expect("array");
    assert_eq!(list.len(), 5);
    assert_eq!(list[0]["name"], "User Service");
    assert_eq!(list[0]["avgResponseTime"], 120);
    assert_eq!(list[4]["name"], "Auth Service");
}

#[tokio::test]
async fn service_name_filter_is_case_insensitive_substring() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/services?serviceName=PAYMENT", None).await;
    assert_eq!(status, 200);
    let services: Value = serde_json::from_str(&body).expect("services json");
    let list = services.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Payment Service");
}

#[tokio::test]
async fn director_filter_unions_all_matching_directors() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/services?director=o", None).await;
    assert_eq!(status, 200);
    let services: Value = serde_json::from_str(&body).expect("services json");
    let directors: Vec<&str> = services
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["director"].as_str().expect("director"))
        .collect();
    assert_eq!(directors, ["John Smith", "Sarah Johnson", "David Brown"]);
}

#[tokio::test]
async fn combined_filters_apply_logical_and() {
    let addr = spawn_server().await;
    let (_, _, body) =
        send_raw(addr, "/api/services?serviceName=service&director=wang", None).await;
    let services: Value = serde_json::from_str(&body).expect("services json");
    let list = services.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Analytics Service");
}

#[tokio::test]
async fn oversized_filter_value_is_rejected_with_400() {
    let addr = spawn_server().await;
    let long = "x".repeat(300);
    let (status, _, body) =
        send_raw(addr, &format!("/api/services?serviceName={long}"), None).await;
    assert_eq!(status, 400);
    let err: Value = serde_json::from_str(&body).expect("error json");
    assert!(err["error"].as_str().expect("message").contains("serviceName"));
}

#[tokio::test]
async fn lookup_returns_stored_record_or_original_404_body() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/services/3", None).await;
    assert_eq!(status, 200);
    let service: Value = serde_json::from_str(&body).expect("service json");
    assert_eq!(service["name"], "Notification Service");
    assert_eq!(service["status"], "critical");
    assert_eq!(service["badge"], "bronze");
    assert_eq!(service["p95Latency"], 600);

    for missing in ["/api/services/999", "/api/services/0", "/api/services/abc"] {
        let (status, _, body) = send_raw(addr, missing, None).await;
        assert_eq!(status, 404, "{missing} must 404");
        let err: Value = serde_json::from_str(&body).expect("error json");
        assert_eq!(err, serde_json::json!({"error": "Service not found"}));
    }
}

#[tokio::test]
async fn quality_endpoint_joins_service_with_shared_fixture() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/services/2/quality", None).await;
    assert_eq!(status, 200);
    let payload: Value = serde_json::from_str(&body).expect("quality json");
    assert_eq!(payload["service"]["name"], "Payment Service");
    assert_eq!(payload["quality"]["unitTesting"]["coverage"], 92);
    assert_eq!(payload["quality"]["unitTesting"]["passRate"], 98.5);
    assert_eq!(
        payload["quality"]["unitTesting"]["trend"]
            .as_array()
            .expect("trend")
            .len(),
        30
    );
    assert_eq!(payload["quality"]["apiIntegrationTesting"]["rollbacks"], 2);

    // shared fixture: every id sees the identical quality object
    let (_, _, other) = send_raw(addr, "/api/services/5/quality", None).await;
    let other: Value = serde_json::from_str(&other).expect("other quality json");
    assert_eq!(payload["quality"], other["quality"]);
}

#[tokio::test]
async fn quality_payload_is_byte_stable_across_calls() {
    let addr = spawn_server().await;
    let (_, _, first) = send_raw(addr, "/api/services/1/quality", None).await;
    let (_, _, second) = send_raw(addr, "/api/services/1/quality", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_endpoint_joins_service_with_shared_fixture() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/services/4/health", None).await;
    assert_eq!(status, 200);
    let payload: Value = serde_json::from_str(&body).expect("health json");
    assert_eq!(payload["service"]["name"], "Analytics Service");
    assert_eq!(payload["health"]["performance"]["avgResponseTime"], 150);
    assert_eq!(payload["health"]["reliability"]["mtbf"], 720);
    assert_eq!(payload["health"]["deployment"]["deploymentFrequency"], 12);
    assert_eq!(payload["health"]["observability"]["timeToDetect"], 3);
}

#[tokio::test]
async fn release_readiness_gates_follow_service_metrics() {
    let addr = spawn_server().await;

    let (status, _, body) = send_raw(addr, "/api/services/1/release-readiness", None).await;
    assert_eq!(status, 200);
    let payload: Value = serde_json::from_str(&body).expect("readiness json");
    let gates = &payload["releaseReadiness"]["qualityGates"];
    assert_eq!(gates["unitTestCoverage"], true);
    assert_eq!(gates["integrationTestCoverage"], true);
    assert_eq!(gates["apiTestCoverage"], true);
    assert_eq!(gates["securityScan"], true);
    assert_eq!(gates["performanceTest"], true);
    assert_eq!(payload["releaseReadiness"]["readinessScore"], 97);
    assert_eq!(
        payload["releaseReadiness"]["deploymentMetrics"]["lastDeployment"],
        "2024-01-15T10:30:00Z"
    );

    let (_, _, body) = send_raw(addr, "/api/services/3/release-readiness", None).await;
    let payload: Value = serde_json::from_str(&body).expect("readiness json");
    let gates = &payload["releaseReadiness"]["qualityGates"];
    assert_eq!(gates["unitTestCoverage"], false);
    assert_eq!(gates["integrationTestCoverage"], false);
    assert_eq!(gates["apiTestCoverage"], false);
    assert_eq!(gates["securityScan"], true);
    assert_eq!(gates["performanceTest"], false);
    assert_eq!(payload["releaseReadiness"]["readinessScore"], 78);
}

#[tokio::test]
async fn directors_are_distinct_and_ordered() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/directors", None).await;
    assert_eq!(status, 200);
    let directors: Value = serde_json::from_str(&body).expect("directors json");
    assert_eq!(
        directors,
        serde_json::json!([
            "John Smith",
            "Sarah Johnson",
            "Mike Davis",
            "Lisa Wang",
            "David Brown"
        ])
    );
}

#[tokio::test]
async fn overview_summarizes_without_reordering_the_service_list() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/overview", None).await;
    assert_eq!(status, 200);
    let payload: Value = serde_json::from_str(&body).expect("overview json");
    let top = payload["topServices"].as_array().expect("topServices");
    assert_eq!(top.len(), 5);
    assert_eq!(top[0]["coverage"], 95);
    assert_eq!(top[4]["coverage"], 65);
    assert_eq!(payload["summary"]["totalServices"], 5);
    assert_eq!(payload["summary"]["healthyServices"], 3);
    assert_eq!(
        payload["summary"]["averageCoverage"].as_f64().expect("mean"),
        85.0
    );
    let uptime = payload["summary"]["averageUptime"].as_f64().expect("mean");
    assert!((uptime - 99.46).abs() < 1e-9);

    // ranking for the overview must not leak into the plain list
    let (_, _, body) = send_raw(addr, "/api/services", None).await;
    let services: Value = serde_json::from_str(&body).expect("services json");
    let ids: Vec<u64> = services
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["id"].as_u64().expect("id"))
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn discovery_responses_support_etag_revalidation() {
    let addr = spawn_server().await;
    let (status, head, _) = send_raw(addr, "/api/services", None).await;
    assert_eq!(status, 200);
    let etag = header_value(&head, "etag").expect("etag header");
    assert!(header_value(&head, "cache-control")
        .expect("cache-control")
        .contains("max-age"));

    let (status, _, body) = send_raw(addr, "/api/services", Some(("If-None-Match", &etag))).await;
    assert_eq!(status, 304);
    assert!(body.is_empty());
}

#[tokio::test]
async fn probes_version_and_metrics_respond() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/healthz", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    let (status, _, body) = send_raw(addr, "/readyz", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, "ready");

    let (status, _, body) = send_raw(addr, "/api/version", None).await;
    assert_eq!(status, 200);
    let version: Value = serde_json::from_str(&body).expect("version json");
    assert_eq!(version["server"]["crate"], "pulseboard-server");

    let (_, _, _) = send_raw(addr, "/api/services", None).await;
    let (status, _, body) = send_raw(addr, "/metrics", None).await;
    assert_eq!(status, 200);
    assert!(body.contains("pulseboard_http_requests_total"));
    assert!(body.contains("route=\"/api/services\""));
}

#[tokio::test]
async fn openapi_document_is_served_and_matches_surface() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/openapi.json", None).await;
    assert_eq!(status, 200);
    let spec: Value = serde_json::from_str(&body).expect("openapi json");
    assert_eq!(spec["openapi"], "3.0.3");
    assert!(spec["paths"].get("/api/services").is_some());
    assert!(spec["paths"].get("/api/overview").is_some());
}

#[tokio::test]
async fn unknown_paths_fall_back_to_json_404() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "/api/nope", None).await;
    assert_eq!(status, 404);
    let err: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(err, serde_json::json!({"error": "Not found"}));
}
