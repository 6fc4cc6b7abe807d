// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use pulseboard_api::{
    map_error, openapi_spec, parse_list_services_params, parse_service_id, ApiError, OverviewDto,
    ReleaseReadinessDto, ServiceHealthDto, ServiceQualityDto,
};
use pulseboard_core::sha256_hex;
use pulseboard_model::ReleaseReadiness;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

fn put_cache_headers(headers: &mut HeaderMap, ttl: Duration, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl.as_secs())) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

fn payload_etag(payload: &Value) -> String {
    format!(
        "\"{}\"",
        sha256_hex(&serde_json::to_vec(payload).unwrap_or_default())
    )
}

async fn respond_json_cached(
    state: &AppState,
    headers: &HeaderMap,
    route: &'static str,
    started: Instant,
    ttl: Duration,
    payload: Value,
) -> Response {
    let etag = payload_etag(&payload);
    if if_none_match(headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), ttl, &etag);
        state
            .metrics
            .observe_request(route, StatusCode::NOT_MODIFIED, started.elapsed())
            .await;
        return resp;
    }
    let mut response = Json(payload).into_response();
    put_cache_headers(response.headers_mut(), ttl, &etag);
    state
        .metrics
        .observe_request(route, StatusCode::OK, started.elapsed())
        .await;
    response
}

async fn respond_api_error(
    state: &AppState,
    route: &'static str,
    started: Instant,
    err: &ApiError,
) -> Response {
    let status =
        StatusCode::from_u16(map_error(err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let response = (status, Json(err.wire_body())).into_response();
    state
        .metrics
        .observe_request(route, status, started.elapsed())
        .await;
    response
}

fn encode<T: serde::Serialize>(payload: T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|_| ApiError::internal())
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let resp = (StatusCode::OK, "ok").into_response();
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK, started.elapsed())
        .await;
    resp
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    if state.ready.load(Ordering::Relaxed) {
        let resp = (StatusCode::OK, "ready").into_response();
        state
            .metrics
            .observe_request("/readyz", StatusCode::OK, started.elapsed())
            .await;
        resp
    } else {
        let resp = (StatusCode::SERVICE_UNAVAILABLE, "not-ready").into_response();
        state
            .metrics
            .observe_request("/readyz", StatusCode::SERVICE_UNAVAILABLE, started.elapsed())
            .await;
        resp
    }
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let body = state.metrics.render_prometheus().await;
    state
        .metrics
        .observe_request("/metrics", StatusCode::OK, started.elapsed())
        .await;
    (StatusCode::OK, body)
}

pub(crate) async fn version_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let payload = json!({
        "server": {
            "crate": crate::CRATE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        }
    });
    respond_json_cached(
        &state,
        &headers,
        "/api/version",
        started,
        state.config.discovery_ttl,
        payload,
    )
    .await
}

pub(crate) async fn openapi_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    respond_json_cached(
        &state,
        &headers,
        "/api/openapi.json",
        started,
        state.config.discovery_ttl,
        openapi_spec(),
    )
    .await
}

pub(crate) async fn services_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    let started = Instant::now();
    let filter = match parse_list_services_params(&query) {
        Ok(filter) => filter,
        Err(err) => return respond_api_error(&state, "/api/services", started, &err).await,
    };
    let services = state.catalog.filtered(&filter);
    let payload = match encode(&services) {
        Ok(payload) => payload,
        Err(err) => return respond_api_error(&state, "/api/services", started, &err).await,
    };
    respond_json_cached(
        &state,
        &headers,
        "/api/services",
        started,
        state.config.discovery_ttl,
        payload,
    )
    .await
}

pub(crate) async fn service_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let started = Instant::now();
    let route = "/api/services/:id";
    let payload = match resolve_service(&state, &id).and_then(encode) {
        Ok(payload) => payload,
        Err(err) => return respond_api_error(&state, route, started, &err).await,
    };
    respond_json_cached(
        &state,
        &headers,
        route,
        started,
        state.config.detail_ttl,
        payload,
    )
    .await
}

pub(crate) async fn service_quality_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let started = Instant::now();
    let route = "/api/services/:id/quality";
    let payload = match resolve_service(&state, &id).and_then(|service| {
        encode(ServiceQualityDto {
            service,
            quality: state.catalog.quality().clone(),
        })
    }) {
        Ok(payload) => payload,
        Err(err) => return respond_api_error(&state, route, started, &err).await,
    };
    respond_json_cached(
        &state,
        &headers,
        route,
        started,
        state.config.detail_ttl,
        payload,
    )
    .await
}

pub(crate) async fn service_health_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let started = Instant::now();
    let route = "/api/services/:id/health";
    let payload = match resolve_service(&state, &id).and_then(|service| {
        encode(ServiceHealthDto {
            service,
            health: state.catalog.health().clone(),
        })
    }) {
        Ok(payload) => payload,
        Err(err) => return respond_api_error(&state, route, started, &err).await,
    };
    respond_json_cached(
        &state,
        &headers,
        route,
        started,
        state.config.detail_ttl,
        payload,
    )
    .await
}

pub(crate) async fn release_readiness_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let started = Instant::now();
    let route = "/api/services/:id/release-readiness";
    let payload = match resolve_service(&state, &id).and_then(|service| {
        let release_readiness = ReleaseReadiness::evaluate(&service);
        encode(ReleaseReadinessDto {
            service,
            release_readiness,
        })
    }) {
        Ok(payload) => payload,
        Err(err) => return respond_api_error(&state, route, started, &err).await,
    };
    respond_json_cached(
        &state,
        &headers,
        route,
        started,
        state.config.detail_ttl,
        payload,
    )
    .await
}

pub(crate) async fn directors_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let payload = json!(state.catalog.directors());
    respond_json_cached(
        &state,
        &headers,
        "/api/directors",
        started,
        state.config.discovery_ttl,
        payload,
    )
    .await
}

pub(crate) async fn overview_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let route = "/api/overview";
    let top_services = state
        .catalog
        .top_by_coverage(10)
        .into_iter()
        .cloned()
        .collect();
    let dto = OverviewDto {
        top_services,
        summary: state.catalog.summary(),
    };
    let payload = match encode(dto) {
        Ok(payload) => payload,
        Err(err) => return respond_api_error(&state, route, started, &err).await,
    };
    respond_json_cached(
        &state,
        &headers,
        route,
        started,
        state.config.discovery_ttl,
        payload,
    )
    .await
}

pub(crate) async fn fallback_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let response = (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Not found"})),
    )
        .into_response();
    state
        .metrics
        .observe_request("fallback", StatusCode::NOT_FOUND, started.elapsed())
        .await;
    response
}

fn resolve_service(
    state: &AppState,
    raw_id: &str,
) -> Result<pulseboard_model::ServiceRecord, ApiError> {
    let id = parse_service_id(raw_id)?;
    state
        .catalog
        .service(id)
        .cloned()
        .ok_or_else(ApiError::service_not_found)
}
