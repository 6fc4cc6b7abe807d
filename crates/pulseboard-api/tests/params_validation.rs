use pulseboard_api::{
    map_error, parse_list_services_params, parse_service_id, ApiError, ApiErrorCode,
    MAX_FILTER_BYTES,
};
use std::collections::BTreeMap;

fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn absent_filters_parse_to_the_match_all_filter() {
    let filter = parse_list_services_params(&query(&[])).expect("empty query");
    assert!(filter.is_empty());
}

#[test]
fn both_filters_are_carried_through() {
    let filter = parse_list_services_params(&query(&[
        ("serviceName", "payment"),
        ("director", "sarah"),
    ]))
    .expect("filters");
    assert_eq!(filter.name_contains(), Some("payment"));
    assert_eq!(filter.director_contains(), Some("sarah"));
}

#[test]
fn empty_filter_values_behave_as_absent() {
    let filter =
        parse_list_services_params(&query(&[("serviceName", ""), ("director", "")])).expect("ok");
    assert!(filter.is_empty());
}

#[test]
fn unknown_query_parameters_are_ignored() {
    let filter = parse_list_services_params(&query(&[("page", "2"), ("serviceName", "auth")]))
        .expect("extra params ignored");
    assert_eq!(filter.name_contains(), Some("auth"));
}

#[test]
fn oversized_filter_values_are_rejected() {
    let oversized = "x".repeat(MAX_FILTER_BYTES + 1);
    let err = parse_list_services_params(&query(&[("serviceName", &oversized)]))
        .expect_err("oversized value");
    assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
    assert_eq!(map_error(&err), 400);

    let at_limit = "x".repeat(MAX_FILTER_BYTES);
    assert!(parse_list_services_params(&query(&[("serviceName", &at_limit)])).is_ok());
}

#[test]
fn service_id_parses_decimal_only() {
    assert_eq!(parse_service_id("3").expect("id").value(), 3);
    for bad in ["", "abc", "1.5", "-1", " 1", "1 "] {
        let err = parse_service_id(bad).expect_err("bad id");
        assert_eq!(err.code, ApiErrorCode::ServiceNotFound);
        assert_eq!(map_error(&err), 404);
    }
}

#[test]
fn error_status_mapping_is_total() {
    assert_eq!(map_error(&ApiError::service_not_found()), 404);
    assert_eq!(map_error(&ApiError::invalid_param("serviceName")), 400);
    assert_eq!(map_error(&ApiError::internal()), 500);
}

#[test]
fn wire_body_is_the_original_error_shape() {
    let body = ApiError::service_not_found().wire_body();
    assert_eq!(body, serde_json::json!({"error": "Service not found"}));
    let body = ApiError::internal().wire_body();
    assert_eq!(body, serde_json::json!({"error": "Something went wrong!"}));
}
