// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use pulseboard_model::{ServiceFilter, ServiceId};
use std::collections::BTreeMap;

/// Filter needles longer than this are rejected rather than scanned.
pub const MAX_FILTER_BYTES: usize = 256;

/// Parses the `/api/services` query string. Unknown parameters are ignored;
/// empty values behave as if the parameter were absent.
pub fn parse_list_services_params(
    query: &BTreeMap<String, String>,
) -> Result<ServiceFilter, ApiError> {
    let service_name = bounded(query, "serviceName")?;
    let director = bounded(query, "director")?;
    Ok(ServiceFilter::new(service_name, director))
}

fn bounded(query: &BTreeMap<String, String>, name: &str) -> Result<Option<String>, ApiError> {
    match query.get(name) {
        Some(value) if value.len() > MAX_FILTER_BYTES => Err(ApiError::invalid_param(name)),
        Some(value) => Ok(Some(value.clone())),
        None => Ok(None),
    }
}

/// A path id that does not parse as a decimal integer can never name a
/// service, so it reports the same not-found error a missing id does.
pub fn parse_service_id(raw: &str) -> Result<ServiceId, ApiError> {
    ServiceId::parse(raw).map_err(|_| ApiError::service_not_found())
}
