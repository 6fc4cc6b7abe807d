#![forbid(unsafe_code)]

mod dto;
mod error_mapping;
mod errors;
pub mod openapi;
mod params;

pub use dto::{OverviewDto, ReleaseReadinessDto, ServiceHealthDto, ServiceQualityDto};
pub use error_mapping::map_error;
pub use errors::{ApiError, ApiErrorCode};
pub use openapi::openapi_spec;
pub use params::{parse_list_services_params, parse_service_id, MAX_FILTER_BYTES};

pub const CRATE_NAME: &str = "pulseboard-api";
