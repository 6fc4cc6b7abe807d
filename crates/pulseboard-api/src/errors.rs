// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    ServiceNotFound,
    InvalidQueryParameter,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The only domain error in the system. The message is the original
    /// dashboard's wording and must stay stable for clients.
    #[must_use]
    pub fn service_not_found() -> Self {
        Self::new(ApiErrorCode::ServiceNotFound, "Service not found")
    }

    #[must_use]
    pub fn invalid_param(name: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
        )
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::new(ApiErrorCode::Internal, "Something went wrong!")
    }

    /// Wire body, `{"error": <message>}`, exactly as the original API emits.
    #[must_use]
    pub fn wire_body(&self) -> Value {
        json!({ "error": self.message })
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
