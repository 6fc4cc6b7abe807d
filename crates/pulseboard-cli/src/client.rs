// SPDX-License-Identifier: Apache-2.0

use pulseboard_api::{OverviewDto, ReleaseReadinessDto, ServiceHealthDto, ServiceQualityDto};
use pulseboard_model::{ServiceFilter, ServiceRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ClientError {
    Transport(reqwest::Error),
    Api { status: u16, message: String },
    Encode(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "request failed: {e}"),
            Self::Api { status, message } => write!(f, "server returned {status}: {message}"),
            Self::Encode(e) => write!(f, "encode failed: {e}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Typed client for the dashboard API. One instance per invocation; every
/// call is an independent stateless GET.
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base);
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| "unexpected server error".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn services(&self, filter: &ServiceFilter) -> Result<Vec<ServiceRecord>, ClientError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(name) = filter.name_contains() {
            query.push(("serviceName", name));
        }
        if let Some(director) = filter.director_contains() {
            query.push(("director", director));
        }
        self.get("/api/services", &query).await
    }

    pub async fn service(&self, id: u32) -> Result<ServiceRecord, ClientError> {
        self.get(&format!("/api/services/{id}"), &[]).await
    }

    pub async fn quality(&self, id: u32) -> Result<ServiceQualityDto, ClientError> {
        self.get(&format!("/api/services/{id}/quality"), &[]).await
    }

    pub async fn health(&self, id: u32) -> Result<ServiceHealthDto, ClientError> {
        self.get(&format!("/api/services/{id}/health"), &[]).await
    }

    pub async fn release_readiness(&self, id: u32) -> Result<ReleaseReadinessDto, ClientError> {
        self.get(&format!("/api/services/{id}/release-readiness"), &[])
            .await
    }

    pub async fn directors(&self) -> Result<Vec<String>, ClientError> {
        self.get("/api/directors", &[]).await
    }

    pub async fn overview(&self) -> Result<OverviewDto, ClientError> {
        self.get("/api/overview", &[]).await
    }
}
