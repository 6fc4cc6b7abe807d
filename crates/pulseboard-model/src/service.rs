// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const NAME_MAX_LEN: usize = 128;
pub const DIRECTOR_MAX_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ServiceId(u32);

impl ServiceId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Strict decimal parse: digits only, no sign, no surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError("service id must not be empty".to_string()));
        }
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError(format!(
                "service id must be a decimal integer, got {input:?}"
            )));
        }
        let value = input
            .parse::<u32>()
            .map_err(|_| ValidationError(format!("service id out of range: {input}")))?;
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Display for ServiceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Warning,
    Critical,
}

impl ServiceStatus {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input {
            "healthy" => Ok(Self::Healthy),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            other => Err(ValidationError(format!("unknown service status: {other}"))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl Display for ServiceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static quality tier attached to a service record. Stored independently of
/// coverage, never recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl Badge {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input {
            "platinum" => Ok(Self::Platinum),
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            "bronze" => Ok(Self::Bronze),
            other => Err(ValidationError(format!("unknown badge: {other}"))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platinum => "platinum",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }
}

impl Display for Badge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub name: String,
    pub director: String,
    pub status: ServiceStatus,
    pub coverage: u32,
    pub badge: Badge,
    pub avg_response_time: u32,
    pub p95_latency: u32,
    pub throughput: u32,
    pub uptime: f64,
    pub error_rate: f64,
}

impl ServiceRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ServiceId,
        name: impl Into<String>,
        director: impl Into<String>,
        status: ServiceStatus,
        coverage: u32,
        badge: Badge,
        avg_response_time: u32,
        p95_latency: u32,
        throughput: u32,
        uptime: f64,
        error_rate: f64,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            id,
            name: name.into(),
            director: director.into(),
            status,
            coverage,
            badge,
            avg_response_time,
            p95_latency,
            throughput,
            uptime,
            error_rate,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError("service name must not be empty".to_string()));
        }
        if self.name.len() > NAME_MAX_LEN {
            return Err(ValidationError(format!(
                "service name exceeds max length {NAME_MAX_LEN}"
            )));
        }
        if self.director.trim().is_empty() {
            return Err(ValidationError("director must not be empty".to_string()));
        }
        if self.director.len() > DIRECTOR_MAX_LEN {
            return Err(ValidationError(format!(
                "director exceeds max length {DIRECTOR_MAX_LEN}"
            )));
        }
        if self.coverage > 100 {
            return Err(ValidationError(format!(
                "coverage must be within 0-100, got {}",
                self.coverage
            )));
        }
        if !(0.0..=100.0).contains(&self.uptime) {
            return Err(ValidationError(format!(
                "uptime must be within 0-100, got {}",
                self.uptime
            )));
        }
        if !(0.0..=100.0).contains(&self.error_rate) {
            return Err(ValidationError(format!(
                "error rate must be within 0-100, got {}",
                self.error_rate
            )));
        }
        Ok(())
    }
}
