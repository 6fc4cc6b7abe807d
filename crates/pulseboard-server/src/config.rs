use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    pub discovery_ttl: Duration,
    pub detail_ttl: Duration,
    pub slow_request_threshold: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            max_body_bytes: 16 * 1024,
            discovery_ttl: Duration::from_secs(30),
            detail_ttl: Duration::from_secs(300),
            slow_request_threshold: Duration::from_millis(200),
        }
    }
}

impl ServerConfig {
    /// `PORT` picks the port on the default bind host; `PULSEBOARD_BIND`
    /// overrides the whole listen address.
    #[must_use]
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let bind_addr =
            env::var("PULSEBOARD_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        Self {
            bind_addr,
            max_body_bytes: env_usize("PULSEBOARD_MAX_BODY_BYTES", 16 * 1024),
            discovery_ttl: env_duration_ms("PULSEBOARD_DISCOVERY_TTL_MS", 30_000),
            detail_ttl: env_duration_ms("PULSEBOARD_DETAIL_TTL_MS", 300_000),
            slow_request_threshold: env_duration_ms("PULSEBOARD_SLOW_REQUEST_MS", 200),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}
