// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

const METRIC_SUBSYSTEM: &str = "pulseboard";
const METRIC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-route request counters and latency samples, rendered as Prometheus
/// text on `/metrics`. Routes are the template form (`/api/services/:id`),
/// never the concrete path.
#[derive(Default)]
pub struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        {
            let mut counts = self.counts.lock().await;
            *counts
                .entry((route.to_string(), status.as_u16()))
                .or_insert(0) += 1;
        }
        let mut latencies = self.latency_ns.lock().await;
        latencies
            .entry(route.to_string())
            .or_default()
            .push(latency.as_nanos() as u64);
    }

    pub(crate) async fn render_prometheus(&self) -> String {
        let mut body = String::new();
        let counts = self.counts.lock().await;
        let mut count_lines: Vec<String> = counts
            .iter()
            .map(|((route, status), total)| {
                format!(
                    "pulseboard_http_requests_total{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",route=\"{route}\",status=\"{status}\"}} {total}\n"
                )
            })
            .collect();
        count_lines.sort();
        for line in count_lines {
            body.push_str(&line);
        }
        drop(counts);

        let latencies = self.latency_ns.lock().await;
        let mut routes: Vec<&String> = latencies.keys().collect();
        routes.sort();
        for route in routes {
            let samples = &latencies[route];
            for (label, pct) in [("p50", 0.50), ("p95", 0.95), ("p99", 0.99)] {
                body.push_str(&format!(
                    "pulseboard_http_latency_ns{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",route=\"{route}\",quantile=\"{label}\"}} {}\n",
                    percentile_ns(samples, pct)
                ));
            }
        }
        body
    }
}

fn percentile_ns(values: &[u64], pct: f64) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let mut v = values.to_vec();
    v.sort_unstable();
    let idx = ((v.len() as f64 - 1.0) * pct).round() as usize;
    v[idx]
}
