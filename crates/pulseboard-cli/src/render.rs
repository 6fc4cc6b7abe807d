// SPDX-License-Identifier: Apache-2.0

use pulseboard_model::{
    Badge, CoverageBands, HealthReport, QualityGates, QualityReport, ReadinessBand,
    ReleaseReadiness, ServiceRecord, ServiceStatus, Summary,
};

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const GAUGE_WIDTH: usize = 20;

/// Zoomed-out views subsample the 30-point series, matching the timeline
/// widget: zoom 1 keeps every 3rd point, zoom 2 every 2nd, zoom 3 all.
#[must_use]
pub fn zoom_stride(zoom: u8) -> usize {
    match zoom {
        1 => 3,
        2 => 2,
        _ => 1,
    }
}

#[must_use]
pub fn subsample(values: &[f64], stride: usize) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .filter(|(index, _)| index % stride == 0)
        .map(|(_, value)| *value)
        .collect()
}

#[must_use]
pub fn sparkline(values: &[f64], zoom: u8) -> String {
    let sampled = subsample(values, zoom_stride(zoom));
    if sampled.is_empty() {
        return String::new();
    }
    let min = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    sampled
        .iter()
        .map(|value| {
            let bucket = if span <= f64::EPSILON {
                0
            } else {
                (((value - min) / span) * (SPARK_GLYPHS.len() - 1) as f64).round() as usize
            };
            SPARK_GLYPHS[bucket.min(SPARK_GLYPHS.len() - 1)]
        })
        .collect()
}

#[must_use]
pub fn gauge(score: u32) -> String {
    let filled = (score.min(100) as usize * GAUGE_WIDTH) / 100;
    format!(
        "[{}{}] {score}%",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled)
    )
}

#[must_use]
pub fn status_glyph(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Healthy => "●",
        ServiceStatus::Warning => "◐",
        ServiceStatus::Critical => "○",
    }
}

#[must_use]
pub fn badge_label(badge: Badge) -> &'static str {
    match badge {
        Badge::Platinum => "PLATINUM",
        Badge::Gold => "GOLD",
        Badge::Silver => "SILVER",
        Badge::Bronze => "BRONZE",
    }
}

fn gate_line(name: &str, passed: bool) -> String {
    format!("  {} {name}", if passed { "[pass]" } else { "[FAIL]" })
}

pub fn render_overview(
    services: &[ServiceRecord],
    top: &[ServiceRecord],
    summary: &Summary,
    bands: CoverageBands,
) -> String {
    let mut out = String::new();
    out.push_str("== Overview ==\n");
    out.push_str(&format!(
        "services: {}   healthy: {}   avg coverage: {:.1}%   avg uptime: {:.2}%\n",
        summary.total_services,
        summary.healthy_services,
        summary.average_coverage,
        summary.average_uptime,
    ));

    let total = services.len().max(1);
    let count_of = |status: ServiceStatus| services.iter().filter(|s| s.status == status).count();
    for status in [
        ServiceStatus::Healthy,
        ServiceStatus::Warning,
        ServiceStatus::Critical,
    ] {
        let count = count_of(status);
        out.push_str(&format!(
            "  {} {:<8} {:>2}  ({:.1}% of total)\n",
            status_glyph(status),
            status.as_str(),
            count,
            count as f64 * 100.0 / total as f64,
        ));
    }

    out.push_str(&format!(
        "coverage bands: >=90: {}   80-89: {}   70-79: {}   <70: {}\n",
        bands.excellent, bands.good, bands.fair, bands.poor,
    ));

    out.push_str("top services by coverage:\n");
    for service in top {
        let score = pulseboard_model::readiness_score(service);
        out.push_str(&format!(
            "  {:>2}. {:<22} {:<9} cov {:>3}%  {}  {}\n",
            service.id.value(),
            service.name,
            badge_label(service.badge),
            service.coverage,
            status_glyph(service.status),
            ReadinessBand::for_score(score).label(),
        ));
    }
    out
}

pub fn render_quality(service: &ServiceRecord, quality: &QualityReport, zoom: u8) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== Quality — {} (id {}) ==\n",
        service.name, service.id
    ));
    for (label, metric) in [
        ("unit testing", &quality.unit_testing),
        ("integration testing", &quality.integration_testing),
        ("component testing", &quality.component_testing),
        ("api integration testing", &quality.api_integration_testing),
        ("user journey testing", &quality.user_journey_testing),
    ] {
        let trend: Vec<f64> = metric.trend.iter().map(|v| f64::from(*v)).collect();
        out.push_str(&format!(
            "  {label:<24} coverage {:>3}%  pass rate {:>5.1}%  {}\n",
            metric.coverage,
            metric.pass_rate,
            sparkline(&trend, zoom),
        ));
        if let Some(rollbacks) = metric.rollbacks {
            out.push_str(&format!("  {:<24} rollbacks {rollbacks}\n", ""));
        }
    }
    out.push_str(&format!(
        "  defect slippage ratio    {:>5.1}   {}\n",
        quality.defect_slippage_ratio.value,
        sparkline(&quality.defect_slippage_ratio.trend, zoom),
    ));
    let defects: Vec<f64> = quality
        .defects_slipped_to_production
        .trend
        .iter()
        .map(|v| f64::from(*v))
        .collect();
    out.push_str(&format!(
        "  defects in production    {:>5}   {}\n",
        quality.defects_slipped_to_production.value,
        sparkline(&defects, zoom),
    ));
    let incidents: Vec<f64> = quality
        .production_incidents
        .trend
        .iter()
        .map(|v| f64::from(*v))
        .collect();
    out.push_str(&format!(
        "  production incidents     {:>5}   {}\n",
        quality.production_incidents.value,
        sparkline(&incidents, zoom),
    ));
    out
}

pub fn render_health(service: &ServiceRecord, health: &HealthReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== Health & Ops — {} (id {}) ==\n",
        service.name, service.id
    ));
    let p = &health.performance;
    out.push_str("performance:\n");
    out.push_str(&format!(
        "  avg response {}ms   p95 {}ms   p99 {}ms   throughput {}/s\n",
        p.avg_response_time, p.p95_latency, p.p99_latency, p.throughput
    ));
    out.push_str(&format!(
        "  concurrent capacity {}   autoscaling responsiveness {}%\n",
        p.concurrent_capacity, p.autoscaling_responsiveness
    ));
    let r = &health.reliability;
    out.push_str("reliability:\n");
    out.push_str(&format!(
        "  uptime {:.1}%   mttr {}m   mtbf {}h   error rate {:.1}%   success {:.1}%\n",
        r.uptime, r.mttr, r.mtbf, r.error_rate, r.success_rate
    ));
    let s = &health.security;
    out.push_str("security:\n");
    out.push_str(&format!(
        "  auth coverage {}%   patch lead time {}d   audit logging {}%\n",
        s.auth_coverage, s.security_patch_lead_time, s.audit_logging_completeness
    ));
    let d = &health.deployment;
    out.push_str("deployment:\n");
    out.push_str(&format!(
        "  {}x/week   change failure {:.1}%   lead time {}h   rollback {}m   build+test {}m\n",
        d.deployment_frequency,
        d.change_failure_rate,
        d.lead_time_to_production,
        d.rollback_time,
        d.build_test_duration
    ));
    let o = &health.observability;
    out.push_str("observability:\n");
    out.push_str(&format!(
        "  trace completeness {}%   time to detect {}m\n",
        o.trace_completeness, o.time_to_detect
    ));
    out
}

pub fn render_release(service: &ServiceRecord, readiness: &ReleaseReadiness) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== Release Readiness — {} (id {}) ==\n",
        service.name, service.id
    ));
    let band = ReadinessBand::for_score(readiness.readiness_score);
    out.push_str(&format!(
        "readiness: {}  {}\n",
        gauge(readiness.readiness_score),
        band.label()
    ));
    out.push_str(&render_gates(&readiness.quality_gates));
    let d = &readiness.deployment_metrics;
    out.push_str("deployment:\n");
    out.push_str(&format!(
        "  last deployment {}   frequency {}   rollback rate {}   change failure {}\n",
        d.last_deployment, d.deployment_frequency, d.rollback_rate, d.change_failure_rate
    ));
    out
}

fn render_gates(gates: &QualityGates) -> String {
    let mut out = String::new();
    out.push_str(&format!("quality gates ({}/5):\n", gates.passed()));
    out.push_str(&gate_line("unit test coverage", gates.unit_test_coverage));
    out.push('\n');
    out.push_str(&gate_line(
        "integration test coverage",
        gates.integration_test_coverage,
    ));
    out.push('\n');
    out.push_str(&gate_line("api test coverage", gates.api_test_coverage));
    out.push('\n');
    out.push_str(&gate_line("security scan", gates.security_scan));
    out.push('\n');
    out.push_str(&gate_line("performance test", gates.performance_test));
    out.push('\n');
    out
}

pub fn render_service_row(service: &ServiceRecord) -> String {
    format!(
        "{:>2}. {:<22} {}  {:<8} dir {:<14} cov {:>3}%  {}ms avg  {:.1}% uptime\n",
        service.id.value(),
        service.name,
        status_glyph(service.status),
        service.status.as_str(),
        service.director,
        service.coverage,
        service.avg_response_time,
        service.uptime,
    )
}
