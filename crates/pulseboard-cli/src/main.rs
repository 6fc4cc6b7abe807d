#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use pulseboard_core::canonical;
use pulseboard_core::ExitCode;
use pulseboard_model::ServiceFilter;
use serde::Serialize;
use std::process::ExitCode as ProcessExitCode;

mod client;
mod render;

use client::{ApiClient, ClientError};

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(about = "Pulseboard dashboard terminal client")]
struct Cli {
    /// Base URL of the dashboard API server.
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    server_url: String,
    /// Print the raw API payload as canonical JSON instead of rendering.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fleet summary, status breakdown, coverage bands, top services.
    Overview {
        #[arg(long)]
        service_name: Option<String>,
        #[arg(long)]
        director: Option<String>,
    },
    /// Quality metrics with trend sparklines for one service.
    Quality {
        #[arg(long, default_value_t = 1)]
        service_id: u32,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        zoom: u8,
    },
    /// Health and ops metrics for one service.
    Health {
        #[arg(long, default_value_t = 1)]
        service_id: u32,
    },
    /// Quality gates, deployment metrics, and readiness score.
    Release {
        #[arg(long)]
        service_id: Option<u32>,
        #[arg(long)]
        service_name: Option<String>,
        #[arg(long)]
        director: Option<String>,
    },
    /// Full detail for a single service.
    Service { id: u32 },
    /// Distinct director names across the fleet.
    Directors,
}

fn emit_json<T: Serialize>(payload: &T) -> Result<(), ClientError> {
    let bytes =
        canonical::stable_json_bytes(payload).map_err(|e| ClientError::Encode(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| ClientError::Encode(e.to_string()))?;
    println!("{text}");
    Ok(())
}

async fn run_overview(
    client: &ApiClient,
    json: bool,
    service_name: Option<String>,
    director: Option<String>,
) -> Result<(), ClientError> {
    let filter = ServiceFilter::new(service_name, director);
    let (services, overview) =
        tokio::try_join!(client.services(&filter), client.overview())?;
    if json {
        emit_json(&overview)?;
        return Ok(());
    }
    let bands = pulseboard_model::CoverageBands::for_services(&services);
    print!(
        "{}",
        render::render_overview(&services, &overview.top_services, &overview.summary, bands)
    );
    Ok(())
}

async fn run_quality(
    client: &ApiClient,
    json: bool,
    service_id: u32,
    zoom: u8,
) -> Result<(), ClientError> {
    let (quality, directors) = tokio::try_join!(client.quality(service_id), client.directors())?;
    if json {
        emit_json(&quality)?;
        return Ok(());
    }
    print!(
        "{}",
        render::render_quality(&quality.service, &quality.quality, zoom)
    );
    println!("directors: {}", directors.join(", "));
    Ok(())
}

async fn run_health(client: &ApiClient, json: bool, service_id: u32) -> Result<(), ClientError> {
    let health = client.health(service_id).await?;
    if json {
        emit_json(&health)?;
        return Ok(());
    }
    print!("{}", render::render_health(&health.service, &health.health));
    Ok(())
}

async fn run_release(
    client: &ApiClient,
    json: bool,
    service_id: Option<u32>,
    service_name: Option<String>,
    director: Option<String>,
) -> Result<(), ClientError> {
    let filter = ServiceFilter::new(service_name, director);
    let (services, directors) = tokio::try_join!(client.services(&filter), client.directors())?;
    let id = match service_id {
        Some(id) => id,
        None => match services.first() {
            Some(service) => service.id.value(),
            None => {
                println!("no services match the filter (directors: {})", directors.join(", "));
                return Ok(());
            }
        },
    };
    let readiness = client.release_readiness(id).await?;
    if json {
        emit_json(&readiness)?;
        return Ok(());
    }
    for service in &services {
        print!("{}", render::render_service_row(service));
    }
    print!(
        "{}",
        render::render_release(&readiness.service, &readiness.release_readiness)
    );
    Ok(())
}

async fn run_service(client: &ApiClient, json: bool, id: u32) -> Result<(), ClientError> {
    let (service, quality, health, readiness) = tokio::try_join!(
        client.service(id),
        client.quality(id),
        client.health(id),
        client.release_readiness(id),
    )?;
    if json {
        let payload = serde_json::json!({
            "service": service,
            "quality": quality.quality,
            "health": health.health,
            "releaseReadiness": readiness.release_readiness,
        });
        emit_json(&payload)?;
        return Ok(());
    }
    print!("{}", render::render_service_row(&service));
    print!("{}", render::render_quality(&service, &quality.quality, 1));
    print!("{}", render::render_health(&service, &health.health));
    print!(
        "{}",
        render::render_release(&service, &readiness.release_readiness)
    );
    Ok(())
}

async fn run_directors(client: &ApiClient, json: bool) -> Result<(), ClientError> {
    let directors = client.directors().await?;
    if json {
        emit_json(&directors)?;
        return Ok(());
    }
    for director in directors {
        println!("{director}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.server_url);

    let result = match cli.command {
        Commands::Overview {
            service_name,
            director,
        } => run_overview(&client, cli.json, service_name, director).await,
        Commands::Quality { service_id, zoom } => {
            run_quality(&client, cli.json, service_id, zoom).await
        }
        Commands::Health { service_id } => run_health(&client, cli.json, service_id).await,
        Commands::Release {
            service_id,
            service_name,
            director,
        } => run_release(&client, cli.json, service_id, service_name, director).await,
        Commands::Service { id } => run_service(&client, cli.json, id).await,
        Commands::Directors => run_directors(&client, cli.json).await,
    };

    match result {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            eprintln!("pulseboard: {err}");
            let code = match err {
                ClientError::Api { .. } => ExitCode::Usage,
                _ => ExitCode::DependencyFailure,
            };
            ProcessExitCode::from(code as u8)
        }
    }
}
