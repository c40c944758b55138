mod constellation;
mod controller;
mod projection;
#[cfg(test)]
mod test_support;
mod view;
mod web;

use askama::Template;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::constellation::{limits, ConstellationRequest};
use crate::controller::{Controller, GenerationClient};
use crate::view::{render_text_table, DiagramSvg};
use crate::web::config::default_service_url;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "constellation-builder")]
#[command(about = "Build and visualise satellite constellations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the operator web interface
    Serve {
        #[arg(short, long, default_value = "config.yaml")]
        config: String,
        /// Override the generation service URL from the config file
        #[arg(long)]
        service_url: Option<String>,
    },
    /// Submit one request and print the result
    Build {
        #[command(flatten)]
        params: BuildParams,
        #[arg(long, default_value_t = default_service_url())]
        service_url: String,
        /// Also write the diagram to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Check that the generation service is reachable
    Health {
        #[arg(long, default_value_t = default_service_url())]
        service_url: String,
    },
}

#[derive(Args)]
struct BuildParams {
    #[arg(long, default_value = "LEO-Net")]
    name: String,
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(limits::MIN_PLANES as i64..))]
    planes: u32,
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(limits::MIN_SATS_PER_PLANE as i64..))]
    sats_per_plane: u32,
    #[arg(long, default_value_t = 550.0, value_parser = parse_altitude)]
    altitude_km: f64,
    #[arg(long, default_value_t = 53.0, value_parser = parse_inclination)]
    inclination_deg: f64,
}

impl From<BuildParams> for ConstellationRequest {
    fn from(p: BuildParams) -> Self {
        ConstellationRequest {
            name: p.name,
            planes: p.planes,
            sats_per_plane: p.sats_per_plane,
            altitude_km: p.altitude_km,
            inclination_deg: p.inclination_deg,
        }
    }
}

fn parse_altitude(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if value >= limits::MIN_ALTITUDE_KM {
        Ok(value)
    } else {
        Err(format!("must be at least {} km", limits::MIN_ALTITUDE_KM))
    }
}

fn parse_inclination(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (limits::MIN_INCLINATION_DEG..=limits::MAX_INCLINATION_DEG).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "must be between {} and {} degrees",
            limits::MIN_INCLINATION_DEG,
            limits::MAX_INCLINATION_DEG
        ))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            service_url,
        } => serve(&config, service_url).await,
        Commands::Build {
            params,
            service_url,
            svg,
        } => build(params.into(), &service_url, svg).await,
        Commands::Health { service_url } => health(&service_url).await,
    }
}

async fn serve(path: &str, service_url: Option<String>) -> ExitCode {
    let mut config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = service_url {
        config.service.url = url;
    }

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn build(request: ConstellationRequest, service_url: &str, svg: Option<PathBuf>) -> ExitCode {
    let client = match GenerationClient::new(service_url, None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error creating client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut controller = Controller::new(request.clone());
    let ticket = match controller.submit(request) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let outcome = client.generate(&ticket.request).await;
    controller.complete(ticket.sequence, outcome);

    let page = view::compose(controller.state());
    if let Some(error) = page.error {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }
    let Some(result) = page.result else {
        return ExitCode::FAILURE;
    };

    println!("{}", result.heading);
    print!("{}", render_text_table(&result.rows));

    if let Some(path) = svg {
        let Some(diagram) = result.diagram else {
            eprintln!("No satellites to draw, {} not written", path.display());
            return ExitCode::SUCCESS;
        };
        let written = DiagramSvg::new(&diagram)
            .render()
            .map_err(|e| e.to_string())
            .and_then(|svg| std::fs::write(&path, svg).map_err(|e| e.to_string()));
        if let Err(e) = written {
            eprintln!("Error writing {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        println!("Diagram written to {}", path.display());
    }

    ExitCode::SUCCESS
}

async fn health(service_url: &str) -> ExitCode {
    let result = match GenerationClient::new(service_url, None) {
        Ok(client) => client.health().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            println!("Generation service at {} is healthy", service_url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Generation service at {} is unavailable: {}", service_url, e);
            ExitCode::FAILURE
        }
    }
}
