//! Geospatial upload-and-publish service.
//!
//! Accepts raster (GeoTIFF) and vector (shapefile) uploads, stages
//! them locally, and publishes them as layers on a GeoServer instance
//! via its REST management API.

mod server;
mod staging;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geoserver_rest::{GeoServerClient, GeoServerConfig};
use publisher::PublishWorkflow;

use server::ServerState;

#[derive(Parser, Debug)]
#[command(name = "upload-api")]
#[command(about = "Upload geospatial data and publish it to GeoServer")]
struct Args {
    /// Listen address
    #[arg(short, long, env = "LISTEN_ADDR", default_value = "0.0.0.0:5000")]
    listen: String,

    /// Root directory for staged uploads
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting upload API service");

    // Staging area must exist before the first request
    tokio::fs::create_dir_all(&args.upload_dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", args.upload_dir.display()))?;

    // GeoServer connection from environment
    let geoserver_config = GeoServerConfig::from_env();
    info!(
        geoserver = %geoserver_config.base_url,
        workspace = %geoserver_config.workspace,
        "Publishing to GeoServer"
    );

    let client =
        GeoServerClient::new(geoserver_config.clone()).context("Failed to create GeoServer client")?;
    let workflow = PublishWorkflow::new(client, geoserver_config);

    let state = Arc::new(ServerState {
        workflow,
        upload_dir: args.upload_dir,
    });

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", args.listen))?;

    server::start_server(state, addr).await
}
