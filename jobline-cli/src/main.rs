//! Jobline CLI
//!
//! Command-line interface for the Jobline job board: browse and filter
//! openings, post jobs, and manage jobseeker and company profiles.

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobline")]
#[command(about = "Jobline job board CLI", long_about = None)]
struct Cli {
    /// Backend API URL
    #[arg(long, env = "JOBLINE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Jobs shown per page when browsing
    #[arg(long, env = "JOBLINE_PAGE_SIZE", default_value = "5")]
    page_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobline_cli=info,jobline_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        page_size: cli.page_size,
    };

    handle_command(cli.command, &config).await
}
