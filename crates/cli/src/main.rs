//! Wellness CLI
//!
//! A command-line tool for submitting wellness questionnaires, computing
//! BMI and checking on the wellness prediction service.

mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{bmi, predict, status};

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Wellness prediction CLI
#[derive(Parser)]
#[command(name = "wellness")]
#[command(author, version, about = "CLI for the Wellness prediction service", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via WELLNESS_API_URL or the config file)
    #[arg(long, env = "WELLNESS_API_URL")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a questionnaire and show recommendations
    Predict(predict::PredictArgs),

    /// Compute body-mass index
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Compute locally instead of calling the service
        #[arg(long)]
        local: bool,
    },

    /// Show service health and readiness
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = config::Config::load()?;
    let api_url = cli
        .api_url
        .clone()
        .or(file_config.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    if cli.verbose {
        output::print_info(&format!("Using API at {}", api_url));
    }

    let client = client::ApiClient::new(&api_url)?;

    match cli.command {
        Commands::Predict(args) => {
            predict::run(&client, args, cli.format).await?;
        }
        Commands::Bmi {
            weight,
            height,
            local,
        } => {
            bmi::run(&client, weight, height, local, cli.format).await?;
        }
        Commands::Status => {
            status::show_status(&client, cli.format).await?;
        }
    }

    Ok(())
}
