//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format risk as percentage
pub fn format_risk(risk: f64) -> String {
    format!("{:.0}%", risk * 100.0)
}

/// Color risk: red above the high-risk threshold, yellow from 25%
pub fn color_risk(risk: f64) -> String {
    let formatted = format_risk(risk);
    if risk > wellness_core::predictor::risk::HIGH_RISK_THRESHOLD {
        formatted.red().bold().to_string()
    } else if risk >= 0.25 {
        formatted.yellow().to_string()
    } else {
        formatted.green().to_string()
    }
}

/// Color status based on value
pub fn color_status(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "healthy" | "ready" => status.green().to_string(),
        "degraded" => status.yellow().to_string(),
        "unhealthy" | "not ready" => status.red().to_string(),
        "underweight" | "overweight" => status.yellow().to_string(),
        "obese" => status.red().to_string(),
        _ => status.to_string(),
    }
}
