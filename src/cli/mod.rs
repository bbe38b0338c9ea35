//! CLI interface for tcg-forecast
//!
//! Provides subcommands for:
//! - `analyze`: Look up cards in the catalog and forecast their price
//! - `simulate`: Forecast from hand-entered card details, no network
//! - `config`: Show the effective configuration

mod analyze;
mod simulate;

pub use analyze::AnalyzeArgs;
pub use simulate::SimulateArgs;

use crate::analysis::AnalysisReport;
use crate::config::Config;
use crate::history::VolatilityFactor;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tcg-forecast")]
#[command(about = "Reconstruct a trading card's price history and forecast its 30-day trend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up cards by name and forecast their price
    Analyze(AnalyzeArgs),
    /// Forecast from hand-entered card details
    Simulate(SimulateArgs),
    /// Show the effective configuration
    Config,
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Output options shared by the analysis commands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print every reconstructed and projected point (table format)
    #[arg(long)]
    pub show_series: bool,
}

impl OutputArgs {
    pub fn print(&self, report: &AnalysisReport) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Table => print!("{}", report.render_table(self.show_series)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        }
        Ok(())
    }
}

/// Volatility from the command line, or the configured default
pub(crate) fn volatility_or_default(
    arg: Option<VolatilityFactor>,
    config: &Config,
) -> anyhow::Result<VolatilityFactor> {
    match arg {
        Some(v) => Ok(v),
        None => Ok(VolatilityFactor::new(config.forecast.default_volatility)?),
    }
}
