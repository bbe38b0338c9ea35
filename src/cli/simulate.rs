//! Simulate command implementation

use super::{volatility_or_default, OutputArgs};
use crate::analysis::{rng_from_seed, today, Analyzer, ManualCard};
use crate::config::Config;
use crate::history::VolatilityFactor;
use chrono::NaiveDate;
use clap::Args;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Card name
    #[arg(short, long)]
    pub name: String,

    /// Last sold price; the configured fallback is used when omitted
    #[arg(short, long)]
    pub price: Option<f64>,

    /// Card issue date (YYYY/MM/DD)
    #[arg(long)]
    pub issue_date: Option<String>,

    /// Market volatility in (0, 1]
    #[arg(short, long)]
    pub volatility: Option<VolatilityFactor>,

    /// RNG seed for a reproducible history
    #[arg(long)]
    pub seed: Option<u64>,

    /// Date the history ends on (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl SimulateArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let analyzer = Analyzer::from_config(config)?;
        let volatility = volatility_or_default(self.volatility, config)?;
        let as_of = self.as_of.unwrap_or_else(today);
        let mut rng = rng_from_seed(self.seed.or(config.reconstruction.seed));

        let manual = ManualCard {
            name: self.name.clone(),
            price: self.price,
            issue_date: self.issue_date.clone(),
        };

        let report = analyzer.analyze_manual(&manual, volatility, as_of, &mut rng)?;
        self.output.print(&report)
    }
}
