//! Analyze command implementation

use super::{volatility_or_default, OutputArgs};
use crate::analysis::{rng_from_seed, today, AnalysisOutcome, Analyzer};
use crate::catalog::{CachedCatalog, PokemonTcgClient, PokemonTcgConfig};
use crate::config::Config;
use crate::history::VolatilityFactor;
use chrono::NaiveDate;
use clap::Args;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Card names to search for
    #[arg(required = true)]
    pub queries: Vec<String>,

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

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let analyzer = Analyzer::from_config(config)?;
        let volatility = volatility_or_default(self.volatility, config)?;
        let as_of = self.as_of.unwrap_or_else(today);
        let mut rng = rng_from_seed(self.seed.or(config.reconstruction.seed));

        let client = PokemonTcgClient::with_config(PokemonTcgConfig::from(&config.catalog))?;
        let catalog = CachedCatalog::new(client);

        for query in &self.queries {
            tracing::info!(query = %query, "Analyzing card");

            match analyzer
                .analyze_query(&catalog, query, volatility, as_of, &mut rng)
                .await?
            {
                AnalysisOutcome::Ready(report) => self.output.print(&report)?,
                AnalysisOutcome::NotFound { query } => {
                    println!(
                        "Card not found: \"{}\". Check the spelling or try the English card name.",
                        query
                    );
                }
            }
        }

        Ok(())
    }
}
