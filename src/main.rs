use clap::Parser;
use tcg_forecast::cli::{Cli, Commands};
use tcg_forecast::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).unwrap_or_default()
    });

    // Initialize telemetry
    tcg_forecast::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::debug!(queries = args.queries.len(), "Starting catalog analysis");
            args.execute(&config).await?;
        }
        Commands::Simulate(args) => {
            tracing::debug!(card = %args.name, "Starting manual analysis");
            args.execute(&config).await?;
        }
        Commands::Config => {
            let mut shown = config.clone();
            if shown.catalog.api_key.is_some() {
                shown.catalog.api_key = Some("********".to_string());
            }
            println!("Current configuration:");
            println!("{}", toml::to_string_pretty(&shown)?);
        }
    }

    Ok(())
}
