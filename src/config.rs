//! Configuration types for tcg-forecast

use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub reconstruction: ReconstructionConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Card catalog lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL of the card catalog API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional API key sent as `X-Api-Key`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Maximum number of cards returned per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Price used when a card record carries no market price
    #[serde(default = "default_fallback_price")]
    pub fallback_price: f64,
}

fn default_base_url() -> String {
    "https://api.pokemontcg.io/v2".to_string()
}
fn default_page_size() -> u32 {
    10
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_fallback_price() -> f64 {
    50.0
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            fallback_price: default_fallback_price(),
        }
    }
}

/// Price history reconstruction configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReconstructionConfig {
    /// Synthetic launch price as a fraction of the current price
    #[serde(default = "default_launch_price_ratio")]
    pub launch_price_ratio: f64,

    /// Noise standard deviation as a fraction of `current_price * volatility`
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f64,

    /// Shortest history generated, even for very young cards (days)
    #[serde(default = "default_min_history_days")]
    pub min_history_days: u32,

    /// Longest history generated (days)
    #[serde(default = "default_max_lookback_days")]
    pub max_lookback_days: u32,

    /// Assumed card age when the issue date is missing or malformed (days)
    #[serde(default = "default_lookback_days")]
    pub default_lookback_days: u32,

    /// Fixed RNG seed; fresh entropy per analysis when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_launch_price_ratio() -> f64 {
    0.6
}
fn default_noise_scale() -> f64 {
    0.05
}
fn default_min_history_days() -> u32 {
    30
}
fn default_max_lookback_days() -> u32 {
    730
}
fn default_lookback_days() -> u32 {
    365
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            launch_price_ratio: default_launch_price_ratio(),
            noise_scale: default_noise_scale(),
            min_history_days: default_min_history_days(),
            max_lookback_days: default_max_lookback_days(),
            default_lookback_days: default_lookback_days(),
            seed: None,
        }
    }
}

/// Trend forecast configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastConfig {
    /// Days ahead of the last reconstructed point to forecast
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    /// Volatility factor used when the caller does not supply one
    #[serde(default = "default_volatility")]
    pub default_volatility: f64,
}

fn default_horizon_days() -> u32 {
    30
}
fn default_volatility() -> f64 {
    0.3
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            default_volatility: default_volatility(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
