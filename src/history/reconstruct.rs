//! Series reconstruction
//!
//! The reconstructed history is a linear ramp from a synthetic launch price
//! (`current_price * launch_price_ratio`) up to the current price, with
//! independent Gaussian noise of standard deviation
//! `current_price * volatility * noise_scale` added to each day. The last
//! day is then overwritten with the current price so the series always
//! ends on the observed anchor.

use super::{CardPriceAnchor, HistoryError, PricePoint, VolatilityFactor};
use crate::config::ReconstructionConfig;
use chrono::Duration;
use rand::Rng;
use rand_distr::StandardNormal;

/// Synthetic price history generator
#[derive(Debug, Clone)]
pub struct SeriesReconstructor {
    config: ReconstructionConfig,
}

impl SeriesReconstructor {
    /// Create a reconstructor, rejecting tunables that break the output guarantees
    pub fn new(config: ReconstructionConfig) -> Result<Self, HistoryError> {
        let ratio = config.launch_price_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(HistoryError::InvalidConfig(format!(
                "launch_price_ratio must be in (0, 1), got {}",
                ratio
            )));
        }
        if !config.noise_scale.is_finite() || config.noise_scale < 0.0 {
            return Err(HistoryError::InvalidConfig(format!(
                "noise_scale must be finite and non-negative, got {}",
                config.noise_scale
            )));
        }
        if config.min_history_days < 2 {
            return Err(HistoryError::InvalidConfig(format!(
                "min_history_days must be at least 2, got {}",
                config.min_history_days
            )));
        }
        if config.max_lookback_days < config.min_history_days {
            return Err(HistoryError::InvalidConfig(format!(
                "max_lookback_days ({}) is below min_history_days ({})",
                config.max_lookback_days, config.min_history_days
            )));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &ReconstructionConfig {
        &self.config
    }

    /// Number of days the series covers for a card of the given age
    pub fn display_days(&self, age_days: i64) -> usize {
        age_days.clamp(
            self.config.min_history_days as i64,
            self.config.max_lookback_days as i64,
        ) as usize
    }

    /// Reconstruct a daily price series ending on `anchor.as_of`
    ///
    /// The returned series is oldest first, one point per calendar day, and
    /// its last price equals `anchor.current_price` exactly.
    pub fn reconstruct<R: Rng + ?Sized>(
        &self,
        anchor: &CardPriceAnchor,
        volatility: f64,
        rng: &mut R,
    ) -> Result<Vec<PricePoint>, HistoryError> {
        anchor.validate()?;
        let volatility = VolatilityFactor::new(volatility)?;

        let n = self.display_days(anchor.age_days());
        let current = anchor.current_price;
        let launch = current * self.config.launch_price_ratio;
        let step = (current - launch) / (n - 1) as f64;
        let sigma = current * volatility.value() * self.config.noise_scale;

        let mut series: Vec<PricePoint> = (0..n)
            .map(|i| {
                let date = anchor.as_of - Duration::days((n - 1 - i) as i64);
                let noise: f64 = rng.sample::<f64, _>(StandardNormal) * sigma;
                PricePoint::new(date, launch + step * i as f64 + noise)
            })
            .collect();

        if let Some(last) = series.last_mut() {
            last.price = current;
        }

        tracing::debug!(
            age_days = anchor.age_days(),
            points = n,
            launch_price = launch,
            current_price = current,
            sigma = sigma,
            "Reconstructed price history"
        );

        Ok(series)
    }
}

impl Default for SeriesReconstructor {
    fn default() -> Self {
        Self {
            config: ReconstructionConfig::default(),
        }
    }
}
