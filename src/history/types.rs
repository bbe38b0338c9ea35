//! History types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Price history errors
#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    #[error("Invalid price anchor: {0} (must be finite and positive)")]
    InvalidAnchor(f64),

    #[error("Invalid volatility: {0} (must be in (0, 1])")]
    InvalidVolatility(f64),

    #[error("Invalid reconstruction config: {0}")]
    InvalidConfig(String),
}

/// The two real data points a reconstructed series must honour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPriceAnchor {
    /// Card issue (release) date
    pub issue_date: NaiveDate,
    /// Current observed market price
    pub current_price: f64,
    /// Date the current price was observed; the series ends here
    pub as_of: NaiveDate,
}

impl CardPriceAnchor {
    /// Create a new anchor
    pub fn new(issue_date: NaiveDate, current_price: f64, as_of: NaiveDate) -> Self {
        Self {
            issue_date,
            current_price,
            as_of,
        }
    }

    /// Whole days between issue and observation (negative if issued after `as_of`)
    pub fn age_days(&self) -> i64 {
        (self.as_of - self.issue_date).num_days()
    }

    /// Check the price anchor is usable
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.current_price.is_finite() && self.current_price > 0.0 {
            Ok(())
        } else {
            Err(HistoryError::InvalidAnchor(self.current_price))
        }
    }
}

/// Noise amplitude multiplier, constrained to (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct VolatilityFactor(f64);

impl VolatilityFactor {
    /// Validate and wrap a raw volatility value
    pub fn new(value: f64) -> Result<Self, HistoryError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(HistoryError::InvalidVolatility(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::str::FromStr for VolatilityFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.parse().map_err(|e| format!("{}: {}", s, e))?;
        Self::new(value).map_err(|e| e.to_string())
    }
}

/// A single day of reconstructed history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}
