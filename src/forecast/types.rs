//! Forecast types

use super::LinearFit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Forecast errors
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("Cannot forecast an empty series")]
    EmptySeries,

    #[error("Series of {0} point(s) has no spread in time; regression undefined")]
    DegenerateSeries(usize),

    #[error("Forecast horizon must be at least one day")]
    InvalidHorizon,

    #[error("Forecast horizon of {0} days is past the last representable date")]
    HorizonOutOfRange(u32),
}

/// Direction of the forecast relative to the current price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Forecast above the current price
    Bullish,
    /// Forecast at or below the current price
    Bearish,
}

impl Trend {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Trend::Bullish
        } else {
            Trend::Bearish
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Bullish => write!(f, "bullish"),
            Trend::Bearish => write!(f, "bearish"),
        }
    }
}

/// Point forecast at the horizon date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Date the forecast applies to
    pub horizon_date: NaiveDate,
    /// Fitted line evaluated at the horizon
    pub predicted_price: f64,
    /// Price of the last series point
    pub current_price: f64,
    /// `predicted_price - current_price`
    pub delta_absolute: f64,
    /// Delta as a percentage of the current price
    pub delta_percent: f64,
    /// The fitted trend line
    pub fit: LinearFit,
    pub trend: Trend,
}
