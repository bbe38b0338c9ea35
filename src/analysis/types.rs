//! Analysis types

use crate::forecast::ForecastError;
use crate::history::HistoryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the reconstruction or forecast core
///
/// These are caller contract violations; the analysis never recovers from them.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

/// Card details entered by hand instead of looked up
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualCard {
    pub name: String,
    /// Last sold price; the configured fallback is used when absent
    pub price: Option<f64>,
    /// Issue date as `YYYY/MM/DD`
    pub issue_date: Option<String>,
}

/// Identifying details of the analysed card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub name: String,
    pub set_name: Option<String>,
    pub image_url: Option<String>,
}

/// A soft failure shown to the user alongside an otherwise complete result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The card has no market price; the fallback was used
    PriceUnavailable { fallback: f64 },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::PriceUnavailable { fallback } => {
                write!(f, "Price unavailable, using default of {:.2}", fallback)
            }
        }
    }
}
