//! Trend forecast module
//!
//! Fits an ordinary least-squares line against the ordinal day index of a
//! price series and extrapolates it to a fixed horizon

mod trend;
mod types;

pub use trend::{forecast, horizon_date, project, LinearFit, TrendForecaster};
pub use types::{ForecastError, ForecastResult, Trend};
