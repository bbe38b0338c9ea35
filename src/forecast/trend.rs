//! Linear trend forecaster
//!
//! price = a + b*t, with t = 0, 1, ..., n-1 the ordinal position of each
//! point. Calendar gaps are ignored and every point carries equal weight.

use super::{ForecastError, ForecastResult, Trend};
use crate::history::PricePoint;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Ordinary least-squares line over an ordinal index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearFit {
    /// Fit `y[t] = intercept + slope * t`
    pub fn fit(values: &[f64]) -> Result<Self, ForecastError> {
        if values.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        let n = values.len() as f64;
        let t_mean = (n - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n;

        let mut num = 0.0;
        let mut den = 0.0;
        for (t, &y) in values.iter().enumerate() {
            let dt = t as f64 - t_mean;
            num += dt * (y - y_mean);
            den += dt * dt;
        }

        if den == 0.0 {
            return Err(ForecastError::DegenerateSeries(values.len()));
        }

        let slope = num / den;
        Ok(Self {
            intercept: y_mean - slope * t_mean,
            slope,
        })
    }

    /// Evaluate the line at ordinal `t`
    pub fn at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Extrapolates a fitted trend a fixed number of days ahead
#[derive(Debug, Clone)]
pub struct TrendForecaster {
    horizon_days: u32,
}

impl TrendForecaster {
    pub fn new(horizon_days: u32) -> Self {
        Self { horizon_days }
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Forecast at the configured horizon
    pub fn forecast(&self, series: &[PricePoint]) -> Result<ForecastResult, ForecastError> {
        forecast(series, self.horizon_days)
    }

    /// Fitted line at each day between the last point and the configured horizon
    pub fn project(&self, series: &[PricePoint]) -> Result<Vec<PricePoint>, ForecastError> {
        project(series, self.horizon_days)
    }
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self::new(30)
    }
}

/// The date `horizon_days` after `from`
pub fn horizon_date(from: NaiveDate, horizon_days: u32) -> Result<NaiveDate, ForecastError> {
    if horizon_days == 0 {
        return Err(ForecastError::InvalidHorizon);
    }
    from.checked_add_signed(Duration::days(horizon_days as i64))
        .ok_or(ForecastError::HorizonOutOfRange(horizon_days))
}

/// Fit the series and evaluate the trend `horizon_days` past its last point
pub fn forecast(series: &[PricePoint], horizon_days: u32) -> Result<ForecastResult, ForecastError> {
    let last = series.last().ok_or(ForecastError::EmptySeries)?;
    let target = horizon_date(last.date, horizon_days)?;
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let fit = LinearFit::fit(&prices)?;

    let t = (series.len() - 1) as f64 + horizon_days as f64;
    let predicted_price = fit.at(t);
    let current_price = last.price;
    let delta_absolute = predicted_price - current_price;
    let delta_percent = delta_absolute / current_price * 100.0;

    Ok(ForecastResult {
        horizon_date: target,
        predicted_price,
        current_price,
        delta_absolute,
        delta_percent,
        fit,
        trend: Trend::from_delta(delta_absolute),
    })
}

/// The fitted trend evaluated at each of the `horizon_days` days after the last point
pub fn project(series: &[PricePoint], horizon_days: u32) -> Result<Vec<PricePoint>, ForecastError> {
    let last = series.last().ok_or(ForecastError::EmptySeries)?;
    horizon_date(last.date, horizon_days)?;
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let fit = LinearFit::fit(&prices)?;
    let last_t = (series.len() - 1) as f64;

    Ok((1..=horizon_days)
        .map(|d| {
            PricePoint::new(
                last.date + Duration::days(d as i64),
                fit.at(last_t + d as f64),
            )
        })
        .collect())
}
