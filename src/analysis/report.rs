//! Analysis report and its text rendering

use super::{CardSummary, Notice};
use crate::catalog::Resolved;
use crate::forecast::{ForecastResult, Trend};
use crate::history::PricePoint;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;
use uuid::Uuid;

/// How the history is produced, shown next to every result
pub const METHOD_EXPLANATION: &str = "This price history is reconstructed, not recorded. \
The curve runs from a synthetic launch price (60% of today's market price by default) \
up to today's price, with random day-to-day noise scaled by the chosen volatility, and its \
last day is pinned to the real current price. A linear regression over that curve is \
then extended over the forecast horizon (30 days by default). The forecast shows the trend of the reconstruction and is \
not financial advice.";

/// Result of a lookup-driven analysis
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Ready(Box<AnalysisReport>),
    NotFound { query: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Ready(report) => Some(report),
            AnalysisOutcome::NotFound { .. } => None,
        }
    }
}

/// Everything the presentation layer needs for one card
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub card: CardSummary,
    pub as_of: NaiveDate,
    pub volatility: f64,
    /// Current price and whether it came from the catalog
    pub price: Resolved<f64>,
    /// Issue date and whether it came from the catalog
    pub issue_date: Resolved<NaiveDate>,
    pub current_price: Decimal,
    pub predicted_price: Decimal,
    pub delta_absolute: Decimal,
    pub delta_percent: Decimal,
    pub trend: Trend,
    pub horizon_date: NaiveDate,
    pub forecast: ForecastResult,
    pub series: Vec<PricePoint>,
    pub projection: Vec<PricePoint>,
    pub explanation: &'static str,
    pub notices: Vec<Notice>,
}

/// Round a price to cents for display
///
/// Values outside the decimal range clamp to `Decimal::MAX`/`Decimal::MIN`
/// and NaN shows as zero.
pub fn money(value: f64) -> Decimal {
    match Decimal::try_from(value) {
        Ok(d) => d.round_dp(2),
        Err(e) => {
            let clamped = if value.is_nan() {
                Decimal::ZERO
            } else if value > 0.0 {
                Decimal::MAX
            } else {
                Decimal::MIN
            };
            tracing::warn!(value, clamped = %clamped, error = %e, "Price outside decimal range");
            clamped
        }
    }
}

impl AnalysisReport {
    /// Render a human-readable summary
    pub fn render_table(&self, show_series: bool) -> String {
        let mut out = String::new();
        let _ = self.write_table(&mut out, show_series);
        out
    }

    fn write_table(&self, out: &mut String, show_series: bool) -> std::fmt::Result {
        writeln!(out, "Analysis: {}", self.card.name)?;
        if let Some(ref set) = self.card.set_name {
            writeln!(out, "  Set:            {}", set)?;
        }
        if let Some(ref url) = self.card.image_url {
            writeln!(out, "  Image:          {}", url)?;
        }
        writeln!(
            out,
            "  Issue date:     {} ({})",
            self.issue_date.value().format("%Y-%m-%d"),
            self.issue_date.source()
        )?;
        writeln!(
            out,
            "  Current price:  {} ({})",
            self.current_price,
            self.price.source()
        )?;
        writeln!(out, "  Volatility:     {}", self.volatility)?;
        writeln!(
            out,
            "  History:        {} days, {} to {}",
            self.series.len(),
            self.series.first().map(|p| p.date).unwrap_or(self.as_of),
            self.as_of
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "Forecast for {} ({} days ahead)",
            self.horizon_date,
            self.projection.len()
        )?;
        writeln!(out, "  Predicted price: {}", self.predicted_price)?;
        writeln!(
            out,
            "  Change:          {:+} ({:+}%)",
            self.delta_absolute, self.delta_percent
        )?;
        writeln!(out, "  Trend:           {}", self.trend)?;

        for notice in &self.notices {
            writeln!(out, "  ! {}", notice)?;
        }

        if show_series {
            writeln!(out)?;
            writeln!(out, "{:<12} {:>12}", "date", "price")?;
            for point in &self.series {
                writeln!(out, "{:<12} {:>12}", point.date.to_string(), money(point.price))?;
            }
            for point in &self.projection {
                writeln!(out, "{:<12} {:>12} *", point.date.to_string(), money(point.price))?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", METHOD_EXPLANATION)?;
        Ok(())
    }
}
