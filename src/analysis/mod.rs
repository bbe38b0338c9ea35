//! Card analysis module
//!
//! Resolves the price and issue-date anchors for a card, reconstructs its
//! history, forecasts the trend and assembles the report

mod report;
mod types;

pub use report::{money, AnalysisOutcome, AnalysisReport, METHOD_EXPLANATION};
pub use types::{AnalysisError, CardSummary, ManualCard, Notice};

use crate::catalog::{
    resolve_issue_date, resolve_price, search_or_empty, CardCatalog, CardRecord, Resolved,
};
use crate::config::Config;
use crate::forecast::{horizon_date, TrendForecaster};
use crate::history::{CardPriceAnchor, SeriesReconstructor, VolatilityFactor};
use crate::telemetry::{record_latency, LatencyMetric};
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use uuid::Uuid;

/// Today's date in UTC, the default `as_of`
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Seeded generator when a seed is given, fresh entropy otherwise
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Runs reconstruction and forecasting for a single card
pub struct Analyzer {
    reconstructor: SeriesReconstructor,
    forecaster: TrendForecaster,
    fallback_price: f64,
}

impl Analyzer {
    pub fn new(
        reconstructor: SeriesReconstructor,
        forecaster: TrendForecaster,
        fallback_price: f64,
    ) -> Self {
        Self {
            reconstructor,
            forecaster,
            fallback_price,
        }
    }

    /// Build an analyzer from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        horizon_date(today(), config.forecast.horizon_days)?;
        Ok(Self::new(
            SeriesReconstructor::new(config.reconstruction.clone())?,
            TrendForecaster::new(config.forecast.horizon_days),
            config.catalog.fallback_price,
        ))
    }

    /// Look up a card by name and analyse the first match
    pub async fn analyze_query<C, R>(
        &self,
        catalog: &C,
        query: &str,
        volatility: VolatilityFactor,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<AnalysisOutcome, AnalysisError>
    where
        C: CardCatalog + ?Sized,
        R: Rng,
    {
        let started = Instant::now();
        let cards = search_or_empty(catalog, query).await;
        record_latency(LatencyMetric::CatalogLookup, started.elapsed());

        let Some(record) = cards.into_iter().next() else {
            tracing::info!(query = query, "Card not found");
            return Ok(AnalysisOutcome::NotFound {
                query: query.to_string(),
            });
        };

        let report = self.analyze_record(&record, volatility, as_of, rng)?;
        Ok(AnalysisOutcome::Ready(Box::new(report)))
    }

    /// Analyse a card record returned by the catalog
    pub fn analyze_record<R: Rng>(
        &self,
        record: &CardRecord,
        volatility: VolatilityFactor,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<AnalysisReport, AnalysisError> {
        let price = resolve_price(record, self.fallback_price);
        let issue_date = resolve_issue_date(
            record.issue_date.as_deref(),
            as_of,
            self.reconstructor.config().default_lookback_days,
        );
        let card = CardSummary {
            name: record.name.clone(),
            set_name: record.set_name.clone(),
            image_url: record.image_url.clone(),
        };

        self.build_report(card, price, issue_date, volatility, as_of, rng)
    }

    /// Analyse a card whose details were entered by hand
    pub fn analyze_manual<R: Rng>(
        &self,
        manual: &ManualCard,
        volatility: VolatilityFactor,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<AnalysisReport, AnalysisError> {
        let price = match manual.price {
            Some(p) => Resolved::Parsed(p),
            None => Resolved::Defaulted(self.fallback_price),
        };
        let issue_date = resolve_issue_date(
            manual.issue_date.as_deref(),
            as_of,
            self.reconstructor.config().default_lookback_days,
        );
        let card = CardSummary {
            name: manual.name.clone(),
            set_name: None,
            image_url: None,
        };

        self.build_report(card, price, issue_date, volatility, as_of, rng)
    }

    fn build_report<R: Rng>(
        &self,
        card: CardSummary,
        price: Resolved<f64>,
        issue_date: Resolved<NaiveDate>,
        volatility: VolatilityFactor,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<AnalysisReport, AnalysisError> {
        let mut notices = Vec::new();
        if price.is_defaulted() {
            tracing::warn!(card = %card.name, fallback = *price.value(), "Price unavailable, using default");
            notices.push(Notice::PriceUnavailable {
                fallback: *price.value(),
            });
        }
        if issue_date.is_defaulted() {
            tracing::info!(card = %card.name, assumed = %issue_date.value(), "Issue date unknown, using default lookback");
        }

        let anchor = CardPriceAnchor::new(*issue_date.value(), *price.value(), as_of);

        let started = Instant::now();
        let series = self
            .reconstructor
            .reconstruct(&anchor, volatility.value(), rng)?;
        record_latency(LatencyMetric::Reconstruction, started.elapsed());

        let started = Instant::now();
        let forecast = self.forecaster.forecast(&series)?;
        let projection = self.forecaster.project(&series)?;
        record_latency(LatencyMetric::Forecast, started.elapsed());

        tracing::info!(
            card = %card.name,
            points = series.len(),
            current_price = forecast.current_price,
            predicted_price = forecast.predicted_price,
            delta_percent = forecast.delta_percent,
            trend = %forecast.trend,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            card,
            as_of,
            volatility: volatility.value(),
            price,
            issue_date,
            current_price: money(forecast.current_price),
            predicted_price: money(forecast.predicted_price),
            delta_absolute: money(forecast.delta_absolute),
            delta_percent: money(forecast.delta_percent),
            trend: forecast.trend,
            horizon_date: forecast.horizon_date,
            forecast,
            series,
            projection,
            explanation: METHOD_EXPLANATION,
            notices,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(SeriesReconstructor::default(), TrendForecaster::default(), 50.0)
    }
}
