//! Latency recording

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Card catalog search (including cache hits)
    CatalogLookup,
    /// Price history reconstruction
    Reconstruction,
    /// Trend fit and extrapolation
    Forecast,
}

impl LatencyMetric {
    pub fn name(&self) -> &'static str {
        match self {
            LatencyMetric::CatalogLookup => "tcgforecast_catalog_lookup_latency_us",
            LatencyMetric::Reconstruction => "tcgforecast_reconstruction_latency_us",
            LatencyMetric::Forecast => "tcgforecast_forecast_latency_us",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    tracing::debug!(
        metric = metric.name(),
        value_us = duration.as_micros() as u64,
        "Recording latency"
    );
}
