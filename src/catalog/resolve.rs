//! Anchor resolution from catalog records
//!
//! Price lookup walks `PRICE_PATHS` in order and takes the first finite,
//! positive market price. Issue dates are parsed as `YYYY/MM/DD`. Either
//! falls back to a default and reports it through `Resolved::Defaulted`.

use super::{CardRecord, Resolved};
use chrono::{Duration, NaiveDate};

/// Catalog issue-date format
pub const ISSUE_DATE_FORMAT: &str = "%Y/%m/%d";

/// Location of a market price inside a card record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePath {
    HolofoilMarket,
    NormalMarket,
}

/// Price lookup priority, highest first
pub const PRICE_PATHS: [PricePath; 2] = [PricePath::HolofoilMarket, PricePath::NormalMarket];

impl PricePath {
    /// Read the price at this path, if present
    pub fn read(&self, record: &CardRecord) -> Option<f64> {
        let quote = match self {
            PricePath::HolofoilMarket => record.prices.holofoil.as_ref(),
            PricePath::NormalMarket => record.prices.normal.as_ref(),
        };
        quote.and_then(|q| q.market)
    }
}

/// Resolve the current price of a card
pub fn resolve_price(record: &CardRecord, fallback: f64) -> Resolved<f64> {
    PRICE_PATHS
        .iter()
        .filter_map(|path| path.read(record))
        .find(|p| p.is_finite() && *p > 0.0)
        .map(Resolved::Parsed)
        .unwrap_or(Resolved::Defaulted(fallback))
}

/// Resolve the issue date of a card, defaulting to `default_lookback_days` before `as_of`
pub fn resolve_issue_date(
    raw: Option<&str>,
    as_of: NaiveDate,
    default_lookback_days: u32,
) -> Resolved<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), ISSUE_DATE_FORMAT).ok())
        .map(Resolved::Parsed)
        .unwrap_or_else(|| {
            Resolved::Defaulted(as_of - Duration::days(default_lookback_days as i64))
        })
}
