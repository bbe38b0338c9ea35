//! Catalog types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A card as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Catalog identifier
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub set_name: Option<String>,
    /// Set release date as published by the catalog (`YYYY/MM/DD`)
    pub issue_date: Option<String>,
    pub prices: CardPrices,
}

impl CardRecord {
    /// A record with only a name, everything else missing
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Market prices by printing variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPrices {
    pub holofoil: Option<PriceQuote>,
    pub normal: Option<PriceQuote>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub market: Option<f64>,
}

impl PriceQuote {
    pub fn market(price: f64) -> Self {
        Self {
            market: Some(price),
        }
    }
}

/// A value that was either read from real data or substituted by a default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum Resolved<T> {
    Parsed(T),
    Defaulted(T),
}

impl<T> Resolved<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolved::Parsed(v) | Resolved::Defaulted(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Resolved::Parsed(v) | Resolved::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Resolved::Defaulted(_))
    }

    /// `"parsed"` or `"defaulted"`
    pub fn source(&self) -> &'static str {
        match self {
            Resolved::Parsed(_) => "parsed",
            Resolved::Defaulted(_) => "defaulted",
        }
    }
}
