//! Price history reconstruction module
//!
//! Builds a synthetic daily price series anchored to a card's issue date
//! and its current market price

mod reconstruct;
mod types;

pub use reconstruct::SeriesReconstructor;
pub use types::{CardPriceAnchor, HistoryError, PricePoint, VolatilityFactor};
