//! tcg-forecast: price history reconstruction and trend forecasting for trading cards
//!
//! This library provides the core components for:
//! - Reconstructing a synthetic daily price history from an issue date and a current price
//! - Fitting a linear trend to that history and forecasting a fixed horizon ahead
//! - Looking up cards in the Pokémon TCG catalog, with query caching
//! - Resolving price and issue-date anchors with explicit fallbacks
//! - Assembling analysis reports for the command line

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod forecast;
pub mod history;
pub mod telemetry;
