//! Card catalog module
//!
//! Looks up cards in a remote catalog and resolves the price and issue-date
//! anchors the reconstruction needs, with explicit fallbacks

mod cache;
mod pokemontcg;
mod resolve;
mod types;

pub use cache::CachedCatalog;
pub use pokemontcg::{PokemonTcgClient, PokemonTcgConfig, POKEMON_TCG_API_URL};
pub use resolve::{resolve_issue_date, resolve_price, PricePath, ISSUE_DATE_FORMAT, PRICE_PATHS};
pub use types::{CardPrices, CardRecord, CatalogError, PriceQuote, Resolved};

use async_trait::async_trait;

/// Trait for card catalog implementations
#[async_trait]
pub trait CardCatalog: Send + Sync {
    /// Search cards by name
    async fn search_cards(&self, query: &str) -> Result<Vec<CardRecord>, CatalogError>;
}

/// Search the catalog, turning any lookup failure into an empty result
///
/// Network and payload errors never reach the analysis core; the caller
/// treats an empty result as "card not found".
pub async fn search_or_empty<C: CardCatalog + ?Sized>(catalog: &C, query: &str) -> Vec<CardRecord> {
    match catalog.search_cards(query).await {
        Ok(cards) => cards,
        Err(e) => {
            tracing::warn!(query = query, error = %e, "Card lookup failed");
            Vec::new()
        }
    }
}
