//! Pokémon TCG API client
//!
//! Searches cards by name through `GET /cards?q=name:"<query>"`. Prices come
//! from the embedded TCGplayer market data and the issue date from the
//! card's set release date.

use super::{CardCatalog, CardPrices, CardRecord, CatalogError, PriceQuote};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Pokémon TCG API base URL
pub const POKEMON_TCG_API_URL: &str = "https://api.pokemontcg.io/v2";

/// Configuration for the Pokémon TCG client
#[derive(Debug, Clone)]
pub struct PokemonTcgConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Optional key sent as `X-Api-Key` (raises rate limits)
    pub api_key: Option<String>,
    /// Maximum cards per search
    pub page_size: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for PokemonTcgConfig {
    fn default() -> Self {
        Self {
            base_url: POKEMON_TCG_API_URL.to_string(),
            api_key: None,
            page_size: 10,
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&crate::config::CatalogConfig> for PokemonTcgConfig {
    fn from(config: &crate::config::CatalogConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Client for the Pokémon TCG API
pub struct PokemonTcgClient {
    config: PokemonTcgConfig,
    client: Client,
}

impl PokemonTcgClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(PokemonTcgConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: PokemonTcgConfig) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PokemonTcgConfig {
        &self.config
    }
}

#[async_trait]
impl CardCatalog for PokemonTcgClient {
    async fn search_cards(&self, query: &str) -> Result<Vec<CardRecord>, CatalogError> {
        let url = format!("{}/cards", self.config.base_url);
        let q = build_name_query(query);

        tracing::debug!(url = %url, q = %q, "Searching Pokémon TCG catalog");

        let page_size = self.config.page_size.to_string();
        let mut request = self
            .client
            .get(&url)
            .query(&[("q", q.as_str()), ("pageSize", page_size.as_str())]);
        if let Some(ref key) = self.config.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status { status, body });
        }

        let body = response.text().await?;
        let cards = parse_cards(&body)?;

        tracing::info!(query = query, card_count = cards.len(), "Catalog search complete");

        Ok(cards)
    }
}

/// Build the `q` parameter for an exact-phrase name search
fn build_name_query(name: &str) -> String {
    let cleaned: String = name.trim().chars().filter(|c| *c != '"').collect();
    format!("name:\"{}\"", cleaned)
}

/// Parse a `/cards` response body into card records
fn parse_cards(body: &str) -> Result<Vec<CardRecord>, CatalogError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(response.data.into_iter().map(ApiCard::into_record).collect())
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiCard>,
}

/// Raw card from the API
#[derive(Debug, Deserialize)]
struct ApiCard {
    id: String,
    name: String,
    images: Option<ApiImages>,
    set: Option<ApiSet>,
    tcgplayer: Option<ApiTcgPlayer>,
}

#[derive(Debug, Deserialize)]
struct ApiImages {
    small: Option<String>,
    large: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSet {
    name: Option<String>,
    /// Format: "1999/01/09"
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiTcgPlayer {
    prices: Option<ApiPrices>,
}

/// Per-variant TCGplayer prices; other variants are ignored
#[derive(Debug, Deserialize)]
struct ApiPrices {
    holofoil: Option<PriceQuote>,
    normal: Option<PriceQuote>,
}

impl ApiCard {
    fn into_record(self) -> CardRecord {
        let prices = self
            .tcgplayer
            .and_then(|t| t.prices)
            .map(|p| CardPrices {
                holofoil: p.holofoil,
                normal: p.normal,
            })
            .unwrap_or_default();

        let (set_name, issue_date) = match self.set {
            Some(set) => (set.name, set.release_date),
            None => (None, None),
        };

        CardRecord {
            id: self.id,
            name: self.name,
            image_url: self.images.and_then(|i| i.large.or(i.small)),
            set_name,
            issue_date,
            prices,
        }
    }
}
