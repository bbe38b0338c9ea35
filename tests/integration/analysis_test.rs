//! Integration tests for catalog-driven analysis

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use tcg_forecast::analysis::{AnalysisOutcome, Analyzer, Notice};
use tcg_forecast::catalog::{
    CachedCatalog, CardCatalog, CardPrices, CardRecord, CatalogError, PriceQuote, Resolved,
};
use tcg_forecast::forecast::Trend;
use tcg_forecast::history::VolatilityFactor;

/// In-memory catalog keyed by exact card name
struct FakeCatalog {
    cards: Vec<CardRecord>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    fn new(cards: Vec<CardRecord>) -> Self {
        Self {
            cards,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CardCatalog for FakeCatalog {
    async fn search_cards(&self, query: &str) -> Result<Vec<CardRecord>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .cards
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(query.trim()))
            .cloned()
            .collect())
    }
}

/// Catalog whose every lookup fails
struct DownCatalog;

#[async_trait]
impl CardCatalog for DownCatalog {
    async fn search_cards(&self, _query: &str) -> Result<Vec<CardRecord>, CatalogError> {
        Err(CatalogError::Decode(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        ))
    }
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn cards() -> Vec<CardRecord> {
    vec![
        CardRecord {
            id: "base1-4".to_string(),
            name: "Charizard".to_string(),
            image_url: Some("https://images.pokemontcg.io/base1/4_hires.png".to_string()),
            set_name: Some("Base".to_string()),
            issue_date: Some("1999/01/09".to_string()),
            prices: CardPrices {
                holofoil: Some(PriceQuote::market(362.55)),
                normal: None,
            },
        },
        CardRecord {
            id: "base1-58".to_string(),
            name: "Pikachu".to_string(),
            image_url: None,
            set_name: Some("Base".to_string()),
            issue_date: Some("2024/06/20".to_string()),
            prices: CardPrices {
                holofoil: None,
                normal: Some(PriceQuote::market(4.12)),
            },
        },
        CardRecord {
            id: "promo-1".to_string(),
            name: "Mystery Promo".to_string(),
            image_url: None,
            set_name: None,
            issue_date: Some("sometime in 2020".to_string()),
            prices: CardPrices::default(),
        },
    ]
}

fn volatility() -> VolatilityFactor {
    VolatilityFactor::new(0.3).unwrap()
}

#[tokio::test]
async fn test_old_card_uses_max_lookback() {
    let analyzer = Analyzer::default();
    let catalog = FakeCatalog::new(cards());
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = analyzer
        .analyze_query(&catalog, "Charizard", volatility(), as_of(), &mut rng)
        .await
        .unwrap();

    let report = outcome.report().expect("Charizard should be found");
    assert_eq!(report.card.set_name.as_deref(), Some("Base"));
    assert_eq!(report.price, Resolved::Parsed(362.55));
    assert_eq!(report.series.len(), 730);
    assert_eq!(report.series.last().unwrap().price, 362.55);
    assert!(report.notices.is_empty());
}

#[tokio::test]
async fn test_young_card_normal_price() {
    let analyzer = Analyzer::default();
    let catalog = FakeCatalog::new(cards());
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = analyzer
        .analyze_query(&catalog, "pikachu", volatility(), as_of(), &mut rng)
        .await
        .unwrap();

    let report = outcome.report().unwrap();
    assert_eq!(report.price, Resolved::Parsed(4.12));
    assert_eq!(report.series.len(), 30);
}

#[tokio::test]
async fn test_missing_price_and_bad_date_degrade() {
    let analyzer = Analyzer::default();
    let catalog = FakeCatalog::new(cards());
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = analyzer
        .analyze_query(&catalog, "Mystery Promo", volatility(), as_of(), &mut rng)
        .await
        .unwrap();

    let report = outcome.report().unwrap();
    assert_eq!(report.price, Resolved::Defaulted(50.0));
    assert!(report.issue_date.is_defaulted());
    assert_eq!(report.series.len(), 365);
    assert_eq!(
        report.notices,
        vec![Notice::PriceUnavailable { fallback: 50.0 }]
    );
}

#[tokio::test]
async fn test_unknown_card_not_found() {
    let analyzer = Analyzer::default();
    let catalog = FakeCatalog::new(cards());
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = analyzer
        .analyze_query(&catalog, "Missingno", volatility(), as_of(), &mut rng)
        .await
        .unwrap();

    match outcome {
        AnalysisOutcome::NotFound { query } => assert_eq!(query, "Missingno"),
        AnalysisOutcome::Ready(_) => panic!("Missingno should not be found"),
    }
}

#[tokio::test]
async fn test_lookup_failure_is_not_found() {
    let analyzer = Analyzer::default();
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = analyzer
        .analyze_query(&DownCatalog, "Charizard", volatility(), as_of(), &mut rng)
        .await
        .unwrap();

    assert!(outcome.report().is_none());
}

#[tokio::test]
async fn test_cached_catalog_reused_across_analyses() {
    let analyzer = Analyzer::default();
    let catalog = CachedCatalog::new(FakeCatalog::new(cards()));
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..3 {
        analyzer
            .analyze_query(&catalog, "Charizard", volatility(), as_of(), &mut rng)
            .await
            .unwrap();
    }

    assert_eq!(catalog.len().await, 1);
}

#[tokio::test]
async fn test_seeded_analyses_match() {
    let analyzer = Analyzer::default();
    let catalog = FakeCatalog::new(cards());

    let a = analyzer
        .analyze_query(
            &catalog,
            "Charizard",
            volatility(),
            as_of(),
            &mut StdRng::seed_from_u64(7),
        )
        .await
        .unwrap();
    let b = analyzer
        .analyze_query(
            &catalog,
            "Charizard",
            volatility(),
            as_of(),
            &mut StdRng::seed_from_u64(7),
        )
        .await
        .unwrap();

    let (a, b) = (a.report().unwrap(), b.report().unwrap());
    assert_eq!(a.series, b.series);
    assert_eq!(a.predicted_price, b.predicted_price);
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_report_json_shape() {
    let analyzer = Analyzer::default();
    let catalog = FakeCatalog::new(cards());
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = analyzer
        .analyze_query(&catalog, "Charizard", volatility(), as_of(), &mut rng)
        .await
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["status"], "ready");
    assert_eq!(json["price"]["source"], "parsed");
    assert_eq!(json["issue_date"]["value"], "1999-01-09");
    assert_eq!(json["series"].as_array().unwrap().len(), 730);
    assert_eq!(json["projection"].as_array().unwrap().len(), 30);
    assert!(json["trend"] == "bullish" || json["trend"] == "bearish");
    assert!(json["explanation"].as_str().unwrap().contains("reconstructed"));

    let report = outcome.report().unwrap();
    let expected = if report.forecast.delta_absolute > 0.0 {
        Trend::Bullish
    } else {
        Trend::Bearish
    };
    assert_eq!(report.trend, expected);
}
