//! Integration tests for reconstruction and forecasting

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tcg_forecast::forecast::{forecast, ForecastError, TrendForecaster};
use tcg_forecast::history::{CardPriceAnchor, HistoryError, SeriesReconstructor};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn anchor(age_days: i64, price: f64) -> CardPriceAnchor {
    CardPriceAnchor::new(as_of() - Duration::days(age_days), price, as_of())
}

#[test]
fn test_young_card_gets_thirty_days() {
    let series = SeriesReconstructor::default()
        .reconstruct(&anchor(10, 100.0), 0.3, &mut StdRng::seed_from_u64(42))
        .unwrap();

    assert_eq!(series.len(), 30);
    assert_eq!(series.last().unwrap().price, 100.0);
}

#[test]
fn test_old_card_capped_at_lookback() {
    let series = SeriesReconstructor::default()
        .reconstruct(&anchor(3000, 100.0), 0.3, &mut StdRng::seed_from_u64(42))
        .unwrap();

    assert_eq!(series.len(), 730);
    assert_eq!(series.last().unwrap().price, 100.0);
}

#[test]
fn test_near_zero_volatility_forecasts_above_current() {
    let series = SeriesReconstructor::default()
        .reconstruct(&anchor(180, 100.0), 1e-9, &mut StdRng::seed_from_u64(42))
        .unwrap();
    let result = TrendForecaster::new(30).forecast(&series).unwrap();

    assert!(result.predicted_price > 100.0);
    assert!(result.delta_absolute > 0.0);
    assert!(result.delta_percent > 0.0);
}

#[test]
fn test_non_positive_price_rejected() {
    let reconstructor = SeriesReconstructor::default();
    let mut rng = StdRng::seed_from_u64(42);

    for price in [0.0, -100.0] {
        let result = reconstructor.reconstruct(&anchor(100, price), 0.3, &mut rng);
        assert_eq!(result, Err(HistoryError::InvalidAnchor(price)));
    }
}

#[test]
fn test_out_of_range_volatility_rejected() {
    let reconstructor = SeriesReconstructor::default();
    let mut rng = StdRng::seed_from_u64(42);

    for volatility in [0.0, 1.5] {
        let result = reconstructor.reconstruct(&anchor(100, 100.0), volatility, &mut rng);
        assert_eq!(result, Err(HistoryError::InvalidVolatility(volatility)));
    }
}

#[test]
fn test_forecaster_preconditions() {
    assert_eq!(forecast(&[], 30).unwrap_err(), ForecastError::EmptySeries);

    let single = SeriesReconstructor::default()
        .reconstruct(&anchor(40, 20.0), 0.3, &mut StdRng::seed_from_u64(1))
        .unwrap()
        .split_off(39);
    assert_eq!(
        forecast(&single, 30).unwrap_err(),
        ForecastError::DegenerateSeries(1)
    );
}

proptest! {
    #[test]
    fn prop_length_is_clamped_age(
        age in -100i64..4000,
        price in 0.01f64..100_000.0,
        volatility in 0.001f64..=1.0,
        seed in any::<u64>(),
    ) {
        let series = SeriesReconstructor::default()
            .reconstruct(&anchor(age, price), volatility, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(series.len() as i64, age.clamp(30, 730));
    }

    #[test]
    fn prop_last_point_is_anchor(
        age in 0i64..1000,
        price in 0.01f64..100_000.0,
        volatility in 0.001f64..=1.0,
        seed in any::<u64>(),
    ) {
        let series = SeriesReconstructor::default()
            .reconstruct(&anchor(age, price), volatility, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let last = series.last().unwrap();
        prop_assert_eq!(last.price, price);
        prop_assert_eq!(last.date, as_of());
    }

    #[test]
    fn prop_dates_strictly_increasing(
        age in 0i64..1000,
        volatility in 0.001f64..=1.0,
        seed in any::<u64>(),
    ) {
        let series = SeriesReconstructor::default()
            .reconstruct(&anchor(age, 42.0), volatility, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        for pair in series.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn prop_same_seed_same_shape(
        age in 0i64..1000,
        price in 0.01f64..10_000.0,
        seed in any::<u64>(),
    ) {
        let reconstructor = SeriesReconstructor::default();
        let a = reconstructor
            .reconstruct(&anchor(age, price), 0.5, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let b = reconstructor
            .reconstruct(&anchor(age, price), 0.5, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(a.len(), b.len());
        prop_assert_eq!(a.last().unwrap().price, b.last().unwrap().price);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_forecast_deterministic(
        age in 0i64..1000,
        volatility in 0.001f64..=1.0,
        seed in any::<u64>(),
    ) {
        let series = SeriesReconstructor::default()
            .reconstruct(&anchor(age, 250.0), volatility, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let forecaster = TrendForecaster::default();
        let first = forecaster.forecast(&series).unwrap();
        let second = forecaster.forecast(&series).unwrap();
        prop_assert_eq!(first.predicted_price, second.predicted_price);
        prop_assert_eq!(first.horizon_date, as_of() + Duration::days(30));
    }
}
