//! Property-based tests for bootstrapping and the Winters model.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated seasonal series.

use proptest::prelude::*;
use winters_forecast::bootstrap::{self, normalize};
use winters_forecast::models::{SmoothingConstants, WintersForecaster};
use winters_forecast::ForecastError;

/// Strategy for a smoothing constant strictly inside (0, 1).
fn valid_constant() -> impl Strategy<Value = f64> {
    0.001..0.999_f64
}

/// Strategy for a smoothing constant outside (0, 1).
fn invalid_constant() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0..=0.0_f64, 1.0..10.0_f64]
}

/// Strategy for positive seasonal coefficients of a given cycle length.
fn coefficients_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| prop::collection::vec(0.2..2.0_f64, len))
}

/// Strategy for a trending, multiplicatively seasonal series with
/// at least three full cycles.
fn seasonal_history_strategy() -> impl Strategy<Value = (Vec<f64>, usize)> {
    (2usize..9).prop_flat_map(|period| {
        (
            3 * period..6 * period,
            100.0..1000.0_f64,
            0.0..10.0_f64,
            prop::collection::vec(0.5..1.5_f64, period),
        )
            .prop_map(move |(len, base, slope, pattern)| {
                let values: Vec<f64> = (0..len)
                    .map(|i| (base + slope * i as f64) * pattern[i % period])
                    .collect();
                (values, period)
            })
    })
}

// =============================================================================
// Property: smoothing constants are accepted exactly on (0, 1)
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn valid_constants_always_construct(
        alpha in valid_constant(),
        beta in valid_constant(),
        gamma in valid_constant(),
        coefficients in coefficients_strategy(1, 13),
    ) {
        let smoothing = SmoothingConstants::new(alpha, beta, gamma);
        prop_assert!(WintersForecaster::new(100.0, 1.0, coefficients, smoothing).is_ok());
    }

    #[test]
    fn invalid_level_constant_is_rejected(
        alpha in invalid_constant(),
        beta in valid_constant(),
        gamma in valid_constant(),
    ) {
        let smoothing = SmoothingConstants::new(alpha, beta, gamma);
        let result = WintersForecaster::new(100.0, 1.0, vec![1.0], smoothing);
        prop_assert_eq!(
            result,
            Err(ForecastError::InvalidSmoothingConstant { name: "level", value: alpha })
        );
    }

    #[test]
    fn invalid_trend_constant_is_rejected(
        alpha in valid_constant(),
        beta in invalid_constant(),
        gamma in valid_constant(),
    ) {
        let smoothing = SmoothingConstants::new(alpha, beta, gamma);
        let result = WintersForecaster::new(100.0, 1.0, vec![1.0], smoothing);
        prop_assert_eq!(
            result,
            Err(ForecastError::InvalidSmoothingConstant { name: "trend", value: beta })
        );
    }

    #[test]
    fn invalid_seasonal_constant_is_rejected(
        alpha in valid_constant(),
        beta in valid_constant(),
        gamma in invalid_constant(),
    ) {
        let smoothing = SmoothingConstants::new(alpha, beta, gamma);
        let result = WintersForecaster::new(100.0, 1.0, vec![1.0], smoothing);
        prop_assert_eq!(
            result,
            Err(ForecastError::InvalidSmoothingConstant { name: "seasonal", value: gamma })
        );
    }
}

// =============================================================================
// Property: cycle position and next-period forecast
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn cycle_position_counts_observations(
        coefficients in coefficients_strategy(1, 13),
        observations in prop::collection::vec(50.0..500.0_f64, 0..60),
    ) {
        let cycle_length = coefficients.len();
        let smoothing = SmoothingConstants::new(0.3, 0.1, 0.2);
        let mut model = WintersForecaster::new(200.0, 0.5, coefficients, smoothing).unwrap();

        for (k, &x) in observations.iter().enumerate() {
            prop_assert_eq!(model.cycle_position(), k % cycle_length);
            model.add_observation(x);
        }
        prop_assert_eq!(model.cycle_position(), observations.len() % cycle_length);
        prop_assert_eq!(model.cycle_length(), cycle_length);
    }

    #[test]
    fn next_forecast_equals_horizon_one(
        coefficients in coefficients_strategy(1, 13),
        observations in prop::collection::vec(50.0..500.0_f64, 0..30),
    ) {
        let smoothing = SmoothingConstants::default();
        let mut model = WintersForecaster::new(200.0, 0.5, coefficients, smoothing).unwrap();

        prop_assert_eq!(model.next_forecast(), model.forecast(1));
        for x in observations {
            model.add_observation(x);
            prop_assert_eq!(model.next_forecast(), model.forecast(1));
        }
    }

    #[test]
    fn forecasts_repeat_the_seasonal_pattern(
        coefficients in coefficients_strategy(1, 13),
        horizon in 1usize..30,
    ) {
        let m = coefficients.len();
        let model =
            WintersForecaster::new(300.0, 0.0, coefficients, SmoothingConstants::default()).unwrap();

        // With a flat trend, forecasts one cycle apart are identical.
        prop_assert_eq!(model.forecast(horizon), model.forecast(horizon + m));
    }
}

// =============================================================================
// Property: normalization and bootstrapping
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn normalized_coefficients_sum_to_length(coefficients in coefficients_strategy(1, 30)) {
        let normalized = normalize(&coefficients).unwrap();
        let sum: f64 = normalized.iter().sum();
        prop_assert!((sum - coefficients.len() as f64).abs() < 1e-4, "sum = {}", sum);
    }

    #[test]
    fn normalize_is_idempotent(coefficients in coefficients_strategy(1, 30)) {
        let once = normalize(&coefficients).unwrap();
        let twice = normalize(&once).unwrap();
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn history_and_explicit_construction_agree(
        (history, period) in seasonal_history_strategy(),
        horizon in 1usize..20,
    ) {
        let smoothing = SmoothingConstants::new(0.5, 0.2, 0.3);
        let estimate = bootstrap::estimate(&history, period).unwrap();

        let explicit = WintersForecaster::new(
            estimate.trend_level,
            estimate.trend_slope,
            estimate.seasonal_coefficients.clone(),
            smoothing,
        )
        .unwrap();
        let from_history = WintersForecaster::from_history(&history, period, smoothing).unwrap();

        prop_assert!((explicit.forecast(horizon) - from_history.forecast(horizon)).abs() < 1.0);
    }

    #[test]
    fn bootstrapped_coefficients_are_normalized((history, period) in seasonal_history_strategy()) {
        let estimate = bootstrap::estimate(&history, period).unwrap();
        prop_assert_eq!(estimate.cycle_length(), period);

        let sum: f64 = estimate.seasonal_coefficients.iter().sum();
        prop_assert!((sum - period as f64).abs() < 1e-4, "sum = {}", sum);
        prop_assert!(estimate.trend_level.is_finite());
        prop_assert!(estimate.trend_slope.is_finite());
    }
}
