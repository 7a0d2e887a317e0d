//! Accuracy metrics for evaluating one-step-ahead forecasts.
//!
//! Typically fed with the observations passed to
//! [`WintersForecaster::add_observations`](crate::models::WintersForecaster::add_observations)
//! and the fitted values it returns.

use crate::error::{ForecastError, Result};

/// Accuracy of a run of forecasts against the observed values.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error (None if zeros in actual)
    pub mape: Option<f64>,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
    /// Mean Absolute Scaled Error against the seasonal naive forecast
    /// (None if the series is not longer than one cycle or is constant
    /// across cycles)
    pub mase: Option<f64>,
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Arguments
/// * `actual` - Observed values
/// * `predicted` - Forecasts for the same periods
/// * `cycle_length` - Seasonal cycle length used as the MASE naive lag
///
/// # Errors
/// - [`ForecastError::EmptyData`] if either slice is empty.
/// - [`ForecastError::DimensionMismatch`] if their lengths differ.
pub fn calculate_metrics(
    actual: &[f64],
    predicted: &[f64],
    cycle_length: usize,
) -> Result<AccuracyMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let n = actual.len() as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut sym_sum = 0.0;

    for (a, p) in actual.iter().zip(predicted) {
        let err = a - p;
        abs_sum += err.abs();
        sq_sum += err * err;

        let denom = a.abs() + p.abs();
        if denom > 0.0 {
            sym_sum += 2.0 * err.abs() / denom;
        }
    }

    let mae = abs_sum / n;
    let mse = sq_sum / n;

    let mape = if actual.contains(&0.0) {
        None
    } else {
        let sum: f64 = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| ((a - p) / a).abs())
            .sum();
        Some(100.0 * sum / n)
    };

    Ok(AccuracyMetrics {
        mae,
        mse,
        rmse: mse.sqrt(),
        mape,
        smape: 100.0 * sym_sum / n,
        mase: seasonal_naive_mae(actual, cycle_length).map(|naive| mae / naive),
    })
}

/// MAE of forecasting each value with the one a full cycle earlier.
fn seasonal_naive_mae(actual: &[f64], cycle_length: usize) -> Option<f64> {
    let lag = cycle_length.max(1);
    if actual.len() <= lag {
        return None;
    }

    let naive = actual
        .iter()
        .skip(lag)
        .zip(actual)
        .map(|(curr, prev)| (curr - prev).abs())
        .sum::<f64>()
        / (actual.len() - lag) as f64;

    (naive > 0.0).then_some(naive)
}
