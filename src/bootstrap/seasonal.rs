//! Seasonal coefficient extraction and normalization.

use crate::error::{ForecastError, Result};

/// Ratio of each observation to its centered moving average.
///
/// Positions where the moving average is undefined stay undefined.
///
/// # Errors
/// Returns [`ForecastError::DimensionMismatch`] if the two inputs differ in
/// length.
pub fn observed_seasonal_coefficients(
    sample: &[f64],
    moving_averages: &[Option<f64>],
) -> Result<Vec<Option<f64>>> {
    if sample.len() != moving_averages.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: sample.len(),
            got: moving_averages.len(),
        });
    }

    Ok(sample
        .iter()
        .zip(moving_averages)
        .map(|(&x, &ma)| ma.map(|ma| x / ma))
        .collect())
}

/// Average the defined observed coefficients of each cycle phase.
///
/// Phase `t` averages every defined `observed[i]` with
/// `i % cycle_length == t`.
///
/// # Errors
/// - [`ForecastError::InvalidParameter`] if `cycle_length` is zero.
/// - [`ForecastError::UndefinedSeasonalPhase`] if a phase has no defined
///   observation, which happens when the sample covers too few cycles.
pub fn average_seasonal_coefficients(
    observed: &[Option<f64>],
    cycle_length: usize,
) -> Result<Vec<f64>> {
    if cycle_length == 0 {
        return Err(ForecastError::InvalidParameter(
            "cycle length must be positive".to_string(),
        ));
    }

    (0..cycle_length)
        .map(|phase| {
            let (sum, count) = observed
                .iter()
                .skip(phase)
                .step_by(cycle_length)
                .flatten()
                .fold((0.0, 0usize), |(sum, count), &c| (sum + c, count + 1));

            if count == 0 {
                Err(ForecastError::UndefinedSeasonalPhase { phase })
            } else {
                Ok(sum / count as f64)
            }
        })
        .collect()
}

/// Scale coefficients so that they sum to their count.
///
/// Returns a new vector; the input is left untouched. Normalizing an
/// already-normalized vector returns it unchanged (up to rounding).
///
/// # Errors
/// - [`ForecastError::EmptyData`] for an empty slice.
/// - [`ForecastError::ComputationError`] if the sum is zero or not finite.
pub fn normalize(coefficients: &[f64]) -> Result<Vec<f64>> {
    if coefficients.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let sum: f64 = coefficients.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return Err(ForecastError::ComputationError(format!(
            "cannot normalize seasonal coefficients summing to {sum}"
        )));
    }

    let scale = coefficients.len() as f64 / sum;
    Ok(coefficients.iter().map(|c| c * scale).collect())
}
