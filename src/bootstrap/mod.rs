//! Initial parameter estimation from a historical sample.
//!
//! The estimate is built in five steps:
//! 1. [`moving_average`] — centered moving average over one cycle
//! 2. [`observed_seasonal_coefficients`] — observation / moving average
//! 3. [`average_seasonal_coefficients`] — mean ratio per cycle phase
//! 4. [`normalize`] — coefficients rescaled to sum to the cycle length
//! 5. [`trend_parameters`] — least squares on the deseasonalized sample
//!
//! [`estimate`] runs the whole pipeline.
//!
//! # Reference
//!
//! Meyr, H. (2008). "Forecast Methods", in Stadtler, H. and Kilger, C. (eds.),
//! *Supply Chain Management and Advanced Planning*, 4th ed., Springer.

mod moving_average;
mod seasonal;
mod trend;

pub use moving_average::moving_average;
pub use seasonal::{average_seasonal_coefficients, normalize, observed_seasonal_coefficients};
pub use trend::trend_parameters;

use crate::error::Result;
use tracing::debug;

/// Initial trend and seasonal estimates derived from a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapEstimate {
    /// Trend level `a`.
    pub trend_level: f64,
    /// Trend slope `b`.
    pub trend_slope: f64,
    /// Normalized seasonal coefficients, one per cycle phase.
    pub seasonal_coefficients: Vec<f64>,
}

impl BootstrapEstimate {
    /// Cycle length implied by the seasonal coefficients.
    pub fn cycle_length(&self) -> usize {
        self.seasonal_coefficients.len()
    }
}

/// Estimate trend and seasonal parameters from a historical sample.
///
/// The sample should span at least about two full cycles, otherwise some
/// phase has no defined moving average and estimation fails.
///
/// # Errors
/// Propagates the errors of the individual steps, most notably
/// [`ForecastError::UndefinedSeasonalPhase`](crate::ForecastError::UndefinedSeasonalPhase)
/// for samples that are too short.
pub fn estimate(sample: &[f64], cycle_length: usize) -> Result<BootstrapEstimate> {
    let moving_averages = moving_average(sample, cycle_length)?;
    let observed = observed_seasonal_coefficients(sample, &moving_averages)?;
    let averaged = average_seasonal_coefficients(&observed, cycle_length)?;
    let seasonal_coefficients = normalize(&averaged)?;
    let (trend_level, trend_slope) = trend_parameters(sample, &seasonal_coefficients)?;

    debug!(
        observations = sample.len(),
        cycle_length,
        trend_level,
        trend_slope,
        "bootstrapped initial estimates"
    );

    Ok(BootstrapEstimate {
        trend_level,
        trend_slope,
        seasonal_coefficients,
    })
}

/// Three weeks of daily shoe-store sales (Monday to Sunday), from Meyr (2008).
#[cfg(test)]
pub(crate) const SHOE_STORE_SALES: [f64; 21] = [
    4419.0, 3821.0, 3754.0, 3910.0, 4363.0, 4518.0, 27.3333,
    6190.4761, 5755.0, 5352.0, 5540.0, 5650.0, 6143.0, 30.4666,
    5158.0, 4779.0, 5464.0, 5828.0, 6714.0, 7872.0, 42.0,
];
