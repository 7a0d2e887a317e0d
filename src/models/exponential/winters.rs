//! Winters' multiplicative seasonal forecasting model.
//!
//! Observations are assumed to follow
//!
//! ```text
//! x_t = (a + b·t) · c_t + u_t
//! ```
//!
//! with linear trend parameters `a` (level) and `b` (slope), a multiplicative
//! seasonal coefficient `c_t` per phase of the cycle, and noise `u_t`. Each new
//! observation revises the estimates by exponential smoothing:
//!
//! ```text
//! a' = α·x / c[p] + (1 - α)(a + b)
//! b' = β(a' - a) + (1 - β)·b
//! c[p]' = γ·x / a' + (1 - γ)·c[p]
//! p' = (p + 1) mod m
//! ```
//!
//! and forecasts are `ŷ(h) = (a + b·h) · c[(p + h - 1) mod m]`.
//!
//! # Reference
//!
//! Winters, P.R. (1960). "Forecasting Sales by Exponentially Weighted
//! Moving Averages", *Management Science* 6(3), pp. 324-342.

use crate::bootstrap::{self, BootstrapEstimate};
use crate::core::Forecast;
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use tracing::{debug, trace};

/// Smoothing constants for the three model parameters.
///
/// Each constant weighs a new observation against the current estimate and
/// must lie strictly between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingConstants {
    /// Weight for the trend level `a` (α). Typically within [0.002, 0.51].
    pub level: f64,
    /// Weight for the trend slope `b` (β). Typically within [0.005, 0.176].
    pub trend: f64,
    /// Weight for the seasonal coefficients `c` (γ). Typically within [0.05, 0.5].
    pub seasonal: f64,
}

impl SmoothingConstants {
    /// Create smoothing constants. Validation happens when a model is built.
    pub const fn new(level: f64, trend: f64, seasonal: f64) -> Self {
        Self {
            level,
            trend,
            seasonal,
        }
    }

    /// Check that every constant lies in (0, 1).
    ///
    /// Constants are checked in the order level, trend, seasonal; the first
    /// invalid one is reported.
    pub fn validate(&self) -> Result<()> {
        check_smoothing_constant("level", self.level)?;
        check_smoothing_constant("trend", self.trend)?;
        check_smoothing_constant("seasonal", self.seasonal)?;
        Ok(())
    }
}

impl Default for SmoothingConstants {
    fn default() -> Self {
        Self::new(0.2, 0.1, 0.3)
    }
}

fn check_smoothing_constant(name: &'static str, value: f64) -> Result<()> {
    // NaN fails both comparisons.
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ForecastError::InvalidSmoothingConstant { name, value })
    }
}

/// Winters' method forecaster.
///
/// The model is a sequential state machine: it is built once, from explicit
/// parameters or from a historical sample, and then revised with
/// [`add_observation`](Self::add_observation) as each period is observed.
///
/// # Example
///
/// ```
/// use winters_forecast::models::{SmoothingConstants, WintersForecaster};
///
/// let history = [
///     4419.0, 3821.0, 3754.0, 3910.0, 4363.0, 4518.0, 27.3333,
///     6190.4761, 5755.0, 5352.0, 5540.0, 5650.0, 6143.0, 30.4666,
///     5158.0, 4779.0, 5464.0, 5828.0, 6714.0, 7872.0, 42.0,
/// ];
/// let smoothing = SmoothingConstants::new(0.8, 0.8, 0.3);
/// let mut model = WintersForecaster::from_history(&history, 7, smoothing).unwrap();
///
/// assert!((model.next_forecast() - 7440.0).abs() < 1.0);
///
/// model.add_observation(8152.0);
/// assert_eq!(model.cycle_position(), 1);
/// assert!((model.next_forecast() - 7717.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WintersForecaster {
    /// Trend level `a`.
    trend_level: f64,
    /// Trend slope `b`.
    trend_slope: f64,
    /// One multiplicative coefficient per cycle phase.
    seasonal_coefficients: Vec<f64>,
    /// Phase of the next period to be observed.
    cycle_position: usize,
    smoothing: SmoothingConstants,
}

impl WintersForecaster {
    /// Create a model from explicit initial estimates.
    ///
    /// The cycle length is the length of `seasonal_coefficients`. Use this
    /// constructor when there are too few observations to bootstrap.
    ///
    /// # Errors
    /// - [`ForecastError::InvalidSmoothingConstant`] if a constant is outside (0, 1).
    /// - [`ForecastError::EmptyData`] if `seasonal_coefficients` is empty.
    pub fn new(
        trend_level: f64,
        trend_slope: f64,
        seasonal_coefficients: Vec<f64>,
        smoothing: SmoothingConstants,
    ) -> Result<Self> {
        Self::initialize(trend_level, trend_slope, seasonal_coefficients, smoothing)
    }

    /// Create a model by bootstrapping initial estimates from `history`.
    ///
    /// `history` should hold at least about two full cycles of consecutive
    /// observations.
    ///
    /// # Errors
    /// Any error of [`bootstrap::estimate`], or an invalid smoothing constant.
    pub fn from_history(
        history: &[f64],
        cycle_length: usize,
        smoothing: SmoothingConstants,
    ) -> Result<Self> {
        let estimate = bootstrap::estimate(history, cycle_length)?;
        Self::from_estimate(estimate, smoothing)
    }

    /// Create a model from a previously computed bootstrap estimate.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn from_estimate(estimate: BootstrapEstimate, smoothing: SmoothingConstants) -> Result<Self> {
        Self::initialize(
            estimate.trend_level,
            estimate.trend_slope,
            estimate.seasonal_coefficients,
            smoothing,
        )
    }

    fn initialize(
        trend_level: f64,
        trend_slope: f64,
        seasonal_coefficients: Vec<f64>,
        smoothing: SmoothingConstants,
    ) -> Result<Self> {
        smoothing.validate()?;
        if seasonal_coefficients.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        debug!(
            trend_level,
            trend_slope,
            cycle_length = seasonal_coefficients.len(),
            alpha = smoothing.level,
            beta = smoothing.trend,
            gamma = smoothing.seasonal,
            "initialized Winters model"
        );

        Ok(Self {
            trend_level,
            trend_slope,
            seasonal_coefficients,
            cycle_position: 0,
            smoothing,
        })
    }

    /// Get the current trend level `a`.
    pub fn trend_level(&self) -> f64 {
        self.trend_level
    }

    /// Get the current trend slope `b`.
    pub fn trend_slope(&self) -> f64 {
        self.trend_slope
    }

    /// Get the current seasonal coefficients, indexed by cycle phase.
    pub fn seasonal_coefficients(&self) -> &[f64] {
        &self.seasonal_coefficients
    }

    /// Phase of the next period to be observed, in `[0, cycle_length)`.
    pub fn cycle_position(&self) -> usize {
        self.cycle_position
    }

    /// Number of phases in one seasonal cycle.
    pub fn cycle_length(&self) -> usize {
        self.seasonal_coefficients.len()
    }

    /// Get the smoothing constants.
    pub fn smoothing(&self) -> SmoothingConstants {
        self.smoothing
    }

    /// Revise the model with the observation for the next period.
    ///
    /// Updates the trend level, the trend slope and the seasonal coefficient
    /// of the current phase, then advances to the next phase.
    pub fn add_observation(&mut self, value: f64) {
        let SmoothingConstants {
            level: alpha,
            trend: beta,
            seasonal: gamma,
        } = self.smoothing;
        let pos = self.cycle_position;
        let c = self.seasonal_coefficients[pos];

        let new_level =
            alpha * value / c + (1.0 - alpha) * (self.trend_level + self.trend_slope);
        let new_slope = beta * (new_level - self.trend_level) + (1.0 - beta) * self.trend_slope;
        let new_coefficient = gamma * value / new_level + (1.0 - gamma) * c;

        trace!(
            value,
            phase = pos,
            level = new_level,
            slope = new_slope,
            coefficient = new_coefficient,
            "observation added"
        );

        self.trend_level = new_level;
        self.trend_slope = new_slope;
        self.seasonal_coefficients[pos] = new_coefficient;
        self.cycle_position = (pos + 1) % self.seasonal_coefficients.len();
    }

    /// Feed a run of observations in order.
    ///
    /// Returns the one-step-ahead forecast made just before each observation
    /// was added, i.e. the fitted values for `values`.
    pub fn add_observations(&mut self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .map(|&value| {
                let fitted = self.next_forecast();
                self.add_observation(value);
                fitted
            })
            .collect()
    }

    /// Forecast the value `horizon` periods ahead.
    ///
    /// Horizon 1 is the next, not yet observed, period. Horizon 0 is accepted
    /// and evaluated with the same formula, using the coefficient of the
    /// phase just before the current one.
    pub fn forecast(&self, horizon: usize) -> f64 {
        let m = self.seasonal_coefficients.len();
        let idx = (self.cycle_position + horizon % m + m - 1) % m;
        (self.trend_level + self.trend_slope * horizon as f64) * self.seasonal_coefficients[idx]
    }

    /// Forecast for the next period; equal to `forecast(1)`.
    pub fn next_forecast(&self) -> f64 {
        self.forecast(1)
    }

    /// Forecasts for horizons `1..=horizon`.
    pub fn predict(&self, horizon: usize) -> Forecast {
        (1..=horizon).map(|h| self.forecast(h)).collect()
    }
}

impl Forecaster for WintersForecaster {
    fn observe(&mut self, value: f64) {
        self.add_observation(value);
    }

    fn forecast(&self, horizon: usize) -> f64 {
        WintersForecaster::forecast(self, horizon)
    }

    fn name(&self) -> &str {
        "Winters"
    }
}
