//! # winters-forecast
//!
//! Seasonal sales forecasting with Winters' exponential smoothing.
//!
//! A [`WintersForecaster`](models::WintersForecaster) keeps a linear trend
//! (level and slope) and one multiplicative seasonal coefficient per phase
//! of a repeating cycle. It is built from explicit initial estimates or
//! bootstrapped from a historical sample, then revised one observation at a
//! time and queried for point forecasts at any future horizon.
//!
//! ## Modules
//!
//! - [`bootstrap`] — initial trend and seasonal estimates from history
//! - [`models`] — the Winters model and the [`Forecaster`](models::Forecaster) trait
//! - [`core`] — the [`Forecast`](core::Forecast) path type
//! - [`utils`] — accuracy metrics for fitted values
//!
//! ## Example
//!
//! ```
//! use winters_forecast::prelude::*;
//!
//! let c = vec![1.245693, 1.115265, 1.088853, 1.135378, 1.178552, 1.229739, 0.006520];
//! let smoothing = SmoothingConstants::new(0.8, 0.8, 0.3);
//! let mut model = WintersForecaster::new(5849.0, 123.3, c, smoothing)?;
//!
//! let week = model.predict(7);
//! assert_eq!(week.horizon(), 7);
//!
//! model.add_observation(8152.0);
//! assert_eq!(model.cycle_position(), 1);
//! # Ok::<(), ForecastError>(())
//! ```

#![allow(clippy::needless_range_loop)]

pub mod bootstrap;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::bootstrap::BootstrapEstimate;
    pub use crate::core::Forecast;
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{Forecaster, SmoothingConstants, WintersForecaster};
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}
