//! Forecasting models.

mod traits;

pub mod exponential;

pub use exponential::{SmoothingConstants, WintersForecaster};
pub use traits::{BoxedForecaster, Forecaster};
