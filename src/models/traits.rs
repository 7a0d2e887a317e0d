//! Forecaster trait defining the common interface for online models.

use crate::core::Forecast;

/// Common interface for models updated one observation at a time.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Incorporate the next observed value.
    fn observe(&mut self, value: f64);

    /// Forecast `horizon` periods ahead; horizon 1 is the next period.
    fn forecast(&self, horizon: usize) -> f64;

    /// Forecast for the next period.
    fn next_forecast(&self) -> f64 {
        self.forecast(1)
    }

    /// Forecast every horizon from 1 through `horizon`.
    fn predict(&self, horizon: usize) -> Forecast {
        (1..=horizon).map(|h| self.forecast(h)).collect()
    }

    /// Get the model name.
    fn name(&self) -> &str;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use winters_forecast::models::{BoxedForecaster, Forecaster, SmoothingConstants, WintersForecaster};
///
/// let model = WintersForecaster::new(100.0, 1.0, vec![1.0, 1.0], SmoothingConstants::default())
///     .unwrap();
/// let model: BoxedForecaster = Box::new(model);
/// assert_eq!(model.name(), "Winters");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;
