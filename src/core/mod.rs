//! Core data structures for forecasting.

mod forecast;

pub use forecast::Forecast;
