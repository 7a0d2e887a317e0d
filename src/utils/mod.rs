//! Utility functions for evaluating forecasts.

pub mod metrics;

pub use metrics::{calculate_metrics, AccuracyMetrics};
