//! Exponential smoothing models.
//!
//! This module provides Winters' method: trend level, trend slope and
//! multiplicative seasonal coefficients revised by exponential smoothing as
//! each observation arrives.

mod winters;

pub use winters::{SmoothingConstants, WintersForecaster};
