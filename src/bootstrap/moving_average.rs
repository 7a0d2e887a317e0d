//! Centered moving average used to strip seasonality from a sample.

use crate::error::{ForecastError, Result};

/// Compute the centered moving average of `sample` over `period` values.
///
/// The result has the same length as `sample`. With `half = period / 2`,
/// index `i` holds the mean of `sample[i - half..i - half + period]` for
/// `half <= i <= len - half - 1`; all other indices are `None` because the
/// window does not fit. A sample too short for that band yields only `None`.
///
/// The window is slid with a running sum, so the cost is O(n).
///
/// # Errors
/// Returns [`ForecastError::InvalidParameter`] if `period` is zero.
pub fn moving_average(sample: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(ForecastError::InvalidParameter(
            "moving average period must be positive".to_string(),
        ));
    }

    let n = sample.len();
    let half = period / 2;
    let mut averages = vec![None; n];

    if n < 2 * half + 1 || n < period {
        return Ok(averages);
    }

    let last = n - half - 1;
    let mut window_sum: f64 = sample[..period].iter().sum();

    for i in half..=last {
        averages[i] = Some(window_sum / period as f64);
        if i < last {
            let start = i - half;
            window_sum += sample[start + period] - sample[start];
        }
    }

    Ok(averages)
}
