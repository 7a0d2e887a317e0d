//! Forecast path returned by multi-step queries.

/// Point forecasts for consecutive future periods.
///
/// Element `k` holds the forecast for horizon `k + 1`, so the first value is
/// always the forecast for the very next period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    point: Vec<f64>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from point predictions ordered by horizon.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { point: values }
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Get the point predictions, ordered by horizon.
    pub fn values(&self) -> &[f64] {
        &self.point
    }

    /// Get the forecast for a 1-based horizon.
    ///
    /// Returns `None` for horizon 0 or beyond the forecast length.
    pub fn get(&self, horizon: usize) -> Option<f64> {
        horizon
            .checked_sub(1)
            .and_then(|idx| self.point.get(idx))
            .copied()
    }

    /// Iterate over `(horizon, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.point.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }

    /// Consume the forecast, returning the point predictions.
    pub fn into_values(self) -> Vec<f64> {
        self.point
    }
}

impl FromIterator<f64> for Forecast {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            point: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Forecast {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.point.into_iter()
    }
}
