//! Time series values held in the cache.

use serde::{Deserialize, Serialize};

/// A single-column time series (prices, mileage factors, signals).
///
/// The index holds Unix timestamps in milliseconds. Gaps are NaN values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    pub index: Vec<i64>,
    #[serde(with = "non_finite_as_null")]
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from (timestamp, value) pairs.
    pub fn from_points(points: impl IntoIterator<Item = (i64, f64)>) -> Self {
        let (index, values) = points.into_iter().unzip();
        Self { index, values }
    }

    /// Get the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (timestamp, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }
}

/// JSON has no NaN or infinity: non-finite values are written as `null`
/// and `null` reads back as NaN.
mod non_finite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| v.is_finite().then_some(*v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}
