//! Summary statistics over bucket occupancy.

use crate::BucketDataset;
use serde::Serialize;

/// How evenly elements are spread across buckets.
///
/// `dispersion` is the variance of the per-bucket counts,
/// `E(x^2) - (E x)^2`. A perfectly uniform table has dispersion 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketStats {
    /// Number of rows in the dataset.
    pub buckets: usize,
    /// Sum of all element counts.
    pub total_elements: u128,
    /// Buckets holding no elements.
    pub empty_buckets: usize,
    /// Largest element count.
    pub max_load: u64,
    /// Mean element count.
    pub mean: f64,
    /// Variance of the element counts.
    pub dispersion: f64,
}

impl BucketStats {
    /// Computes statistics; `None` for an empty dataset.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_dataset(dataset: &BucketDataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        let buckets = dataset.len();
        let n = buckets as f64;
        let total_elements = dataset.total_elements();
        let sum_of_squares: f64 = dataset.counts().map(|c| (c as f64) * (c as f64)).sum();

        let mean = total_elements as f64 / n;
        let dispersion = sum_of_squares / n - mean * mean;

        Some(Self {
            buckets,
            total_elements,
            empty_buckets: dataset.counts().filter(|&c| c == 0).count(),
            max_load: dataset.max_count().unwrap_or(0),
            mean,
            // rounding can push a uniform table slightly negative
            dispersion: dispersion.max(0.0),
        })
    }

    /// Logs the statistics at info level.
    pub fn log(&self, label: &str) {
        tracing::info!(
            label,
            buckets = self.buckets,
            elements = self.total_elements,
            empty = self.empty_buckets,
            max_load = self.max_load,
            mean = self.mean,
            dispersion = self.dispersion,
            "Bucket distribution"
        );
    }
}
