//! Common type definitions for the bucket occupancy data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a benchmark output file: a bucket and how many elements landed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketRecord {
    /// Hash-table slot identifier.
    pub index: i64,
    /// Number of elements stored in the slot.
    pub count: u64,
}

impl BucketRecord {
    /// Creates a new record.
    pub const fn new(index: i64, count: u64) -> Self {
        Self { index, count }
    }
}

impl From<(i64, u64)> for BucketRecord {
    fn from((index, count): (i64, u64)) -> Self {
        Self::new(index, count)
    }
}

impl fmt::Display for BucketRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.count)
    }
}

/// Records in file order. Not sorted by bucket index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketDataset {
    records: Vec<BucketRecord>,
}

impl BucketDataset {
    /// Wraps already parsed records.
    pub const fn new(records: Vec<BucketRecord>) -> Self {
        Self { records }
    }

    /// All records in file order.
    pub fn records(&self) -> &[BucketRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The bucket-index column.
    pub fn indices(&self) -> impl Iterator<Item = i64> + '_ {
        self.records.iter().map(|r| r.index)
    }

    /// The element-count column.
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(|r| r.count)
    }

    /// Smallest and largest bucket index, `None` when empty.
    pub fn index_range(&self) -> Option<(i64, i64)> {
        let min = self.indices().min()?;
        let max = self.indices().max()?;
        Some((min, max))
    }

    /// Largest element count, `None` when empty.
    pub fn max_count(&self) -> Option<u64> {
        self.counts().max()
    }

    /// Sum of all element counts, widened so any number of `u64` rows fits.
    pub fn total_elements(&self) -> u128 {
        self.counts().map(u128::from).sum()
    }
}

impl From<Vec<BucketRecord>> for BucketDataset {
    fn from(records: Vec<BucketRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<BucketRecord> for BucketDataset {
    fn from_iter<I: IntoIterator<Item = BucketRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BucketDataset {
    type Item = &'a BucketRecord;
    type IntoIter = std::slice::Iter<'a, BucketRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BucketDataset {
        vec![(2, 2), (0, 3), (1, 7)]
            .into_iter()
            .map(BucketRecord::from)
            .collect()
    }

    #[test]
    fn test_dataset_keeps_file_order() {
        let dataset = sample();
        let indices: Vec<i64> = dataset.indices().collect();
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_dataset_ranges() {
        let dataset = sample();
        assert_eq!(dataset.index_range(), Some((0, 2)));
        assert_eq!(dataset.max_count(), Some(7));
        assert_eq!(dataset.total_elements(), 12);
    }

    #[test]
    fn test_total_elements_does_not_overflow() {
        let dataset: BucketDataset = vec![(0, u64::MAX), (1, 1)]
            .into_iter()
            .map(BucketRecord::from)
            .collect();
        assert_eq!(dataset.total_elements(), u128::from(u64::MAX) + 1);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = BucketDataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.index_range(), None);
        assert_eq!(dataset.max_count(), None);
        assert_eq!(dataset.total_elements(), 0);
    }

    #[test]
    fn test_record_display() {
        assert_eq!(BucketRecord::new(-4, 9).to_string(), "-4 9");
    }
}
