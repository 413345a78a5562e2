//! Separately chained hash table keyed by words.

use crate::hash_functions::HashFunction;
use hashplot_common::{BucketDataset, BucketRecord, PlotError, Result};

/// Largest accepted bucket count.
pub const MAX_BUCKET_COUNT: usize = 1 << 24;

/// A hash table whose buckets are chains of distinct keys.
///
/// Only occupancy matters here, so there are no values and no resizing:
/// the load per bucket is exactly what the chosen function produced.
#[derive(Debug, Clone)]
pub struct ChainedHashTable {
    function: HashFunction,
    buckets: Vec<Vec<String>>,
    len: usize,
}

impl ChainedHashTable {
    /// Creates an empty table with `bucket_count` chains.
    pub fn new(bucket_count: usize, function: HashFunction) -> Result<Self> {
        if !(1..=MAX_BUCKET_COUNT).contains(&bucket_count) {
            return Err(PlotError::validation_field(
                format!("bucket count must be between 1 and {MAX_BUCKET_COUNT}, got {bucket_count}"),
                "buckets",
            ));
        }

        Ok(Self {
            function,
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
        })
    }

    /// Hash function in use.
    pub const fn function(&self) -> HashFunction {
        self.function
    }

    /// Number of chains.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct keys stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no key has been inserted.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn chain(&self, key: &str) -> &[String] {
        &self.buckets[self.function.bucket(key.as_bytes(), self.buckets.len())]
    }

    /// Inserts `key` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, key: &str) -> bool {
        let index = self.function.bucket(key.as_bytes(), self.buckets.len());
        let chain = &mut self.buckets[index];
        if chain.iter().any(|existing| existing == key) {
            return false;
        }
        chain.push(key.to_owned());
        self.len += 1;
        true
    }

    /// Whether `key` is stored.
    pub fn contains(&self, key: &str) -> bool {
        self.chain(key).iter().any(|existing| existing == key)
    }

    /// Chain lengths in bucket order.
    pub fn loads(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }

    /// One `(bucket index, chain length)` row per bucket, empty buckets included.
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_dataset(&self) -> BucketDataset {
        // bucket_count <= MAX_BUCKET_COUNT, so the casts are lossless
        self.loads()
            .enumerate()
            .map(|(index, load)| BucketRecord::new(index as i64, load as u64))
            .collect()
    }
}

impl<'a> Extend<&'a str> for ChainedHashTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
