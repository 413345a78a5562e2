//! Runs a benchmark and writes its `index count` rows.

use crate::hash_functions::HashFunction;
use crate::hash_table::ChainedHashTable;
use crate::words::{read_text, split_words};
use hashplot_common::{BucketDataset, BucketStats, Result};
use std::io::Write;
use std::path::Path;

/// Occupancy of one hash function over one text.
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Function that filled the table.
    pub function: HashFunction,
    /// Words read, duplicates included.
    pub words: usize,
    /// Distinct words stored.
    pub distinct: usize,
    /// One row per bucket.
    pub dataset: BucketDataset,
}

impl BenchReport {
    /// Statistics of the bucket loads.
    pub fn stats(&self) -> Option<BucketStats> {
        BucketStats::from_dataset(&self.dataset)
    }
}

/// Hashes every distinct word of `text` into `buckets` chains.
pub fn bench_text(text: &str, buckets: usize, function: HashFunction) -> Result<BenchReport> {
    let mut table = ChainedHashTable::new(buckets, function)?;
    let mut words = 0;
    for word in split_words(text) {
        table.insert(word);
        words += 1;
    }

    Ok(BenchReport {
        function,
        words,
        distinct: table.len(),
        dataset: table.to_dataset(),
    })
}

/// Reads `path` and runs [`bench_text`] on it, logging the statistics.
pub fn bench_file<P: AsRef<Path>>(path: P, buckets: usize, function: HashFunction) -> Result<BenchReport> {
    let text = read_text(path)?;
    let report = bench_text(&text, buckets, function)?;

    tracing::info!(
        function = %function,
        words = report.words,
        distinct = report.distinct,
        "Filled hash table"
    );
    if let Some(stats) = report.stats() {
        stats.log(function.name());
    }
    Ok(report)
}

/// Writes one space-separated `index count` line per record, no header.
pub fn write_dataset<W: Write>(dataset: &BucketDataset, writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(writer);

    for record in dataset {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
