//! Integration tests for hashplot-common crate.

use hashplot_common::{extract_label, output_path, BucketDataset, BucketRecord, PlotError};

#[test]
fn test_label_feeds_output_path() {
    let label = extract_label("data/myhash.csv");
    assert_eq!(output_path("out/", &label), "out/myhash.png");
}

#[test]
fn test_dataset_from_pairs() {
    let dataset: BucketDataset = [(0, 3), (1, 7), (2, 2)]
        .into_iter()
        .map(BucketRecord::from)
        .collect();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.records()[1], BucketRecord::new(1, 7));
    assert_eq!(dataset.index_range(), Some((0, 2)));
    assert_eq!(dataset.max_count(), Some(7));
}

#[test]
fn test_error_display() {
    let error = PlotError::parse(12, "expected 2 fields, found 1");
    assert_eq!(error.to_string(), "Parse error at line 12: expected 2 fields, found 1");
}
