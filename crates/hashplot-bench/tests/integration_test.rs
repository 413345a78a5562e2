//! Integration tests for hashplot-bench crate.

use hashplot_bench::{bench_file, write_dataset, HashFunction};
use hashplot_common::test_utils::write_data_file;
use hashplot_common::{BucketStats, PlotError};
use proptest::prelude::*;

const TEXT: &str = "It was the best of times, it was the worst of times,\n\
                    it was the age of wisdom, it was the age of foolishness.\n";

#[test]
fn test_every_function_covers_every_word() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data_file(dir.path(), "dickens.txt", TEXT);

    for function in HashFunction::ALL {
        let report = bench_file(&path, 31, function).unwrap();
        assert_eq!(report.dataset.len(), 31, "{function}");
        // "It" and "it" are different keys
        assert_eq!(report.distinct, 11, "{function}");
        assert_eq!(report.dataset.total_elements(), 11, "{function}");
    }
}

#[test]
fn test_better_functions_spread_better() {
    let dir = tempfile::tempdir().unwrap();
    let words: String = (0..2000).map(|i| format!("w{}x ", to_letters(i))).collect();
    let path = write_data_file(dir.path(), "words.txt", &words);

    let dispersion = |function| {
        let report = bench_file(&path, 101, function).unwrap();
        BucketStats::from_dataset(&report.dataset).unwrap().dispersion
    };

    assert!(dispersion(HashFunction::Crc32) < dispersion(HashFunction::StringLength));
    assert!(dispersion(HashFunction::StringLength) < dispersion(HashFunction::Zero));
}

#[test]
fn test_output_has_one_row_per_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data_file(dir.path(), "dickens.txt", TEXT);
    let report = bench_file(&path, 8, HashFunction::FirstAscii).unwrap();

    let mut out = Vec::new();
    write_dataset(&report.dataset, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().enumerate().all(|(i, line)| line.starts_with(&format!("{i} "))));
}

#[test]
fn test_missing_and_empty_text() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_data_file(dir.path(), "empty.txt", "");

    assert!(matches!(
        bench_file(dir.path().join("none.txt"), 8, HashFunction::Djb2),
        Err(PlotError::Io(_))
    ));
    assert!(matches!(
        bench_file(&empty, 8, HashFunction::Djb2),
        Err(PlotError::Validation { .. })
    ));
}

/// Base-26 letters for `n`, so generated words contain no digits.
fn to_letters(mut n: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    String::from_utf8(letters).unwrap()
}

proptest! {
    #[test]
    fn test_bucket_always_in_range(key in ".{0,32}", buckets in 1usize..5000) {
        for function in HashFunction::ALL {
            prop_assert!(function.bucket(key.as_bytes(), buckets) < buckets);
        }
    }
}
