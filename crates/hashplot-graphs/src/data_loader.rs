//! Loader for benchmark output files.
//!
//! The hashing benchmark prints one `index count` pair per line. Files that
//! went through a spreadsheet come back comma separated, so both whitespace
//! and commas are accepted as field separators. A comma separates exactly
//! two fields, so `1,,2` has an empty middle field and is rejected.

use hashplot_common::{BucketDataset, BucketRecord, PlotError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// One comma with optional surrounding whitespace, or a run of whitespace.
static FIELD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*|\s+").expect("Invalid field separator regex pattern"));

/// Number of columns every row must have.
pub const EXPECTED_FIELDS: usize = 2;

/// Reads a headerless two-column bucket file.
pub struct DataLoader;

impl DataLoader {
    /// Loads and parses the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BucketDataset> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            rows = dataset.len(),
            "Loaded bucket dataset"
        );
        Ok(dataset)
    }

    /// Parses bucket rows from text. Blank lines are skipped.
    pub fn parse(content: &str) -> Result<BucketDataset> {
        let (normalized, line_numbers) = normalize(content);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(normalized.as_bytes());

        let mut records = Vec::with_capacity(line_numbers.len());
        for (row, result) in reader.records().enumerate() {
            let line = line_numbers.get(row).copied().unwrap_or_default();
            let record = result.map_err(|e| PlotError::parse_with_source(line, "unreadable row", e))?;

            if record.len() != EXPECTED_FIELDS {
                return Err(PlotError::parse(
                    line,
                    format!("expected {EXPECTED_FIELDS} fields, found {}", record.len()),
                ));
            }

            let bucket: BucketRecord = record.deserialize(None).map_err(|e| {
                let fields: Vec<&str> = record.iter().collect();
                PlotError::parse_with_source(line, format!("invalid bucket row '{}'", fields.join(" ")), e)
            })?;
            records.push(bucket);
        }

        Ok(BucketDataset::new(records))
    }
}

/// Rewrites every non-blank line as comma separated text and remembers the
/// original 1-based line number of each kept line.
fn normalize(content: &str) -> (String, Vec<u64>) {
    let mut normalized = String::with_capacity(content.len());
    let mut line_numbers = Vec::new();

    for (line_no, line) in (1u64..).zip(content.lines()) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        normalized.push_str(&FIELD_SEPARATOR.replace_all(line, ","));
        normalized.push('\n');
        line_numbers.push(line_no);
    }

    (normalized, line_numbers)
}

/// Convenience wrapper around [`DataLoader::load`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<BucketDataset> {
    DataLoader::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace_rows() {
        let dataset = DataLoader::parse("0 3\n1 7\n2 2\n").unwrap();
        assert_eq!(
            dataset.records(),
            &[
                BucketRecord::new(0, 3),
                BucketRecord::new(1, 7),
                BucketRecord::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_parse_mixed_separators() {
        let dataset = DataLoader::parse("0,3\n1\t 7\n  2 ,  2  \r\n").unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[2], BucketRecord::new(2, 2));
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let dataset = DataLoader::parse("5 1\n-3 4\n0 0\n").unwrap();
        let indices: Vec<i64> = dataset.indices().collect();
        assert_eq!(indices, vec![5, -3, 0]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dataset = DataLoader::parse("\n0 1\n\n   \n1 2\n").unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_empty_comma_field_is_counted() {
        for text in ["1,,2\n", "1,2,\n", ",1,2\n", "1 , , 2\n"] {
            let err = DataLoader::parse(text).unwrap_err();
            assert!(
                matches!(err, PlotError::Parse { line: 1, .. }),
                "{text:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_spaced_comma_is_one_separator() {
        let dataset = DataLoader::parse("4 , 9\n5,\t1\n").unwrap();
        assert_eq!(
            dataset.records(),
            &[BucketRecord::new(4, 9), BucketRecord::new(5, 1)]
        );
    }

    #[test]
    fn test_wrong_column_count_reports_line() {
        let err = DataLoader::parse("0 1\n\n1 2 3\n").unwrap_err();
        match err {
            PlotError::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("found 3"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = DataLoader::parse("7\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = DataLoader::parse("0 1\nx 2\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 2, .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(DataLoader::parse("0 -1\n").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(DataLoader::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset("/nonexistent/dir/data.txt").unwrap_err();
        assert!(matches!(err, PlotError::Io(_)));
    }
}
