//! Test utilities and shared test helpers for hashplot.
//!
//! This module provides fixtures and helper functions that can be used across
//! all crates in the workspace for unit and integration testing.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, Once, PoisonError};

use crate::{BucketDataset, BucketRecord};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Serializes tests that change the process working directory.
static CURRENT_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Switches the working directory for the lifetime of the guard.
///
/// Label extraction only gives meaningful results for relative paths, so
/// tests that exercise it end to end run from inside a scratch directory.
/// The previous directory is restored on drop, panics included, and
/// concurrent guards wait for each other.
pub struct CurrentDirGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CurrentDirGuard {
    /// Locks and enters `dir`.
    pub fn enter(dir: &Path) -> Self {
        let lock = CURRENT_DIR_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = std::env::current_dir().expect("Failed to read current directory");
        std::env::set_current_dir(dir).expect("Failed to enter test directory");
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_data_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create data file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write data file");
    path
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Sample bucket data shaped like the benchmark output.
pub mod bucket_fixtures {
    use super::*;

    /// The three-bucket dataset used throughout the docs.
    pub fn small_dataset() -> BucketDataset {
        vec![
            BucketRecord::new(0, 3),
            BucketRecord::new(1, 7),
            BucketRecord::new(2, 2),
        ]
        .into()
    }

    /// A table of `buckets` slots with a skewed, deterministic fill.
    pub fn skewed_dataset(buckets: i64) -> BucketDataset {
        (0..buckets)
            .map(|i| BucketRecord::new(i, (i.unsigned_abs() * 7) % 13))
            .collect()
    }

    /// Renders a dataset the way the benchmark prints it: `index count` per line.
    pub fn to_benchmark_text(dataset: &BucketDataset) -> String {
        dataset
            .records()
            .iter()
            .map(|r| format!("{}\n", r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0001, 0.001);
        assert_approx_eq(1.0, 0.9999, 0.001);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.05);
    }

    #[test]
    fn test_benchmark_text() {
        let text = bucket_fixtures::to_benchmark_text(&bucket_fixtures::small_dataset());
        assert_eq!(text, "0 3\n1 7\n2 2\n");
    }

    #[test]
    fn test_skewed_dataset_len() {
        assert_eq!(bucket_fixtures::skewed_dataset(64).len(), 64);
    }

    #[test]
    fn test_write_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(dir.path(), "crc32.txt", "0 1\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "0 1\n");
    }

    #[test]
    fn test_current_dir_guard_restores_on_panic() {
        let dir = tempfile::tempdir().unwrap();
        let before = std::env::current_dir().unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = CurrentDirGuard::enter(dir.path());
            panic!("boom");
        }));

        assert!(result.is_err());
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
