//! # Hashplot Common
//!
//! Shared types, utilities, and common functionality for hashplot.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace: the bucket dataset model and its statistics, the error
//! type, logging initialization, and label extraction from data file paths.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod stats;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{PlotError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use stats::BucketStats;
pub use types::*;
pub use utils::*;
