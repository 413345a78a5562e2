//! # Hashplot
//!
//! Command-line front end for measuring and plotting hash-bucket occupancy.
//!
//! Three binaries share this crate: `bucket-bench` hashes the words of a
//! text and prints the load of every bucket, `bucket-hist` shows a histogram
//! of bucket indices, and `bucket-bars` saves a bar chart of element counts
//! per bucket.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
