//! # Hashplot Bench
//!
//! Produces the bucket occupancy files the plotting binaries read.
//!
//! A text is split into words, every distinct word is inserted into a
//! separately chained hash table, and the number of words per bucket is
//! written out as `index count` rows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod hash_functions;
pub mod hash_table;
pub mod report;
pub mod words;

pub use hash_functions::*;
pub use hash_table::*;
pub use report::*;
pub use words::*;
