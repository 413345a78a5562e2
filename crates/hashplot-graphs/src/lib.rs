//! # Hashplot Graphs
//!
//! Loads bucket occupancy files and renders them with plotters.
//!
//! Two charts are provided: a histogram of the bucket-index column for
//! interactive viewing, and a bar chart of element counts per bucket that is
//! saved as a PNG.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bar_chart;
pub mod data_loader;
pub mod histogram;
pub mod manager;
pub mod traits;
pub mod utils;

pub use bar_chart::*;
pub use data_loader::*;
pub use histogram::*;
pub use manager::*;
pub use traits::*;
pub use utils::*;
