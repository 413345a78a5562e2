//! Positional command-line interfaces of the three binaries.

use clap::{CommandFactory, FromArgMatches, Parser};
use hashplot_bench::HashFunction;
use hashplot_config::{
    BUCKETS_ARG_INDEX, DATA_FILE_ARG_INDEX, HASH_FUNCTION_ARG_INDEX, OUTPUT_DIR_ARG_INDEX,
    TEXT_FILE_ARG_INDEX,
};
use std::ffi::OsString;
use std::path::PathBuf;

/// Which chart a binary produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Histogram of bucket indices, opened in a viewer.
    Histogram,
    /// Bar chart of counts per bucket, saved as PNG.
    BarChart,
}

impl Variant {
    /// Binary name.
    pub const fn program_name(self) -> &'static str {
        match self {
            Self::Histogram => "bucket-hist",
            Self::BarChart => "bucket-bars",
        }
    }

    /// One-line help text.
    pub const fn about(self) -> &'static str {
        match self {
            Self::Histogram => "Show a histogram of the bucket indices in a hash benchmark file",
            Self::BarChart => "Save a bar chart of element counts per bucket as {output_dir}{label}.png",
        }
    }
}

/// `<output_dir> <data_file>`; the histogram accepts and ignores `output_dir`.
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct PlotArgs {
    /// Output directory prefix, concatenated with the label as-is (end it with '/')
    #[arg(index = OUTPUT_DIR_ARG_INDEX, value_name = "OUTPUT_DIR")]
    pub output_dir: String,

    /// Two-column data file: bucket index and element count per line
    #[arg(index = DATA_FILE_ARG_INDEX, value_name = "DATA_FILE")]
    pub data_file: String,

    /// Optional YAML file overriding the default plot settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl PlotArgs {
    /// Parses the process arguments, exiting with usage on error.
    pub fn parse_for(variant: Variant) -> Self {
        Self::try_parse_for(variant, std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses `args` (including the program name) for `variant`.
    pub fn try_parse_for<I, T>(variant: Variant, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .name(variant.program_name())
            .about(variant.about())
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

/// `bucket-bench <text_file> <buckets> <hash_function>`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bucket-bench",
    version,
    about = "Hash the words of a text into a chained table and print `index count` per bucket"
)]
pub struct BenchArgs {
    /// Text to split into words (runs of ASCII letters)
    #[arg(index = TEXT_FILE_ARG_INDEX, value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Number of buckets in the table
    #[arg(index = BUCKETS_ARG_INDEX, value_name = "BUCKETS")]
    pub buckets: usize,

    /// Hash function to fill the table with
    #[arg(index = HASH_FUNCTION_ARG_INDEX, value_name = "HASH_FUNCTION")]
    pub function: HashFunction,

    /// Write the rows to this file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Optional YAML file; only its logging section applies here
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
