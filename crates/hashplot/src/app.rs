//! Wiring between the command line, the settings, the benchmark and the
//! plot pipeline.

use crate::cli::{BenchArgs, PlotArgs, Variant};
use crate::error::{AppError, AppResult};
use hashplot_bench::{bench_file, write_dataset, BenchReport};
use hashplot_common::{init_logging, PlotError};
use hashplot_config::{ConfigLoader, PlotSettings};
use hashplot_graphs::PlotManager;
use std::path::PathBuf;
use tracing::{debug, info};

/// One invocation of `bucket-hist` or `bucket-bars`.
#[derive(Debug, Clone)]
pub struct HashPlotApp {
    variant: Variant,
    args: PlotArgs,
    settings: PlotSettings,
}

impl HashPlotApp {
    /// Loads and validates settings for `args`.
    pub fn new(variant: Variant, args: PlotArgs) -> AppResult<Self> {
        let settings = ConfigLoader::load(args.config.as_deref())?;
        Ok(Self {
            variant,
            args,
            settings,
        })
    }

    /// Settings in effect.
    pub const fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    /// Installs the tracing subscriber described by the logging settings.
    pub fn init_logging(&self) -> AppResult<()> {
        init_logging(&self.settings.logging.to_logging_config())
            .map_err(|e| AppError::Logging(e.to_string()))
    }

    /// Produces the chart and returns the PNG path.
    ///
    /// For the histogram this is the temporary preview that was opened; for
    /// the bar chart it is `{output_dir}{label}.png`.
    pub fn execute(&self) -> AppResult<PathBuf> {
        let manager = PlotManager::new(self.settings.clone());
        debug!(variant = ?self.variant, data_file = %self.args.data_file, "Starting");

        let path = match self.variant {
            Variant::Histogram => manager.show_histogram(&self.args.data_file)?,
            Variant::BarChart => {
                manager.save_bar_chart(&self.args.output_dir, &self.args.data_file)?
            }
        };

        info!(path = %path.display(), "Done");
        Ok(path)
    }
}

/// Entry point shared by both binaries: configure, log, plot.
pub fn run(variant: Variant, args: PlotArgs) -> AppResult<PathBuf> {
    let app = HashPlotApp::new(variant, args)?;
    app.init_logging()?;
    app.execute()
}

/// Runs `bucket-bench` without touching the global subscriber: hashes the
/// text and writes the rows to `--output` or stdout.
pub fn execute_bench(args: &BenchArgs) -> AppResult<BenchReport> {
    let report = bench_file(&args.text_file, args.buckets, args.function)?;

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(PlotError::from)?;
            write_dataset(&report.dataset, std::io::BufWriter::new(file))?;
            info!(path = %path.display(), "Wrote bucket rows");
        }
        None => write_dataset(&report.dataset, std::io::stdout().lock())?,
    }
    Ok(report)
}

/// Entry point of `bucket-bench`: configure logging, then benchmark.
pub fn run_bench(args: &BenchArgs) -> AppResult<BenchReport> {
    let settings = ConfigLoader::load(args.config.as_deref())?;
    init_logging(&settings.logging.to_logging_config())
        .map_err(|e| AppError::Logging(e.to_string()))?;
    execute_bench(args)
}
