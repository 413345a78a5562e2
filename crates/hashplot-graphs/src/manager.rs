//! Orchestrates one invocation: label, load, summarize, render, output.

use crate::bar_chart::BarChartRenderer;
use crate::data_loader::DataLoader;
use crate::histogram::HistogramRenderer;
use crate::traits::GraphRenderer;
use hashplot_common::{extract_label, output_path, BucketDataset, BucketStats, PlotError, Result};
use hashplot_config::PlotSettings;
use std::path::{Path, PathBuf};

/// A dataset ready to plot, together with its label.
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    /// Plot title and output file stem.
    pub label: String,
    /// Rows in file order.
    pub dataset: BucketDataset,
}

/// Runs the histogram and bar chart pipelines with shared settings.
#[derive(Debug, Clone, Default)]
pub struct PlotManager {
    settings: PlotSettings,
}

impl PlotManager {
    /// Creates a new manager.
    pub const fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    /// Settings in use.
    pub const fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    /// Derives the label from `data_path`, loads the file and logs its statistics.
    pub fn prepare(&self, data_path: &str) -> Result<LabeledDataset> {
        let label = extract_label(data_path);
        let dataset = DataLoader::load(data_path)?;

        if let Some(stats) = BucketStats::from_dataset(&dataset) {
            stats.log(&label);
        }
        Ok(LabeledDataset { label, dataset })
    }

    /// Renders the histogram into a fresh PNG in the system temp directory
    /// and returns its path. Nothing is written to the output directory.
    pub fn render_histogram_preview(&self, data_path: &str) -> Result<PathBuf> {
        self.render_histogram_preview_in(&std::env::temp_dir(), data_path)
    }

    /// Like [`Self::render_histogram_preview`], with the preview placed in `dir`.
    /// No file is left behind when rendering fails.
    pub fn render_histogram_preview_in(&self, dir: &Path, data_path: &str) -> Result<PathBuf> {
        let LabeledDataset { label, dataset } = self.prepare(data_path)?;

        let prefix = format!("{}-", label.replace(['/', '\\'], "_"));
        let preview = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".png")
            .tempfile_in(dir)?
            .into_temp_path();

        // dropping the temp path on a failed render removes the file
        HistogramRenderer::new(self.settings.clone()).render_to_file(&dataset, &label, &preview)?;
        preview.keep().map_err(|e| PlotError::Io(e.error))
    }

    /// Renders the histogram and opens it in the platform image viewer.
    pub fn show_histogram(&self, data_path: &str) -> Result<PathBuf> {
        let preview = self.render_histogram_preview(data_path)?;
        open::that(&preview).map_err(|e| {
            PlotError::graph_with_source(format!("failed to open {}", preview.display()), e)
        })?;
        tracing::info!(path = %preview.display(), "Opened histogram");
        Ok(preview)
    }

    /// Renders the bar chart to `{output_dir}{label}.png`, overwriting any
    /// existing file, and returns that path.
    pub fn save_bar_chart(&self, output_dir: &str, data_path: &str) -> Result<PathBuf> {
        let LabeledDataset { label, dataset } = self.prepare(data_path)?;
        let target = PathBuf::from(output_path(output_dir, &label));

        BarChartRenderer::new(self.settings.clone()).render_to_file(&dataset, &label, &target)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashplot_common::test_utils::write_data_file;

    #[test]
    fn test_prepare_derives_label() {
        let dir = tempfile::tempdir().unwrap();
        write_data_file(dir.path(), "djb2.txt", "0 3\n1 7\n2 2\n");

        // the label starts after the leading separator of the absolute path
        let data_path = format!("{}/djb2.txt", dir.path().display());
        let prepared = PlotManager::default().prepare(&data_path).unwrap();

        assert_eq!(prepared.dataset.len(), 3);
        assert!(!prepared.label.is_empty());
    }

    #[test]
    fn test_prepare_missing_file() {
        let err = PlotManager::default().prepare("missing/none.txt").unwrap_err();
        assert!(matches!(err, PlotError::Io(_)));
    }

    #[test]
    fn test_prepare_huge_counts() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_data_file(dir.path(), "zero.txt", "0 18446744073709551615\n1 1\n");

        let prepared = PlotManager::default().prepare(data.to_str().unwrap()).unwrap();
        assert_eq!(prepared.dataset.total_elements(), u128::from(u64::MAX) + 1);
    }

    #[test]
    fn test_failed_preview_leaves_no_file() {
        let data_dir = tempfile::tempdir().unwrap();
        let preview_dir = tempfile::tempdir().unwrap();
        let data = write_data_file(data_dir.path(), "empty.txt", "\n");

        let err = PlotManager::default()
            .render_histogram_preview_in(preview_dir.path(), data.to_str().unwrap())
            .unwrap_err();

        assert!(matches!(err, PlotError::Graph { .. }));
        assert_eq!(std::fs::read_dir(preview_dir.path()).unwrap().count(), 0);
    }
}
