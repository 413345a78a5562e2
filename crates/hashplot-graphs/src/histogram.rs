//! Histogram of the bucket-index column.
//!
//! Each row contributes one sample, its bucket index, so the histogram shows
//! how many rows fall into each index range.

use crate::traits::GraphRenderer;
use crate::utils::{Bin, GraphUtils};
use hashplot_common::{BucketDataset, Result};
use hashplot_config::PlotSettings;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Histogram renderer.
#[derive(Debug, Clone, Default)]
pub struct HistogramRenderer {
    settings: PlotSettings,
}

impl HistogramRenderer {
    /// Creates a renderer with the given settings.
    pub const fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    /// Bins the index column using the configured bin count.
    pub fn bins(&self, dataset: &BucketDataset) -> Result<Vec<Bin>> {
        let indices: Vec<i64> = dataset.indices().collect();
        GraphUtils::histogram_bins(&indices, self.settings.histogram.bins)
    }

    /// Top of the y axis: tallest bin plus 5%, at least 1.
    #[allow(clippy::cast_precision_loss)]
    fn y_max(bins: &[Bin]) -> f64 {
        let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
        (tallest * 1.05).max(1.0)
    }
}

impl GraphRenderer for HistogramRenderer {
    fn name(&self) -> &'static str {
        "histogram"
    }

    fn description(&self) -> &'static str {
        "Histogram of bucket indices"
    }

    fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        dataset: &BucketDataset,
        title: &str,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        let bins = self.bins(dataset)?;
        let style = &self.settings.style;
        self.fill_background(root)?;

        let x_start = bins.first().map_or(0.0, |b| b.start);
        let x_end = bins.last().map_or(1.0, |b| b.end);
        let y_end = Self::y_max(&bins);

        let title_font = (style.font_family.as_str(), style.title_font_size);
        let label_font = (style.font_family.as_str(), style.label_font_size);
        let label_area = style.label_font_size * 3;

        let mut chart = ChartBuilder::on(root)
            .caption(title, title_font)
            .margin(style.label_font_size)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area)
            .build_cartesian_2d(x_start..x_end, 0.0..y_end)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(self.settings.labels.x.as_str())
            .y_desc(self.settings.labels.y.as_str())
            .axis_desc_style(label_font)
            .label_style(label_font)
            .draw()?;

        let fill = GraphUtils::parse_color(&style.bar_color);
        chart.draw_series(bins.iter().map(|bin| {
            Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], fill.filled())
        }))?;

        tracing::debug!(bins = bins.len(), "Drew histogram");
        Ok(())
    }
}
