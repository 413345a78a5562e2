//! Bar chart with one bar per bucket.

use crate::traits::GraphRenderer;
use crate::utils::{AxisLimits, GraphUtils};
use hashplot_common::{BucketDataset, Result};
use hashplot_config::PlotSettings;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Bar chart renderer: bar height is the element count of the bucket.
#[derive(Debug, Clone, Default)]
pub struct BarChartRenderer {
    settings: PlotSettings,
}

impl BarChartRenderer {
    /// Creates a renderer with the given settings.
    pub const fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    /// Axis limits for `dataset` under the configured padding.
    pub fn limits(&self, dataset: &BucketDataset) -> Result<AxisLimits> {
        GraphUtils::bar_chart_limits(dataset, &self.settings.bar_chart)
    }

    /// Bar corners in data coordinates, centered on the bucket index.
    #[allow(clippy::cast_precision_loss)]
    fn bars(&self, dataset: &BucketDataset) -> Vec<[(f64, f64); 2]> {
        let half = self.settings.bar_chart.bar_width / 2.0;
        dataset
            .records()
            .iter()
            .map(|r| {
                let x = r.index as f64;
                [(x - half, 0.0), (x + half, r.count as f64)]
            })
            .collect()
    }
}

impl GraphRenderer for BarChartRenderer {
    fn name(&self) -> &'static str {
        "bar_chart"
    }

    fn description(&self) -> &'static str {
        "Element count per bucket"
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
        let limits = self.limits(dataset)?;
        let style = &self.settings.style;
        self.fill_background(root)?;

        let title_font = (style.font_family.as_str(), style.title_font_size);
        let label_font = (style.font_family.as_str(), style.label_font_size);
        let label_area = style.label_font_size * 3;

        let mut chart = ChartBuilder::on(root)
            .caption(title, title_font)
            .margin(style.label_font_size)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area)
            .build_cartesian_2d(
                limits.x_min as f64..limits.x_max as f64,
                limits.y_min as f64..limits.y_max as f64,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(self.settings.labels.x.as_str())
            .y_desc(self.settings.labels.y.as_str())
            .axis_desc_style(label_font)
            .label_style(label_font)
            .draw()?;

        let fill = GraphUtils::parse_color(&style.bar_color);
        let edge = GraphUtils::parse_color(&style.edge_color);
        let bars = self.bars(dataset);

        chart.draw_series(bars.iter().map(|corners| Rectangle::new(*corners, fill.filled())))?;
        chart.draw_series(bars.iter().map(|corners| Rectangle::new(*corners, edge.stroke_width(1))))?;

        tracing::debug!(bars = bars.len(), ?limits, "Drew bar chart");
        Ok(())
    }
}
