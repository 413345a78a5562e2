//! Graph renderer trait shared by the histogram and bar chart.

use crate::utils::GraphUtils;
use hashplot_common::{BucketDataset, PlotError, Result};
use hashplot_config::PlotSettings;
use image::{ColorType, ImageFormat};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Trait for graph renderers that draw a bucket dataset onto a plotters backend.
pub trait GraphRenderer {
    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;

    /// Settings used for geometry, colors and fonts.
    fn settings(&self) -> &PlotSettings;

    /// Draws the chart onto `root`. The caller presents the area.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        dataset: &BucketDataset,
        title: &str,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static;

    /// Renders to a PNG file, replacing whatever was there.
    ///
    /// The PNG encoder is chosen explicitly, so paths such as `out/.png`
    /// whose extension the image crate cannot infer are still written.
    fn render_to_file(&self, dataset: &BucketDataset, title: &str, path: &Path) -> Result<()> {
        let (width, height) = GraphUtils::figure_pixels(&self.settings().figure);
        let buffer = self.render_to_buffer(dataset, title)?;

        image::save_buffer_with_format(path, &buffer, width, height, ColorType::Rgb8, ImageFormat::Png)
            .map_err(|e| {
                PlotError::graph_with_source(format!("failed to write {}", path.display()), e)
            })?;

        tracing::info!(
            graph = self.name(),
            path = %path.display(),
            width,
            height,
            "Rendered chart"
        );
        Ok(())
    }

    /// Renders into an in-memory RGB buffer of the configured size.
    fn render_to_buffer(&self, dataset: &BucketDataset, title: &str) -> Result<Vec<u8>> {
        if dataset.is_empty() {
            return Err(PlotError::graph(format!("{}: dataset is empty", self.name())));
        }

        let (width, height) = GraphUtils::figure_pixels(&self.settings().figure);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw(&root, dataset, title)?;
            root.present()?;
        }
        Ok(buffer)
    }

    /// Fills the background with the configured color.
    fn fill_background<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        let background = GraphUtils::parse_color(&self.settings().style.background_color);
        root.fill(&background)?;
        Ok(())
    }
}
