//! Graph geometry helpers: axis limits, binning, and color parsing.

use hashplot_common::{BucketDataset, PlotError, Result};
use hashplot_config::{BarChartConfig, FigureConfig};
use plotters::style::RGBColor;

/// Inclusive axis limits of the bar chart, in data units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLimits {
    /// Left edge of the x axis.
    pub x_min: i64,
    /// Right edge of the x axis.
    pub x_max: i64,
    /// Bottom of the y axis.
    pub y_min: u64,
    /// Top of the y axis.
    pub y_max: u64,
}

/// One histogram bin, `[start, end)` except the last bin which includes `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower edge.
    pub start: f64,
    /// Upper edge.
    pub end: f64,
    /// Number of values that fell into the bin.
    pub count: u64,
}

/// Utility functions for graph generation.
pub struct GraphUtils;

impl GraphUtils {
    /// Pixel dimensions of the output image.
    pub fn figure_pixels(figure: &FigureConfig) -> (u32, u32) {
        figure.pixels()
    }

    /// Bar chart limits: index range widened by `x_padding` on both sides,
    /// counts from zero to the maximum plus `y_padding`.
    pub fn bar_chart_limits(dataset: &BucketDataset, config: &BarChartConfig) -> Result<AxisLimits> {
        let (min_index, max_index) = dataset
            .index_range()
            .ok_or_else(|| PlotError::graph("cannot compute axis limits of an empty dataset"))?;
        let max_count = dataset.max_count().unwrap_or(0);

        Ok(AxisLimits {
            x_min: min_index.saturating_sub(config.x_padding),
            x_max: max_index.saturating_add(config.x_padding),
            y_min: 0,
            y_max: max_count.saturating_add(config.y_padding),
        })
    }

    /// Splits the values into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// When all values are equal the range is widened to `[v - 0.5, v + 0.5]`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn histogram_bins(values: &[i64], bins: usize) -> Result<Vec<Bin>> {
        if bins == 0 {
            return Err(PlotError::validation_field("bin count must be positive", "bins"));
        }
        let min = values
            .iter()
            .min()
            .ok_or_else(|| PlotError::graph("cannot bin an empty dataset"))?;
        let max = values.iter().max().copied().unwrap_or(*min);

        let (lo, hi) = if min == &max {
            (*min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (*min as f64, max as f64)
        };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0u64; bins];
        for &value in values {
            let slot = ((value as f64 - lo) / width).floor() as usize;
            counts[slot.min(bins - 1)] += 1;
        }

        Ok(counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                start: lo + width * i as f64,
                end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
                count,
            })
            .collect())
    }

    /// Parses a `#RRGGBB` string, falling back to black.
    pub fn parse_color(color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        RGBColor(0, 0, 0)
    }
}
