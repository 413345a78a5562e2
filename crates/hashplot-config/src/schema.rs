//! Configuration schema definitions using serde with validation attributes.

use hashplot_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rendering settings shared by the histogram and bar chart binaries.
///
/// Every section has a default, so a settings file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlotSettings {
    /// Figure geometry.
    #[validate]
    pub figure: FigureConfig,
    /// Histogram (display variant) settings.
    #[validate]
    pub histogram: HistogramConfig,
    /// Bar chart (saved variant) settings.
    #[validate]
    pub bar_chart: BarChartConfig,
    /// Colors and fonts.
    #[validate]
    pub style: StyleConfig,
    /// Axis captions.
    #[validate]
    pub labels: AxisLabels,
    /// Log verbosity used when `RUST_LOG` is unset.
    #[validate]
    pub logging: LoggingSettings,
}

/// Figure size, expressed the way plotting libraries usually do: inches and DPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FigureConfig {
    /// Figure width in inches.
    #[validate(range(min = 1.0, max = 100.0, message = "Width must be between 1 and 100 inches"))]
    pub width_inches: f64,
    /// Figure height in inches.
    #[validate(range(min = 1.0, max = 100.0, message = "Height must be between 1 and 100 inches"))]
    pub height_inches: f64,
    /// Dots per inch.
    #[validate(range(min = 10, max = 1200, message = "DPI must be between 10 and 1200"))]
    pub dpi: u32,
}

/// Histogram binning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HistogramConfig {
    /// Number of equal-width bins.
    #[validate(range(min = 1, max = 10000, message = "Bin count must be between 1 and 10000"))]
    pub bins: usize,
}

/// Bar chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BarChartConfig {
    /// Added on both sides of the bucket-index range.
    #[validate(range(min = 0, max = 1000000, message = "X padding must be between 0 and 1000000"))]
    pub x_padding: i64,
    /// Added above the largest count.
    #[validate(range(min = 0, max = 1000000, message = "Y padding must be between 0 and 1000000"))]
    pub y_padding: u64,
    /// Bar width in bucket-index units.
    #[validate(range(min = 0.05, max = 1.0, message = "Bar width must be between 0.05 and 1.0"))]
    pub bar_width: f64,
}

/// Colors and fonts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StyleConfig {
    /// Bar fill color (hex format).
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Bar color must be a #RRGGBB hex color"))]
    pub bar_color: String,
    /// Bar outline color (hex format).
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Edge color must be a #RRGGBB hex color"))]
    pub edge_color: String,
    /// Background color (hex format).
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Background color must be a #RRGGBB hex color"))]
    pub background_color: String,
    /// Font family for all text.
    #[validate(length(min = 1, message = "Font family cannot be empty"))]
    pub font_family: String,
    /// Title size in pixels at the configured DPI.
    #[validate(range(min = 8, max = 400, message = "Title font size must be between 8 and 400"))]
    pub title_font_size: u32,
    /// Axis description size in pixels.
    #[validate(range(min = 8, max = 400, message = "Label font size must be between 8 and 400"))]
    pub label_font_size: u32,
}

/// Axis captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AxisLabels {
    /// X axis caption.
    pub x: String,
    /// Y axis caption.
    pub y: String,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `hashplot_graphs=debug`.
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,
    /// Single-line output instead of the multi-line pretty format.
    pub compact: bool,
    /// Colored output on stderr.
    pub ansi: bool,
    /// Append logs to this file instead of stderr.
    #[validate(length(min = 1, message = "Log file path cannot be empty"))]
    pub file: Option<String>,
    /// Prefix each line with the emitting module.
    pub include_targets: bool,
}

impl LoggingSettings {
    /// Subscriber configuration for these settings.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            compact: self.compact,
            ansi: self.ansi,
            file_path: self.file.clone(),
            include_targets: self.include_targets,
        }
    }
}

impl FigureConfig {
    /// Pixel dimensions of the rendered image.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_inches * dpi).round() as u32,
            (self.height_inches * dpi).round() as u32,
        )
    }
}
