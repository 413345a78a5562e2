//! Default values as named constants.

use crate::schema::*;

/// Position of the output directory among the positional arguments.
pub const OUTPUT_DIR_ARG_INDEX: usize = 1;
/// Position of the data file among the positional arguments.
pub const DATA_FILE_ARG_INDEX: usize = 2;

/// `bucket-bench`: position of the text file to split into words.
pub const TEXT_FILE_ARG_INDEX: usize = 1;
/// `bucket-bench`: position of the bucket count.
pub const BUCKETS_ARG_INDEX: usize = 2;
/// `bucket-bench`: position of the hash function name.
pub const HASH_FUNCTION_ARG_INDEX: usize = 3;

/// Figure width in inches.
pub const FIGURE_WIDTH_INCHES: f64 = 15.0;
/// Figure height in inches.
pub const FIGURE_HEIGHT_INCHES: f64 = 10.0;
/// Output resolution.
pub const FIGURE_DPI: u32 = 240;

/// Default histogram bin count.
pub const HISTOGRAM_BINS: usize = 10;

/// Padding on both sides of the bucket-index range.
pub const BAR_X_PADDING: i64 = 20;
/// Padding above the tallest bar.
pub const BAR_Y_PADDING: u64 = 5;
/// Bar width in index units.
pub const BAR_WIDTH: f64 = 0.8;

/// Bar fill.
pub const BAR_COLOR: &str = "#1f77b4";
/// Bar outline.
pub const EDGE_COLOR: &str = "#000000";
/// Figure background.
pub const BACKGROUND_COLOR: &str = "#ffffff";

/// Font family for all text.
pub const FONT_FAMILY: &str = "sans-serif";
/// Title font size (pixels).
pub const TITLE_FONT_SIZE: u32 = 72;
/// Axis caption font size (pixels).
pub const LABEL_FONT_SIZE: u32 = 48;

/// X axis caption.
pub const X_AXIS_LABEL: &str = "Bucket index";
/// Y axis caption.
pub const Y_AXIS_LABEL: &str = "Elements number";

/// Default log filter.
pub const LOG_LEVEL: &str = "info";

/// Compact single-line log format by default.
pub const LOG_COMPACT: bool = true;

/// Colored stderr logs by default.
pub const LOG_ANSI: bool = true;

/// Module targets are left out of log lines by default.
pub const LOG_INCLUDE_TARGETS: bool = false;

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            figure: FigureConfig::default(),
            histogram: HistogramConfig::default(),
            bar_chart: BarChartConfig::default(),
            style: StyleConfig::default(),
            labels: AxisLabels::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_inches: FIGURE_WIDTH_INCHES,
            height_inches: FIGURE_HEIGHT_INCHES,
            dpi: FIGURE_DPI,
        }
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: HISTOGRAM_BINS,
        }
    }
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            x_padding: BAR_X_PADDING,
            y_padding: BAR_Y_PADDING,
            bar_width: BAR_WIDTH,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            bar_color: BAR_COLOR.to_string(),
            edge_color: EDGE_COLOR.to_string(),
            background_color: BACKGROUND_COLOR.to_string(),
            font_family: FONT_FAMILY.to_string(),
            title_font_size: TITLE_FONT_SIZE,
            label_font_size: LABEL_FONT_SIZE,
        }
    }
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: X_AXIS_LABEL.to_string(),
            y: Y_AXIS_LABEL.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LOG_LEVEL.to_string(),
            compact: LOG_COMPACT,
            ansi: LOG_ANSI,
            file: None,
            include_targets: LOG_INCLUDE_TARGETS,
        }
    }
}
