//! Structured logging infrastructure for hashplot

use std::io;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter used when `RUST_LOG` is unset (e.g. "info", "debug")
    pub level: String,
    /// Whether to use the compact single-line format
    pub compact: bool,
    /// Whether to emit ANSI colors; always off for file output
    pub ansi: bool,
    /// Optional file path for log output; stderr otherwise
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: true,
            ansi: true,
            file_path: None,
            include_targets: false,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter, preferring `RUST_LOG` over the configured level
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Builds the formatting layer: compact or pretty, stderr or an
    /// appending log file.
    pub fn fmt_layer<S>(&self) -> io::Result<Box<dyn Layer<S> + Send + Sync>>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let layer = fmt::layer().with_target(self.include_targets);

        let layer = match (&self.file_path, self.compact) {
            (Some(file_path), compact) => {
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(file_path)?;
                let layer = layer.with_ansi(false).with_writer(Mutex::new(file));
                if compact {
                    layer.compact().boxed()
                } else {
                    layer.pretty().boxed()
                }
            }
            (None, true) => layer
                .with_ansi(self.ansi)
                .with_writer(io::stderr)
                .compact()
                .boxed(),
            (None, false) => layer
                .with_ansi(self.ansi)
                .with_writer(io::stderr)
                .pretty()
                .boxed(),
        };
        Ok(layer)
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Output goes to stderr (or the configured file) so that stdout stays free
/// for the bucket rows `bucket-bench` prints.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let layer = config.fmt_layer()?;
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()?;
    Ok(())
}
