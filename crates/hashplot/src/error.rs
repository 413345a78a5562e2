//! Application-wide error types using thiserror.

use hashplot_common::PlotError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Loading, rendering or configuration failed.
    #[error(transparent)]
    Plot(#[from] PlotError),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type for the binaries.
pub type AppResult<T> = Result<T, AppError>;
