//! Error types for panel configuration.

use thiserror::Error;

/// Errors raised when a `CanvasConfig` cannot drive the panel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The periodic redraw needs a non-zero period.
    #[error("Refresh interval must be greater than zero")]
    ZeroRefreshInterval,

    /// The progress bar needs at least one cell.
    #[error("Progress bar width must be at least 1, got {width}")]
    InvalidBarWidth { width: usize },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
