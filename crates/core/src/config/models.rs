//! Resolved panel settings.

use std::time::Duration;

use crate::config::error::{ConfigError, ConfigResult};

/// How often the panel redraws when no update arrives.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Number of cells in the progress bar.
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Settings for one panel session.
///
/// # Example
///
/// ```rust
/// use pc_core::config::CanvasConfig;
///
/// let config = CanvasConfig {
///     project: Some("Atlas".to_string()),
///     ..CanvasConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Project name shown in the header. Falls back to a placeholder when
    /// absent or empty.
    pub project: Option<String>,

    /// Period of the unconditional redraw that keeps the elapsed time live.
    pub refresh_interval: Duration,

    /// Number of cells in the progress bar.
    pub bar_width: usize,

    /// Stop once standard input reaches end-of-file instead of refreshing
    /// until interrupted.
    pub exit_on_eof: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            project: None,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            bar_width: DEFAULT_BAR_WIDTH,
            exit_on_eof: false,
        }
    }
}

impl CanvasConfig {
    /// Check that the settings can drive the panel.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the refresh interval is zero or the bar has
    /// no cells.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if self.bar_width == 0 {
            return Err(ConfigError::InvalidBarWidth {
                width: self.bar_width,
            });
        }
        Ok(())
    }
}
