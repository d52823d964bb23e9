//! Panel configuration.
//!
//! The panel is configured from command-line arguments only; this module
//! holds the resolved settings and their validation.

pub mod error;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use models::CanvasConfig;
