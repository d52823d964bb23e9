//! Panel widgets.
//!
//! This module contains the text builders that make up the status panel.

pub mod panel;
pub mod progress_bar;

pub use panel::{render_panel, MilestoneMark};
pub use progress_bar::{percent, progress_bar};
