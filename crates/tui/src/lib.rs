//! # pc-tui
//!
//! Terminal status panel for progress-canvas.
//!
//! This crate renders the live panel: it reads newline-delimited JSON
//! updates from standard input, merges them into a `pc-core` store and
//! redraws after every accepted update and on a fixed refresh interval.

pub mod app;
pub mod canvas;
pub mod event;
pub mod widgets;

pub use app::App;
pub use canvas::Canvas;
pub use event::CanvasEvent;

use anyhow::Result;
use pc_core::config::CanvasConfig;
use pc_core::SystemClock;
use tokio::io::BufReader;

/// Run the panel on this process's standard input and output.
///
/// Returns only when the input closes with `exit_on_eof` set, or when the
/// terminal can no longer be written to.
pub async fn run_app(config: CanvasConfig) -> Result<()> {
    config.validate()?;

    let events = event::event_stream(BufReader::new(tokio::io::stdin()), config.refresh_interval);
    let mut app = App::new(&config, SystemClock, std::io::stdout());

    tracing::debug!(
        project = app.store.state().project.as_str(),
        refresh_secs = config.refresh_interval.as_secs_f64(),
        bar_width = config.bar_width,
        "starting progress panel"
    );

    app.run(events).await
}
