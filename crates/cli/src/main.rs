//! `progress-canvas`: live terminal panel for a multi-phase pipeline.
//!
//! Pipe newline-delimited JSON progress updates into standard input:
//!
//! ```text
//! my-pipeline | progress-canvas Atlas
//! ```

use std::time::Duration;

use clap::Parser;
use pc_core::config::CanvasConfig;
use tracing_subscriber::EnvFilter;

/// Live status panel for a build/deploy pipeline.
///
/// Reads one JSON progress update per line from standard input and redraws
/// the panel after each one, and every few seconds to keep the timer live.
#[derive(Parser, Debug)]
#[command(name = "progress-canvas", version, about)]
struct Cli {
    /// Project name shown in the panel header
    project: Option<String>,

    /// Seconds between redraws when no update arrives
    #[arg(long, default_value_t = 5)]
    refresh_secs: u64,

    /// Number of cells in the progress bar
    #[arg(long, default_value_t = 20)]
    bar_width: usize,

    /// Exit when standard input closes instead of refreshing until interrupted
    #[arg(long)]
    exit_on_eof: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn canvas_config(&self) -> CanvasConfig {
        CanvasConfig {
            project: self.project.clone(),
            refresh_interval: Duration::from_secs(self.refresh_secs),
            bar_width: self.bar_width,
            exit_on_eof: self.exit_on_eof,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // stdout belongs to the panel, so logs always go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = cli.canvas_config();
    config.validate()?;

    pc_tui::run_app(config)
        .await
        .map_err(|e| color_eyre::eyre::eyre!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canvas_config() {
        let cli = Cli::parse_from(["progress-canvas"]);
        assert_eq!(cli.canvas_config(), CanvasConfig::default());
    }

    #[test]
    fn test_project_and_flags() {
        let cli = Cli::parse_from([
            "progress-canvas",
            "--bar-width",
            "10",
            "Atlas",
            "--refresh-secs",
            "2",
            "--exit-on-eof",
        ]);
        let config = cli.canvas_config();

        assert_eq!(config.project.as_deref(), Some("Atlas"));
        assert_eq!(config.bar_width, 10);
        assert_eq!(config.refresh_interval, Duration::from_secs(2));
        assert!(config.exit_on_eof);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
