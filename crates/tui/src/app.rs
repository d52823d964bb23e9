//! Panel application state and event loop.
//!
//! This module defines the `App` struct that owns the progress store and the
//! canvas, and reacts to `CanvasEvent`s one at a time.

use anyhow::Result;
use pc_core::config::CanvasConfig;
use pc_core::{Clock, ProgressStore};
use std::io::Write;
use tokio_stream::{Stream, StreamExt};

use crate::canvas::Canvas;
use crate::event::CanvasEvent;
use crate::widgets::render_panel;

/// Main panel application state.
///
/// The store is only touched from `handle_event`, so updates and redraws
/// never interleave.
pub struct App<C: Clock, W: Write> {
    /// The single progress state of this session.
    pub store: ProgressStore<C>,
    /// Where frames are drawn.
    pub canvas: Canvas<W>,
    /// Cells in the progress bar.
    pub bar_width: usize,
    /// Stop when the input closes instead of refreshing forever.
    pub exit_on_eof: bool,
    /// Flag to indicate if the application should exit.
    pub should_exit: bool,
}

impl<C: Clock, W: Write> App<C, W> {
    pub fn new(config: &CanvasConfig, clock: C, writer: W) -> Self {
        Self {
            store: ProgressStore::new(config.project.as_deref(), clock),
            canvas: Canvas::new(writer),
            bar_width: config.bar_width,
            exit_on_eof: config.exit_on_eof,
            should_exit: false,
        }
    }

    /// Main event loop.
    ///
    /// Draws once with the startup state, then handles events until the
    /// stream ends or an exit is requested.
    pub async fn run<S>(&mut self, mut events: S) -> Result<()>
    where
        S: Stream<Item = CanvasEvent> + Unpin,
    {
        self.draw()?;

        while !self.should_exit {
            match events.next().await {
                Some(event) => self.handle_event(event)?,
                None => break,
            }
        }

        Ok(())
    }

    /// Apply one event, redrawing when the panel may have changed.
    pub fn handle_event(&mut self, event: CanvasEvent) -> Result<()> {
        match event {
            CanvasEvent::Input(chunk) => match self.store.apply_chunk(&chunk) {
                Ok(()) => self.draw()?,
                Err(err) => {
                    tracing::debug!(error = %err, "discarding input chunk");
                }
            },
            CanvasEvent::Tick => self.draw()?,
            CanvasEvent::InputClosed => {
                tracing::debug!(exit = self.exit_on_eof, "input closed");
                if self.exit_on_eof {
                    self.should_exit = true;
                }
            }
        }
        Ok(())
    }

    /// Render the current state and write it out.
    fn draw(&mut self) -> Result<()> {
        let frame = render_panel(self.store.state(), self.store.now(), self.bar_width);
        self.canvas.draw(&frame)?;
        Ok(())
    }
}
