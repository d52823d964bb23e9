//! Runtime events for the panel.
//!
//! The panel reacts to two sources, multiplexed onto one stream:
//! - Lines arriving on its input (one progress update per line)
//! - A periodic tick that keeps the elapsed-time counter moving

use std::io::ErrorKind;
use std::pin::Pin;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::select;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_stream::Stream;

/// Events the panel loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasEvent {
    /// One line of input, without its line terminator.
    Input(String),
    /// The input reached end-of-file or failed; no more `Input` follows.
    InputClosed,
    /// The refresh interval elapsed.
    Tick,
}

/// Build the event stream for a panel session.
///
/// Input lines are yielded as they arrive. The first tick comes one
/// `refresh` period after the stream is created, then every period after
/// that, whether or not input is still open. A line that is not valid UTF-8
/// is skipped; any other read error closes the input.
pub fn event_stream<R>(
    input: R,
    refresh: Duration,
) -> Pin<Box<dyn Stream<Item = CanvasEvent> + Send + 'static>>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let mut lines = input.lines();
    let mut ticker = interval_at(Instant::now() + refresh, refresh);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let event_stream = async_stream::stream! {
        let mut input_open = true;
        loop {
            let event = select! {
                line = lines.next_line(), if input_open => match line {
                    Ok(Some(line)) => Some(CanvasEvent::Input(line)),
                    Ok(None) => {
                        input_open = false;
                        Some(CanvasEvent::InputClosed)
                    }
                    Err(err) if err.kind() == ErrorKind::InvalidData => {
                        tracing::debug!(error = %err, "skipping undecodable input line");
                        None
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "input stream failed, closing it");
                        input_open = false;
                        Some(CanvasEvent::InputClosed)
                    }
                },
                _ = ticker.tick() => Some(CanvasEvent::Tick),
            };

            if let Some(event) = event {
                yield event;
            }
        }
    };

    Box::pin(event_stream)
}
