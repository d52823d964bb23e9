//! The explicit state handle shared by the input handler and the renderer.

use chrono::{DateTime, Utc};

use crate::clock::{Clock, Elapsed, SystemClock};
use crate::error::UpdateResult;
use crate::state::progress::ProgressState;
use crate::update::StateUpdate;

/// Owns the single `ProgressState` of a panel session and the clock it is
/// measured against.
///
/// `apply_chunk` is the only way input reaches the state; a chunk that does
/// not decode leaves the state exactly as it was.
#[derive(Debug)]
pub struct ProgressStore<C: Clock = SystemClock> {
    state: ProgressState,
    clock: C,
}

impl<C: Clock> ProgressStore<C> {
    /// Create the store with the startup state, stamped with `clock.now()`.
    pub fn new(project: Option<&str>, clock: C) -> Self {
        let state = ProgressState::initialize(project, clock.now());
        Self { state, clock }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed::between(self.state.start_time, self.clock.now())
    }

    pub fn merge(&mut self, update: &StateUpdate) {
        self.state.merge(update);
    }

    /// Decode one input chunk and merge it.
    ///
    /// # Errors
    ///
    /// Returns the decoding error; the state is untouched in that case.
    pub fn apply_chunk(&mut self, chunk: &str) -> UpdateResult<()> {
        let update = StateUpdate::parse(chunk)?;
        self.merge(&update);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::UpdateError;
    use chrono::{Duration, TimeZone};
    use pc_protocol::PipelineStatus;

    use crate::state::progress::Status;

    fn store() -> (ProgressStore<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap());
        (ProgressStore::new(Some("Atlas"), clock.clone()), clock)
    }

    #[test]
    fn test_apply_valid_chunk() {
        let (mut store, _clock) = store();
        store.apply_chunk("{\"status\":\"done\"}\n").unwrap();
        assert_eq!(store.state().status, Status::Known(PipelineStatus::Done));
    }

    #[test]
    fn test_invalid_chunk_leaves_state_unchanged() {
        let (mut store, _clock) = store();
        store.apply_chunk(r#"{"status":"done"}"#).unwrap();
        let before = store.state().clone();

        for chunk in ["not json", "", "[]", "{\"status\":", "{} {}"] {
            assert!(store.apply_chunk(chunk).is_err());
            assert_eq!(store.state(), &before);
        }
    }

    #[test]
    fn test_apply_chunk_reports_reason() {
        let (mut store, _clock) = store();
        assert!(matches!(
            store.apply_chunk("42"),
            Err(UpdateError::NotAnObject { kind: "number" })
        ));
    }

    #[test]
    fn test_elapsed_follows_clock() {
        let (store, clock) = store();
        assert_eq!(store.elapsed().to_string(), "0m 0s");

        clock.advance(Duration::seconds(65));
        assert_eq!(store.elapsed().to_string(), "1m 5s");
    }
}
