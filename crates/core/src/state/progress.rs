//! The panel's progress state and its shallow-merge update rule.

use chrono::{DateTime, Utc};
use pc_protocol::{Milestone, PipelineStatus, StateKey, Step};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::state::coerce;
use crate::update::StateUpdate;

/// Project name used when none is given on the command line.
pub const DEFAULT_PROJECT: &str = "Unknown";

/// Phase label shown before the pipeline reports one.
pub const INITIAL_PHASE: &str = "FASE 0";

/// Name of the milestone shown before the pipeline reports one.
pub const INITIAL_MILESTONE: &str = "Setup";

/// Status as last reported, including tokens outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Known(PipelineStatus),
    Other(String),
}

impl Status {
    /// Upper-cased label for the panel footer.
    pub fn label(&self) -> String {
        match self {
            Status::Known(status) => status.as_str().to_uppercase(),
            Status::Other(raw) => raw.to_uppercase(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Known(status) => f.write_str(status.as_str()),
            Status::Other(raw) => f.write_str(raw),
        }
    }
}

/// Last-known pipeline progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    pub project: String,
    pub milestone: Milestone,
    pub phase: String,
    pub status: Status,
    /// Kept for producers that report steps; the panel does not show them.
    pub steps: Vec<Step>,
    /// `None` once an update replaced it with something that is not a time.
    pub start_time: Option<DateTime<Utc>>,
    /// Keys outside the known set, stored as received.
    pub extra: BTreeMap<String, Value>,
}

impl ProgressState {
    /// Build the startup state.
    ///
    /// An absent or empty project name falls back to [`DEFAULT_PROJECT`].
    pub fn initialize(project: Option<&str>, now: DateTime<Utc>) -> Self {
        let project = project
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_PROJECT);

        Self {
            project: project.to_string(),
            milestone: Milestone::new(1, 1, INITIAL_MILESTONE),
            phase: INITIAL_PHASE.to_string(),
            status: Status::Known(PipelineStatus::Running),
            steps: Vec::new(),
            start_time: Some(now),
            extra: BTreeMap::new(),
        }
    }

    /// Apply an update with shallow-merge semantics.
    ///
    /// Each top-level key replaces the whole matching field; keys the update
    /// does not mention are left alone. A `milestone` object is never merged
    /// field by field, so `{"milestone":{"current":2}}` also resets `total`
    /// and `name`.
    pub fn merge(&mut self, update: &StateUpdate) {
        for (key, value) in update.iter() {
            match StateKey::from_key(key) {
                Some(StateKey::Project) => self.project = coerce::text(value),
                Some(StateKey::Milestone) => self.milestone = coerce::milestone(value),
                Some(StateKey::Phase) => self.phase = coerce::text(value),
                Some(StateKey::Status) => self.status = coerce::status(value),
                Some(StateKey::Steps) => self.steps = coerce::steps(value),
                Some(StateKey::StartTime) => self.start_time = coerce::timestamp(value),
                None => {
                    tracing::trace!(key = %key, "storing unrecognised update key");
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }
}
