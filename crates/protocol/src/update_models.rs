//! Progress update documents.
//!
//! The pipeline writes one JSON object per line to the panel's standard
//! input. Each top-level key replaces the matching field of the panel state
//! wholesale; nested objects are never merged.
//!
//! ```json
//! {"milestone": {"current": 2, "total": 4, "name": "Build"}, "phase": "FASE 2"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::progress_models::{Milestone, PipelineStatus, Step};

/// The top-level keys the panel understands.
///
/// Any other key in an update is accepted and stored, but never displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Project,
    Milestone,
    Phase,
    Status,
    Steps,
    StartTime,
}

impl StateKey {
    pub const ALL: [StateKey; 6] = [
        StateKey::Project,
        StateKey::Milestone,
        StateKey::Phase,
        StateKey::Status,
        StateKey::Steps,
        StateKey::StartTime,
    ];

    /// The JSON key as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::Project => "project",
            StateKey::Milestone => "milestone",
            StateKey::Phase => "phase",
            StateKey::Status => "status",
            StateKey::Steps => "steps",
            StateKey::StartTime => "startTime",
        }
    }

    /// Look up a wire key. Matching is exact and case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == key)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed progress update, as a well-behaved producer would write it.
///
/// Every field is optional; absent fields are omitted from the serialized
/// document so they leave the panel state untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, TS)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub project: Option<String>,

    /// Replaces the whole milestone record when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub milestone: Option<Milestone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phase: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub status: Option<PipelineStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub steps: Option<Vec<Step>>,

    /// RFC 3339 timestamp the elapsed-time counter is measured from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub start_time: Option<DateTime<Utc>>,
}

impl ProgressUpdate {
    /// Serialize to a single line, ready to be written to the panel's input.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
