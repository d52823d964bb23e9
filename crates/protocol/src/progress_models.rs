//! Progress state models shared between the pipeline and the panel.
//!
//! These are the typed shapes of the values carried by a progress update.
//! The panel itself merges updates leniently (see `pc-core`), but a producer
//! that wants a checked schema can build its documents from these types.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Lifecycle status reported by the pipeline.
///
/// The wire form is the lowercase token: `"running"`, `"paused"`, `"done"`
/// or `"error"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    /// The pipeline is working through its milestones.
    Running,

    /// The pipeline is waiting (for a human, a lock, a retry window).
    Paused,

    /// The last milestone finished.
    Done,

    /// The pipeline stopped on a failure.
    Error,
}

impl PipelineStatus {
    /// Every status token, in lifecycle order.
    pub const ALL: [PipelineStatus; 4] = [
        PipelineStatus::Running,
        PipelineStatus::Paused,
        PipelineStatus::Done,
        PipelineStatus::Error,
    ];

    /// The lowercase wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStatus::Running => "running",
            PipelineStatus::Paused => "paused",
            PipelineStatus::Done => "done",
            PipelineStatus::Error => "error",
        }
    }

    /// Parse a wire token. Matching is exact.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == token)
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of the pipeline within its numbered milestones.
///
/// `current` is 1-based and is expected to stay within `1..=total`, though
/// nothing enforces it. Missing fields deserialize to zero / empty, so a
/// partial milestone object still replaces the whole record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, TS)]
pub struct Milestone {
    /// Index of the milestone being worked on.
    #[serde(default)]
    #[ts(type = "number")]
    pub current: i64,

    /// Number of milestones in the pipeline.
    #[serde(default)]
    #[ts(type = "number")]
    pub total: i64,

    /// Display name of the current milestone.
    #[serde(default)]
    pub name: String,
}

impl Milestone {
    pub fn new(current: i64, total: i64, name: impl Into<String>) -> Self {
        Self {
            current,
            total,
            name: name.into(),
        }
    }
}

/// A fine-grained step inside the current milestone.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, TS)]
pub struct Step {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub done: bool,
}
