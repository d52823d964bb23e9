//! Time sources and elapsed-time formatting.
//!
//! The panel reads "now" through the `Clock` trait so that rendering can be
//! driven by a controllable clock in tests.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::{Arc, Mutex};

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep a handle while the
/// store under test owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Time since the pipeline started, split into whole minutes and seconds.
///
/// Minutes are floored, and seconds are the floored remainder, which keeps
/// the sign of the difference. A start time in the future therefore yields
/// negative values; an unknown start time displays as `NaNm NaNs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    Known { minutes: i64, seconds: i64 },
    Unknown,
}

impl Elapsed {
    pub fn between(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let Some(start) = start else {
            return Elapsed::Unknown;
        };
        let millis = (now - start).num_milliseconds();
        Elapsed::Known {
            minutes: millis.div_euclid(MILLIS_PER_MINUTE),
            seconds: (millis % MILLIS_PER_MINUTE).div_euclid(MILLIS_PER_SECOND),
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elapsed::Known { minutes, seconds } => write!(f, "{minutes}m {seconds}s"),
            Elapsed::Unknown => f.write_str("NaNm NaNs"),
        }
    }
}
