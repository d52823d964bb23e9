//! Lenient conversion of update values into typed state fields.
//!
//! Updates are not validated against a schema: whatever a producer sends for
//! a known key replaces that field. These conversions make sure a wrongly
//! typed value still yields something displayable instead of an error.

use chrono::{DateTime, Utc};
use pc_protocol::{Milestone, PipelineStatus, Step};
use serde_json::Value;

use crate::state::progress::Status;

/// Strings pass through; any other value becomes its compact JSON text.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integers pass through, floats truncate toward zero, numeric strings are
/// parsed. Anything else, including a missing value, is zero.
pub fn integer(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// A whole milestone record. Fields the value lacks become zero / empty.
pub fn milestone(value: &Value) -> Milestone {
    let Value::Object(fields) = value else {
        return Milestone::default();
    };
    Milestone {
        current: integer(fields.get("current")),
        total: integer(fields.get("total")),
        name: fields.get("name").map(text).unwrap_or_default(),
    }
}

pub fn status(value: &Value) -> Status {
    match value {
        Value::String(token) => match PipelineStatus::from_token(token) {
            Some(known) => Status::Known(known),
            None => Status::Other(token.clone()),
        },
        other => Status::Other(other.to_string()),
    }
}

pub fn steps(value: &Value) -> Vec<Step> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| Step {
            name: item.get("name").map(text).unwrap_or_default(),
            done: item.get("done").and_then(Value::as_bool).unwrap_or(false),
        })
        .collect()
}

/// RFC 3339 strings and integer epoch milliseconds are accepted.
pub fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
