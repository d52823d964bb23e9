use chrono::{TimeZone, Utc};
use pc_protocol::*;
use serde_json::json;

#[test]
fn test_pipeline_status_serialization() {
    let json = serde_json::to_value(PipelineStatus::Done).expect("Failed to serialize PipelineStatus");
    assert_eq!(json, "done");

    let deserialized: PipelineStatus =
        serde_json::from_value(json!("paused")).expect("Failed to deserialize PipelineStatus");
    assert_eq!(deserialized, PipelineStatus::Paused);

    // Tokens are lowercase only
    assert!(serde_json::from_value::<PipelineStatus>(json!("RUNNING")).is_err());
}

#[test]
fn test_pipeline_status_tokens_match_serde() {
    for status in PipelineStatus::ALL {
        let json = serde_json::to_value(status).expect("Failed to serialize PipelineStatus");
        assert_eq!(json, status.as_str());
        assert_eq!(PipelineStatus::from_token(status.as_str()), Some(status));
    }
    assert_eq!(PipelineStatus::from_token("waiting"), None);
}

#[test]
fn test_partial_milestone_deserializes_with_zeroed_fields() {
    let milestone: Milestone =
        serde_json::from_value(json!({ "current": 2 })).expect("Failed to deserialize Milestone");

    assert_eq!(milestone.current, 2);
    assert_eq!(milestone.total, 0);
    assert_eq!(milestone.name, "");
}

#[test]
fn test_state_key_lookup() {
    assert_eq!(StateKey::from_key("startTime"), Some(StateKey::StartTime));
    assert_eq!(StateKey::from_key("milestone"), Some(StateKey::Milestone));
    assert_eq!(StateKey::from_key("start_time"), None);
    assert_eq!(StateKey::from_key("Status"), None);

    for key in StateKey::ALL {
        assert_eq!(StateKey::from_key(key.as_str()), Some(key));
    }
}

#[test]
fn test_progress_update_omits_absent_fields() {
    let update = ProgressUpdate {
        status: Some(PipelineStatus::Done),
        ..Default::default()
    };

    let line = update.to_line().expect("Failed to serialize ProgressUpdate");
    assert_eq!(line, r#"{"status":"done"}"#);
}

#[test]
fn test_progress_update_uses_wire_key_names() {
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let update = ProgressUpdate {
        milestone: Some(Milestone::new(2, 4, "Build")),
        start_time: Some(start),
        ..Default::default()
    };

    let json = serde_json::to_value(&update).expect("Failed to serialize ProgressUpdate");

    assert_eq!(json["milestone"], json!({ "current": 2, "total": 4, "name": "Build" }));
    assert_eq!(json["startTime"], "2026-03-01T12:00:00Z");
    assert!(json.get("start_time").is_none());

    let deserialized: ProgressUpdate =
        serde_json::from_value(json).expect("Failed to deserialize ProgressUpdate");
    assert_eq!(deserialized, update);
}
