// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sample_record() -> TaskRecord {
    TaskRecord {
        id: TaskId::parse("660f8400-e29b-41d4-a716-446655440111").unwrap(),
        cycle_id: CycleId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap(),
        brand_id: BrandId::parse("770f8400-e29b-41d4-a716-446655440222").unwrap(),
        agent_name: "meta-ads-postclick-analyst".to_string(),
        status: TaskStatus::InProgress,
        started_at: Some("2026-03-01T10:00:00Z".to_string()),
        runner_picked_at: None,
        delivered_at: None,
        blocked_reason: None,
        summary: None,
    }
}

#[yare::parameterized(
    pending = { TaskStatus::Pending, false },
    in_progress = { TaskStatus::InProgress, false },
    delivered = { TaskStatus::Delivered, true },
    blocked = { TaskStatus::Blocked, true },
    unknown = { TaskStatus::Unknown, false },
)]
fn terminal_states_are_exactly_delivered_and_blocked(status: TaskStatus, terminal: bool) {
    assert_eq!(status.is_terminal(), terminal);
}

#[yare::parameterized(
    pending = { TaskStatus::Pending, "\"PENDING\"" },
    in_progress = { TaskStatus::InProgress, "\"IN_PROGRESS\"" },
    delivered = { TaskStatus::Delivered, "\"DELIVERED\"" },
    blocked = { TaskStatus::Blocked, "\"BLOCKED\"" },
)]
fn status_wire_form_is_screaming_snake_case(status: TaskStatus, wire: &str) {
    assert_eq!(serde_json::to_string(&status).unwrap(), wire);
    let restored: TaskStatus = serde_json::from_str(wire).unwrap();
    assert_eq!(restored, status);
}

#[test]
fn unrecognized_status_string_deserializes_as_unknown() {
    let status: TaskStatus = serde_json::from_str("\"NEEDS_REVIEW\"").unwrap();
    assert_eq!(status, TaskStatus::Unknown);
    assert!(!status.is_terminal());
}

#[test]
fn record_roundtrip_preserves_nullable_fields() {
    let mut record = sample_record();
    record.status = TaskStatus::Delivered;
    record.delivered_at = Some("2026-03-01T10:25:00Z".to_string());
    record.summary = Some("3 placements paused".to_string());

    let json = serde_json::to_string(&record).unwrap();
    let restored: TaskRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
}

#[test]
fn record_tolerates_extra_store_columns() {
    // Store rows carry columns this subsystem does not model.
    let json = r#"{
        "id": "660f8400-e29b-41d4-a716-446655440111",
        "cycle_id": "550e8400-e29b-41d4-a716-446655440000",
        "brand_id": "770f8400-e29b-41d4-a716-446655440222",
        "agent_name": "google-ads-creative-producer",
        "status": "PENDING",
        "created_at": "2026-03-01T09:00:00Z",
        "retries": 0
    }"#;
    let record: TaskRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.status, TaskStatus::Pending);
    assert!(record.started_at.is_none());
}

#[test]
fn in_progress_patch_serializes_only_set_fields() {
    let patch = TaskPatch::in_progress("2026-03-01T10:00:00Z".to_string());
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "status": "IN_PROGRESS",
            "started_at": "2026-03-01T10:00:00Z",
        })
    );
}

#[test]
fn empty_patch_serializes_to_empty_object() {
    let json = serde_json::to_value(TaskPatch::default()).unwrap();
    assert_eq!(json, serde_json::json!({}));
}
