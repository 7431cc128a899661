//! Unit tests for Settlement

use op_types::{OpError, OpValue, Settlement};

#[test]
fn fulfilled_record_has_status_tag() {
    let record = Settlement::fulfilled(OpValue::Text("A".to_string()));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["status"], "fulfilled");
    assert_eq!(json["value"], "A");
}

#[test]
fn rejected_record_has_status_tag() {
    let record = Settlement::rejected(OpError::timeout("late"));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["reason"]["kind"], "timeout");
    assert_eq!(json["reason"]["message"], "late");
}

#[test]
fn records_parse_from_tagged_json() {
    let record: Settlement =
        serde_json::from_str(r#"{"status": "fulfilled", "value": 42}"#).unwrap();
    assert_eq!(record, Settlement::fulfilled(OpValue::Int(42)));

    let record: Settlement = serde_json::from_str(
        r#"{"status": "rejected", "reason": {"kind": "internal", "message": "boom"}}"#,
    )
    .unwrap();
    assert_eq!(record, Settlement::rejected(OpError::internal("boom")));
}

#[test]
fn cloned_record_equals_original() {
    let record = Settlement::rejected(OpError::unavailable("gone"));
    assert_eq!(record.clone(), record);
}
