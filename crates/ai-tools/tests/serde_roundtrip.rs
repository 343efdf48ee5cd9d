#![cfg(feature = "serde")]

use ai_tools::{tags, TraceEvent, TraceLog};

#[test]
fn bounded_log_survives_json() {
    let mut log = TraceLog::bounded(8);
    log.push(TraceEvent::new(1, tags::DOOR_OPEN).with_agent(10).with_subject(20));
    log.push(TraceEvent::new(2, tags::DOOR_DEFER).with_agent(1));
    log.push(TraceEvent::new(3, "custom.tag").with_subject(4));

    let json = serde_json::to_string(&log).expect("serialize");
    let back: TraceLog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, log);
    assert_eq!(back.limit(), Some(8));
}

#[test]
fn limit_is_optional_in_documents() {
    let json = r#"{ "events": [{ "tick": 9, "tag": "task.stop", "agent": 1, "subject": 0 }] }"#;
    let back: TraceLog = serde_json::from_str(json).expect("deserialize");
    assert_eq!(back.limit(), None);
    assert_eq!(back.count(tags::TASK_STOP), 1);
}
