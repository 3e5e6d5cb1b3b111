#![allow(clippy::unwrap_used, clippy::expect_used)]

use trackdiff_core::errors::{ExErrorKind, TrackDiffError};
use trackdiff_core::evolution::{compare_track_texts, EvolutionOptions};
use trackdiff_core::logging_facility::test_capture::init_test_capture;
use trackdiff_core::{log_op_end, log_op_error, log_op_start};
use trackdiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_MATCH_OPS, FIELD_MIN_LENGTH, FIELD_RUN_ID, FIELD_SIDE, FIELD_SOURCE_LEN,
    FIELD_TARGET_LEN, FIELD_WASTE_OPS,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find_events(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_error_event_includes_error_code() {
    let capture = init_test_capture();
    let op_name = "test_error_event_unique_3";

    let err = TrackDiffError::MalformedEditScript {
        position: 4,
        reason: "missing terminator".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 5);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let error_event = capture
        .find_events(op_name, EVENT_END_ERROR)
        .into_iter()
        .next()
        .expect("Should have error event");

    assert_eq!(
        error_event.field(FIELD_ERR_CODE),
        Some("ERR_MALFORMED_EDIT_SCRIPT")
    );
    assert_eq!(
        error_event.field(FIELD_ERR_KIND),
        Some(format!("{:?}", ExErrorKind::MalformedEditScript).as_str())
    );
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, side = "source", min_length = 3);

    let start_event = capture
        .find_events(op_name, EVENT_START)
        .into_iter()
        .next()
        .expect("Should have start event");

    assert_eq!(start_event.field(FIELD_SIDE), Some("source"));
    assert_eq!(start_event.field(FIELD_MIN_LENGTH), Some("3"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    // This should panic because no such event exists
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_compare_emits_start_and_end_with_run_id() {
    let capture = init_test_capture();
    // Lengths 5 -> 7 are unique to this test.
    let source = "s-x\n".repeat(5);
    let target = "s-x\n".repeat(7);

    let (_, _, evolution) =
        compare_track_texts(&source, &target, &EvolutionOptions::default()).unwrap();
    let run_id = evolution.run_id.as_str();

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("compare_tracks")
            && e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_RUN_ID) == Some(run_id)
            && e.field(FIELD_SOURCE_LEN) == Some("5")
            && e.field(FIELD_TARGET_LEN) == Some("7")
            && e.field(FIELD_MIN_LENGTH) == Some("1")
    });
    assert_eq!(starts, 1);

    let end = capture
        .find_events("compare_tracks", EVENT_END)
        .into_iter()
        .find(|e| e.field(FIELD_RUN_ID) == Some(run_id))
        .expect("Should have end event for this run");
    assert_eq!(end.field(FIELD_MATCH_OPS), Some("1"));
    assert_eq!(end.field(FIELD_WASTE_OPS), Some("1"));
    assert!(end.field(FIELD_DURATION_MS).is_some());

    let parse_ends = capture.count_events(|e| {
        e.op.as_deref() == Some("parse_track")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field(FIELD_SIDE) == Some("target")
            && e.field("len") == Some("7")
    });
    assert!(parse_ends >= 1);
}

#[test]
fn test_parse_failure_emits_end_error() {
    let capture = init_test_capture();

    let err = compare_track_texts(
        "s-x\n",
        "s-x\nc-unique_logging_kind\n",
        &EvolutionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TrackDiffError::MalformedTrack { line: 2, .. }));

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("parse_track")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_SIDE) == Some("target")
            && e.field(FIELD_ERR_CODE) == Some("ERR_MALFORMED_TRACK")
    });
    assert!(errors >= 1);
}
