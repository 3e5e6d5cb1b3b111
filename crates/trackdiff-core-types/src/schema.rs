//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.
//!
//! `tracing` field names are identifiers at the log sites, so the pipeline
//! writes them literally. Consumers of captured or JSON logs read them back
//! through these constants, and the logging tests pin every key below.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Comparison inputs
pub const FIELD_SIDE: &str = "side";
pub const FIELD_MIN_LENGTH: &str = "min_length";

// Collection sizes
pub const FIELD_SOURCE_LEN: &str = "source_len";
pub const FIELD_TARGET_LEN: &str = "target_len";
pub const FIELD_MATCH_OPS: &str = "match_ops";
pub const FIELD_WASTE_OPS: &str = "waste_ops";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
