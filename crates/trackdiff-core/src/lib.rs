//! trackdiff Core - test-run evolution engine
//!
//! This crate compares two runs of a structured test suite ("tracks") and
//! explains how their outcome evolved:
//! - Track model and its line-oriented text codec
//! - CRC-64 content ids for track elements
//! - Greedy longest-run-first block matcher producing edit scripts
//! - Edit script codec, index table and independent replay check
//! - Classification of changes into report buckets
//! - Text and JSON report rendering
//! - Deterministic generators for property tests
//!
//! ```
//! use trackdiff_core::evolution::{compare_track_texts, EvolutionOptions};
//!
//! let source = "c-check [0000000000000001] r-0-1-0\n";
//! let target = "c-check [0000000000000001] r-1-0-0\n";
//! let (_, _, evolution) =
//!     compare_track_texts(source, target, &EvolutionOptions::default()).unwrap();
//! assert_eq!(evolution.summary.wrong_to_good.len(), 1);
//! ```

pub mod classify;
pub mod errors;
pub mod evolution;
pub mod fuzz;
pub mod hash;
pub mod logging_facility;
pub mod matcher;
pub mod report;
pub mod script;
pub mod track;

// Used by the exported logging macros.
pub use trackdiff_core_types;

// Re-export commonly used types
pub use classify::{classify, TrackSummary};
pub use errors::{ExError, ExErrorKind, Result, TrackDiffError};
pub use evolution::{
    compare_track_files, compare_track_texts, compare_tracks, Evolution, EvolutionOptions,
};
pub use hash::{ContentId, Crc64};
pub use matcher::compute_edit_script;
pub use script::{decode_edit_script, replay_check, EditOp, EditScript, EditTable};
pub use track::{parse_track, serialize_track, Stats, Track, TrackElement};
