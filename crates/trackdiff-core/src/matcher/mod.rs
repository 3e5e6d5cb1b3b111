//! Greedy longest-run-first block matcher.
//!
//! Computes an [`EditScript`](crate::script::EditScript) that assembles a
//! target sequence from runs copied out of a source sequence plus fresh runs.
//! The largest relocated or unchanged blocks are committed first, which keeps
//! the result explainable in a report. It is not a minimum-edit alignment.
//!
//! Runs shorter than `min_length` are never treated as reused content, even
//! when textually identical.

mod candidates;
pub mod engine;

pub use engine::compute_edit_script;
