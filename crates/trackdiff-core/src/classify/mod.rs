//! Change classification.
//!
//! Turns a decoded [`EditTable`](crate::script::EditTable) plus the two
//! tracks into a [`TrackSummary`] consumed by the report renderers.

pub mod classifier;
pub mod model;

pub use classifier::classify;
pub use model::{ElementChange, ElementEntry, SummaryCounts, TrackSummary};
