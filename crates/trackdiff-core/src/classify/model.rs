//! Change classification output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Buckets are plain `Vec`s in track order for deterministic serialization.

use crate::track::model::TrackElement;
use serde::{Deserialize, Serialize};

/// A single element that exists on one side only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementEntry {
    /// Index in the track the element came from
    pub index: usize,
    pub element: TrackElement,
}

/// A matched element whose outcome changed between the two runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementChange {
    pub source_index: usize,
    pub target_index: usize,
    /// The element as recorded in the source run
    pub before: TrackElement,
    /// The element as recorded in the target run
    pub after: TrackElement,
}

/// Bucketed semantic changes between two tracks.
///
/// Only assertable elements are classified. Matched elements whose verdict
/// did not change are not recorded anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackSummary {
    /// Good source elements with no counterpart in the target
    pub deleted_good: Vec<ElementEntry>,
    /// Failing source elements with no counterpart in the target
    pub deleted_wrong: Vec<ElementEntry>,
    /// Good target elements with no counterpart in the source
    pub new_good: Vec<ElementEntry>,
    /// Failing target elements with no counterpart in the source
    pub new_wrong: Vec<ElementEntry>,
    /// Matched elements that went from failing to good
    pub wrong_to_good: Vec<ElementChange>,
    /// Matched elements that went from good to failing
    pub good_to_wrong: Vec<ElementChange>,
    /// Matched `c-with_summary` elements whose aggregate stats changed
    pub with_data_changed: Vec<ElementChange>,
}

/// Bucket sizes of a [`TrackSummary`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryCounts {
    pub deleted_good: usize,
    pub deleted_wrong: usize,
    pub new_good: usize,
    pub new_wrong: usize,
    pub wrong_to_good: usize,
    pub good_to_wrong: usize,
    pub with_data_changed: usize,
}

impl SummaryCounts {
    pub fn total(&self) -> usize {
        self.deleted_good
            + self.deleted_wrong
            + self.new_good
            + self.new_wrong
            + self.wrong_to_good
            + self.good_to_wrong
            + self.with_data_changed
    }
}

impl TrackSummary {
    pub fn counts(&self) -> SummaryCounts {
        SummaryCounts {
            deleted_good: self.deleted_good.len(),
            deleted_wrong: self.deleted_wrong.len(),
            new_good: self.new_good.len(),
            new_wrong: self.new_wrong.len(),
            wrong_to_good: self.wrong_to_good.len(),
            good_to_wrong: self.good_to_wrong.len(),
            with_data_changed: self.with_data_changed.len(),
        }
    }

    /// No bucket holds anything.
    pub fn is_unchanged(&self) -> bool {
        self.counts().total() == 0
    }
}
