//! Track data model.
//!
//! Elements compare by `(kind, id)` only. The address and stats of an
//! element legitimately change between runs without the element becoming a
//! different test, so `PartialEq`, `Eq` and `Ord` all ignore them.

use crate::hash::ContentId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Kinds starting with this prefix are assertable checks that carry stats.
pub const ASSERTABLE_PREFIX: &str = "c-";

/// Assertable kind whose stats aggregate a nested iteration.
pub const WITH_SUMMARY_KIND: &str = "c-with_summary";

/// Pass/fail/error counts recorded for an assertable element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub passed: u64,
    pub failed: u64,
    pub errors: u64,
}

impl Stats {
    pub fn new(passed: u64, failed: u64, errors: u64) -> Self {
        Self {
            passed,
            failed,
            errors,
        }
    }

    /// No failures and no errors.
    pub fn is_good(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

/// Whether a kind tag denotes an assertable check.
pub fn is_assertable_kind(kind: &str) -> bool {
    kind.starts_with(ASSERTABLE_PREFIX)
}

/// One reportable entry of a test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackElement {
    pub address: Option<String>,
    pub kind: String,
    pub id: Option<ContentId>,
    pub stats: Option<Stats>,
}

impl TrackElement {
    pub fn new(kind: impl Into<String>, id: Option<ContentId>) -> Self {
        Self {
            address: None,
            kind: kind.into(),
            id,
            stats: None,
        }
    }

    /// An assertable element with its id and stats.
    pub fn check(kind: impl Into<String>, id: ContentId, stats: Stats) -> Self {
        Self {
            address: None,
            kind: kind.into(),
            id: Some(id),
            stats: Some(stats),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn is_assertable(&self) -> bool {
        is_assertable_kind(&self.kind)
    }

    /// Verdict of this element's stats; missing stats count as good.
    pub fn is_good(&self) -> bool {
        self.stats.map_or(true, |s| s.is_good())
    }
}

impl PartialEq for TrackElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TrackElement {}

impl PartialOrd for TrackElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TrackElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Ordered log of one test run, in chronological order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track {
    elements: Vec<TrackElement>,
}

impl Track {
    pub fn new(elements: Vec<TrackElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[TrackElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrackElement> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackElement> {
        self.elements.iter()
    }
}

impl FromIterator<TrackElement> for Track {
    fn from_iter<I: IntoIterator<Item = TrackElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackElement;
    type IntoIter = std::slice::Iter<'a, TrackElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
