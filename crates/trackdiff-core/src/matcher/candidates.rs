//! Priority queue of block-match candidates.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A run of `length` equal elements at `source[source_start..]` and
/// `target[target_start..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub length: usize,
    pub source_start: usize,
    pub target_start: usize,
}

/// Longer runs first; among equal lengths the leftmost source start wins,
/// then the leftmost target start.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| other.source_start.cmp(&self.source_start))
            .then_with(|| other.target_start.cmp(&self.target_start))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct CandidateQueue {
    heap: BinaryHeap<Candidate>,
}

impl CandidateQueue {
    pub fn push(&mut self, candidate: Candidate) {
        self.heap.push(candidate);
    }

    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
