//! Index-level view of an edit script.

use crate::script::model::{EditOp, EditScript};
use serde::{Deserialize, Serialize};

/// Decoded edit script: which indices matched, disappeared or are new.
///
/// The match relation is a bijection between matched source and target
/// indices and is stored in both directions for constant-time lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTable {
    source_disappeared: Vec<usize>,
    target_new: Vec<usize>,
    source_to_target: Vec<Option<usize>>,
    target_to_source: Vec<Option<usize>>,
}

impl EditTable {
    /// Sorted source indices with no counterpart in the target.
    pub fn source_disappeared(&self) -> &[usize] {
        &self.source_disappeared
    }

    /// Sorted target indices with no counterpart in the source.
    pub fn target_new(&self) -> &[usize] {
        &self.target_new
    }

    /// Target index matched to source index `i`.
    pub fn source_match(&self, i: usize) -> Option<usize> {
        self.source_to_target.get(i).copied().flatten()
    }

    /// Source index matched to target index `j`.
    pub fn target_match(&self, j: usize) -> Option<usize> {
        self.target_to_source.get(j).copied().flatten()
    }

    /// Matched `(source, target)` pairs in increasing target order.
    pub fn matched_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.target_to_source
            .iter()
            .enumerate()
            .filter_map(|(j, i)| i.map(|i| (i, j)))
    }

    pub fn matched_len(&self) -> usize {
        self.target_to_source.iter().flatten().count()
    }

    pub fn source_len(&self) -> usize {
        self.source_to_target.len()
    }

    pub fn target_len(&self) -> usize {
        self.target_to_source.len()
    }
}

/// Accumulates matches one op at a time, then derives the unmatched sets.
#[derive(Debug)]
pub(crate) struct TableBuilder {
    source_to_target: Vec<Option<usize>>,
    target_to_source: Vec<Option<usize>>,
}

impl TableBuilder {
    pub(crate) fn new(source_len: usize, target_len: usize) -> Self {
        Self {
            source_to_target: vec![None; source_len],
            target_to_source: vec![None; target_len],
        }
    }

    /// Whether every source index in `start..start + length` is unmatched.
    pub(crate) fn source_free(&self, start: usize, length: usize) -> bool {
        self.source_to_target[start..start + length]
            .iter()
            .all(Option::is_none)
    }

    /// Pair `source[source_start + k]` with `target[target_start + k]`.
    pub(crate) fn record_match(&mut self, length: usize, source_start: usize, target_start: usize) {
        for k in 0..length {
            self.source_to_target[source_start + k] = Some(target_start + k);
            self.target_to_source[target_start + k] = Some(source_start + k);
        }
    }

    pub(crate) fn finish(self) -> EditTable {
        let unmatched = |v: &[Option<usize>]| -> Vec<usize> {
            v.iter()
                .enumerate()
                .filter(|(_, m)| m.is_none())
                .map(|(idx, _)| idx)
                .collect()
        };
        EditTable {
            source_disappeared: unmatched(&self.source_to_target),
            target_new: unmatched(&self.target_to_source),
            source_to_target: self.source_to_target,
            target_to_source: self.target_to_source,
        }
    }
}

impl EditScript {
    /// Build the index table directly, without going through text.
    ///
    /// # Panics
    ///
    /// Panics if the script addresses indices beyond `source_len` or
    /// `target_len`. Scripts produced by the matcher for tracks of those
    /// lengths never do.
    pub fn to_table(&self, source_len: usize, target_len: usize) -> EditTable {
        let mut builder = TableBuilder::new(source_len, target_len);
        let mut cursor = 0;
        for op in self.ops() {
            if let EditOp::Match {
                length,
                source_start,
            } = *op
            {
                builder.record_match(length, source_start, cursor);
            }
            cursor += op.target_len();
        }
        builder.finish()
    }
}
