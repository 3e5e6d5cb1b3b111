//! Edit script types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One run of an edit script, seen from the target side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// `length` target elements copied from `source[source_start..]`
    Match { length: usize, source_start: usize },
    /// `length` target elements with no counterpart in the source
    Waste { length: usize },
}

impl EditOp {
    /// Number of target elements this op covers.
    pub fn target_len(&self) -> usize {
        match *self {
            EditOp::Match { length, .. } | EditOp::Waste { length } => length,
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Match {
                length,
                source_start,
            } => write!(f, "m{}:{}.", length, source_start),
            EditOp::Waste { length } => write!(f, "w{}.", length),
        }
    }
}

/// Ordered ops that assemble a target from source runs and fresh runs.
///
/// Ops appear in increasing target order and together cover every target
/// index exactly once. `Display` renders the textual clause encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Total number of target elements covered.
    pub fn target_len(&self) -> usize {
        self.ops.iter().map(EditOp::target_len).sum()
    }

    pub fn match_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, EditOp::Match { .. }))
            .count()
    }

    pub fn waste_count(&self) -> usize {
        self.ops.len() - self.match_count()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ops.iter().try_for_each(|op| write!(f, "{}", op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_concatenates_clauses() {
        let script = EditScript::new(vec![
            EditOp::Match {
                length: 3,
                source_start: 0,
            },
            EditOp::Waste { length: 2 },
            EditOp::Match {
                length: 1,
                source_start: 7,
            },
        ]);
        assert_eq!(script.to_string(), "m3:0.w2.m1:7.");
        assert_eq!(script.target_len(), 6);
        assert_eq!(script.match_count(), 2);
        assert_eq!(script.waste_count(), 1);
    }

    #[test]
    fn test_empty_script_renders_empty() {
        assert_eq!(EditScript::default().to_string(), "");
    }
}
