//! Replay check for edit scripts.
//!
//! Re-simulates a script against the actual elements, independently of the
//! matcher that produced it. A matcher-produced script that fails this check
//! is a defect in the matcher, so [`assert_replay_consistent`] panics rather
//! than returning an error.

use crate::script::codec::parse_clauses;
use crate::script::model::EditOp;
use std::cmp::Ordering;

/// Replay `script` over `source` and `target`.
///
/// Holds when every `m<len>:<i>` clause copies `source[i..i + len)` onto the
/// next `len` target elements (pairwise equal under `Ord`) using only source
/// indices not consumed by an earlier clause, and the script ends exactly at
/// the end of `target`. Text that does not parse fails the check.
pub fn replay_check<T: Ord>(source: &[T], target: &[T], script: &str) -> bool {
    let Ok(clauses) = parse_clauses(script) else {
        return false;
    };

    let mut available = vec![true; source.len()];
    let mut cursor = 0usize;

    for (_, op) in clauses {
        let length = op.target_len();
        let Some(end) = cursor.checked_add(length).filter(|&end| end <= target.len()) else {
            return false;
        };
        if let EditOp::Match { source_start, .. } = op {
            for k in 0..length {
                let i = source_start + k;
                if i >= source.len() || !available[i] {
                    return false;
                }
                if source[i].cmp(&target[cursor + k]) != Ordering::Equal {
                    return false;
                }
                available[i] = false;
            }
        }
        cursor = end;
    }

    cursor == target.len()
}

/// Panic unless `script` passes [`replay_check`].
///
/// # Panics
///
/// Panics when the script is inconsistent with its own inputs. Only call this
/// on scripts produced by the matcher.
pub fn assert_replay_consistent<T: Ord>(source: &[T], target: &[T], script: &str) {
    assert!(
        replay_check(source, target, script),
        "matcher produced an edit script that fails replay \
         (source_len={}, target_len={}, script={})",
        source.len(),
        target.len(),
        script
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_replay_accepts_valid_script() {
        assert!(replay_check(&chars("AB"), &chars("BA"), "m1:1.m1:0."));
        assert!(replay_check(&chars("ABC"), &chars("AxC"), "m1:0.w1.m1:2."));
        assert!(replay_check::<char>(&[], &[], ""));
    }

    #[test]
    fn test_replay_rejects_wrong_content() {
        assert!(!replay_check(&chars("AB"), &chars("BA"), "m2:0."));
    }

    #[test]
    fn test_replay_rejects_reused_source() {
        assert!(!replay_check(&chars("A"), &chars("AA"), "m1:0.m1:0."));
    }

    #[test]
    fn test_replay_rejects_short_and_long_scripts() {
        assert!(!replay_check(&chars("AB"), &chars("AB"), "m1:0."));
        assert!(!replay_check(&chars("AB"), &chars("AB"), "m2:0.w1."));
    }

    #[test]
    fn test_replay_rejects_out_of_range_source() {
        assert!(!replay_check(&chars("A"), &chars("AA"), "m2:0."));
    }

    #[test]
    fn test_replay_rejects_malformed_text() {
        assert!(!replay_check(&chars("A"), &chars("A"), "m1:0"));
    }

    #[test]
    #[should_panic(expected = "fails replay")]
    fn test_assert_replay_panics_on_inconsistent_script() {
        assert_replay_consistent(&chars("AB"), &chars("AB"), "m1:1.m1:0.");
    }
}
