//! Property tests for the block matcher and its edit scripts.
//!
//! Every script the matcher produces must decode against its own inputs,
//! agree with the direct table construction and survive replay.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{chars, test_proptest_config};
use proptest::prelude::*;
use trackdiff_core::fuzz::{apply_diff_spec, random_pair, FuzzRng, DEFAULT_ALPHABET};
use trackdiff_core::matcher::compute_edit_script;
use trackdiff_core::script::{decode_edit_script, replay_check, EditOp};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..24)
}

fn arb_diff_spec() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), 0..32)
        .prop_map(|ops| ops.into_iter().collect())
}

// ============================================================================
// Identity and Examples
// ============================================================================

#[test]
fn test_identity_is_single_match() {
    for s in ["A", "AB", "ABAB", "aaaaaa", "abcdefabc"] {
        let s = chars(s);
        let script = compute_edit_script(&s, &s, 1);
        assert_eq!(
            script.ops(),
            &[EditOp::Match {
                length: s.len(),
                source_start: 0
            }]
        );
        let table = script.to_table(s.len(), s.len());
        assert!(table.source_disappeared().is_empty());
        assert!(table.target_new().is_empty());
    }
}

#[test]
fn test_swap_example() {
    let script = compute_edit_script(&chars("AB"), &chars("BA"), 1);
    assert_eq!(script.to_string(), "m1:1.m1:0.");
}

#[test]
fn test_shrink_example_drops_last_source() {
    let script = compute_edit_script(&chars("AAA"), &chars("AA"), 1);
    assert_eq!(script.to_string(), "m2:0.");

    let table = decode_edit_script("m2:0.", 3, 2).unwrap();
    assert_eq!(table.source_disappeared(), &[2]);
    assert!(table.target_new().is_empty());
}

// ============================================================================
// Deterministic Fuzz
// ============================================================================

#[test]
fn test_fuzz_self_consistency() {
    let mut rng = FuzzRng::new(0x5eed_cafe);
    for _ in 0..2_000 {
        let (source, target) = random_pair(&mut rng, DEFAULT_ALPHABET, 40);
        let (s, t) = (chars(&source), chars(&target));
        let encoded = compute_edit_script(&s, &t, 1).to_string();

        assert!(
            replay_check(&s, &t, &encoded),
            "replay failed: source={} target={} script={}",
            source,
            target,
            encoded
        );
        assert!(decode_edit_script(&encoded, s.len(), t.len()).is_ok());
    }
}

#[test]
fn test_fuzz_with_small_alphabet_and_min_length() {
    let mut rng = FuzzRng::new(17);
    for round in 0..500 {
        let (source, target) = random_pair(&mut rng, "ab", 30);
        let (s, t) = (chars(&source), chars(&target));
        let min_length = 1 + round % 4;
        let script = compute_edit_script(&s, &t, min_length);

        assert!(replay_check(&s, &t, &script.to_string()));
        for op in script.ops() {
            if let EditOp::Match { length, .. } = op {
                assert!(*length >= min_length);
            }
        }
    }
}

// ============================================================================
// Proptest
// ============================================================================

proptest! {
    #![proptest_config(test_proptest_config(256))]

    /// decode(encode(script)) == script.to_table for matcher output.
    #[test]
    fn script_roundtrip_matches_table(source in arb_sequence(), target in arb_sequence()) {
        let script = compute_edit_script(&source, &target, 1);
        let decoded = decode_edit_script(&script.to_string(), source.len(), target.len());
        prop_assert!(decoded.is_ok());
        prop_assert_eq!(decoded.unwrap(), script.to_table(source.len(), target.len()));
    }

    /// Matcher output always replays against its own inputs.
    #[test]
    fn script_replays(source in arb_sequence(), target in arb_sequence(), min_length in 0usize..4) {
        let script = compute_edit_script(&source, &target, min_length);
        prop_assert!(replay_check(&source, &target, &script.to_string()));
        prop_assert_eq!(script.target_len(), target.len());
    }

    /// Targets derived by a diff spec replay too.
    #[test]
    fn diff_spec_targets_replay(source in "[a-d]{0,20}", spec in arb_diff_spec()) {
        let target = apply_diff_spec(&source, &spec);
        let (s, t) = (chars(&source), chars(&target));
        let script = compute_edit_script(&s, &t, 1);
        prop_assert!(replay_check(&s, &t, &script.to_string()));
    }

    /// Identical inputs give identical scripts.
    #[test]
    fn matcher_is_deterministic(source in arb_sequence(), target in arb_sequence()) {
        let a = compute_edit_script(&source, &target, 1);
        let b = compute_edit_script(&source, &target, 1);
        prop_assert_eq!(a, b);
    }

    /// Every source index is either matched once or disappeared.
    #[test]
    fn table_partitions_indices(source in arb_sequence(), target in arb_sequence()) {
        let table = compute_edit_script(&source, &target, 1).to_table(source.len(), target.len());
        prop_assert_eq!(
            table.source_disappeared().len() + table.matched_len(),
            source.len()
        );
        prop_assert_eq!(table.target_new().len() + table.matched_len(), target.len());
        for (i, j) in table.matched_pairs() {
            prop_assert_eq!(source[i], target[j]);
        }
    }
}
