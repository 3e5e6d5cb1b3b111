//! Block matching over generic ordered sequences.

use crate::matcher::candidates::{Candidate, CandidateQueue};
use crate::script::model::{EditOp, EditScript};
use std::cmp::Ordering;
use std::collections::BTreeMap;

fn equivalent<T: Ord>(a: &T, b: &T) -> bool {
    a.cmp(b) == Ordering::Equal
}

/// Compute an edit script that builds `target` out of runs of `source`.
///
/// Elements are equal when neither orders before the other. A `min_length`
/// of 0 behaves like 1. The result is deterministic for identical inputs and
/// the function never fails.
///
/// ```
/// use trackdiff_core::matcher::compute_edit_script;
///
/// let source: Vec<char> = "AB".chars().collect();
/// let target: Vec<char> = "BA".chars().collect();
/// assert_eq!(compute_edit_script(&source, &target, 1).to_string(), "m1:1.m1:0.");
/// ```
pub fn compute_edit_script<T: Ord>(source: &[T], target: &[T], min_length: usize) -> EditScript {
    let min_length = min_length.max(1);
    let mut queue = discover_candidates(source, target, min_length);
    tracing::debug!(
        source_len = source.len(),
        target_len = target.len(),
        min_length,
        candidates = queue.len(),
        "block match candidates discovered"
    );

    let mut used_source = vec![false; source.len()];
    let mut used_target = vec![false; target.len()];
    // Indexed by target start: (length, source_start) of a committed run.
    let mut committed: Vec<Option<(usize, usize)>> = vec![None; target.len()];

    while let Some(candidate) = queue.pop() {
        if (0..candidate.length).all(|k| is_free(&used_source, &used_target, &candidate, k)) {
            for k in 0..candidate.length {
                used_source[candidate.source_start + k] = true;
                used_target[candidate.target_start + k] = true;
            }
            committed[candidate.target_start] = Some((candidate.length, candidate.source_start));
            continue;
        }

        // Partially consumed by a longer run: re-queue the free pieces.
        let mut run_start = None;
        for k in 0..=candidate.length {
            let free_here =
                k < candidate.length && is_free(&used_source, &used_target, &candidate, k);
            match (free_here, run_start) {
                (true, None) => run_start = Some(k),
                (false, Some(start)) => {
                    if k - start >= min_length {
                        queue.push(Candidate {
                            length: k - start,
                            source_start: candidate.source_start + start,
                            target_start: candidate.target_start + start,
                        });
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    assemble(&committed)
}

fn is_free(used_source: &[bool], used_target: &[bool], candidate: &Candidate, k: usize) -> bool {
    !used_source[candidate.source_start + k] && !used_target[candidate.target_start + k]
}

/// Index source windows, then collect every maximal run start in the target.
fn discover_candidates<T: Ord>(source: &[T], target: &[T], min_length: usize) -> CandidateQueue {
    let mut queue = CandidateQueue::default();
    if source.len() < min_length || target.len() < min_length {
        return queue;
    }

    let mut seeds: BTreeMap<&[T], Vec<usize>> = BTreeMap::new();
    for i in 0..=source.len() - min_length {
        seeds.entry(&source[i..i + min_length]).or_default().push(i);
    }

    for j in 0..=target.len() - min_length {
        let Some(positions) = seeds.get(&target[j..j + min_length]) else {
            continue;
        };
        for &i in positions {
            // Continuation of a run that starts one step earlier.
            if i > 0 && j > 0 && equivalent(&source[i - 1], &target[j - 1]) {
                continue;
            }
            let mut length = min_length;
            while i + length < source.len()
                && j + length < target.len()
                && equivalent(&source[i + length], &target[j + length])
            {
                length += 1;
            }
            queue.push(Candidate {
                length,
                source_start: i,
                target_start: j,
            });
        }
    }
    queue
}

fn assemble(committed: &[Option<(usize, usize)>]) -> EditScript {
    let mut ops = Vec::new();
    let mut waste = 0;
    let mut j = 0;
    while j < committed.len() {
        match committed[j] {
            Some((length, source_start)) => {
                if waste > 0 {
                    ops.push(EditOp::Waste { length: waste });
                    waste = 0;
                }
                ops.push(EditOp::Match {
                    length,
                    source_start,
                });
                j += length;
            }
            None => {
                waste += 1;
                j += 1;
            }
        }
    }
    if waste > 0 {
        ops.push(EditOp::Waste { length: waste });
    }
    EditScript::new(ops)
}
