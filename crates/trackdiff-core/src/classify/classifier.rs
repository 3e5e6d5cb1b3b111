//! Classify an edit table into report buckets.

use crate::classify::model::{ElementChange, ElementEntry, TrackSummary};
use crate::script::table::EditTable;
use crate::track::model::{Track, TrackElement, WITH_SUMMARY_KIND};

/// Bucket the assertable elements of `source` and `target` using `table`.
///
/// - unmatched source elements become `deleted_good` / `deleted_wrong`
/// - unmatched target elements become `new_good` / `new_wrong`
/// - matched `c-with_summary` pairs land in `with_data_changed` whenever any
///   stat differs, even between two good verdicts
/// - other matched pairs are recorded only when the verdict flips
///
/// Matched pairs are visited in target order.
pub fn classify(source: &Track, target: &Track, table: &EditTable) -> TrackSummary {
    let mut summary = TrackSummary::default();

    for (index, element) in assertable(source, table.source_disappeared()) {
        let bucket = if element.is_good() {
            &mut summary.deleted_good
        } else {
            &mut summary.deleted_wrong
        };
        bucket.push(ElementEntry {
            index,
            element: element.clone(),
        });
    }

    for (index, element) in assertable(target, table.target_new()) {
        let bucket = if element.is_good() {
            &mut summary.new_good
        } else {
            &mut summary.new_wrong
        };
        bucket.push(ElementEntry {
            index,
            element: element.clone(),
        });
    }

    for (source_index, target_index) in table.matched_pairs() {
        let (Some(before), Some(after)) = (source.get(source_index), target.get(target_index))
        else {
            continue;
        };
        if !before.is_assertable() {
            continue;
        }

        let bucket = if before.kind == WITH_SUMMARY_KIND {
            if before.stats == after.stats {
                continue;
            }
            &mut summary.with_data_changed
        } else {
            match (before.is_good(), after.is_good()) {
                (false, true) => &mut summary.wrong_to_good,
                (true, false) => &mut summary.good_to_wrong,
                _ => continue,
            }
        };
        bucket.push(ElementChange {
            source_index,
            target_index,
            before: before.clone(),
            after: after.clone(),
        });
    }

    tracing::debug!(
        deleted = summary.deleted_good.len() + summary.deleted_wrong.len(),
        new = summary.new_good.len() + summary.new_wrong.len(),
        flipped = summary.wrong_to_good.len() + summary.good_to_wrong.len(),
        data_changed = summary.with_data_changed.len(),
        "track changes classified"
    );
    summary
}

fn assertable<'a>(
    track: &'a Track,
    indices: &'a [usize],
) -> impl Iterator<Item = (usize, &'a TrackElement)> + 'a {
    indices
        .iter()
        .filter_map(move |&index| track.get(index).map(|element| (index, element)))
        .filter(|(_, element)| element.is_assertable())
}
