//! Track comparison pipeline with boundary logging.
//!
//! Runs match → encode → decode → replay check → classify for one pair of
//! tracks and returns everything a renderer needs.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for comparisons:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (matcher, classifier) use only `tracing::debug!()`.

use crate::classify::{classify, TrackSummary};
use crate::errors::Result;
use crate::matcher::compute_edit_script;
use crate::script::{assert_replay_consistent, decode_edit_script, EditScript, EditTable};
use crate::track::{parse_track, parse_track_file, Track};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};
use std::path::Path;
use trackdiff_core_types::RunId;

/// Knobs for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionOptions {
    /// Shortest run the matcher treats as reused content
    pub min_length: usize,
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self { min_length: 1 }
    }
}

/// Result of comparing a source track with a target track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub run_id: RunId,
    pub script: EditScript,
    pub table: EditTable,
    pub summary: TrackSummary,
}

/// Compare two parsed tracks.
///
/// # Panics
///
/// Panics if the matcher produces a script that does not decode or does not
/// replay against its own inputs. Either one is a defect in the matcher.
pub fn compare_tracks(source: &Track, target: &Track, options: &EvolutionOptions) -> Evolution {
    let run_id = RunId::new();
    log_op_start!(
        "compare_tracks",
        run_id = run_id.as_str(),
        source_len = source.len(),
        target_len = target.len(),
        min_length = options.min_length
    );
    let start = std::time::Instant::now();

    let script = compute_edit_script(source.elements(), target.elements(), options.min_length);
    let encoded = script.to_string();

    let table = match decode_edit_script(&encoded, source.len(), target.len()) {
        Ok(table) => table,
        Err(e) => panic!("matcher produced an undecodable edit script `{}`: {}", encoded, e),
    };
    assert_replay_consistent(source.elements(), target.elements(), &encoded);

    let summary = classify(source, target, &table);

    log_op_end!(
        "compare_tracks",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        match_ops = script.match_count(),
        waste_ops = script.waste_count(),
        changes = summary.counts().total()
    );

    Evolution {
        run_id,
        script,
        table,
        summary,
    }
}

/// Parse two serialized tracks, then compare them.
///
/// # Errors
///
/// `MalformedTrack` if either text does not parse.
pub fn compare_track_texts(
    source_text: &str,
    target_text: &str,
    options: &EvolutionOptions,
) -> Result<(Track, Track, Evolution)> {
    let source = parse_logged("source", || parse_track(source_text))?;
    let target = parse_logged("target", || parse_track(target_text))?;
    let evolution = compare_tracks(&source, &target, options);
    Ok((source, target, evolution))
}

/// Read and parse two track files, then compare them.
///
/// # Errors
///
/// `Io` if a file cannot be read, `MalformedTrack` if one does not parse.
pub fn compare_track_files(
    source_path: &Path,
    target_path: &Path,
    options: &EvolutionOptions,
) -> Result<(Track, Track, Evolution)> {
    let source = parse_logged("source", || parse_track_file(source_path))?;
    let target = parse_logged("target", || parse_track_file(target_path))?;
    let evolution = compare_tracks(&source, &target, options);
    Ok((source, target, evolution))
}

fn parse_logged(side: &str, parse: impl FnOnce() -> Result<Track>) -> Result<Track> {
    log_op_start!("parse_track", side = side);
    let start = std::time::Instant::now();

    let track = parse().map_err(|e| {
        log_op_error!(
            "parse_track",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            side = side
        );
        e
    })?;

    log_op_end!(
        "parse_track",
        duration_ms = start.elapsed().as_millis() as u64,
        side = side,
        len = track.len()
    );
    Ok(track)
}
