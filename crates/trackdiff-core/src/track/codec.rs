//! Line-oriented track text format.
//!
//! One element per line:
//!
//! ```text
//! [<address>] <kind> [<hex-id>] r-<passed>-<failed>-<errors>
//! ```
//!
//! The address is optional. The id is optional for non-assertable kinds and
//! required for assertable ones. Stats appear on assertable kinds only.
//! A single malformed line rejects the whole track.

use crate::errors::{Result, TrackDiffError};
use crate::hash::ContentId;
use crate::track::model::{is_assertable_kind, Stats, Track, TrackElement};
use std::path::Path;

const STATS_PREFIX: &str = "r-";

/// Parse a serialized run log into a [`Track`].
///
/// # Errors
///
/// `MalformedTrack` naming the first offending 1-based line.
pub fn parse_track(text: &str) -> Result<Track> {
    text.lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

/// Read and parse a track file.
///
/// # Errors
///
/// `Io` if the file cannot be read, `MalformedTrack` if it does not parse.
pub fn parse_track_file(path: &Path) -> Result<Track> {
    let text = std::fs::read_to_string(path).map_err(|e| TrackDiffError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_track(&text)
}

/// Render a track in the line format accepted by [`parse_track`].
pub fn serialize_track(track: &Track) -> String {
    let mut out = String::new();
    for element in track {
        out.push_str(&serialize_element(element));
        out.push('\n');
    }
    out
}

/// Render a single element without the line terminator.
pub fn serialize_element(element: &TrackElement) -> String {
    let mut line = String::new();
    if let Some(address) = &element.address {
        line.push('[');
        line.push_str(address);
        line.push_str("] ");
    }
    line.push_str(&element.kind);
    if let Some(id) = element.id {
        line.push_str(" [");
        line.push_str(&id.to_hex());
        line.push(']');
    }
    if let Some(stats) = element.stats {
        line.push(' ');
        line.push_str(&format_stats(&stats));
    }
    line
}

/// `r-<passed>-<failed>-<errors>`
pub fn format_stats(stats: &Stats) -> String {
    format!(
        "{}{}-{}-{}",
        STATS_PREFIX, stats.passed, stats.failed, stats.errors
    )
}

fn parse_line(line_no: usize, line: &str) -> Result<TrackElement> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Err(TrackDiffError::malformed_track(line_no, "empty line"));
    }

    let mut rest = line;
    let mut address = None;
    if let Some(after_open) = rest.strip_prefix('[') {
        let close = after_open.find(']').ok_or_else(|| {
            TrackDiffError::malformed_track(line_no, "address not closed with ']'")
        })?;
        address = Some(after_open[..close].to_string());
        rest = &after_open[close + 1..];
    }

    let mut tokens = rest.split_whitespace();

    let kind = match tokens.next() {
        Some(token) if !token.starts_with('[') => token.to_string(),
        _ => return Err(TrackDiffError::malformed_track(line_no, "missing kind")),
    };
    let assertable = is_assertable_kind(&kind);

    let id = match tokens.next() {
        Some(token) => Some(parse_id(line_no, token)?),
        None if assertable => {
            return Err(TrackDiffError::malformed_track(
                line_no,
                format!("assertable kind `{}` has no id", kind),
            ))
        }
        None => None,
    };

    let stats = if assertable {
        let token = tokens.next().ok_or_else(|| {
            TrackDiffError::malformed_track(
                line_no,
                format!("assertable kind `{}` has no stats", kind),
            )
        })?;
        Some(parse_stats(token).ok_or_else(|| {
            TrackDiffError::malformed_track(
                line_no,
                format!("stats `{}` do not match r-<int>-<int>-<int>", token),
            )
        })?)
    } else {
        None
    };

    if let Some(extra) = tokens.next() {
        return Err(TrackDiffError::malformed_track(
            line_no,
            format!("unexpected trailing content `{}`", extra),
        ));
    }

    Ok(TrackElement {
        address,
        kind,
        id,
        stats,
    })
}

fn parse_id(line_no: usize, token: &str) -> Result<ContentId> {
    let hex = token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| {
            TrackDiffError::malformed_track(
                line_no,
                format!("id `{}` is not wrapped in brackets", token),
            )
        })?;
    ContentId::from_hex(hex).ok_or_else(|| {
        TrackDiffError::malformed_track(
            line_no,
            format!("id `{}` is not 16 lowercase hex digits", hex),
        )
    })
}

fn parse_stats(token: &str) -> Option<Stats> {
    let mut parts = token.strip_prefix(STATS_PREFIX)?.split('-');
    let mut next_count = || -> Option<u64> {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };
    let stats = Stats::new(next_count()?, next_count()?, next_count()?);
    match parts.next() {
        Some(_) => None,
        None => Some(stats),
    }
}
