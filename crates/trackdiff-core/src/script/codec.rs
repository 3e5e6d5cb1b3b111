//! Textual edit script grammar.
//!
//! A script is a concatenation of clauses, each terminated by `.`:
//!
//! - `m<length>:<source_start>.` copies `length` source elements
//! - `w<length>.` inserts `length` fresh target elements
//!
//! There are no separators besides the trailing `.` of each clause.

use crate::errors::{Result, TrackDiffError};
use crate::script::model::{EditOp, EditScript};
use crate::script::table::{EditTable, TableBuilder};

/// Render a script as text. Same as `script.to_string()`.
pub fn encode_edit_script(script: &EditScript) -> String {
    script.to_string()
}

/// Parse script text into ops without checking it against any tracks.
///
/// # Errors
///
/// `MalformedEditScript` on an unknown clause tag, a missing number, a `m`
/// clause missing its `:`, a clause not ending in `.`, or a zero length.
pub fn parse_edit_script(text: &str) -> Result<EditScript> {
    Ok(EditScript::new(
        parse_clauses(text)?.into_iter().map(|(_, op)| op).collect(),
    ))
}

/// Decode script text into an [`EditTable`] for tracks of the given lengths.
///
/// The text is untrusted: besides the clause grammar, the decoder checks that
/// the target cursor never runs past `target_len`, that match ranges stay
/// inside the source and never reuse a source index, and that the script
/// covers the whole target.
///
/// # Errors
///
/// `MalformedEditScript` naming the byte offset of the offending clause.
pub fn decode_edit_script(text: &str, source_len: usize, target_len: usize) -> Result<EditTable> {
    let mut builder = TableBuilder::new(source_len, target_len);
    let mut cursor = 0usize;

    for (position, op) in parse_clauses(text)? {
        let length = op.target_len();
        let end = cursor
            .checked_add(length)
            .filter(|&end| end <= target_len)
            .ok_or_else(|| {
                TrackDiffError::malformed_script(
                    position,
                    format!(
                        "target cursor {} + {} runs past target length {}",
                        cursor, length, target_len
                    ),
                )
            })?;

        if let EditOp::Match { source_start, .. } = op {
            let in_range = source_start
                .checked_add(length)
                .is_some_and(|source_end| source_end <= source_len);
            if !in_range {
                return Err(TrackDiffError::malformed_script(
                    position,
                    format!(
                        "source range {}+{} runs past source length {}",
                        source_start, length, source_len
                    ),
                ));
            }
            if !builder.source_free(source_start, length) {
                return Err(TrackDiffError::malformed_script(
                    position,
                    format!(
                        "source range {}+{} reuses an already matched index",
                        source_start, length
                    ),
                ));
            }
            builder.record_match(length, source_start, cursor);
        }
        cursor = end;
    }

    if cursor != target_len {
        return Err(TrackDiffError::malformed_script(
            text.len(),
            format!(
                "script covers {} of {} target elements",
                cursor, target_len
            ),
        ));
    }
    Ok(builder.finish())
}

/// Split text into `(byte offset, op)` clauses.
pub(crate) fn parse_clauses(text: &str) -> Result<Vec<(usize, EditOp)>> {
    let mut reader = ClauseReader {
        bytes: text.as_bytes(),
        pos: 0,
    };
    let mut clauses = Vec::new();
    while reader.pos < reader.bytes.len() {
        let start = reader.pos;
        clauses.push((start, reader.clause(start)?));
    }
    Ok(clauses)
}

struct ClauseReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl ClauseReader<'_> {
    fn clause(&mut self, start: usize) -> Result<EditOp> {
        let tag = self.bytes[self.pos];
        self.pos += 1;
        let op = match tag {
            b'm' => {
                let length = self.number(start)?;
                if !self.eat(b':') {
                    return Err(TrackDiffError::malformed_script(
                        start,
                        "match clause is missing ':'",
                    ));
                }
                let source_start = self.number(start)?;
                EditOp::Match {
                    length,
                    source_start,
                }
            }
            b'w' => EditOp::Waste {
                length: self.number(start)?,
            },
            other => {
                return Err(TrackDiffError::malformed_script(
                    start,
                    format!("unknown clause tag '{}'", char::from(other)),
                ))
            }
        };
        if !self.eat(b'.') {
            return Err(TrackDiffError::malformed_script(
                start,
                "clause is not terminated by '.'",
            ));
        }
        if op.target_len() == 0 {
            return Err(TrackDiffError::malformed_script(start, "zero-length clause"));
        }
        Ok(op)
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.bytes.get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn number(&mut self, start: usize) -> Result<usize> {
        let digits_start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if digits_start == self.pos {
            return Err(TrackDiffError::malformed_script(start, "expected a number"));
        }
        std::str::from_utf8(&self.bytes[digits_start..self.pos])
            .ok()
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| TrackDiffError::malformed_script(start, "number out of range"))
    }
}
