//! Machine-readable report.

use crate::errors::Result;
use crate::evolution::Evolution;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    report_schema_version: u32,
    source_len: usize,
    target_len: usize,
    edit_script: String,
    counts: crate::classify::SummaryCounts,
    summary: &'a crate::classify::TrackSummary,
}

/// Pretty-printed JSON with the encoded script, bucket counts and buckets.
///
/// Identical tracks always render identical bytes. The run id stays on log
/// events.
///
/// # Errors
///
/// `Serialization` if JSON encoding fails.
pub fn render_json_report(evolution: &Evolution) -> Result<String> {
    let report = JsonReport {
        report_schema_version: 1,
        source_len: evolution.table.source_len(),
        target_len: evolution.table.target_len(),
        edit_script: evolution.script.to_string(),
        counts: evolution.summary.counts(),
        summary: &evolution.summary,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
