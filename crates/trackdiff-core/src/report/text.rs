//! Human-readable evolution report.

use crate::classify::{ElementChange, ElementEntry};
use crate::evolution::Evolution;
use crate::report::RenderOptions;
use crate::track::codec::{format_stats, serialize_element};
use unicode_segmentation::UnicodeSegmentation;

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Wrong,
    Changed,
}

impl Tone {
    fn escape(self) -> &'static str {
        match self {
            Tone::Good => GREEN,
            Tone::Wrong => RED,
            Tone::Changed => YELLOW,
        }
    }
}

/// Render the summary of `evolution` as text.
///
/// Regressions come first: good → wrong, new wrong, deleted wrong, then
/// wrong → good, data changes, new good and deleted good. Empty sections
/// are omitted. Every line is cut to `options.max_width` terminal columns.
pub fn render_text_report(evolution: &Evolution, options: &RenderOptions) -> String {
    let summary = &evolution.summary;
    let counts = summary.counts();
    let mut out = Writer {
        out: String::new(),
        options,
    };

    out.line(
        None,
        &format!(
            "Track evolution: {} -> {} elements, {} changes",
            evolution.table.source_len(),
            evolution.table.target_len(),
            counts.total()
        ),
    );
    out.line(None, &format!("Edit script: {}", evolution.script));

    if summary.is_unchanged() {
        out.line(None, "");
        out.line(None, "No semantic changes detected.");
        return out.out;
    }

    out.changes("Good -> Wrong", Tone::Wrong, &summary.good_to_wrong);
    out.entries("New (wrong)", Tone::Wrong, &summary.new_wrong);
    out.entries("Deleted (wrong)", Tone::Wrong, &summary.deleted_wrong);
    out.changes("Wrong -> Good", Tone::Good, &summary.wrong_to_good);
    out.changes("Data changed", Tone::Changed, &summary.with_data_changed);
    out.entries("New (good)", Tone::Good, &summary.new_good);
    out.entries("Deleted (good)", Tone::Good, &summary.deleted_good);
    out.out
}

struct Writer<'a> {
    out: String,
    options: &'a RenderOptions,
}

impl Writer<'_> {
    fn line(&mut self, tone: Option<Tone>, text: &str) {
        let text = truncate(text, self.options.max_width);
        match tone {
            Some(tone) if self.options.color => {
                self.out.push_str(tone.escape());
                self.out.push_str(&text);
                self.out.push_str(RESET);
            }
            _ => self.out.push_str(&text),
        }
        self.out.push('\n');
    }

    fn heading(&mut self, title: &str, tone: Tone, len: usize) {
        self.line(None, "");
        self.line(Some(tone), &format!("== {} ({})", title, len));
    }

    fn entries(&mut self, title: &str, tone: Tone, entries: &[ElementEntry]) {
        if entries.is_empty() {
            return;
        }
        self.heading(title, tone, entries.len());
        for entry in entries {
            self.line(
                Some(tone),
                &format!("  #{} {}", entry.index, serialize_element(&entry.element)),
            );
        }
    }

    fn changes(&mut self, title: &str, tone: Tone, changes: &[ElementChange]) {
        if changes.is_empty() {
            return;
        }
        self.heading(title, tone, changes.len());
        for change in changes {
            let before = change
                .before
                .stats
                .map(|s| format_stats(&s))
                .unwrap_or_else(|| "-".to_string());
            self.line(
                Some(tone),
                &format!(
                    "  #{}->#{} {} (was {})",
                    change.source_index,
                    change.target_index,
                    serialize_element(&change.after),
                    before
                ),
            );
        }
    }
}

/// Cut `text` to `max_width` terminal columns, marking the cut with `…`.
///
/// Grapheme clusters are never split.
fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 || str_width(text) <= max_width {
        return text.to_string();
    }
    let budget = max_width - 1;
    let mut cut = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = str_width(grapheme);
        if used + width > budget {
            break;
        }
        cut.push_str(grapheme);
        used += width;
    }
    cut.push('…');
    cut
}

/// Display width of `text` in terminal columns.
fn str_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return 1;
    }
    match ch as u32 {
        // Combining marks and zero-width joiners
        0x0300..=0x036F
        | 0x1AB0..=0x1AFF
        | 0x1DC0..=0x1DFF
        | 0x200B..=0x200D
        | 0x20D0..=0x20FF
        | 0xFE20..=0xFE2F => 0,
        0x1100..=0x115F
        | 0x2329..=0x232A
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE10..=0xFE19
        | 0xFE30..=0xFE6F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1FAFF => 2,
        _ => 1,
    }
}
