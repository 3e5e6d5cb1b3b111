//! Shared helpers for trackdiff-core integration tests.

#![allow(dead_code)]

use proptest::test_runner::Config as ProptestConfig;
use trackdiff_core::track::{parse_track, Track};

/// Proptest config with a fixed case count.
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Parse a track written inline in a test.
pub fn track(text: &str) -> Track {
    parse_track(text).expect("test track should parse")
}

/// One `c-check` line with the given id and verdict.
pub fn check_line(id: u64, good: bool) -> String {
    let stats = if good { "r-1-0-0" } else { "r-0-1-0" };
    format!("[t.cpp:{}] c-check [{:016x}] {}\n", id, id, stats)
}
