//! Tests for the batch module
//!
//! Builds small report files in temporary directories and runs them through
//! discovery and concurrent decoding.

use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};

pub mod streaming_tests;

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
}

/// Write a report file with one report per line
pub fn write_reports(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

pub const METAR_LINES: &[&str] = &[
    "ILZU 012020Z AUTO 31009KT 9999 FEW036 03/02 Q1012 RMK QFE1011 NOCBANALYSIS=",
    "",
    "# fog at night",
    "ILZU 012120Z AUTO 31009KT FG BKN000",
    "KNYL 101155Z 35007KT 10SM FEW100 12/03 A2993 RMK AO2 SLP128",
];

pub const MIXED_LINES: &[&str] = &[
    "TAF EFHK 121430Z 1215/1315 24008KT CAVOK",
    "EFHK 151220Z 18004KT 9999 SCT015 BKN025 M05/M08 Q1025",
    "METAR",
    "EGKB",
];
