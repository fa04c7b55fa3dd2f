//! Batch decoding of report files.
//!
//! Expands glob patterns into report files, reads one report per line and
//! decodes them concurrently, collecting per-condition statistics.

pub mod discovery;
pub mod stats;
pub mod streaming;

#[cfg(test)]
pub mod tests;

pub use discovery::{ReportLine, expand_patterns, read_reports, split_reports};
pub use stats::BatchStats;
pub use streaming::{BatchDecoder, BatchOutput, DecodedReport, LineFailure};
