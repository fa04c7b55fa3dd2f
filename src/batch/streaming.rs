//! Concurrent decoding of report lines
//!
//! Lines are grouped into fixed-size chunks and each chunk is decoded on
//! the blocking pool, with at most `workers` chunks in flight. Results are
//! put back into input order before they are returned.

use crate::batch::discovery::{ReportLine, read_reports};
use crate::batch::stats::BatchStats;
use crate::config::{DecoderConfig, KindSelection};
use crate::constants::DECODE_CHUNK_SIZE;
use crate::error::{DecodeError, Result};
use crate::models::Report;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tokio::task;
use tracing::debug;

/// A report decoded from one line
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedReport {
    pub path: PathBuf,
    pub line_number: usize,
    pub report: Report,
}

/// A line that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    pub path: PathBuf,
    pub line_number: usize,
    pub text: String,
    pub reason: String,
}

type LineOutcome = std::result::Result<DecodedReport, LineFailure>;

/// Everything a batch run produced
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub reports: Vec<DecodedReport>,
    pub failures: Vec<LineFailure>,
    pub stats: BatchStats,
}

/// Batch decoder over report files
#[derive(Debug, Clone)]
pub struct BatchDecoder {
    config: DecoderConfig,
    kind: KindSelection,
    reference: DateTime<Utc>,
}

impl BatchDecoder {
    /// Create a decoder resolving day/time groups against `reference`
    pub fn new(config: DecoderConfig, reference: DateTime<Utc>) -> Self {
        let kind = config.default_kind;
        Self {
            config,
            kind,
            reference,
        }
    }

    /// Override the report family from the config
    pub fn with_kind(mut self, kind: KindSelection) -> Self {
        self.kind = kind;
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Read and decode every report in `files`
    pub async fn decode_files(&self, files: &[PathBuf]) -> Result<BatchOutput> {
        let mut lines = Vec::new();
        for path in files {
            lines.extend(read_reports(path).await?);
        }

        let mut output = self.decode_lines(lines).await?;
        output.stats.files_read = files.len();
        Ok(output)
    }

    /// Decode report lines concurrently, keeping input order
    pub async fn decode_lines(&self, lines: Vec<ReportLine>) -> Result<BatchOutput> {
        let start_time = Instant::now();
        let total = lines.len();
        let pb = self.progress_bar(total as u64);

        let mut chunks = Vec::new();
        let mut remaining = lines.into_iter().peekable();
        while remaining.peek().is_some() {
            chunks.push(remaining.by_ref().take(DECODE_CHUNK_SIZE).collect::<Vec<_>>());
        }
        debug!(
            "Decoding {} lines in {} chunks with {} workers",
            total,
            chunks.len(),
            self.config.workers
        );

        let mut decoded = stream::iter(chunks.into_iter().enumerate())
            .map(|(index, chunk)| {
                let kind = self.kind;
                let reference = self.reference;
                let pb = pb.clone();
                async move {
                    let size = chunk.len() as u64;
                    let outcomes =
                        task::spawn_blocking(move || decode_chunk(chunk, kind, reference))
                            .await
                            .map_err(|e| DecodeError::TaskFailed {
                                reason: e.to_string(),
                            })?;
                    pb.inc(size);
                    Ok::<_, DecodeError>((index, outcomes))
                }
            })
            .buffer_unordered(self.config.workers.max(1))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        decoded.sort_by_key(|(index, _)| *index);

        let mut output = BatchOutput::default();
        output.stats.lines_read = total;
        for outcome in decoded.into_iter().flat_map(|(_, outcomes)| outcomes) {
            match outcome {
                Ok(report) => {
                    output.stats.record(report.report.condition());
                    output.reports.push(report);
                }
                Err(failure) => {
                    output.stats.record_failure();
                    output.failures.push(failure);
                }
            }
        }

        pb.finish_and_clear();
        output.stats.processing_time_ms = start_time.elapsed().as_millis();
        debug!(
            "Decoded {} of {} lines in {}ms",
            output.stats.reports_decoded, total, output.stats.processing_time_ms
        );
        Ok(output)
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Decoding reports");
        pb
    }
}

/// Decode one chunk of lines on the blocking pool
fn decode_chunk(
    chunk: Vec<ReportLine>,
    kind: KindSelection,
    reference: DateTime<Utc>,
) -> Vec<LineOutcome> {
    chunk
        .into_iter()
        .map(|line| {
            let family = kind.resolve(&line.text);
            match Report::decode_as(family, &line.text, reference) {
                Ok(report) => Ok(DecodedReport {
                    path: line.path,
                    line_number: line.line_number,
                    report,
                }),
                Err(e) => {
                    debug!(
                        "Failed to decode {}:{}: {}",
                        line.path.display(),
                        line.line_number,
                        e
                    );
                    Err(LineFailure {
                        path: line.path,
                        line_number: line.line_number,
                        text: line.text,
                        reason: e.to_string(),
                    })
                }
            }
        })
        .collect()
}
