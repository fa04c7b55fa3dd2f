//! Concurrent batch decoding tests

use super::*;
use crate::batch::discovery::{ReportLine, split_reports};
use crate::batch::streaming::BatchDecoder;
use crate::config::{DecoderConfig, KindSelection};
use crate::constants::DECODE_CHUNK_SIZE;
use crate::models::{FlightCondition, ReportKind};
use tempfile::TempDir;

fn decoder(workers: usize) -> BatchDecoder {
    let config = DecoderConfig::new().with_workers(workers).with_progress(false);
    BatchDecoder::new(config, reference_time())
}

#[tokio::test]
async fn test_decode_files_collects_stats() {
    let temp_dir = TempDir::new().unwrap();
    let metar = write_reports(temp_dir.path(), "metar.txt", METAR_LINES);
    let mixed = write_reports(temp_dir.path(), "mixed.txt", MIXED_LINES);

    let output = decoder(2).decode_files(&[metar, mixed.clone()]).await.unwrap();
    let stats = &output.stats;

    assert_eq!(stats.files_read, 2);
    assert_eq!(stats.lines_read, 7);
    assert_eq!(stats.reports_decoded, 6);
    assert_eq!(stats.reports_failed, 1);
    assert_eq!(stats.count(FlightCondition::VFR), 3);
    assert_eq!(stats.count(FlightCondition::MVFR), 1);
    assert_eq!(stats.count(FlightCondition::IFR), 1);
    assert_eq!(stats.count(FlightCondition::NA), 1);

    // The bare header word has no station identifier
    assert_eq!(output.failures.len(), 1);
    assert_eq!(output.failures[0].path, mixed);
    assert_eq!(output.failures[0].line_number, 3);
    assert_eq!(output.failures[0].text, "METAR");
}

#[tokio::test]
async fn test_auto_kind_detects_each_line() {
    let lines = split_reports(Path::new("mixed.txt"), &MIXED_LINES.join("\n"));
    let output = decoder(1).decode_lines(lines).await.unwrap();

    let kinds: Vec<ReportKind> = output.reports.iter().map(|r| r.report.kind()).collect();
    assert_eq!(
        kinds,
        vec![ReportKind::Taf, ReportKind::Metar, ReportKind::Metar]
    );
}

#[tokio::test]
async fn test_forced_kind_applies_to_every_line() {
    let lines = split_reports(Path::new("taf.txt"), "EFHK 121430Z 1215/1315 24008KT CAVOK");
    let output = decoder(1)
        .with_kind(KindSelection::Taf)
        .decode_lines(lines)
        .await
        .unwrap();

    assert_eq!(output.reports.len(), 1);
    assert_eq!(output.reports[0].report.kind(), ReportKind::Taf);
}

#[tokio::test]
async fn test_output_keeps_input_order_across_chunks() {
    let total = DECODE_CHUNK_SIZE * 3 + 17;
    let lines: Vec<ReportLine> = (0..total)
        .map(|i| ReportLine {
            path: PathBuf::from("many.txt"),
            line_number: i + 1,
            text: format!("K{:03} 151000Z 00000KT 9999 FEW020", i % 1000),
        })
        .collect();

    let output = decoder(4).decode_lines(lines).await.unwrap();

    assert_eq!(output.stats.reports_decoded, total);
    assert!(
        output
            .reports
            .windows(2)
            .all(|pair| pair[0].line_number < pair[1].line_number)
    );
    assert_eq!(output.reports[0].report.observation().identifier, "K000");
}

#[tokio::test]
async fn test_empty_batch() {
    let output = decoder(2).decode_lines(Vec::new()).await.unwrap();
    assert!(output.reports.is_empty());
    assert_eq!(output.stats.lines_read, 0);
    assert_eq!(output.stats.success_rate(), 0.0);
}

#[tokio::test]
async fn test_missing_file_fails_batch() {
    let temp_dir = TempDir::new().unwrap();
    let result = decoder(1)
        .decode_files(&[temp_dir.path().join("absent.txt")])
        .await;
    assert!(result.is_err());
}
