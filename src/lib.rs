//! Aviation Weather Report Decoder
//!
//! A Rust library for decoding raw METAR and TAF reports into structured
//! values and classifying the flight rule category they describe.
//!
//! This library provides tools for:
//! - Splitting a report into groups and walking its grammar left to right
//! - Decoding wind, visibility, weather, clouds, temperature and altimeter groups
//! - Resolving day/time groups against a caller-supplied reference time
//! - Deriving cloud height, ceiling and VFR/MVFR/IFR conditions
//! - Batch decoding report files concurrently with per-condition statistics

pub mod batch;
pub mod briefing;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod models;
pub mod tokenizer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::DecoderConfig;
pub use decoder::ReportDecoder;
pub use error::{DecodeError, Result};
pub use models::{FlightCondition, Metar, Observation, Report, ReportKind, Taf, WindData};
