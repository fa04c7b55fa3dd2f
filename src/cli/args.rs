//! Command-line argument definitions for the report decoder
//!
//! Defines the CLI surface using the clap derive API. Flags given here
//! override values loaded from the config file.

use crate::config::{DecoderConfig, KindSelection, OutputFormat};
use crate::error::{DecodeError, Result};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the METAR/TAF decoder
#[derive(Debug, Clone, Parser)]
#[command(
    name = "avwx",
    version,
    about = "Decode METAR and TAF aviation weather reports and classify flight conditions",
    long_about = "Decodes raw METAR and TAF reports into structured fields (station, issue time, \
                  wind, visibility, weather, clouds, temperature, altimeter, validity period) and \
                  derives the flight rule category (VFR, MVFR, IFR) from ceiling and visibility."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file
    ///
    /// Overrides the AVWX_CONFIG variable and the standard search locations.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        global = true,
        help = "Path to a TOML config file"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode a single report given on the command line
    Decode(DecodeArgs),
    /// Decode every report in one or more files
    Batch(BatchArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Raw report text; separate words are joined with spaces
    #[arg(value_name = "REPORT", required = true, num_args = 1..)]
    pub report: Vec<String>,

    /// Report family: metar, taf or auto
    #[arg(short = 'k', long = "kind", value_name = "KIND")]
    pub kind: Option<KindSelection>,

    /// Reference time for day/time groups (RFC 3339, defaults to now)
    #[arg(long = "now", value_name = "TIME")]
    pub now: Option<String>,

    /// Output format: text or json
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the batch command
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Glob patterns of report files, one report per line
    #[arg(value_name = "PATTERN", required = true, num_args = 1..)]
    pub patterns: Vec<String>,

    /// Report family: metar, taf or auto
    #[arg(short = 'k', long = "kind", value_name = "KIND")]
    pub kind: Option<KindSelection>,

    /// Reference time for day/time groups (RFC 3339, defaults to now)
    #[arg(long = "now", value_name = "TIME")]
    pub now: Option<String>,

    /// Output format: text or json (one document per line)
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of concurrent decode tasks
    #[arg(short = 'w', long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Print lines that failed to decode
    #[arg(long = "show-failures")]
    pub show_failures: bool,
}

impl Args {
    /// Get log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl DecodeArgs {
    /// The report text as one string
    pub fn raw(&self) -> String {
        self.report.join(" ")
    }

    /// Merge flags over the loaded configuration
    pub fn apply_to(&self, mut config: DecoderConfig) -> DecoderConfig {
        if let Some(kind) = self.kind {
            config = config.with_default_kind(kind);
        }
        if let Some(format) = self.format {
            config = config.with_output_format(format);
        }
        config
    }
}

impl BatchArgs {
    /// Merge flags over the loaded configuration
    pub fn apply_to(&self, mut config: DecoderConfig) -> DecoderConfig {
        if let Some(kind) = self.kind {
            config = config.with_default_kind(kind);
        }
        if let Some(format) = self.format {
            config = config.with_output_format(format);
        }
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        config
    }
}

/// Parse an RFC 3339 reference time, defaulting to the current time
pub fn parse_reference_time(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        None => Ok(Utc::now()),
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|_| DecodeError::InvalidReferenceTime {
                value: text.to_string(),
            }),
    }
}
