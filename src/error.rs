//! Error handling for report decoding operations.
//!
//! Decoding itself degrades gracefully and only fails on the empty-input
//! precondition. The remaining variants cover the batch and configuration
//! layers that drive the decoder.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Report is empty: a station identifier is required")]
    EmptyReport,

    #[error("Unknown report kind: {kind} (expected metar, taf or auto)")]
    UnknownReportKind { kind: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No report files matched: {patterns}")]
    NoFilesMatched { patterns: String },

    #[error("Failed to read report file: {path} - {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid reference time '{value}': expected RFC 3339 (e.g. 2024-03-12T18:00:00Z)")]
    InvalidReferenceTime { value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Decode task failed: {reason}")]
    TaskFailed { reason: String },
}

impl DecodeError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a read error for a report or config file
    pub fn read_failed(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            reason: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
