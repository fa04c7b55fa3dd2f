//! Configuration for the decoding front-ends.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line flags. The file is searched in this order:
//! 1. Path in the `AVWX_CONFIG` environment variable
//! 2. `avwx.toml` in the working directory
//! 3. `avwx/avwx.toml` under the user config directory
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::constants::{APP_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, MAX_WORKERS};
use crate::error::{DecodeError, Result};
use crate::models::ReportKind;

/// Which report family to decode a line as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindSelection {
    /// Detect from the header word
    #[default]
    Auto,
    Metar,
    Taf,
}

impl KindSelection {
    /// Resolve the family for one raw report
    pub fn resolve(self, raw: &str) -> ReportKind {
        match self {
            KindSelection::Auto => ReportKind::detect(raw),
            KindSelection::Metar => ReportKind::Metar,
            KindSelection::Taf => ReportKind::Taf,
        }
    }
}

impl From<ReportKind> for KindSelection {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Metar => KindSelection::Metar,
            ReportKind::Taf => KindSelection::Taf,
        }
    }
}

impl FromStr for KindSelection {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(KindSelection::Auto);
        }
        s.parse::<ReportKind>().map(KindSelection::from)
    }
}

impl fmt::Display for KindSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindSelection::Auto => f.write_str("auto"),
            KindSelection::Metar => f.write_str("metar"),
            KindSelection::Taf => f.write_str("taf"),
        }
    }
}

/// Rendering used for decoded reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured human-readable briefing
    #[default]
    Text,
    /// One JSON document per report
    Json,
}

impl FromStr for OutputFormat {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DecodeError::configuration(format!(
                "Unknown output format: {} (expected text or json)",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Decoder front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Family used when no `--kind` flag is given
    pub default_kind: KindSelection,

    /// Concurrent decode tasks in batch mode
    pub workers: usize,

    pub output_format: OutputFormat,

    /// Draw a progress bar during batch decoding
    pub show_progress: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            default_kind: KindSelection::Auto,
            workers: num_cpus::get(),
            output_format: OutputFormat::Text,
            show_progress: true,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_kind(mut self, kind: KindSelection) -> Self {
        self.default_kind = kind;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(DecodeError::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        if self.workers > MAX_WORKERS {
            return Err(DecodeError::configuration(format!(
                "Number of workers must not exceed {}",
                MAX_WORKERS
            )));
        }

        Ok(())
    }
}

/// Where a configuration was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config` or the environment variable
    Explicit(PathBuf),
    /// Found in the working directory
    CurrentDir(PathBuf),
    /// Found in the user config directory
    UserConfig(PathBuf),
    /// No file found
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::CurrentDir(p) | ConfigSource::UserConfig(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("(defaults)"),
        }
    }
}

/// Find a configuration file in the standard locations
pub fn find_config_file() -> ConfigSource {
    let explicit = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let user_dir = dirs::config_dir().map(|dir| dir.join(APP_NAME));
    search_config(explicit, Path::new("."), user_dir.as_deref())
}

/// Search order over explicit, working and user directories
pub fn search_config(
    explicit: Option<PathBuf>,
    working_dir: &Path,
    user_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(path) = explicit {
        if path.exists() {
            return ConfigSource::Explicit(path);
        }
        warn!(
            "{} points to a missing file: {}",
            CONFIG_ENV_VAR,
            path.display()
        );
    }

    let local = working_dir.join(CONFIG_FILE_NAME);
    if local.exists() {
        return ConfigSource::CurrentDir(local);
    }

    if let Some(dir) = user_dir {
        let user = dir.join(CONFIG_FILE_NAME);
        if user.exists() {
            return ConfigSource::UserConfig(user);
        }
    }

    ConfigSource::Defaults
}

/// Load and validate the configuration from a source
pub fn load_config(source: &ConfigSource) -> Result<DecoderConfig> {
    let Some(path) = source.path() else {
        debug!("No config file found, using defaults");
        return Ok(DecoderConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| DecodeError::read_failed(path, &e))?;
    let config: DecoderConfig = toml::from_str(&content)?;
    config.validate()?;

    debug!("Loaded configuration from {}", source);
    Ok(config)
}

/// Resolve the configuration, preferring an explicit path over the search
pub fn resolve_config(explicit: Option<&Path>) -> Result<(DecoderConfig, ConfigSource)> {
    let source = match explicit {
        Some(path) if !path.exists() => {
            return Err(DecodeError::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
        Some(path) => ConfigSource::Explicit(path.to_path_buf()),
        None => find_config_file(),
    };

    let config = load_config(&source)?;
    Ok((config, source))
}
