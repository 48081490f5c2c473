//! Runtime configuration for the `hearings` command.
//!
//! Values come from the environment (after `.env` is loaded by the binary)
//! and are then overridden by command-line flags.
//!
//! Environment variables:
//! - `HEARINGS_DATA_FILE`: record data file (default: built-in sample records)
//! - `HEARINGS_SOURCE`: `records` or `proceedings` (default: `records`)
//! - `HEARINGS_OUTPUT`: `text` or `json` (default: `text`)
//! - `HEARINGS_SORTED`: apply display ordering (default: false)

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use hearings_core::defaults::{ENV_DATA_FILE, ENV_OUTPUT, ENV_SORTED, ENV_SOURCE};
use hearings_core::{Error, Result};

/// Shape of a record data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// A JSON array of hearing records.
    #[default]
    Records,
    /// A proceedings query response, enveloped or bare.
    Proceedings,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::Proceedings => "proceedings",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "records" | "record" => Ok(Self::Records),
            "proceedings" | "proceeding" | "graphql" => Ok(Self::Proceedings),
            other => Err(Error::Config(format!(
                "unknown data source '{}', expected records or proceedings",
                other
            ))),
        }
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "unknown output format '{}', expected text or json",
                other
            ))),
        }
    }
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Record data file; `None` selects the built-in sample records.
    pub data_file: Option<PathBuf>,
    pub source: SourceKind,
    pub output: OutputFormat,
    /// Apply display ordering to list results.
    pub sorted: bool,
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let source = match var(ENV_SOURCE) {
            Some(value) => value.parse()?,
            None => SourceKind::default(),
        };
        let output = match var(ENV_OUTPUT) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            data_file: var(ENV_DATA_FILE).map(PathBuf::from),
            source,
            output,
            sorted: var(ENV_SORTED).map_or(false, |value| parse_bool(&value, false)),
        })
    }

    // =========================================================================
    // FLAG OVERRIDES
    // =========================================================================

    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if data_file.is_some() {
            self.data_file = data_file;
        }
        self
    }

    pub fn with_source(mut self, source: Option<SourceKind>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        self
    }

    pub fn with_output(mut self, output: Option<OutputFormat>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// A `--sorted` flag can only turn ordering on.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted |= sorted;
        self
    }
}

/// Parses a boolean setting with a default fallback.
///
/// Recognizes "true", "1", "yes", "on" (case-insensitive) as true.
/// Any other value returns the default.
fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}
