//! Output format selection
//!
//! Provides a config-friendly name for each built-in formatter:
//! - Raw: the message only (default)
//! - Ltsv: Labeled Tab-separated Values
//! - Json: one JSON object per entry

use super::{JsonFormatter, LtsvFormatter, RawFormatter};
use crate::core::{FormatError, Formatter, LogEntry, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for log entries
///
/// Deserializes from the lowercase names `"raw"`, `"ltsv"` and `"json"`, so
/// it can sit directly in a host application's configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `Request processed`
    #[default]
    Raw,

    /// Example: `level:INFO	message:Request processed	status:200`
    Ltsv,

    /// Example: `{"level":"INFO","message":"Request processed","status":200}`
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Raw => "raw",
            OutputFormat::Ltsv => "ltsv",
            OutputFormat::Json => "json",
        }
    }

    /// Boxed formatter for this format
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Raw => Box::new(RawFormatter),
            OutputFormat::Ltsv => Box::new(LtsvFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}

impl Formatter for OutputFormat {
    fn format(&self, sink: &mut dyn Write, entry: &LogEntry) -> Result<()> {
        match self {
            OutputFormat::Raw => RawFormatter.format(sink, entry),
            OutputFormat::Ltsv => LtsvFormatter.format(sink, entry),
            OutputFormat::Json => JsonFormatter.format(sink, entry),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "text" => Ok(OutputFormat::Raw),
            "ltsv" => Ok(OutputFormat::Ltsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FormatError::config(
                "OutputFormat",
                format!("unknown format '{}'", s),
            )),
        }
    }
}
