//! Raw formatter: the message and nothing else

use crate::core::{Formatter, LogEntry, Result};
use std::io::Write;

/// Writes `entry.message` verbatim.
///
/// Level, time and fields are ignored. Nothing is escaped and no line
/// terminator is added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFormatter;

impl RawFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for RawFormatter {
    fn format(&self, sink: &mut dyn Write, entry: &LogEntry) -> Result<()> {
        sink.write_all(entry.message.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "raw"
    }
}
