//! Labeled Tab-separated Values formatter
//!
//! See <http://ltsv.org/> for the format. Output is a single line of
//! `label:value` pairs joined by tabs:
//!
//! ```text
//! level:INFO	time:2024-01-02T03:04:05.123456789Z	message:started	port:8080
//! ```
//!
//! Labels and values are written as-is. A tab, colon or newline inside a
//! field key or value ends up in the output unchanged, so such values do not
//! survive an LTSV parser intact.

use crate::core::timestamp::format_rfc3339_nano;
use crate::core::{Formatter, LogEntry, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LtsvFormatter;

impl LtsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for LtsvFormatter {
    fn format(&self, sink: &mut dyn Write, entry: &LogEntry) -> Result<()> {
        write!(sink, "level:{}", entry.level)?;

        if let Some(time) = &entry.time {
            write!(sink, "\ttime:{}", format_rfc3339_nano(time))?;
        }

        if !entry.message.is_empty() {
            write!(sink, "\tmessage:{}", entry.message)?;
        }

        for (key, value) in entry.fields.iter() {
            write!(sink, "\t{}:{}", key, value)?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "ltsv"
    }
}
