//! JSON formatter for structured logging
//!
//! Each entry becomes one JSON object written member by member straight to
//! the sink, without building an intermediate document:
//!
//! ```text
//! {"level":"WARN","time":"2024-01-02T03:04:05.123456789Z","message":"slow","elapsed_ms":1200}
//! ```

use crate::core::timestamp::format_rfc3339_nano;
use crate::core::{FormatError, Formatter, LogEntry, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Encode one value; `key` names the member in serialization errors.
    fn write_value<T>(sink: &mut dyn Write, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_writer(&mut *sink, value).map_err(|e| FormatError::serialization(key, e))
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, sink: &mut dyn Write, entry: &LogEntry) -> Result<()> {
        sink.write_all(br#"{"level":"#)?;
        Self::write_value(sink, "level", entry.level.to_str())?;

        if let Some(time) = &entry.time {
            sink.write_all(br#","time":"#)?;
            Self::write_value(sink, "time", &format_rfc3339_nano(time))?;
        }

        if !entry.message.is_empty() {
            sink.write_all(br#","message":"#)?;
            Self::write_value(sink, "message", &entry.message)?;
        }

        for (key, value) in entry.fields.iter() {
            sink.write_all(b",")?;
            Self::write_value(sink, key, key)?;
            sink.write_all(b":")?;
            Self::write_value(sink, key, value)?;
        }

        sink.write_all(b"}")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
