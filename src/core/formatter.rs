//! Formatter trait for rendering log entries

use super::{error::FormatError, error::Result, log_entry::LogEntry};
use std::io::{self, Write};
use std::sync::Arc;

/// Renders a [`LogEntry`] onto a byte sink.
///
/// Implementations hold no per-call state and may be shared across threads.
/// A call performs several discrete writes; if one fails, the bytes already
/// written stay on the sink. Callers that need a record to land in one piece
/// should format into a buffer with [`Formatter::format_to_vec`] and write
/// that buffer themselves.
pub trait Formatter: Send + Sync {
    fn format(&self, sink: &mut dyn Write, entry: &LogEntry) -> Result<()>;

    fn name(&self) -> &str;

    fn format_to_vec(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.format(&mut buf, entry)?;
        Ok(buf)
    }

    fn format_to_string(&self, entry: &LogEntry) -> Result<String> {
        let bytes = self.format_to_vec(entry)?;
        String::from_utf8(bytes)
            .map_err(|e| FormatError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, sink: &mut dyn Write, entry: &LogEntry) -> Result<()> {
        (**self).format(sink, entry)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(&self, sink: &mut dyn Write, entry: &LogEntry) -> Result<()> {
        (**self).format(sink, entry)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
