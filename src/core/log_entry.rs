//! Log entry structure

use super::fields::{FieldValue, Fields};
use super::log_level::LogLevel;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// A single log record handed to a formatter.
///
/// The default entry has level `None`, no timestamp, an empty message and no
/// fields. An empty message and a missing timestamp are left out of the
/// structured outputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    /// `None` means the entry carries no timestamp; the Unix epoch is a valid time.
    pub time: Option<DateTime<FixedOffset>>,
    pub message: String,
    pub fields: Fields,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Attach a timestamp, keeping its UTC offset
    pub fn with_time<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.time = Some(time.fixed_offset());
        self
    }

    /// Stamp the entry with the current UTC time
    pub fn with_time_now(self) -> Self {
        self.with_time(Utc::now())
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }
}
