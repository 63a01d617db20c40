//! Core formatting types and traits

pub mod error;
pub mod fields;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod timestamp;

pub use error::{FormatError, Result};
pub use fields::{FieldValue, Fields};
pub use formatter::Formatter;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
