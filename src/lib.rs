//! # Rust Log Formatter
//!
//! Renders structured log entries (level, timestamp, message and ordered
//! key/value fields) as raw text, LTSV or JSON.
//!
//! ## Features
//!
//! - **Deterministic**: fields are emitted in the order they were first inserted
//! - **Streaming**: formatters write straight to any `std::io::Write` sink
//! - **Stateless**: formatters are `Send + Sync` and can be shared freely
//! - **Extensible**: new formats implement the single-method [`Formatter`] trait
//!
//! ## Example
//!
//! ```
//! use rust_log_formatter::prelude::*;
//!
//! let entry = LogEntry::new(LogLevel::Info, "started").with_field("port", 8080);
//!
//! let mut out = Vec::new();
//! LtsvFormatter.format(&mut out, &entry)?;
//! assert_eq!(out, b"level:INFO\tmessage:started\tport:8080");
//! # Ok::<(), rust_log_formatter::FormatError>(())
//! ```

pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        FieldValue, Fields, FormatError, Formatter, LogEntry, LogLevel, Result,
    };
    pub use crate::fields;
    pub use crate::formatters::{JsonFormatter, LtsvFormatter, OutputFormat, RawFormatter};
}

pub use core::{FieldValue, Fields, FormatError, Formatter, LogEntry, LogLevel, Result};
pub use formatters::{JsonFormatter, LtsvFormatter, OutputFormat, RawFormatter};
