//! Formatter implementations

pub mod json;
pub mod ltsv;
pub mod output_format;
pub mod raw;

pub use json::JsonFormatter;
pub use ltsv::LtsvFormatter;
pub use output_format::OutputFormat;
pub use raw::RawFormatter;

pub use crate::core::Formatter;
