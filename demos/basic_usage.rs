//! Basic usage example for rust_log_formatter
//!
//! Formats the same entry in every built-in format and writes each to stdout.

use rust_log_formatter::prelude::*;
use std::io::{self, Write};

fn main() -> Result<()> {
    let entry = LogEntry::new(LogLevel::Info, "Server started")
        .with_time_now()
        .with_fields(fields! {
            "port" => 8080,
            "tls" => false,
            "peers" => vec!["10.0.0.2", "10.0.0.3"],
        });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for format in [OutputFormat::Raw, OutputFormat::Ltsv, OutputFormat::Json] {
        write!(out, "{:>5}: ", format.as_str())?;
        format.format(&mut out, &entry)?;
        writeln!(out)?;
    }

    // Selecting a format by name, as a config file would
    let formatter = "json".parse::<OutputFormat>()?.formatter();
    let line = formatter.format_to_string(&LogEntry::default().with_level(LogLevel::Fatal))?;
    writeln!(out, "{}", line)?;

    out.flush()?;
    Ok(())
}
