//! Tracing subscriber installation for the binary.

use std::io::{self, Write};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogFormat;

/// Install the global subscriber, logging to stderr at `info` unless
/// `RUST_LOG` says otherwise.
///
/// When a subscriber is already installed there is nowhere to send a
/// tracing event, so the failure is written to `report` instead.
pub fn init_tracing(format: LogFormat, report: &mut impl Write) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    match result {
        Ok(()) => Ok(()),
        Err(err) => writeln!(report, "tracing init failed: {err}"),
    }
}
