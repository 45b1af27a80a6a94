//! Logger setup: `env_logger` with a compact format and optional log file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

/// Install the global logger.
///
/// Info lines are printed bare; warnings and errors get a colored prefix.
/// `verbose` adds debug output with timestamps, `quiet` keeps only
/// warnings and errors. `RUST_LOG` still applies on top.
pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("book_catalog", level)
        .parse_default_env()
        .format(move |buf, record| {
            let message = match record.level() {
                Level::Error => format!(
                    "{} {}",
                    "error:".if_supports_color(Stderr, |t| t.red()),
                    record.args()
                ),
                Level::Warn => format!(
                    "{} {}",
                    "warning:".if_supports_color(Stderr, |t| t.yellow()),
                    record.args()
                ),
                _ if verbose => format!(
                    "[{} {:<5} {}] {}",
                    buf.timestamp_seconds(),
                    record.level(),
                    record.target(),
                    record.args()
                ),
                _ => record.args().to_string(),
            };
            writeln!(buf, "{message}")
        });

    if let Some(path) = logfile {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| CliError::other(format!("Failed to open log file {}: {}", path.display(), e)))?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder
        .try_init()
        .map_err(|e| CliError::other(format!("Failed to initialize logging: {e}")))
}

/// Sends log lines to stderr and a plain-text copy to the log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}
