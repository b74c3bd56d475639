//! Tracing subscriber setup for the command-line tool
//!
//! Diagnostics are part of the tool's regular output, so they go to stdout
//! as plain bare messages without styling, timestamps, levels or targets.

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use crate::io::progress::SamplingProgress;
use std::io::{self, Write};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Stdout writer that clears the progress bar while a diagnostic is written
#[derive(Clone)]
pub struct DiagnosticWriter {
    progress: SamplingProgress,
}

impl DiagnosticWriter {
    /// Writer that interleaves with `progress`
    pub const fn new(progress: SamplingProgress) -> Self {
        Self { progress }
    }
}

impl Write for DiagnosticWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.progress.suspend(|| io::stdout().lock().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.progress.suspend(|| io::stdout().lock().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Subscriber writing plain diagnostics that pass `filter` to `writer`
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .finish()
}

/// Install the global subscriber, returning false if one was already set
pub fn init(quiet: bool, progress: &SamplingProgress) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet)));
    let writer = DiagnosticWriter::new(progress.clone());

    subscriber(filter, move || writer.clone()).try_init().is_ok()
}
