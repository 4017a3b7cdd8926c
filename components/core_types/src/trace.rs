//! Injectable debug sink used by the scanner and parser.
//!
//! Trace lines are written as `<RFC 3339 timestamp> <message>`.

use chrono::{SecondsFormat, Utc};
use std::fmt;
use std::io::Write;

/// Append-only trace output.
///
/// When disabled, tracing costs a single branch. A failed write disables the
/// sink so a broken pipe never interrupts a scan or parse.
///
/// # Examples
///
/// ```
/// use core_types::TraceSink;
///
/// let mut sink = TraceSink::disabled();
/// assert!(!sink.is_enabled());
/// sink.line(format_args!("nothing is written"));
/// ```
#[derive(Default)]
pub struct TraceSink {
    output: Option<Box<dyn Write>>,
}

impl TraceSink {
    /// A sink that discards everything
    pub fn disabled() -> Self {
        Self { output: None }
    }

    /// A sink writing to `output`
    pub fn new(output: impl Write + 'static) -> Self {
        Self {
            output: Some(Box::new(output)),
        }
    }

    /// True if trace lines are being written
    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Write one timestamped trace line
    pub fn line(&mut self, message: fmt::Arguments<'_>) {
        let Some(output) = self.output.as_mut() else {
            return;
        };
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        if let Err(err) = writeln!(output, "{} {}", timestamp, message) {
            tracing::warn!(error = %err, "trace sink write failed; disabling sink");
            self.output = None;
        }
    }
}

impl fmt::Debug for TraceSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceSink")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
