//! crates/sinks/src/writer.rs
//! A line-oriented target over any [`std::io::Write`] implementor.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use engine::{Target, Verbosity};

use crate::line_mode::LineMode;

/// Writes each accepted message as `"{category} {verbosity}: {message}"` to
/// the wrapped writer.
///
/// The writer sits behind a [`Mutex`] because the engine may deliver from any
/// thread; lines from concurrent callers never interleave mid-line. Write
/// errors are swallowed: a broken pipe on the output side must not take the
/// logging path down with it.
///
/// # Examples
///
/// ```
/// use engine::{Target, Verbosity};
/// use sinks::WriterTarget;
///
/// let target = WriterTarget::new(Vec::new());
/// target.accept("net", Verbosity::Warning, "retrying");
/// let bytes = target.into_inner();
/// assert_eq!(bytes, b"net warning: retrying\n");
/// ```
pub struct WriterTarget<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W: Write + Send> WriterTarget<W> {
    /// Wraps `writer` with the default [`LineMode::WithNewline`].
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Wraps `writer` with an explicit newline policy.
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the wrapped writer, consuming the target.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterTarget<io::Stdout> {
    /// A target writing one line per message to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterTarget<io::Stderr> {
    /// A target writing one line per message to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Target for WriterTarget<W> {
    fn accept(&self, category: &str, verbosity: Verbosity, message: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let outcome = if self.line_mode.append_newline() {
            writeln!(writer, "{category} {verbosity}: {message}")
        } else {
            write!(writer, "{category} {verbosity}: {message}")
        };
        let _ = outcome;
    }
}
