//! crates/sinks/src/tracing_target.rs
//! Bridges accepted messages into the `tracing` ecosystem.

use engine::{Severity, Target, Verbosity};
use tracing::Level;

/// Forwards each accepted message as a `tracing` event.
///
/// The category travels as the `category` field so subscribers can filter on
/// it; the verbosity tier picks the event level via [`level_for`].
///
/// # Examples
///
/// ```
/// use engine::{apply_settings, Settings};
/// use sinks::TracingTarget;
///
/// apply_settings(Settings::builder().target(TracingTarget).build());
/// ```
pub struct TracingTarget;

/// Maps a verbosity tier to a `tracing` level.
///
/// The three severity-bearing tiers keep their severities; the chattier tiers
/// map to the correspondingly chattier `tracing` levels.
#[must_use]
pub fn level_for(verbosity: Verbosity) -> Level {
    match verbosity.severity() {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARN,
        Severity::Info => match verbosity {
            Verbosity::Verbose => Level::DEBUG,
            Verbosity::NoLogging | Verbosity::VeryVerbose => Level::TRACE,
            _ => Level::INFO,
        },
    }
}

impl Target for TracingTarget {
    fn accept(&self, category: &str, verbosity: Verbosity, message: &str) {
        // `tracing` events need a const level, so the match fans out.
        match level_for(verbosity) {
            Level::ERROR => tracing::error!(category, "{message}"),
            Level::WARN => tracing::warn!(category, "{message}"),
            Level::INFO => tracing::info!(category, "{message}"),
            Level::DEBUG => tracing::debug!(category, "{message}"),
            Level::TRACE => tracing::trace!(category, "{message}"),
        }
    }
}
