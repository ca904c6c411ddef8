//! crates/engine/src/verbosity.rs
//! Verbosity tiers and the gate predicate applied to every logging call.

use std::fmt;

/// Severity/volume tier of a message, totally ordered from most severe to
/// least: `NoLogging < Error < Warning < Display < Log < Verbose <
/// VeryVerbose`.
///
/// A message passes the gate for a category only if its verbosity is at or
/// below the category's configured threshold and is not [`NoLogging`]
/// (a message can never be emitted at the no-logging tier).
///
/// [`NoLogging`]: Verbosity::NoLogging
///
/// # Examples
///
/// ```
/// use engine::Verbosity;
///
/// assert!(Verbosity::Warning.passes(Verbosity::Warning));
/// assert!(Verbosity::Error.passes(Verbosity::Warning));
/// assert!(!Verbosity::Verbose.passes(Verbosity::Warning));
/// assert!(!Verbosity::NoLogging.passes(Verbosity::VeryVerbose));
/// ```
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// Suppresses the message unconditionally; a category configured at this
    /// threshold emits nothing.
    NoLogging = 0,
    /// Error message.
    Error = 1,
    /// Warning message.
    Warning = 2,
    /// Message shown by default in user-facing output.
    Display = 3,
    /// Standard log message; the default category threshold.
    Log = 4,
    /// High-volume diagnostic message.
    Verbose = 5,
    /// Highest-volume diagnostic message.
    VeryVerbose = 6,
}

/// Coarse severity tier used by sinks that only distinguish
/// error/warning/informational output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl Severity {
    /// Returns the lowercase label used when rendering messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl Verbosity {
    /// Returns true when a message at this verbosity passes the gate for a
    /// category configured at `threshold`.
    ///
    /// The decision is a pure function of the two tiers; it consults no other
    /// state.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self != Self::NoLogging && self <= threshold
    }

    /// Maps the verbosity onto the coarse [`Severity`] tier.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Error => Severity::Error,
            Self::Warning => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Returns the lowercase label used when rendering messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoLogging => "nologging",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Display => "display",
            Self::Log => "log",
            Self::Verbose => "verbose",
            Self::VeryVerbose => "very-verbose",
        }
    }

    /// Parses the label produced by [`as_str`](Self::as_str).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nologging" => Some(Self::NoLogging),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "display" => Some(Self::Display),
            "log" => Some(Self::Log),
            "verbose" => Some(Self::Verbose),
            "very-verbose" => Some(Self::VeryVerbose),
            _ => None,
        }
    }

    /// Decodes the `repr(u8)` encoding used by the category registry.
    #[must_use]
    pub(crate) fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::NoLogging),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Display),
            4 => Some(Self::Log),
            5 => Some(Self::Verbose),
            6 => Some(Self::VeryVerbose),
            _ => None,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
