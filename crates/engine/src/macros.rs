//! crates/engine/src/macros.rs
//! Convenience macros for the logging call surface.
//!
//! Each verbosity tier gets an ordered-mode macro (`chan_warn!`) and a
//! printf-mode macro (`chan_warnf!`); the mode is fixed by which macro is
//! invoked, never inferred from the template. All forms accept an optional
//! `category: <expr>,` prefix to force an exact category and an optional
//! `if <expr>,` guard that short-circuits the call. Every macro checks the
//! global enable flag before evaluating its arguments, so argument
//! expressions with side effects are unsupported by contract.
//!
//! Ordered-mode macros expand to `()`; printf-mode macros expand to a
//! `Result<(), FormatError>` so a template/argument mismatch fails fast at
//! the call site.

/// Logs at an explicit verbosity in ordered-argument mode.
///
/// # Examples
///
/// ```
/// use engine::{category, chan_msg, Verbosity};
///
/// let net = category("macro-doc");
/// chan_msg!(Verbosity::Warning, category: net, "{0} dropped {1} packets", "peer", 3);
/// chan_msg!(Verbosity::Log, "derived category");
/// chan_msg!(Verbosity::Log, if false, "guarded out");
/// ```
#[macro_export]
macro_rules! chan_msg {
    ($verbosity:expr, category: $cat:expr, if $cond:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() && $cond {
            let args = [$($crate::FormatArg::from($arg)),*];
            let _ = $crate::log(
                $crate::CategoryPick::Exact($cat),
                $verbosity,
                $crate::MessageFormat::Ordered { template: $tpl, args: &args },
            );
        }
    }};
    ($verbosity:expr, category: $cat:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() {
            let args = [$($crate::FormatArg::from($arg)),*];
            let _ = $crate::log(
                $crate::CategoryPick::Exact($cat),
                $verbosity,
                $crate::MessageFormat::Ordered { template: $tpl, args: &args },
            );
        }
    }};
    ($verbosity:expr, if $cond:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() && $cond {
            let args = [$($crate::FormatArg::from($arg)),*];
            let _ = $crate::log(
                $crate::CategoryPick::derived(),
                $verbosity,
                $crate::MessageFormat::Ordered { template: $tpl, args: &args },
            );
        }
    }};
    ($verbosity:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() {
            let args = [$($crate::FormatArg::from($arg)),*];
            let _ = $crate::log(
                $crate::CategoryPick::derived(),
                $verbosity,
                $crate::MessageFormat::Ordered { template: $tpl, args: &args },
            );
        }
    }};
}

/// Logs at an explicit verbosity in printf mode.
///
/// Expands to a `Result<(), FormatError>`; a directive/argument mismatch is
/// reported to the caller instead of producing corrupt output.
///
/// # Examples
///
/// ```
/// use engine::{chan_msgf, Verbosity};
///
/// chan_msgf!(Verbosity::Log, "%s: %d", "answer", 42)?;
/// # Ok::<(), engine::FormatError>(())
/// ```
#[macro_export]
macro_rules! chan_msgf {
    ($verbosity:expr, category: $cat:expr, if $cond:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() && $cond {
            let args = [$($crate::FormatArg::from($arg)),*];
            $crate::log(
                $crate::CategoryPick::Exact($cat),
                $verbosity,
                $crate::MessageFormat::Printf { template: $tpl, args: &args },
            )
        } else {
            ::core::result::Result::Ok(())
        }
    }};
    ($verbosity:expr, category: $cat:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() {
            let args = [$($crate::FormatArg::from($arg)),*];
            $crate::log(
                $crate::CategoryPick::Exact($cat),
                $verbosity,
                $crate::MessageFormat::Printf { template: $tpl, args: &args },
            )
        } else {
            ::core::result::Result::Ok(())
        }
    }};
    ($verbosity:expr, if $cond:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() && $cond {
            let args = [$($crate::FormatArg::from($arg)),*];
            $crate::log(
                $crate::CategoryPick::derived(),
                $verbosity,
                $crate::MessageFormat::Printf { template: $tpl, args: &args },
            )
        } else {
            ::core::result::Result::Ok(())
        }
    }};
    ($verbosity:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::logging_enabled() {
            let args = [$($crate::FormatArg::from($arg)),*];
            $crate::log(
                $crate::CategoryPick::derived(),
                $verbosity,
                $crate::MessageFormat::Printf { template: $tpl, args: &args },
            )
        } else {
            ::core::result::Result::Ok(())
        }
    }};
}

/// Logs at [`Verbosity::Error`](crate::Verbosity::Error) in ordered mode.
///
/// # Example
/// ```
/// use engine::chan_error;
///
/// chan_error!("handshake failed after {0} attempts", 3);
/// ```
#[macro_export]
macro_rules! chan_error {
    ($($tt:tt)*) => {
        $crate::chan_msg!($crate::Verbosity::Error, $($tt)*)
    };
}

/// Printf-mode companion of [`chan_error!`].
#[macro_export]
macro_rules! chan_errorf {
    ($($tt:tt)*) => {
        $crate::chan_msgf!($crate::Verbosity::Error, $($tt)*)
    };
}

/// Logs at [`Verbosity::Warning`](crate::Verbosity::Warning) in ordered mode.
///
/// # Example
/// ```
/// use engine::chan_warn;
///
/// chan_warn!("{0} retries left", 2);
/// ```
#[macro_export]
macro_rules! chan_warn {
    ($($tt:tt)*) => {
        $crate::chan_msg!($crate::Verbosity::Warning, $($tt)*)
    };
}

/// Printf-mode companion of [`chan_warn!`].
#[macro_export]
macro_rules! chan_warnf {
    ($($tt:tt)*) => {
        $crate::chan_msgf!($crate::Verbosity::Warning, $($tt)*)
    };
}

/// Logs at [`Verbosity::Display`](crate::Verbosity::Display) in ordered mode.
#[macro_export]
macro_rules! chan_display {
    ($($tt:tt)*) => {
        $crate::chan_msg!($crate::Verbosity::Display, $($tt)*)
    };
}

/// Printf-mode companion of [`chan_display!`].
#[macro_export]
macro_rules! chan_displayf {
    ($($tt:tt)*) => {
        $crate::chan_msgf!($crate::Verbosity::Display, $($tt)*)
    };
}

/// Logs at [`Verbosity::Log`](crate::Verbosity::Log) in ordered mode.
///
/// # Example
/// ```
/// use engine::{category, chan_log};
///
/// let net = category("macro-doc-log");
/// chan_log!(category: net, "connected to {0}", "peer-1");
/// ```
#[macro_export]
macro_rules! chan_log {
    ($($tt:tt)*) => {
        $crate::chan_msg!($crate::Verbosity::Log, $($tt)*)
    };
}

/// Printf-mode companion of [`chan_log!`].
#[macro_export]
macro_rules! chan_logf {
    ($($tt:tt)*) => {
        $crate::chan_msgf!($crate::Verbosity::Log, $($tt)*)
    };
}

/// Logs at [`Verbosity::Verbose`](crate::Verbosity::Verbose) in ordered mode.
#[macro_export]
macro_rules! chan_verbose {
    ($($tt:tt)*) => {
        $crate::chan_msg!($crate::Verbosity::Verbose, $($tt)*)
    };
}

/// Printf-mode companion of [`chan_verbose!`].
#[macro_export]
macro_rules! chan_verbosef {
    ($($tt:tt)*) => {
        $crate::chan_msgf!($crate::Verbosity::Verbose, $($tt)*)
    };
}

/// Logs at [`Verbosity::VeryVerbose`](crate::Verbosity::VeryVerbose) in ordered mode.
#[macro_export]
macro_rules! chan_very_verbose {
    ($($tt:tt)*) => {
        $crate::chan_msg!($crate::Verbosity::VeryVerbose, $($tt)*)
    };
}

/// Printf-mode companion of [`chan_very_verbose!`].
#[macro_export]
macro_rules! chan_very_verbosef {
    ($($tt:tt)*) => {
        $crate::chan_msgf!($crate::Verbosity::VeryVerbose, $($tt)*)
    };
}
