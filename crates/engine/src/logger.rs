//! crates/engine/src/logger.rs
//! The log engine: resolution, gating, formatting, dispatch.
//!
//! Every logging entry point funnels into [`log`], which performs the four
//! steps in order: short-circuit if logging is disabled, resolve the
//! effective category, apply the verbosity gate, and only then format the
//! message and fan it out. A gated call performs no formatting work at all,
//! so expensive templates cost nothing when their category is quiet.

use crate::format::{FormatError, MessageFormat};
use crate::scope::{self, CategoryPick};
use crate::settings;
use crate::target;
use crate::verbosity::Verbosity;

/// Logs one message.
///
/// The category is resolved fresh for this call: an exact pick wins, a
/// derived pick consults the thread's override stack and then the active
/// settings' default. The call is a no-op when logging is disabled, when
/// `verbosity` is [`Verbosity::NoLogging`], or when the resolved category's
/// threshold gates the message out; none of those paths formats anything.
///
/// Printf-mode templates are validated during formatting; a mismatch
/// surfaces as a [`FormatError`] and nothing is dispatched. Ordered-mode
/// templates never fail.
///
/// # Examples
///
/// ```
/// use engine::{category, CategoryPick, FormatArg, MessageFormat, Verbosity};
///
/// let net = category("doc-net");
/// let args = [FormatArg::from("peer"), FormatArg::from(7)];
/// engine::log(
///     CategoryPick::Exact(net),
///     Verbosity::Warning,
///     MessageFormat::Ordered { template: "{0} retried {1} times", args: &args },
/// )?;
/// # Ok::<(), engine::FormatError>(())
/// ```
pub fn log(
    pick: CategoryPick,
    verbosity: Verbosity,
    format: MessageFormat<'_>,
) -> Result<(), FormatError> {
    let settings = settings::current_settings();
    if !settings.is_enabled() {
        return Ok(());
    }

    let category = scope::resolve(pick, settings.default_category());
    if !category.allows(verbosity) {
        return Ok(());
    }

    let message = format.render()?;
    target::dispatch(settings.targets(), category.name(), verbosity, &message);
    Ok(())
}

/// Like [`log`], but short-circuits before any resolution or formatting work
/// when `condition` is false.
pub fn log_if(
    condition: bool,
    pick: CategoryPick,
    verbosity: Verbosity,
    format: MessageFormat<'_>,
) -> Result<(), FormatError> {
    if condition {
        log(pick, verbosity, format)
    } else {
        Ok(())
    }
}

/// Like [`log_if`], with the condition supplied as a predicate.
///
/// The predicate is evaluated eagerly, exactly once, before anything else
/// happens; it is never deferred past the call.
pub fn log_when<P: FnOnce() -> bool>(
    predicate: P,
    pick: CategoryPick,
    verbosity: Verbosity,
    format: MessageFormat<'_>,
) -> Result<(), FormatError> {
    let condition = predicate();
    log_if(condition, pick, verbosity, format)
}

macro_rules! tier_fn {
    ($(#[$meta:meta])* $name:ident, $verbosity:ident) => {
        $(#[$meta])*
        pub fn $name(pick: CategoryPick, format: MessageFormat<'_>) -> Result<(), FormatError> {
            log(pick, Verbosity::$verbosity, format)
        }
    };
}

tier_fn!(
    /// Logs at [`Verbosity::Error`].
    error,
    Error
);
tier_fn!(
    /// Logs at [`Verbosity::Warning`].
    warning,
    Warning
);
tier_fn!(
    /// Logs at [`Verbosity::Display`].
    display,
    Display
);
tier_fn!(
    /// Logs at [`Verbosity::Log`].
    message,
    Log
);
tier_fn!(
    /// Logs at [`Verbosity::Verbose`].
    verbose,
    Verbose
);
tier_fn!(
    /// Logs at [`Verbosity::VeryVerbose`].
    very_verbose,
    VeryVerbose
);
