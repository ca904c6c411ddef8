#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `chanlog` is a categorized, verbosity-gated logging front-end: call sites
//! tag each message with a verbosity tier and, explicitly or through a scoped
//! override, a named category; the engine gates the message against the
//! category's threshold and fans accepted messages out to the configured
//! targets. This crate is the facade: it re-exports the engine surface and
//! the ready-made targets so applications depend on one crate.
//!
//! # Examples
//!
//! ```
//! use chanlog::{
//!     apply_settings, category, chan_log, chan_warnf, Settings, Verbosity,
//!     WriterTarget,
//! };
//!
//! let net = category("net");
//! net.set_threshold(Verbosity::Verbose);
//! apply_settings(
//!     Settings::builder()
//!         .target(WriterTarget::stderr())
//!         .default_category(category("app"))
//!         .build(),
//! );
//!
//! chan_log!(category: net, "connected to {0}:{1}", "localhost", 873);
//! {
//!     let _net_scope = net.scoped();
//!     chan_warnf!("%d of %d peers unreachable", 2, 5)?;
//! }
//! # Ok::<(), chanlog::FormatError>(())
//! ```

pub use engine::{
    Category, CategoryPick, CategoryScope, Context, ContextGuard, DEFAULT_CATEGORY, FormatArg,
    FormatError, MessageFormat, MultiTarget, Settings, SettingsBuilder, Severity, Target,
    Verbosity, apply_settings, category, category_with_default, chan_display, chan_displayf,
    chan_error, chan_errorf, chan_log, chan_logf, chan_msg, chan_msgf, chan_verbose,
    chan_verbosef, chan_very_verbose, chan_very_verbosef, chan_warn, chan_warnf, context,
    current_override, current_settings, default_category, dispatch, display, error, format_ordered,
    format_printf, log, log_if, log_when, logging_enabled, message, pop_category, push_category,
    resolve, scoped_category, verbose, very_verbose, warning,
};
pub use sinks::{LineMode, WriterTarget};

#[cfg(feature = "tracing")]
pub use sinks::{TracingTarget, level_for};
