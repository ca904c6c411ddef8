#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/engine/src/lib.rs
//!
//! # Overview
//!
//! `engine` is the core of the chanlog logging front-end: call sites emit
//! messages tagged with a category (a named, independently configurable
//! channel) and a verbosity tier; the engine resolves which category
//! applies, decides whether the message passes the verbosity gate, formats
//! it, and fans it out to every configured target in registration order.
//!
//! # Design
//!
//! - [`category`] and [`context`] are lazy, process-lifetime registries:
//!   the first reference to a name constructs the record, every later
//!   reference returns the same `&'static` handle.
//! - The category override stack is confined to the pushing thread
//!   ([`CategoryScope`] is `!Send`), so nested scopes on different threads
//!   cannot interleave. Context counters and category thresholds are
//!   atomics; the active [`Settings`] live in a swappable process-wide slot.
//! - Formatting is committed per call to one of two modes
//!   ([`MessageFormat::Ordered`] or [`MessageFormat::Printf`]); a gated call
//!   performs no formatting work at all.
//! - Dispatch is synchronous on the calling thread, with per-target panic
//!   isolation so one broken sink cannot suppress delivery to the rest.
//!
//! # Invariants
//!
//! - Category identity is unique; lookups are idempotent.
//! - Override-stack pushes and pops are strictly paired per scope; an
//!   unmatched pop or a context counter underflow aborts with a panic.
//! - The gate decision is a pure function of the message verbosity and the
//!   resolved category's threshold.
//! - Target invocation order is registration order, deterministic and
//!   repeatable.
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use engine::{
//!     apply_settings, category, chan_warn, Settings, Target, Verbosity,
//! };
//!
//! struct Capture(Mutex<Vec<String>>);
//! impl Target for Capture {
//!     fn accept(&self, category: &str, _: Verbosity, message: &str) {
//!         self.0.lock().unwrap().push(format!("{category}: {message}"));
//!     }
//! }
//!
//! let capture = Arc::new(Capture(Mutex::new(Vec::new())));
//! apply_settings(
//!     Settings::builder()
//!         .shared_target(capture.clone())
//!         .default_category(category("app"))
//!         .build(),
//! );
//!
//! chan_warn!("{0} retries left", 2);
//! let seen = capture.0.lock().unwrap();
//! assert_eq!(seen.as_slice(), ["app: 2 retries left"]);
//! ```

mod category;
mod context;
mod format;
mod logger;
mod macros;
mod scope;
mod settings;
mod target;
mod verbosity;

pub use category::{Category, DEFAULT_CATEGORY, category, category_with_default, default_category};
pub use context::{Context, ContextGuard, context};
pub use format::{FormatArg, FormatError, MessageFormat, format_ordered, format_printf};
pub use logger::{display, error, log, log_if, log_when, message, verbose, very_verbose, warning};
pub use scope::{
    CategoryPick, CategoryScope, current_override, pop_category, push_category, resolve,
    scoped_category,
};
pub use settings::{Settings, SettingsBuilder, apply_settings, current_settings, logging_enabled};
pub use target::{MultiTarget, Target, dispatch};
pub use verbosity::{Severity, Verbosity};
