//! crates/engine/src/context.rs
//! Named, reference-counted activation flags.
//!
//! A context tracks that the program has entered a named region of work so
//! that unrelated code further down the call stack can gate behavior without
//! taking a direct dependency on the system that entered it. Activation is
//! counted, so nested entries stay active until the outermost scope exits.
//! Decrementing an inactive context is a programming error and aborts with a
//! panic rather than leaving the counter inconsistent.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError};

use rustc_hash::FxHashMap;

static REGISTRY: LazyLock<Mutex<FxHashMap<&'static str, &'static Context>>> =
    LazyLock::new(|| Mutex::new(FxHashMap::default()));

/// A named activation flag with a non-negative activation counter.
///
/// Handles are `&'static` and created lazily through [`context`], exactly
/// like categories. [`is_active`](Self::is_active) is true while at least one
/// activation guard is alive.
///
/// # Examples
///
/// ```
/// use engine::context;
///
/// let editor = context("editor");
/// assert!(!editor.is_active());
/// {
///     let _outer = editor.activate();
///     let _inner = editor.activate();
///     assert!(editor.is_active());
/// }
/// assert!(!editor.is_active());
/// ```
#[derive(Debug)]
pub struct Context {
    name: &'static str,
    counter: AtomicU32,
}

impl Context {
    /// Returns the context's stable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true while the activation counter is above zero.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.counter.load(Ordering::Acquire) > 0
    }

    /// Increments the activation counter.
    ///
    /// Prefer [`activate`](Self::activate), which pairs the increment with a
    /// guaranteed decrement on scope exit.
    pub fn increment(&self) {
        self.counter.fetch_add(1, Ordering::AcqRel);
    }

    /// Decrements the activation counter.
    ///
    /// # Panics
    ///
    /// Panics if the counter is already zero; an unmatched decrement is a
    /// contract violation, not a recoverable condition.
    pub fn decrement(&self) {
        let previous = self.counter.fetch_sub(1, Ordering::AcqRel);
        assert!(
            previous > 0,
            "context `{}` decremented below zero",
            self.name
        );
    }

    /// Marks the context active for the lifetime of the returned guard.
    ///
    /// The guard decrements the counter when dropped, on every exit path:
    /// normal return, early return, or unwinding.
    #[must_use = "dropping the guard immediately deactivates the context"]
    pub fn activate(&'static self) -> ContextGuard {
        ContextGuard::new(self, true)
    }

    /// Like [`activate`](Self::activate), but only takes effect when `active`
    /// is true; otherwise the guard is inert.
    #[must_use = "dropping the guard immediately deactivates the context"]
    pub fn activate_if(&'static self, active: bool) -> ContextGuard {
        ContextGuard::new(self, active)
    }

    /// Runs `f` only while the context is active.
    pub fn when_active<F: FnOnce()>(&self, f: F) {
        if self.is_active() {
            f();
        }
    }

    /// Runs `f` only while the context is inactive.
    pub fn when_not_active<F: FnOnce()>(&self, f: F) {
        if !self.is_active() {
            f();
        }
    }
}

/// Looks up or lazily creates the context named `name`.
#[must_use]
pub fn context(name: &str) -> &'static Context {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = registry.get(name) {
        return existing;
    }

    let name: &'static str = Box::leak(name.to_owned().into_boxed_str());
    let created: &'static Context = Box::leak(Box::new(Context {
        name,
        counter: AtomicU32::new(0),
    }));
    registry.insert(name, created);
    created
}

/// RAII guard returned by [`Context::activate`].
///
/// Increments the context's counter on construction and decrements it on
/// drop, guaranteeing release on every exit path. This pairing is the sole
/// mechanism keeping context counters balanced; callers should not mix guards
/// with manual [`Context::decrement`] calls for the same scope.
#[derive(Debug)]
#[must_use = "dropping the guard immediately deactivates the context"]
pub struct ContextGuard {
    context: &'static Context,
    active: bool,
}

impl ContextGuard {
    fn new(context: &'static Context, active: bool) -> Self {
        if active {
            context.increment();
        }
        Self { context, active }
    }

    /// Returns the context this guard activates.
    #[must_use]
    pub const fn context(&self) -> &'static Context {
        self.context
    }

    /// Returns true when the guard actually holds an activation.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        if self.active {
            self.context.decrement();
        }
    }
}
