//! crates/engine/src/category.rs
//! Process-wide category registry.
//!
//! A category is a named logging channel with its own verbosity threshold.
//! Categories are created lazily the first time their name is referenced and
//! live for the rest of the process; repeated lookups for the same name
//! return the same `&'static Category`. The registry lock is held across the
//! lookup-or-insert so concurrent first references construct exactly one
//! record per identity.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError};

use rustc_hash::FxHashMap;

use crate::scope::{self, CategoryScope};
use crate::verbosity::Verbosity;

/// Name of the category used when neither the call site nor the active
/// settings pick one.
pub const DEFAULT_CATEGORY: &str = "general";

static REGISTRY: LazyLock<Mutex<FxHashMap<&'static str, &'static Category>>> =
    LazyLock::new(|| Mutex::new(FxHashMap::default()));

/// A named logging channel with an independently configurable verbosity
/// threshold.
///
/// Handles are `&'static`; identity comparison is pointer comparison. The
/// threshold is stored atomically so configuration-time writes take no
/// registry lock, but it is expected to be set during configuration rather
/// than concurrently with normal logging.
///
/// # Examples
///
/// ```
/// use engine::{category, Verbosity};
///
/// let net = category("network");
/// assert_eq!(net.name(), "network");
/// assert_eq!(net.threshold(), Verbosity::Log);
///
/// net.set_threshold(Verbosity::Warning);
/// assert!(net.allows(Verbosity::Error));
/// assert!(!net.allows(Verbosity::Verbose));
/// ```
#[derive(Debug)]
pub struct Category {
    name: &'static str,
    threshold: AtomicU8,
}

impl Category {
    fn new(name: &'static str, threshold: Verbosity) -> Self {
        Self {
            name,
            threshold: AtomicU8::new(threshold as u8),
        }
    }

    /// Returns the category's stable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the configured verbosity threshold.
    ///
    /// # Panics
    ///
    /// Panics if the stored byte is not an encoded [`Verbosity`]; only
    /// [`set_threshold`](Self::set_threshold) writes the slot, so any other
    /// value is corruption and must not pass silently.
    #[must_use]
    pub fn threshold(&self) -> Verbosity {
        let raw = self.threshold.load(Ordering::Acquire);
        Verbosity::from_raw(raw).expect("threshold stores an encoded Verbosity")
    }

    /// Reconfigures the verbosity threshold.
    pub fn set_threshold(&self, threshold: Verbosity) {
        self.threshold.store(threshold as u8, Ordering::Release);
    }

    /// Returns true when a message at `verbosity` passes this category's gate.
    #[must_use]
    pub fn allows(&self, verbosity: Verbosity) -> bool {
        verbosity.passes(self.threshold())
    }

    /// Pushes this category onto the calling thread's override stack for the
    /// lifetime of the returned guard.
    ///
    /// While the guard is alive, logging calls that derive their category
    /// resolve to this one. Dropping the guard pops the stack, restoring the
    /// previous resolution on every exit path.
    #[must_use = "dropping the guard immediately reverts the category override"]
    pub fn scoped(&'static self) -> CategoryScope {
        scope::scoped_category(self)
    }
}

/// Looks up or lazily creates the category named `name`.
///
/// The first call for a given name constructs the category with the default
/// threshold [`Verbosity::Log`]; subsequent calls return the same instance
/// regardless of the default they would have supplied.
///
/// # Examples
///
/// ```
/// use engine::category;
///
/// let a = category("transfer");
/// let b = category("transfer");
/// assert!(std::ptr::eq(a, b));
/// ```
#[must_use]
pub fn category(name: &str) -> &'static Category {
    category_with_default(name, Verbosity::Log)
}

/// Looks up or lazily creates the category named `name`, using
/// `default_threshold` if this call is the one that creates it.
#[must_use]
pub fn category_with_default(name: &str, default_threshold: Verbosity) -> &'static Category {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = registry.get(name) {
        return existing;
    }

    // Categories live for the process lifetime; leaking gives every handle a
    // stable 'static identity.
    let name: &'static str = Box::leak(name.to_owned().into_boxed_str());
    let created: &'static Category = Box::leak(Box::new(Category::new(name, default_threshold)));
    registry.insert(name, created);
    created
}

/// Returns the fallback category used when settings do not pick a default.
#[must_use]
pub fn default_category() -> &'static Category {
    category(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookups_return_the_same_instance() {
        let first = category("category-identity");
        let second = category("category-identity");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.name(), second.name());
        assert_eq!(first.threshold(), second.threshold());
    }

    #[test]
    fn first_creation_uses_the_supplied_default() {
        let created = category_with_default("category-custom-default", Verbosity::Verbose);
        assert_eq!(created.threshold(), Verbosity::Verbose);

        // A later default does not rewrite an existing category.
        let again = category_with_default("category-custom-default", Verbosity::Error);
        assert!(std::ptr::eq(created, again));
        assert_eq!(again.threshold(), Verbosity::Verbose);
    }

    #[test]
    fn threshold_reconfiguration_is_visible_through_every_handle() {
        let handle = category("category-reconfigure");
        let alias = category("category-reconfigure");
        handle.set_threshold(Verbosity::Warning);
        assert_eq!(alias.threshold(), Verbosity::Warning);
        assert!(alias.allows(Verbosity::Error));
        assert!(!alias.allows(Verbosity::Log));
    }

    #[test]
    fn every_threshold_variant_decodes_back_from_the_atomic() {
        let handle = category("category-threshold-roundtrip");
        for verbosity in [
            Verbosity::NoLogging,
            Verbosity::Error,
            Verbosity::Warning,
            Verbosity::Display,
            Verbosity::Log,
            Verbosity::Verbose,
            Verbosity::VeryVerbose,
        ] {
            handle.set_threshold(verbosity);
            assert_eq!(handle.threshold(), verbosity);
        }
    }

    #[test]
    fn concurrent_first_reference_constructs_one_record() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| category("category-race")))
            .collect();

        let resolved: Vec<&'static Category> = handles
            .into_iter()
            .map(|h| h.join().expect("lookup thread panicked"))
            .collect();

        for window in resolved.windows(2) {
            assert!(std::ptr::eq(window[0], window[1]));
        }
    }

    #[test]
    fn default_category_is_always_reachable() {
        let fallback = default_category();
        assert_eq!(fallback.name(), DEFAULT_CATEGORY);
    }
}
