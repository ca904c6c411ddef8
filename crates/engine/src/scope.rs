//! crates/engine/src/scope.rs
//! Thread-local category override stack and per-call category resolution.
//!
//! The override stack lets a lexical scope force a category onto every
//! logging call made beneath it without threading the category through call
//! sites. The stack is confined to the pushing thread, so interleaved scopes
//! on different threads cannot corrupt each other; the [`CategoryScope`]
//! guard keeps push and pop strictly paired on every exit path.

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::category::Category;

thread_local! {
    static OVERRIDES: RefCell<Vec<&'static Category>> = const { RefCell::new(Vec::new()) };
}

/// Pushes `category` onto the calling thread's override stack.
///
/// Prefer [`scoped_category`] or [`Category::scoped`], which guarantee the
/// matching pop.
pub fn push_category(category: &'static Category) {
    OVERRIDES.with(|stack| stack.borrow_mut().push(category));
}

/// Pops the top of the calling thread's override stack.
///
/// # Panics
///
/// Panics if the stack is empty; an unmatched pop is a contract violation.
pub fn pop_category() {
    let popped = OVERRIDES.with(|stack| stack.borrow_mut().pop());
    assert!(
        popped.is_some(),
        "category override stack popped while empty"
    );
}

/// Returns the category currently forced by the innermost active scope, if
/// any.
#[must_use]
pub fn current_override() -> Option<&'static Category> {
    OVERRIDES.with(|stack| stack.borrow().last().copied())
}

/// Pushes `category` for the lifetime of the returned guard.
#[must_use = "dropping the guard immediately reverts the category override"]
pub fn scoped_category(category: &'static Category) -> CategoryScope {
    push_category(category);
    CategoryScope {
        category,
        // The stack is thread-local; the guard must be dropped on the thread
        // that pushed.
        _thread_confined: PhantomData,
    }
}

/// RAII guard that keeps a category pushed while it is alive.
///
/// Dropping the guard pops the override stack, restoring whatever resolution
/// was in effect before the scope was entered. Guards nest: the most recently
/// constructed one wins resolution until it is dropped. The guard is `!Send`
/// because the stack it maintains belongs to the constructing thread.
#[derive(Debug)]
#[must_use = "dropping the guard immediately reverts the category override"]
pub struct CategoryScope {
    category: &'static Category,
    _thread_confined: PhantomData<*const ()>,
}

impl CategoryScope {
    /// Returns the category this scope forces.
    #[must_use]
    pub const fn category(&self) -> &'static Category {
        self.category
    }
}

impl Drop for CategoryScope {
    fn drop(&mut self) {
        pop_category();
    }
}

/// Category selection strategy supplied by a call site.
///
/// The two variants mirror the two resolution strategies of the call
/// surface: forcing an exact category regardless of any active scope, or
/// deriving one from the scope stack with an optional call-site fallback.
#[derive(Clone, Copy, Debug)]
pub enum CategoryPick {
    /// Use exactly this category, ignoring the override stack.
    Exact(&'static Category),
    /// Use the innermost scoped category if a scope is active, else the
    /// supplied fallback, else the configured default.
    Derive(Option<&'static Category>),
}

impl CategoryPick {
    /// The fully derived pick: scope stack first, configured default last.
    #[must_use]
    pub const fn derived() -> Self {
        Self::Derive(None)
    }
}

impl From<&'static Category> for CategoryPick {
    fn from(category: &'static Category) -> Self {
        Self::Exact(category)
    }
}

/// Resolves the effective category for one logging call.
///
/// Resolution is repeated fresh on every call and always lands on a defined
/// category: an exact pick wins outright; a derived pick consults the
/// thread's override stack, then the pick's own fallback, then `default`.
#[must_use]
pub fn resolve(pick: CategoryPick, default: &'static Category) -> &'static Category {
    match pick {
        CategoryPick::Exact(category) => category,
        CategoryPick::Derive(fallback) => current_override().or(fallback).unwrap_or(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::category;

    #[test]
    fn derive_falls_back_to_default_without_scopes() {
        let default = category("scope-default");
        assert!(std::ptr::eq(
            resolve(CategoryPick::derived(), default),
            default
        ));
    }

    #[test]
    fn derive_prefers_the_innermost_scope() {
        let default = category("scope-default");
        let outer = category("scope-outer");
        let inner = category("scope-inner");

        let _outer = outer.scoped();
        assert!(std::ptr::eq(resolve(CategoryPick::derived(), default), outer));
        {
            let _inner = inner.scoped();
            assert!(std::ptr::eq(resolve(CategoryPick::derived(), default), inner));
        }
        // Inner scope exited; the outer override is visible again.
        assert!(std::ptr::eq(resolve(CategoryPick::derived(), default), outer));
    }

    #[test]
    fn derive_fallback_outranks_the_default_but_not_the_stack() {
        let default = category("scope-default");
        let fallback = category("scope-fallback");
        let scoped = category("scope-active");

        assert!(std::ptr::eq(
            resolve(CategoryPick::Derive(Some(fallback)), default),
            fallback
        ));

        let _scope = scoped.scoped();
        assert!(std::ptr::eq(
            resolve(CategoryPick::Derive(Some(fallback)), default),
            scoped
        ));
    }

    #[test]
    fn exact_pick_ignores_the_stack() {
        let default = category("scope-default");
        let exact = category("scope-exact");
        let scoped = category("scope-shadowed");

        let _scope = scoped.scoped();
        assert!(std::ptr::eq(
            resolve(CategoryPick::Exact(exact), default),
            exact
        ));
    }

    #[test]
    fn guard_pops_on_unwind() {
        let scoped = category("scope-unwind");
        let outcome = std::panic::catch_unwind(|| {
            let _scope = scoped.scoped();
            panic!("scope body failed");
        });
        assert!(outcome.is_err());
        assert!(current_override().is_none());
    }

    #[test]
    fn overrides_are_thread_confined() {
        let scoped = category("scope-confined");
        let _scope = scoped.scoped();

        let seen_elsewhere = std::thread::spawn(current_override)
            .join()
            .expect("observer thread panicked");
        assert!(seen_elsewhere.is_none());
        assert!(current_override().is_some());
    }

    #[test]
    #[should_panic(expected = "popped while empty")]
    fn unmatched_pop_is_fatal() {
        pop_category();
    }
}
