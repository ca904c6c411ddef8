//! crates/engine/src/target.rs
//! The target capability and the fan-out dispatcher.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::verbosity::Verbosity;

/// An output sink for accepted log messages.
///
/// A target performs an externally visible effect for each finalized
/// `(category, verbosity, message)` tuple handed to it. Targets hold no
/// ownership relationship to categories or contexts; they are pure sinks.
/// Because the active settings are shared process-wide, `accept` may be
/// invoked from any thread, hence the `Send + Sync` bound.
///
/// A target failure is the target's own concern: the dispatcher isolates
/// panics per target, so implementations should also swallow I/O errors
/// rather than panicking on them.
pub trait Target: Send + Sync {
    /// Processes one accepted message.
    fn accept(&self, category: &str, verbosity: Verbosity, message: &str);
}

impl<T: Target + ?Sized> Target for Arc<T> {
    fn accept(&self, category: &str, verbosity: Verbosity, message: &str) {
        (**self).accept(category, verbosity, message);
    }
}

/// A composite target forwarding to an ordered list of constituents.
///
/// The composite is itself a [`Target`], so target sets nest and can be
/// recomposed at runtime: a multi-target wrapping the default logger plus an
/// extra sink can be registered wherever a single target is expected.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use engine::{MultiTarget, Target, Verbosity};
///
/// struct Null;
/// impl Target for Null {
///     fn accept(&self, _: &str, _: Verbosity, _: &str) {}
/// }
///
/// let composite = MultiTarget::new(vec![Arc::new(Null), Arc::new(Null)]);
/// composite.accept("general", Verbosity::Log, "fans out to both");
/// ```
pub struct MultiTarget {
    targets: Vec<Arc<dyn Target>>,
}

impl MultiTarget {
    /// Builds a composite from an ordered list of targets.
    #[must_use]
    pub fn new(targets: Vec<Arc<dyn Target>>) -> Self {
        Self { targets }
    }

    /// Appends a constituent, keeping registration order.
    #[must_use]
    pub fn with(mut self, target: impl Target + 'static) -> Self {
        self.targets.push(Arc::new(target));
        self
    }

    /// Returns the constituents in registration order.
    #[must_use]
    pub fn targets(&self) -> &[Arc<dyn Target>] {
        &self.targets
    }
}

impl Default for MultiTarget {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Target for MultiTarget {
    fn accept(&self, category: &str, verbosity: Verbosity, message: &str) {
        dispatch(&self.targets, category, verbosity, message);
    }
}

/// Invokes every target in registration order, synchronously, on the calling
/// thread.
///
/// Each invocation is isolated: a panicking target never suppresses delivery
/// to the targets registered after it.
pub fn dispatch(targets: &[Arc<dyn Target>], category: &str, verbosity: Verbosity, message: &str) {
    for target in targets {
        // The failure stays with the failing target; later targets still run.
        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            target.accept(category, verbosity, message);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        label: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Target for Recorder {
        fn accept(&self, category: &str, verbosity: Verbosity, message: &str) {
            self.seen
                .lock()
                .expect("recorder lock")
                .push(format!("{}:{category}:{verbosity}:{message}", self.label));
        }
    }

    struct Faulty;

    impl Target for Faulty {
        fn accept(&self, _: &str, _: Verbosity, _: &str) {
            panic!("sink failed");
        }
    }

    #[test]
    fn dispatch_preserves_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let targets: Vec<Arc<dyn Target>> = vec![
            Arc::new(Recorder {
                label: "first",
                seen: Arc::clone(&seen),
            }),
            Arc::new(Recorder {
                label: "second",
                seen: Arc::clone(&seen),
            }),
        ];

        dispatch(&targets, "net", Verbosity::Warning, "msg");

        let seen = seen.lock().expect("recorder lock");
        assert_eq!(
            *seen,
            vec![
                "first:net:warning:msg".to_owned(),
                "second:net:warning:msg".to_owned(),
            ]
        );
    }

    #[test]
    fn panicking_target_does_not_suppress_later_targets() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let targets: Vec<Arc<dyn Target>> = vec![
            Arc::new(Faulty),
            Arc::new(Recorder {
                label: "after",
                seen: Arc::clone(&seen),
            }),
        ];

        dispatch(&targets, "net", Verbosity::Error, "still delivered");

        let seen = seen.lock().expect("recorder lock");
        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("after:"));
    }

    #[test]
    fn composite_forwards_to_every_constituent_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let composite = MultiTarget::default()
            .with(Recorder {
                label: "a",
                seen: Arc::clone(&seen),
            })
            .with(Recorder {
                label: "b",
                seen: Arc::clone(&seen),
            })
            .with(Recorder {
                label: "c",
                seen: Arc::clone(&seen),
            });

        composite.accept("io", Verbosity::Log, "fan-out");

        let seen = seen.lock().expect("recorder lock");
        assert_eq!(seen.len(), 3);
        assert!(seen[0].starts_with("a:"));
        assert!(seen[1].starts_with("b:"));
        assert!(seen[2].starts_with("c:"));
    }

    #[test]
    fn composites_nest() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let inner = MultiTarget::default().with(Recorder {
            label: "inner",
            seen: Arc::clone(&seen),
        });
        let outer = MultiTarget::default()
            .with(inner)
            .with(Recorder {
                label: "outer",
                seen: Arc::clone(&seen),
            });

        outer.accept("io", Verbosity::Log, "nested");

        let seen = seen.lock().expect("recorder lock");
        assert_eq!(seen.len(), 2);
        assert!(seen[0].starts_with("inner:"));
        assert!(seen[1].starts_with("outer:"));
    }
}
