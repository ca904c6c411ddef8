//! crates/engine/src/settings.rs
//! Runtime settings: the ordered target list, the default category, and the
//! global kill switch.
//!
//! Settings are built once through [`SettingsBuilder`], immutable afterward,
//! and swapped in as a whole with [`apply_settings`]. Swapping is the
//! supported way to change targets at runtime (tests rely on it); individual
//! fields of an applied settings object never change.

use std::io::{self, Write as _};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::category::{self, Category};
use crate::target::Target;
use crate::verbosity::Verbosity;

static ACTIVE: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::builder().target(StderrLines).build())));

/// The active configuration: an ordered sequence of targets plus one
/// designated default category.
///
/// # Examples
///
/// ```
/// use engine::{category, Settings, Target, Verbosity};
///
/// struct Null;
/// impl Target for Null {
///     fn accept(&self, _: &str, _: Verbosity, _: &str) {}
/// }
///
/// let settings = Settings::builder()
///     .target(Null)
///     .default_category(category("app"))
///     .build();
/// assert_eq!(settings.default_category().name(), "app");
/// assert_eq!(settings.targets().len(), 1);
/// ```
pub struct Settings {
    targets: Vec<Arc<dyn Target>>,
    default_category: &'static Category,
    enabled: bool,
}

impl Settings {
    /// Starts building a settings object.
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder {
            targets: Vec::new(),
            default_category: None,
            enabled: true,
        }
    }

    /// Settings with logging disabled entirely: every entry point becomes a
    /// no-op until different settings are applied.
    #[must_use]
    pub fn disabled() -> Self {
        Self::builder().enabled(false).build()
    }

    /// Returns the targets in registration order.
    #[must_use]
    pub fn targets(&self) -> &[Arc<dyn Target>] {
        &self.targets
    }

    /// Returns the category used when resolution finds no other pick.
    #[must_use]
    pub const fn default_category(&self) -> &'static Category {
        self.default_category
    }

    /// Returns false when every logging entry point is a no-op.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Ordered list-builder for [`Settings`].
pub struct SettingsBuilder {
    targets: Vec<Arc<dyn Target>>,
    default_category: Option<&'static Category>,
    enabled: bool,
}

impl SettingsBuilder {
    /// Appends a target; dispatch order is registration order.
    #[must_use]
    pub fn target(mut self, target: impl Target + 'static) -> Self {
        self.targets.push(Arc::new(target));
        self
    }

    /// Appends an already-shared target.
    #[must_use]
    pub fn shared_target(mut self, target: Arc<dyn Target>) -> Self {
        self.targets.push(target);
        self
    }

    /// Sets the default category used by derived resolution.
    #[must_use]
    pub fn default_category(mut self, category: &'static Category) -> Self {
        self.default_category = Some(category);
        self
    }

    /// Enables or disables logging as a whole.
    ///
    /// While disabled, every entry point short-circuits before resolving a
    /// category or formatting anything; the convenience macros additionally
    /// skip evaluating their arguments. Side effects inside logging arguments
    /// are therefore unsupported.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Finalizes the settings.
    ///
    /// When no default category was picked, the process-wide `"general"`
    /// category is used so resolution always has somewhere to land.
    #[must_use]
    pub fn build(self) -> Settings {
        Settings {
            targets: self.targets,
            default_category: self
                .default_category
                .unwrap_or_else(category::default_category),
            enabled: self.enabled,
        }
    }
}

/// Replaces the process-wide active settings.
pub fn apply_settings(settings: Settings) {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Arc::new(settings);
}

/// Returns a handle to the currently active settings.
///
/// Logging calls already in flight keep the settings they started with; the
/// swap takes effect for subsequent calls.
#[must_use]
pub fn current_settings() -> Arc<Settings> {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Returns true while logging is globally enabled.
///
/// The convenience macros consult this before evaluating their arguments.
#[must_use]
pub fn logging_enabled() -> bool {
    current_settings().is_enabled()
}

/// Serializes tests that swap the process-wide settings slot.
///
/// Every test in this crate that calls [`apply_settings`] must hold the
/// returned guard for its whole body; the harness runs unit tests of all
/// modules in parallel threads against the one `ACTIVE` slot.
#[cfg(test)]
pub(crate) fn exclusive_settings() -> std::sync::MutexGuard<'static, ()> {
    static SETTINGS_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    SETTINGS_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Fallback target installed before any settings are applied: one line per
/// message on standard error.
struct StderrLines;

impl Target for StderrLines {
    fn accept(&self, category: &str, verbosity: Verbosity, message: &str) {
        // A failing stderr must not take logging down with it.
        let _ = writeln!(
            io::stderr().lock(),
            "{category} {}: {message}",
            verbosity.as_str()
        );
    }
}
