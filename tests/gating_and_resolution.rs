//! Integration tests for verbosity gating and category resolution.
//!
//! These tests drive the full path from the macro surface through
//! resolution, the verbosity gate, formatting, and dispatch, asserting on
//! what a recording target actually received.

use std::sync::Arc;

use chanlog::{
    Settings, Target, Verbosity, apply_settings, category, category_with_default, chan_log,
    chan_msg, chan_warn,
};
use test_support::{RecordingTarget, exclusive_settings};

fn install(default: &'static chanlog::Category) -> Arc<RecordingTarget> {
    let recorder = Arc::new(RecordingTarget::new());
    apply_settings(
        Settings::builder()
            .shared_target(Arc::clone(&recorder) as Arc<dyn Target>)
            .default_category(default)
            .build(),
    );
    recorder
}

// ============================================================================
// Verbosity Gate Tests
// ============================================================================

/// Verifies the gate admits exactly the tiers at or below the threshold,
/// and never NoLogging, for every threshold.
#[test]
fn gate_is_monotonic_across_all_thresholds() {
    let _settings = exclusive_settings();
    let tiers = [
        Verbosity::NoLogging,
        Verbosity::Error,
        Verbosity::Warning,
        Verbosity::Display,
        Verbosity::Log,
        Verbosity::Verbose,
        Verbosity::VeryVerbose,
    ];

    let cat = category("gate-matrix");
    let recorder = install(cat);

    for threshold in tiers {
        cat.set_threshold(threshold);
        recorder.clear();

        for tier in tiers {
            chan_msg!(tier, category: cat, "probe");
        }

        let expected: Vec<Verbosity> = tiers
            .into_iter()
            .filter(|tier| *tier != Verbosity::NoLogging && *tier <= threshold)
            .collect();
        let delivered: Vec<Verbosity> = recorder
            .records()
            .into_iter()
            .map(|record| record.verbosity)
            .collect();
        assert_eq!(delivered, expected, "threshold {threshold}");
    }
}

/// Verifies a NoLogging-threshold category emits nothing at any tier.
#[test]
fn no_logging_threshold_silences_the_category() {
    let _settings = exclusive_settings();
    let cat = category("gate-silent");
    cat.set_threshold(Verbosity::NoLogging);
    let recorder = install(cat);

    chan_msg!(Verbosity::Error, category: cat, "even errors stay quiet");
    assert_eq!(recorder.calls(), 0);
}

// ============================================================================
// Category Registry Tests
// ============================================================================

/// Verifies repeated lookups of one name return the same category.
#[test]
fn registry_lookups_are_idempotent() {
    let first = category("registry-idempotent");
    let second = category("registry-idempotent");
    assert!(std::ptr::eq(first, second));
}

/// Verifies a threshold hint only applies on first construction.
#[test]
fn threshold_hint_does_not_reconfigure_an_existing_category() {
    let first = category_with_default("registry-hinted", Verbosity::Warning);
    assert_eq!(first.threshold(), Verbosity::Warning);

    let second = category_with_default("registry-hinted", Verbosity::VeryVerbose);
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.threshold(), Verbosity::Warning);
}

/// Verifies threshold changes take effect for subsequent messages.
#[test]
fn threshold_changes_apply_to_later_messages() {
    let _settings = exclusive_settings();
    let cat = category("registry-retune");
    cat.set_threshold(Verbosity::Error);
    let recorder = install(cat);

    chan_warn!(category: cat, "gated out");
    cat.set_threshold(Verbosity::Warning);
    chan_warn!(category: cat, "passes now");

    assert_eq!(recorder.messages(), ["passes now"]);
}

// ============================================================================
// Resolution Precedence Tests
// ============================================================================

/// Verifies an exact category pick ignores any active scope override.
#[test]
fn exact_pick_beats_the_override_stack() {
    let _settings = exclusive_settings();
    let default = category("resolution-default");
    let scoped = category("resolution-scope");
    let exact = category("resolution-exact");
    let recorder = install(default);

    let _scope = scoped.scoped();
    chan_log!(category: exact, "forced");

    assert_eq!(recorder.records()[0].category, "resolution-exact");
}

/// Verifies derived resolution prefers the innermost scope, then the
/// settings default once every scope has closed.
#[test]
fn derived_pick_walks_scope_then_default() {
    let _settings = exclusive_settings();
    let default = category("resolution-fallback");
    let outer = category("resolution-outer");
    let inner = category("resolution-inner");
    let recorder = install(default);

    chan_log!("no scope");
    {
        let _outer = outer.scoped();
        chan_log!("outer scope");
        {
            let _inner = inner.scoped();
            chan_log!("inner scope");
        }
        chan_log!("outer again");
    }
    chan_log!("no scope again");

    let categories: Vec<String> = recorder
        .records()
        .into_iter()
        .map(|record| record.category)
        .collect();
    assert_eq!(
        categories,
        [
            "resolution-fallback",
            "resolution-outer",
            "resolution-inner",
            "resolution-outer",
            "resolution-fallback",
        ]
    );
}

/// Verifies the gate consults the resolved category's threshold, not the
/// default category's.
#[test]
fn gate_uses_the_resolved_category() {
    let _settings = exclusive_settings();
    let default = category("resolution-loud-default");
    default.set_threshold(Verbosity::VeryVerbose);
    let quiet = category("resolution-quiet-scope");
    quiet.set_threshold(Verbosity::Error);
    let recorder = install(default);

    let _scope = quiet.scoped();
    chan_warn!("suppressed by the scoped category");

    assert_eq!(recorder.calls(), 0);
}

// ============================================================================
// Global Disable Tests
// ============================================================================

/// Verifies that with logging disabled, macro arguments are never evaluated.
#[test]
fn disabled_logging_skips_argument_evaluation() {
    let _settings = exclusive_settings();
    let cat = category("disabled-lazy");
    let recorder = Arc::new(RecordingTarget::new());
    apply_settings(
        Settings::builder()
            .shared_target(Arc::clone(&recorder) as Arc<dyn Target>)
            .default_category(cat)
            .enabled(false)
            .build(),
    );

    let mut evaluations = 0_u32;
    let mut expensive = || {
        evaluations += 1;
        "value"
    };
    chan_warn!(category: cat, "{0}", expensive());

    assert_eq!(evaluations, 0);
    assert_eq!(recorder.calls(), 0);
}

/// Verifies a false `if` guard also skips argument evaluation.
#[test]
fn false_guard_skips_argument_evaluation() {
    let _settings = exclusive_settings();
    let cat = category("guard-lazy");
    let recorder = install(cat);

    let mut evaluations = 0_u32;
    chan_warn!(category: cat, if false, "{0}", {
        evaluations += 1;
        "value"
    });

    assert_eq!(evaluations, 0);
    assert_eq!(recorder.calls(), 0);
}
