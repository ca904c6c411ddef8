#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/test-support/src/lib.rs
//!
//! Shared helpers for integration tests across the chanlog workspace: a
//! recording target that captures delivered messages for assertions, a target
//! that always panics, and a process-wide lock serializing tests that swap
//! the active settings.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use engine::{Target, Verbosity};

/// One delivered message, as a target saw it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// Name of the resolved category.
    pub category: String,
    /// Verbosity tier the message was logged at.
    pub verbosity: Verbosity,
    /// The fully formatted message text.
    pub message: String,
}

/// A target that records every delivery for later inspection.
#[derive(Default)]
pub struct RecordingTarget {
    records: Mutex<Vec<Record>>,
    calls: AtomicUsize,
}

impl RecordingTarget {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every record seen so far, in delivery order.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns just the formatted message texts, in delivery order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|record| record.message)
            .collect()
    }

    /// Returns how many times [`Target::accept`] ran.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Discards every recorded delivery.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl Target for RecordingTarget {
    fn accept(&self, category: &str, verbosity: Verbosity, message: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Record {
                category: category.to_owned(),
                verbosity,
                message: message.to_owned(),
            });
    }
}

/// A target that panics on every delivery.
///
/// Used to exercise the dispatcher's per-target isolation.
pub struct PanickingTarget;

impl Target for PanickingTarget {
    fn accept(&self, _: &str, _: Verbosity, _: &str) {
        panic!("panicking target invoked");
    }
}

static SETTINGS_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that swap the process-wide settings.
///
/// Hold the returned guard for the whole test body; the harness runs tests in
/// parallel and the active settings slot is shared.
#[must_use]
pub fn exclusive_settings() -> MutexGuard<'static, ()> {
    SETTINGS_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
