#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/sinks/src/lib.rs
//!
//! # Overview
//!
//! `sinks` provides ready-made [`engine::Target`] implementations: a
//! line-oriented target over any [`std::io::Write`] implementor (with stdout
//! and stderr shortcuts) and, behind the `tracing` feature, a bridge that
//! forwards accepted messages as `tracing` events.
//!
//! # Design
//!
//! Targets here follow the dispatcher's contract: they swallow their own I/O
//! failures instead of panicking, and they are safe to invoke from any
//! thread. [`WriterTarget`] serializes through an internal mutex so
//! concurrent messages never interleave mid-line.
//!
//! # Examples
//!
//! ```
//! use engine::{apply_settings, category, chan_warn, Settings};
//! use sinks::WriterTarget;
//!
//! apply_settings(
//!     Settings::builder()
//!         .target(WriterTarget::stderr())
//!         .default_category(category("app"))
//!         .build(),
//! );
//! chan_warn!("disk {0} is at {1}%", "sda", 93);
//! ```

mod line_mode;
#[cfg(feature = "tracing")]
mod tracing_target;
mod writer;

pub use line_mode::LineMode;
#[cfg(feature = "tracing")]
pub use tracing_target::{TracingTarget, level_for};
pub use writer::WriterTarget;
