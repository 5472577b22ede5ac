//! Shared test utilities for the track-provider workspace.
//!
//! This crate provides standardised fixtures so the crate test suites do not
//! each rebuild the same bundles. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: the canonical "prop" and "context" provider props
//! - [`recorder`]: [`RecordingTrigger`] spy for downstream trigger calls
//! - [`files`]: temporary chain files for loader and harness tests

pub mod files;
pub mod fixtures;
pub mod recorder;

pub use recorder::{RecordedCall, RecordingTrigger};
