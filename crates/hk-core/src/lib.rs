//! # hk-core
//!
//! Core types, error definitions, and process-wide settings for henkei.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the `Hours` alias, the error hierarchy with its `ensure!`
//! macro, the global [`Settings`] (reference year), and the string
//! parsing/formatting helpers used for labels and user input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global settings (reference year used by default constructors).
pub mod settings;

/// Parsing and formatting helpers.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Working time measured in hours (0.5-hour granularity in practice).
pub type Hours = f64;

/// Alias used for day counts and bucket sizes.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedReferenceYear, Settings};
