//! # xt-core
//!
//! Error definitions and shared settings for extendkit.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the error enum, the `ensure!` / `fail!`
//! macros, the process-wide [`Settings`], and small formatting utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Process-wide settings (evaluation instant, default time zone).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year. Signed so that the Easter computation accepts any integer.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationInstant, Settings, DEFAULT_TIME_ZONE};
