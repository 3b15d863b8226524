//! # xt-text
//!
//! Extract arguments from a string by matching it against a template with
//! numbered placeholders:
//!
//! ```
//! use xt_text::{extract_arguments, ComparisonMode};
//!
//! let args = extract_arguments("Order 42 shipped to Oslo", "Order {0} shipped to {1}", ComparisonMode::Whole)
//!     .unwrap();
//! assert_eq!(args, ["42", "Oslo"]);
//! ```
//!
//! The work is split in three stages: [`template`] tokenizes, [`pattern`]
//! compiles to a regular expression, and [`extract`] matches and reads the
//! captures. [`cache`] keeps compiled templates around.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Compile-once template cache.
pub mod cache;

/// Matching and argument extraction.
pub mod extract;

/// Template → regex compilation.
pub mod pattern;

/// Template tokenizer.
pub mod template;

pub use cache::{TemplateCache, DEFAULT_CAPACITY};
pub use extract::{extract, extract_arguments, extract_arguments_with, Argument, Captures};
pub use pattern::{CompiledTemplate, ComparisonMode, MatchOptions};
pub use template::{Template, Token};
