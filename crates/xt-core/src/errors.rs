//! Error types for extendkit.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here. The `ensure!` and `fail!`
//! macros cover the common "check a precondition / bail out" shapes.

use thiserror::Error;

/// The top-level error type used throughout extendkit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date- or time-related error (invalid or out-of-range value).
    #[error("date error: {0}")]
    Date(String),

    /// A template could not be tokenized.
    #[error("invalid template at byte {position}: {reason}")]
    InvalidTemplate {
        /// Byte offset in the template where the problem was detected.
        position: usize,
        /// What was wrong.
        reason: String,
    },

    /// A derived regular expression could not be built.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Unknown time-zone identifier.
    #[error("unknown time zone: {0}")]
    TimeZone(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::InvalidTemplate`].
    pub fn invalid_template(position: usize, reason: impl Into<String>) -> Self {
        Error::InvalidTemplate {
            position,
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout extendkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use xt_core::{ensure, errors::Error};
/// fn positive(x: i32) -> xt_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use xt_core::{fail, errors::Error};
/// fn always_err() -> xt_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
