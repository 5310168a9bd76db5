//! Error types for henkei.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace. The `ensure!` macro is the early-return helper used by
//! validators.

use thiserror::Error;

/// The top-level error type used throughout henkei.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout henkei.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hk_core::{ensure, errors::Error};
/// fn quota(hours: f64) -> hk_core::errors::Result<f64> {
///     ensure!(hours <= 12.0, "daily quota {hours} exceeds 12 hours");
///     Ok(hours)
/// }
/// assert!(quota(8.0).is_ok());
/// assert!(quota(13.0).is_err());
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

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_slot(slot: u8) -> Result<u8> {
        crate::ensure!((1..=5).contains(&slot), "slot {slot} out of range [1, 5]");
        Ok(slot)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked_slot(3), Ok(3));
        assert_eq!(
            checked_slot(6),
            Err(Error::Precondition("slot 6 out of range [1, 5]".into()))
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(Error::Date("bad".into()).to_string(), "date error: bad");
        assert_eq!(
            Error::InvalidArgument("x".into()).to_string(),
            "invalid argument: x"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
