//! Validation errors.

use crate::sections::ClassCounts;
use thiserror::Error;

/// Reason a password was rejected.
///
/// Variants never carry password characters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password contains a disallowed character at position {position}")]
    InvalidCharacter { position: usize },
    #[error("Password has {len} characters, at least {required} are required")]
    TooShort { len: usize, required: usize },
    #[error("Password does not meet composition minimums (found {counts})")]
    Insufficient { counts: ClassCounts },
    #[error("Validation window starting at {start} with length {len} overflows")]
    InvalidWindow { start: usize, len: usize },
    #[error("Validation cancelled")]
    Cancelled,
}
