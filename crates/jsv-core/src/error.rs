//! # Error Types
//!
//! Errors raised while normalizing instance or schema values. Schema-level
//! errors live in `jsv-schema`; this crate only knows about values.

use thiserror::Error;

/// A JSON number that cannot be represented in the canonical numeric domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumberError {
    /// Unsigned integers above `i64::MAX` have no lossless canonical form.
    #[error("unsigned integer {0} exceeds the supported signed 64-bit range")]
    UnsignedOutOfRange(u64),

    /// The number holds neither an integer nor a finite float.
    #[error("number {0} has no integer or finite float representation")]
    Unrepresentable(String),
}
