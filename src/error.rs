//! # Error Types
//!
//! Error handling for the codec primitives.
//!
//! This module defines the two conditions the cursors can raise, plus the
//! parse error for textual hardware addresses.
//!
//! ## Error Categories
//! - **Input exhaustion**: a decode asked for more bytes than the input holds.
//!   This is data-dependent — truncated or malformed input — and decoders are
//!   expected to propagate it as a decode failure.
//! - **Output exhaustion**: an encode would overrun the destination buffer.
//!   This signals a sizing bug on the encoding path, not a data-quality issue.
//!
//! Every variant carries the requested size and the size that was actually
//! available, so callers can report a precise diagnostic.
//!
//! All errors implement `std::error::Error` for interoperability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// CodecError is the primary error type for all cursor operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecError {
    /// A read or skip requested more bytes than remain in the input.
    #[error("input exhausted: needed {needed} bytes, {remaining} remaining")]
    InputExhausted {
        /// Bytes the failed operation asked for.
        needed: usize,
        /// Bytes that were actually left in the input.
        remaining: usize,
    },

    /// A write, skip, or fill would exceed the remaining output capacity.
    #[error("output exhausted: needed {needed} bytes, {remaining} remaining")]
    OutputExhausted {
        /// Bytes the failed operation asked for.
        needed: usize,
        /// Capacity that was actually left in the output.
        remaining: usize,
    },
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error returned when parsing a hardware address from text fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHwAddrError {
    #[error("invalid octet count: expected {expected}, found {found}")]
    InvalidOctetCount { expected: usize, found: usize },

    #[error("invalid octet `{0}`")]
    InvalidOctet(String),
}
