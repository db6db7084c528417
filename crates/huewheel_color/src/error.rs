//! Error types for color text parsing.

use thiserror::Error;

/// Why a string was rejected as a 6-digit hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexParseError {
    /// Input is not exactly six characters long
    #[error("expected 6 hex digits, found {len} characters")]
    WrongLength {
        /// Number of characters in the input
        len: usize,
    },

    /// A character is not a hex digit
    #[error("invalid hex digit '{digit}' at position {position}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Zero-based character index
        position: usize,
    },
}
