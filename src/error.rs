//! Error types surfaced across the host call boundary.
//!
//! The host catches these at its call boundary and presents the `Display`
//! output to the end user; this crate never prints.

use thiserror::Error;

/// Error raised by bytearray operations and method dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtError {
    /// Construction received something other than a byte string.
    #[error("TypeError: expected string.")]
    ExpectedString,
    /// A method expected a bytearray receiver or operand.
    #[error("TypeError: expected bytearray.")]
    ExpectedByteArray,
    /// A method expected an integer argument.
    #[error("TypeError: expected int.")]
    ExpectedInt,
    /// An offset or count falls outside the buffer.
    #[error("ValueError: invalid index {0}.")]
    InvalidIndex(i64),
    /// No method registered under this name.
    #[error("method not found: {0}")]
    MethodNotFound(String),
    /// Method called with too few arguments.
    #[error("expected {expected} arguments, got {got}")]
    InvalidArgCount { expected: usize, got: usize },
    /// A handle no longer refers to a live bytearray.
    #[error("invalid bytearray handle")]
    InvalidHandle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ExtError::ExpectedString.to_string(), "TypeError: expected string.");
        assert_eq!(
            ExtError::InvalidIndex(9).to_string(),
            "ValueError: invalid index 9."
        );
        assert_eq!(
            ExtError::InvalidIndex(-1).to_string(),
            "ValueError: invalid index -1."
        );
    }
}
