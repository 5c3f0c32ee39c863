//! Values crossing the host call boundary.
//!
//! The boundary round-trips integers, byte strings, and lists of integers;
//! bytearrays travel as opaque handles. The host's string type carries raw
//! bytes, so `Str` is a byte vector, not UTF-8.

use crate::error::ExtError;
use crate::handle::Handle;

/// Marshaled value passed to and returned from extension methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The host's "no argument" sentinel.
    Undef,
    Int(i64),
    /// Byte string.
    Str(Vec<u8>),
    List(Vec<Value>),
    /// Handle to a bytearray in the handle table.
    ByteArray(Handle),
}

impl Value {
    pub fn is_undef(&self) -> bool {
        matches!(self, Value::Undef)
    }

    /// Extract an integer, failing with `TypeError` on any other shape.
    pub fn as_int(&self) -> Result<i64, ExtError> {
        match self {
            Value::Int(n) => Ok(*n),
            _ => Err(ExtError::ExpectedInt),
        }
    }

    /// Extract a byte string, failing with `TypeError` on any other shape.
    pub fn as_str(&self) -> Result<&[u8], ExtError> {
        match self {
            Value::Str(bytes) => Ok(bytes),
            _ => Err(ExtError::ExpectedString),
        }
    }

    /// Extract a bytearray handle, failing with `TypeError` otherwise.
    pub fn as_bytearray(&self) -> Result<Handle, ExtError> {
        match self {
            Value::ByteArray(handle) => Ok(*handle),
            _ => Err(ExtError::ExpectedByteArray),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Str(bytes)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractors_round_trip() {
        assert_eq!(Value::Int(42).as_int(), Ok(42));
        assert_eq!(Value::Str(b"hi".to_vec()).as_str(), Ok(&b"hi"[..]));
        assert_eq!(Value::ByteArray(7).as_bytearray(), Ok(7));
    }

    #[test]
    fn test_wrong_shape_is_type_error() {
        assert_eq!(Value::Undef.as_int(), Err(ExtError::ExpectedInt));
        assert_eq!(Value::Int(1).as_str(), Err(ExtError::ExpectedString));
        assert_eq!(Value::Int(1).as_bytearray(), Err(ExtError::ExpectedByteArray));
    }
}
