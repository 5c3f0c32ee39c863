//! Bytearray extension module for embedding script runtimes.
//!
//! A mutable-length, immutable-content byte buffer value type with typed,
//! bounds-checked accessors, packaged the way a host runtime consumes
//! extension types: buffers live behind opaque handles, methods are looked
//! up in a registered table, and failures travel as typed error values the
//! host renders for the end user.
//!
//! # Features
//!
//! - **Owned buffers**: construction copies, concatenation allocates fresh;
//!   no operation aliases or mutates an existing buffer
//! - **Typed reads**: 8/16/32/64-bit signed and unsigned integer reads with
//!   one shared bounds check, plus sub-slice extraction
//! - **Diagnostic rendering**: `bytearray(...)` with `\xHH` escapes for
//!   non-printable bytes
//! - **Host boundary**: handle table with exactly-once release, marshaled
//!   values, named-method dispatch with arity metadata
//!
//! # Example
//!
//! ```rust
//! use bytearray_ext::{bytearray_new, HandleTable, MethodTable, Value};
//!
//! let table = MethodTable::new();
//!
//! // Construct from a byte string, then read through the method surface.
//! let ba = bytearray_new(&[Value::Str(b"ab".to_vec())]).unwrap();
//! let len = table.call("__len", std::slice::from_ref(&ba)).unwrap();
//! assert_eq!(len, Value::Int(2));
//!
//! let byte = table.call("getu8", &[ba.clone(), Value::Int(1)]).unwrap();
//! assert_eq!(byte, Value::Int(b'b' as i64));
//!
//! // Release the script's reference; the backing store is freed here.
//! HandleTable::remove(ba.as_bytearray().unwrap());
//! ```
//!
//! # Architecture
//!
//! ```text
//! Script calls:  ba->getu16(4)
//!                     |
//!                     v
//! Host resolves: metatable["getu16"] -> MethodEntry
//!                     |
//!                     v
//! Dispatch:      table.call("getu16", [ByteArray(handle), Int(4)])
//!                     |
//!                     v
//! Core:          ByteArray::get_int(4, W16, Unsigned)
//! ```

pub mod bytearray;
pub mod error;
pub mod handle;
pub mod registry;
pub mod value;

pub use bytearray::{ByteArray, IntWidth, Signedness};
pub use error::ExtError;
pub use handle::{Handle, HandleTable};
pub use registry::{bytearray_new, register_bytearray, MethodTable};
pub use value::Value;
