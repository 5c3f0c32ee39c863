//! Method table and dispatch for the bytearray type.
//!
//! The table is the metatable the host registers for the bytearray type:
//! named entries with arity metadata, looked up when a script calls a
//! method on a bytearray value. The receiver travels as the implicit first
//! bound argument.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::bytearray::{ByteArray, IntWidth, Signedness};
use crate::error::ExtError;
use crate::handle::HandleTable;
use crate::value::Value;

/// Method signature: bound receiver first, then explicit arguments.
pub type MethodFn = Arc<dyn Fn(&[Value]) -> Result<Value, ExtError> + Send + Sync>;

/// A registered method entry
pub struct MethodEntry {
    pub name: String,
    pub description: String,
    /// Declared arity, including the bound receiver.
    pub arg_count: usize,
    pub func: MethodFn,
}

impl fmt::Debug for MethodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arg_count", &self.arg_count)
            .finish()
    }
}

/// The bytearray metatable: method name -> entry.
pub struct MethodTable {
    by_name: HashMap<String, MethodEntry>,
}

impl MethodTable {
    /// Create a table with all bytearray methods registered
    pub fn new() -> Self {
        let mut table = Self {
            by_name: HashMap::new(),
        };
        register_bytearray(&mut table);
        table
    }

    /// Register a method under `name`
    pub fn register(&mut self, name: &str, description: &str, arg_count: usize, func: MethodFn) {
        self.by_name.insert(
            name.to_string(),
            MethodEntry {
                name: name.to_string(),
                description: description.to_string(),
                arg_count,
                func,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&MethodEntry> {
        self.by_name.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.by_name.keys().map(|s| s.as_str()).collect()
    }

    /// Dispatch a method by name.
    ///
    /// Arity is checked before the method body runs; extra arguments are
    /// ignored, matching the fixed-arity convention of the host's call
    /// frames.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, ExtError> {
        let entry = self
            .by_name
            .get(name)
            .ok_or_else(|| ExtError::MethodNotFound(name.to_string()))?;

        if args.len() < entry.arg_count {
            return Err(ExtError::InvalidArgCount {
                expected: entry.arg_count,
                got: args.len(),
            });
        }

        (entry.func)(args)
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction entry point.
///
/// No argument (or an explicit undef) builds an empty bytearray; one byte
/// string builds a copying one. Anything else fails before any allocation.
pub fn bytearray_new(args: &[Value]) -> Result<Value, ExtError> {
    match args {
        [] | [Value::Undef] => Ok(Value::ByteArray(HandleTable::store(ByteArray::new()))),
        [Value::Str(data)] => Ok(Value::ByteArray(HandleTable::store(ByteArray::from_bytes(
            data,
        )))),
        _ => Err(ExtError::ExpectedString),
    }
}

fn receiver(args: &[Value], n: usize) -> Result<u64, ExtError> {
    args[n].as_bytearray()
}

/// Register the bytearray method surface into `table`.
pub fn register_bytearray(table: &mut MethodTable) {
    table.register(
        "tostr",
        "Render as bytearray(...) with non-printable bytes escaped. Returns str.",
        1,
        Arc::new(|args| {
            let handle = receiver(args, 0)?;
            let rendered = HandleTable::with(handle, |ba| ba.to_debug_string())
                .ok_or(ExtError::InvalidHandle)?;
            Ok(Value::Str(rendered.into_bytes()))
        }),
    );

    table.register(
        "tolist",
        "Content as a list of unsigned byte values. Returns list of int.",
        1,
        Arc::new(|args| {
            let handle = receiver(args, 0)?;
            let list = HandleTable::with(handle, |ba| ba.to_list())
                .ok_or(ExtError::InvalidHandle)?;
            Ok(Value::List(list.into_iter().map(Value::Int).collect()))
        }),
    );

    table.register(
        "__len",
        "Number of bytes stored. Returns int.",
        1,
        Arc::new(|args| {
            let handle = receiver(args, 0)?;
            let len = HandleTable::with(handle, |ba| ba.len()).ok_or(ExtError::InvalidHandle)?;
            Ok(Value::Int(len as i64))
        }),
    );

    table.register(
        "__add",
        "Concatenate two bytearrays into a new one. Args: right. Returns bytearray.",
        2,
        Arc::new(|args| {
            let left = receiver(args, 0)?;
            let right = receiver(args, 1)?;

            let left = HandleTable::get(left).ok_or(ExtError::InvalidHandle)?;
            let sum = HandleTable::with(right, |r| left.concat(r))
                .ok_or(ExtError::InvalidHandle)?;

            Ok(Value::ByteArray(HandleTable::store(sum)))
        }),
    );

    table.register(
        "getchars",
        "Copy count bytes at an offset. Args: offset, count. Returns str.",
        3,
        Arc::new(|args| {
            let handle = receiver(args, 0)?;
            let offset = args[1].as_int()?;
            let count = args[2].as_int()?;
            let chars = HandleTable::with(handle, |ba| ba.get_chars(offset, count))
                .ok_or(ExtError::InvalidHandle)??;
            Ok(Value::Str(chars))
        }),
    );

    // One registration loop covers the whole integer-read family; the
    // bounds check and decode live in ByteArray::get_int.
    let reads = [
        ("geti8", 8, IntWidth::W8, Signedness::Signed),
        ("geti16", 16, IntWidth::W16, Signedness::Signed),
        ("geti32", 32, IntWidth::W32, Signedness::Signed),
        ("geti64", 64, IntWidth::W64, Signedness::Signed),
        ("getu8", 8, IntWidth::W8, Signedness::Unsigned),
        ("getu16", 16, IntWidth::W16, Signedness::Unsigned),
        ("getu32", 32, IntWidth::W32, Signedness::Unsigned),
        ("getu64", 64, IntWidth::W64, Signedness::Unsigned),
    ];

    for (name, bits, width, signed) in reads {
        let kind = match signed {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
        };
        table.register(
            name,
            &format!("Read a {bits}-bit {kind} integer at an offset. Args: offset. Returns int."),
            2,
            Arc::new(move |args| {
                let handle = receiver(args, 0)?;
                let offset = args[1].as_int()?;
                let value = HandleTable::with(handle, |ba| ba.get_int(offset, width, signed))
                    .ok_or(ExtError::InvalidHandle)??;
                Ok(Value::Int(value))
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_registers_full_surface() {
        let table = MethodTable::new();
        for name in [
            "tostr", "tolist", "__len", "__add", "getchars", "geti8", "geti16", "geti32",
            "geti64", "getu8", "getu16", "getu32", "getu64",
        ] {
            assert!(table.get(name).is_some(), "missing method {name}");
        }
        assert_eq!(table.names().len(), 13);
    }

    #[test]
    fn test_unknown_method() {
        let table = MethodTable::new();
        assert_eq!(
            table.call("setu8", &[Value::Int(0)]),
            Err(ExtError::MethodNotFound("setu8".to_string()))
        );
    }

    #[test]
    fn test_arity_checked_before_body() {
        let table = MethodTable::new();
        let ba = bytearray_new(&[Value::Str(b"xy".to_vec())]).unwrap();
        assert_eq!(
            table.call("geti8", std::slice::from_ref(&ba)),
            Err(ExtError::InvalidArgCount {
                expected: 2,
                got: 1
            })
        );
        HandleTable::remove(ba.as_bytearray().unwrap());
    }

    #[test]
    fn test_add_rejects_non_bytearray_operand() {
        let table = MethodTable::new();
        let ba = bytearray_new(&[]).unwrap();
        assert_eq!(
            table.call("__add", &[ba.clone(), Value::Int(1)]),
            Err(ExtError::ExpectedByteArray)
        );
        HandleTable::remove(ba.as_bytearray().unwrap());
    }
}
