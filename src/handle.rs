//! Handle table for bytearrays crossing the host boundary.
//!
//! The host holds opaque numeric handles; this table owns the buffers
//! behind them. Removing a handle releases its buffer: the backing store
//! is freed exactly once, when the removed value drops.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::bytearray::ByteArray;

/// Opaque identifier for a bytearray owned by the handle table.
pub type Handle = u64;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

fn next_handle() -> Handle {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

lazy_static::lazy_static! {
    /// Global storage for bytearrays referenced from the host side
    static ref LIVE: RwLock<HashMap<Handle, ByteArray>> = RwLock::new(HashMap::new());
}

/// Owner of every bytearray the host holds a handle to.
pub struct HandleTable;

impl HandleTable {
    /// Store a bytearray and return its handle
    pub fn store(ba: ByteArray) -> Handle {
        let handle = next_handle();
        let mut live = LIVE.write().unwrap();
        live.insert(handle, ba);
        handle
    }

    /// Get a bytearray by handle (clones the data)
    pub fn get(handle: Handle) -> Option<ByteArray> {
        let live = LIVE.read().unwrap();
        live.get(&handle).cloned()
    }

    /// Run `f` against the bytearray behind `handle` without cloning
    pub fn with<F, R>(handle: Handle, f: F) -> Option<R>
    where
        F: FnOnce(&ByteArray) -> R,
    {
        let live = LIVE.read().unwrap();
        live.get(&handle).map(f)
    }

    /// Remove a bytearray by handle and return it.
    ///
    /// A second remove of the same handle returns `None`; the backing
    /// store is never freed twice.
    pub fn remove(handle: Handle) -> Option<ByteArray> {
        let mut live = LIVE.write().unwrap();
        live.remove(&handle)
    }

    /// Check if a handle is live
    pub fn exists(handle: Handle) -> bool {
        let live = LIVE.read().unwrap();
        live.contains_key(&handle)
    }

    /// Number of live bytearrays
    pub fn count() -> usize {
        let live = LIVE.read().unwrap();
        live.len()
    }
}
