//! Key-value text storage behind the history and settings.
//!
//! The browser implementation goes through `localStorage`; the in-memory one
//! backs the tests and anything running outside a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};

use crate::error::StorageError;

/// Synchronous get/set/remove of raw text by key.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, scoped to the page origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_message(err: wasm_bindgen::JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(e)))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota errors surface here as a DOMException.
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(e)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store with the same semantics as `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
    fail_reads: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set_raw` fail, as a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Make every subsequent `get_raw` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Read("access denied".to_string()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
