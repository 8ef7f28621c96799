//! Persisted display mode preference.
//!
//! Backed by `localStorage` when the browser allows it. When storage is
//! disabled or throws, reads come back empty and writes are dropped, so the
//! page keeps working on in-memory state alone.

use gloo_console::debug;
use std::{cell::RefCell, collections::HashMap};
use web_sys::Storage;

use crate::types::DisplayMode;

pub const STYLE_MODE_KEY: &str = "style-mode";

pub trait PreferenceBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());

        if storage.is_none() {
            debug!("localStorage unavailable, style mode will not persist");
        }

        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                debug!("could not persist", key);
            }
        }
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl PreferenceBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

pub struct PreferenceStore<B> {
    backend: B,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Stored mode, `None` when nothing valid was stored.
    pub fn get(&self) -> Option<DisplayMode> {
        self.backend.get_item(STYLE_MODE_KEY)?.parse().ok()
    }

    pub fn set(&self, mode: DisplayMode) {
        self.backend.set_item(STYLE_MODE_KEY, mode.as_str());
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
