//! Browser persistence for the settings record.
use clearview_core::{MemoryStorage, MemoryStorageError, SettingsStorage};
use wasm_bindgen::JsValue;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Js(String),
    #[error(transparent)]
    Memory(#[from] MemoryStorageError),
}

impl WebStorageError {
    fn js(value: &JsValue) -> Self {
        Self::Js(dom::js_error_message(value))
    }
}

/// `window.localStorage`, looked up on each access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl SettingsStorage for LocalStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?;
        storage.get_item(key).map_err(|e| WebStorageError::js(&e))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?;
        storage.set_item(key, value).map_err(|e| WebStorageError::js(&e))
    }
}

/// Storage chosen at startup: `localStorage` when the browser grants it, memory otherwise.
#[derive(Debug, Clone)]
pub enum BrowserStorage {
    Local(LocalStorage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    #[must_use]
    pub fn detect() -> Self {
        match dom::local_storage() {
            Ok(_) => Self::Local(LocalStorage),
            Err(err) => {
                log::warn!(
                    "localStorage blocked, settings last for this page only: {}",
                    dom::js_error_message(&err)
                );
                Self::Memory(MemoryStorage::new())
            }
        }
    }
}

impl SettingsStorage for BrowserStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            Self::Local(local) => local.read(key),
            Self::Memory(memory) => Ok(memory.read(key)?),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            Self::Local(local) => local.write(key, value),
            Self::Memory(memory) => Ok(memory.write(key, value)?),
        }
    }
}
