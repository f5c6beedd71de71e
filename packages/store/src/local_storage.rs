//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`. The handle is
//! looked up on every call, so the struct itself is a zero-size `Copy` value.
//!
//! A missing `window` or a storage object the browser refuses to hand out
//! (private mode, disabled cookies) surfaces as [`StoreError::Unavailable`].

use web_sys::Storage;

use crate::error::StoreError;
use crate::token::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

fn backend_error(key: &str, err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend {
        key: key.to_string(),
        message: format!("{err:?}"),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| backend_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| backend_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| backend_error(key, e))
    }
}
