//! User-Scoped Storage
//!
//! Per-user namespaced wrapper over a synchronous string key-value store.
//! Keys are suffixed with the owning user's id so several accounts can
//! share one browser profile without reading each other's records.
//!
//! Backends implement [`KeyValueStore`]: browser `localStorage` on wasm
//! ([`LocalStore`]), an in-memory map everywhere else ([`MemoryStore`]).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fallback identity when no signed-in user can be resolved.
pub const GUEST_USER_ID: &str = "guest";

/// Separator between a base key and the user id suffix.
const USER_KEY_SEPARATOR: &str = "__uid__";

/// Storage-level errors.
///
/// Absence is not an error: `get` returns `Ok(None)` for a missing key.
/// Callers can tell "absent" from "corrupt" from "write failed".
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Backing store is unavailable (no window, storage disabled)
    Unavailable,
    /// The underlying store rejected the operation (quota, security)
    Denied(String),
    /// A value exists but could not be decoded
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "storage unavailable"),
            StoreError::Denied(msg) => write!(f, "storage denied: {}", msg),
            StoreError::Corrupt(msg) => write!(f, "stored value corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Common result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Synchronous string key-value backend.
///
/// Browser storage is synchronous, so the trait is too.
pub trait KeyValueStore {
    /// Read the raw string under `key`, `None` if absent
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value
    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing an absent key is a no-op
    fn remove_raw(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_raw(key, value)
    }

    fn remove_raw(&self, key: &str) -> StoreResult<()> {
        (**self).remove_raw(key)
    }
}

/// In-memory backend for tests and non-browser builds
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries (test helper)
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage` backend (wasm only)
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_denied(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Denied(format!("{:?}", err))
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_denied)
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?.set_item(key, value).map_err(js_denied)
    }

    fn remove_raw(&self, key: &str) -> StoreResult<()> {
        self.storage()?.remove_item(key).map_err(js_denied)
    }
}

/// Derive the namespaced key for `base` owned by `user_id`.
///
/// A blank user id falls back to [`GUEST_USER_ID`], so the result is
/// always suffixed and distinct `(base, uid)` pairs never collide.
pub fn user_key(base: &str, user_id: &str) -> String {
    let uid = user_id.trim();
    let uid = if uid.is_empty() { GUEST_USER_ID } else { uid };
    format!("{}{}{}", base, USER_KEY_SEPARATOR, uid)
}

/// A key-value store bound to one user.
///
/// The user id is an explicit constructor parameter; nothing here reaches
/// for ambient session state.
#[derive(Clone)]
pub struct UserStore<S> {
    backend: S,
    user_id: String,
}

impl<S: KeyValueStore> UserStore<S> {
    pub fn new(backend: S, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let trimmed = user_id.trim();
        let user_id = if trimmed.is_empty() {
            GUEST_USER_ID.to_string()
        } else {
            trimmed.to_string()
        };
        Self { backend, user_id }
    }

    /// The effective identity this store is scoped to
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn get(&self, base: &str) -> StoreResult<Option<String>> {
        self.backend.get_raw(&user_key(base, &self.user_id))
    }

    pub fn set(&self, base: &str, value: &str) -> StoreResult<()> {
        self.backend.set_raw(&user_key(base, &self.user_id), value)
    }

    pub fn remove(&self, base: &str) -> StoreResult<()> {
        self.backend.remove_raw(&user_key(base, &self.user_id))
    }

    /// Read and decode a JSON record. Absent key is `Ok(None)`;
    /// undecodable content is `Err(Corrupt)`.
    pub fn get_json<T: DeserializeOwned>(&self, base: &str) -> StoreResult<Option<T>> {
        match self.get(base)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(e.to_string())),
        }
    }

    /// Encode and write a JSON record
    pub fn set_json<T: Serialize>(&self, base: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.set(base, &raw)
    }

    /// Remove a raw, non-namespaced key left over from the scheme that
    /// predates per-user suffixes.
    pub fn remove_legacy(&self, base: &str) -> StoreResult<()> {
        self.backend.remove_raw(base)
    }
}
