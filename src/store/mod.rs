//! Persistent key-value store
//!
//! The wizard and the theme preferences never touch a concrete storage
//! backend; they receive something implementing [`KeyValueStore`]:
//!
//! - **memory**: `MemoryStore`, for tests and as a degraded fallback
//! - **file**: `FileStore`, a JSON document on disk used by the CLI
//! - **error**: error types
//!
//! The browser frontend provides its own `localStorage` implementation.

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Keys written by this crate
pub mod keys {
    /// Completed profile as JSON, written on submit and removed on reset
    pub const USER_DATA: &str = "userData";
    /// `"true"` or `"false"`
    pub const IS_DARK_MODE: &str = "isDarkMode";
    /// `"modern"`, `"classic"` or `"minimal"`
    pub const THEME_STYLE: &str = "themeStyle";
}

/// A synchronous string-keyed blob store
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Insert or overwrite a value
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a key; deleting an absent key succeeds
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
