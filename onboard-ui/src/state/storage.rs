//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`. Private browsing modes and
//! sandboxed frames can deny storage access; the store then keeps entries in
//! memory for the lifetime of the page.

use onboard::store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Origin-scoped store used by the wizard and the theme preference
#[derive(Debug, Clone)]
pub enum BrowserStore {
    Local(Storage),
    /// `localStorage` unavailable; nothing survives a reload
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Open `localStorage`, falling back to memory when it is unavailable
    pub fn local() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            _ => {
                web_sys::console::warn_1(
                    &"localStorage unavailable; onboarding will not persist".into(),
                );
                Self::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

fn unavailable(operation: &str, key: &str, err: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{operation} {key:?}: {err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|e| unavailable("get", key, e)),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| unavailable("set", key, e)),
            Self::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match self {
            Self::Local(storage) => storage
                .remove_item(key)
                .map_err(|e| unavailable("remove", key, e)),
            Self::Memory(store) => store.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard::store::keys;
    use onboard::{Field, OnboardingWizard, Stage};

    #[test]
    fn test_memory_fallback_round_trip() {
        let mut store = BrowserStore::Memory(MemoryStore::new());
        assert!(!store.is_persistent());

        store.set(keys::IS_DARK_MODE, "true").unwrap();
        assert_eq!(store.get(keys::IS_DARK_MODE).unwrap().as_deref(), Some("true"));

        store.remove(keys::IS_DARK_MODE).unwrap();
        assert_eq!(store.get(keys::IS_DARK_MODE).unwrap(), None);
    }

    #[test]
    fn test_wizard_completes_on_memory_fallback() {
        let mut wizard = OnboardingWizard::new(BrowserStore::Memory(MemoryStore::new()));
        wizard.set_field(Field::Name, "Ada Lovelace");
        wizard.set_field(Field::Email, "ada@example.com");
        assert!(wizard.advance());
        wizard.set_field(Field::Company, "Analytical");
        wizard.set_field(Field::Industry, "Technology");
        wizard.set_field(Field::Size, "1-10");
        assert!(wizard.advance());
        assert!(wizard.submit());

        assert_eq!(wizard.stage(), Stage::Completed);
        assert!(wizard.store().get(keys::USER_DATA).unwrap().is_some());
    }
}
