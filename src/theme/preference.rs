//! Persisted theme preference (dark flag + style)

use serde::{Deserialize, Serialize};

use super::resolver::{resolve, ThemeStyle, ThemeTokens};
use crate::store::{keys, KeyValueStore, StoreResult};

/// UI-only appearance settings, stored separately from the profile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemePreference {
    pub dark_mode: bool,
    pub style: ThemeStyle,
}

impl ThemePreference {
    pub fn new(dark_mode: bool, style: ThemeStyle) -> Self {
        Self { dark_mode, style }
    }

    /// Load from the store, keeping `fallback` for whatever is missing
    ///
    /// `isDarkMode` is dark only when it reads exactly `"true"`; a style
    /// name other than the exact lowercase ones reads as `Modern`.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, fallback: ThemePreference) -> Self {
        let dark_mode = match store.get(keys::IS_DARK_MODE) {
            Ok(Some(value)) => value == "true",
            Ok(None) => fallback.dark_mode,
            Err(e) => {
                tracing::warn!("Failed to read dark mode preference: {}", e);
                fallback.dark_mode
            }
        };

        let style = match store.get(keys::THEME_STYLE) {
            Ok(Some(value)) => ThemeStyle::from_name(&value),
            Ok(None) => fallback.style,
            Err(e) => {
                tracing::warn!("Failed to read theme style preference: {}", e);
                fallback.style
            }
        };

        Self { dark_mode, style }
    }

    /// Write both keys
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> StoreResult<()> {
        store.set(keys::IS_DARK_MODE, if self.dark_mode { "true" } else { "false" })?;
        store.set(keys::THEME_STYLE, self.style.as_str())
    }

    pub fn toggle_dark(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_style(&mut self, style: ThemeStyle) {
        self.style = style;
    }

    /// Derived tokens; never persisted
    pub fn tokens(&self) -> ThemeTokens {
        resolve(self.dark_mode, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_empty_store_uses_fallback() {
        let store = MemoryStore::new();
        let fallback = ThemePreference::new(true, ThemeStyle::Classic);
        assert_eq!(ThemePreference::load(&store, fallback), fallback);
        assert_eq!(ThemePreference::load(&store, ThemePreference::default()), ThemePreference::default());
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let mut pref = ThemePreference::default();
        pref.toggle_dark();
        pref.set_style(ThemeStyle::Minimal);
        pref.save(&mut store).unwrap();

        assert_eq!(store.get(keys::IS_DARK_MODE).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(keys::THEME_STYLE).unwrap().as_deref(), Some("minimal"));
        assert_eq!(ThemePreference::load(&store, ThemePreference::default()), pref);
    }

    #[test]
    fn test_unrecognised_values() {
        let store = MemoryStore::new()
            .with_entry(keys::IS_DARK_MODE, "yes")
            .with_entry(keys::THEME_STYLE, "baroque");
        let pref = ThemePreference::load(&store, ThemePreference::new(true, ThemeStyle::Classic));
        assert!(!pref.dark_mode);
        assert_eq!(pref.style, ThemeStyle::Modern);

        let store = MemoryStore::new()
            .with_entry(keys::IS_DARK_MODE, "True")
            .with_entry(keys::THEME_STYLE, "Minimal");
        let pref = ThemePreference::load(&store, ThemePreference::new(true, ThemeStyle::Classic));
        assert!(!pref.dark_mode);
        assert_eq!(pref.style, ThemeStyle::Modern);
    }

    #[test]
    fn test_tokens_follow_preference() {
        let pref = ThemePreference::new(true, ThemeStyle::Minimal);
        assert_eq!(pref.tokens(), resolve(true, ThemeStyle::Minimal));
    }
}
