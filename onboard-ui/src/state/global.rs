//! Global Application State
//!
//! Reactive state management using Leptos signals. The wizard and the theme
//! preference are plain `onboard` values held in signals; every mutation goes
//! through `update` so views re-render from the new snapshot.

use leptos::*;
use onboard::{Field, OnboardingWizard, ThemePreference, ThemeStyle, ThemeTokens};

use super::storage::BrowserStore;

/// Class toggled on `<body>` while dark mode is active
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    pub wizard: RwSignal<OnboardingWizard<BrowserStore>>,
    pub preference: RwSignal<ThemePreference>,
    /// Resolved from `preference`; recomputed only when it changes
    pub tokens: Memo<ThemeTokens>,
    /// False when `localStorage` could not be opened
    pub persistent: bool,
}

/// Create the application state and provide it to the component tree
pub fn provide_app_state() -> AppState {
    let store = BrowserStore::local();
    let persistent = store.is_persistent();

    let initial = ThemePreference::load(&store, ThemePreference::default());
    let preference_store = store_value(store.clone());
    let wizard = create_rw_signal(OnboardingWizard::new(store));
    let preference = create_rw_signal(initial);
    let tokens = create_memo(move |_| preference.with(ThemePreference::tokens));

    // Persist preference changes and mirror dark mode onto <body>
    create_effect(move |_| {
        let current = preference.get();
        preference_store.update_value(|store| {
            if let Err(e) = current.save(store) {
                web_sys::console::warn_1(&format!("Failed to save theme preference: {e}").into());
            }
        });
        apply_body_class(current.dark_mode);
    });

    let state = AppState {
        wizard,
        preference,
        tokens,
        persistent,
    };
    provide_context(state);
    state
}

/// Access the state provided by `provide_app_state`
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

impl AppState {
    pub fn set_field(&self, field: Field, value: String) {
        self.wizard.update(|w| w.set_field(field, value));
    }

    pub fn advance(&self) {
        self.wizard.update(|w| {
            w.advance();
        });
    }

    pub fn retreat(&self) {
        self.wizard.update(|w| {
            w.retreat();
        });
    }

    pub fn submit(&self) {
        self.wizard.update(|w| {
            w.submit();
        });
    }

    pub fn reset(&self) {
        self.wizard.update(|w| w.reset());
    }

    pub fn is_completed(&self) -> bool {
        self.wizard.with(|w| w.is_completed())
    }

    /// Current value of a profile field
    pub fn field_value(&self, field: Field) -> String {
        self.wizard.with(|w| w.profile().get(field).to_string())
    }

    /// Current validation message for a field, if any
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.wizard.with(|w| w.error(field).map(str::to_string))
    }

    pub fn toggle_dark(&self) {
        self.preference.update(|p| p.toggle_dark());
    }

    pub fn set_style(&self, style: ThemeStyle) {
        self.preference.update(|p| p.set_style(style));
    }

    pub fn is_dark(&self) -> bool {
        self.preference.with(|p| p.dark_mode)
    }
}

fn apply_body_class(dark: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let classes = body.class_list();
    let result = if dark {
        classes.add_1(DARK_MODE_CLASS)
    } else {
        classes.remove_1(DARK_MODE_CLASS)
    };
    if result.is_err() {
        web_sys::console::warn_1(&"Failed to update body class".into());
    }
}
