//! Theme Toggle Component

use leptos::*;
use onboard::ThemeStyle;

use crate::state::use_app_state;

/// Sun/moon button switching between light and dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_app_state();

    view! {
        <button
            on:click=move |_| state.toggle_dark()
            aria-label="Toggle theme"
            class=move || {
                let base = "relative p-3 rounded-xl transition-all duration-300 hover:scale-105";
                if state.is_dark() {
                    format!("{base} bg-gray-700/70 hover:bg-gray-600/70 text-yellow-400")
                } else {
                    format!("{base} bg-white/80 hover:bg-gray-100/80 text-indigo-600")
                }
            }
        >
            <span class="text-xl">{move || if state.is_dark() { "🌙" } else { "☀️" }}</span>
        </button>
    }
}

/// Pills for choosing the style variant
#[component]
pub fn StylePicker() -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;

    view! {
        <div class=move || format!("flex gap-1 p-1 rounded-xl border {}", tokens.with(|t| t.border.clone()))>
            {ThemeStyle::all()
                .iter()
                .map(|&style| {
                    let active = move || state.preference.with(|p| p.style == style);
                    view! {
                        <button
                            on:click=move |_| state.set_style(style)
                            class=move || {
                                let base = "px-3 py-1 rounded-lg text-sm capitalize transition-colors";
                                if active() {
                                    format!("{base} bg-indigo-500 text-white")
                                } else {
                                    format!("{base} {}", tokens.with(|t| t.text_secondary.clone()))
                                }
                            }
                        >
                            {style.as_str()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
