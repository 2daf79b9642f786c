//! Step Navigation Component
//!
//! Back / Next buttons under the active step. The final step shows
//! "Complete Setup" instead of "Next".

use leptos::*;

use crate::state::use_app_state;

#[component]
pub fn StepNavigation() -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;
    let can_retreat = create_memo(move |_| state.wizard.with(|w| w.can_retreat()));
    let is_final = create_memo(move |_| state.wizard.with(|w| w.is_final_step()));

    view! {
        <div class=move || format!(
            "flex justify-between mt-8 pt-6 border-t {} transition-all duration-300",
            tokens.with(|t| t.border.clone())
        )>
            <button
                on:click=move |_| state.retreat()
                disabled=move || !can_retreat.get()
                class=move || {
                    let base = "flex items-center gap-2 px-6 py-3 rounded-xl font-medium transition-all duration-300";
                    if can_retreat.get() {
                        format!("{base} {}", tokens.with(|t| t.button_secondary.clone()))
                    } else {
                        format!("{base} {} cursor-not-allowed opacity-50", tokens.with(|t| t.text_secondary.clone()))
                    }
                }
            >
                "← Back"
            </button>

            {move || {
                if is_final.get() {
                    view! {
                        <button
                            on:click=move |_| state.submit()
                            class="flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-green-500 to-blue-600
                                   hover:from-green-600 hover:to-blue-700 text-white rounded-xl font-medium"
                        >
                            "Complete Setup ✓"
                        </button>
                    }.into_view()
                } else {
                    view! {
                        <button
                            on:click=move |_| state.advance()
                            class="flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-indigo-500 to-purple-600
                                   hover:from-indigo-600 hover:to-purple-700 text-white rounded-xl font-medium"
                        >
                            "Next →"
                        </button>
                    }.into_view()
                }
            }}
        </div>
    }
}
