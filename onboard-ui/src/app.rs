//! App Root Component
//!
//! Provides the global state and switches between the wizard and the
//! dashboard on the completion flag.

use leptos::*;

use crate::pages::{Dashboard, Onboarding};
use crate::state::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();
    let completed = create_memo(move |_| state.is_completed());

    view! {
        <Show when=move || completed.get() fallback=|| view! { <Onboarding /> }>
            <Dashboard />
        </Show>
    }
}
