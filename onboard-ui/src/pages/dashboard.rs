//! Dashboard Page
//!
//! Read-only view of the completed profile with sample metrics.

use leptos::*;
use onboard::DashboardModel;

use crate::components::{ProfileCard, ProgressChart, StatCard, StylePicker, ThemeToggle};
use crate::state::use_app_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;

    let model = create_memo(move |_| {
        let dark = state.is_dark();
        state.wizard.with(|w| DashboardModel::new(w.profile(), dark))
    });

    let start_over = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Clear your profile and start over?").ok())
            .unwrap_or(true);
        if confirmed {
            state.reset();
        }
    };

    view! {
        <div class=move || format!("min-h-screen transition-all duration-500 {}", tokens.with(|t| t.background.clone()))>
            <div class="fixed inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-gradient-to-br from-purple-500/10 to-indigo-500/10 rounded-full blur-3xl" />
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-gradient-to-tr from-pink-500/10 to-purple-500/10 rounded-full blur-3xl" />
            </div>

            // Header
            <header class=move || format!(
                "{} border-b sticky top-0 z-10 transition-all duration-300",
                tokens.with(|t| t.header_bg.clone())
            )>
                <div class="max-w-7xl mx-auto px-6 py-4">
                    <div class="flex items-center justify-between">
                        <div>
                            <h1 class="text-2xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                                {move || model.with(|m| m.greeting.clone())}
                            </h1>
                            <p class=move || format!("{} mt-1", tokens.with(|t| t.text_secondary.clone()))>
                                {move || model.with(|m| m.subtitle.clone())}
                            </p>
                        </div>
                        <div class="flex items-center gap-3">
                            <StylePicker />
                            <button
                                on:click=start_over
                                class=move || format!(
                                    "px-4 py-2 rounded-xl text-sm font-medium transition-colors {}",
                                    tokens.with(|t| t.button_secondary.clone())
                                )
                            >
                                "Start over"
                            </button>
                            <ThemeToggle />
                        </div>
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-6 py-8 relative">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    {move || model.with(|m| {
                        m.stats
                            .iter()
                            .cloned()
                            .map(|stat| view! { <StatCard stat=stat /> })
                            .collect_view()
                    })}
                </div>

                {move || model.with(|m| view! {
                    <ProgressChart points=m.weekly_progress.clone() average=m.average_progress() />
                })}

                {move || model.with(|m| view! {
                    <ProfileCard initial=m.avatar_initial rows=m.profile_rows.clone() />
                })}
            </main>
        </div>
    }
}
