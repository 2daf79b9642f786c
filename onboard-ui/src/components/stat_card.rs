//! Stat Card Component
//!
//! One summary figure at the top of the dashboard.

use leptos::*;
use onboard::dashboard::StatCard as Stat;

use crate::state::use_app_state;

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let tokens = use_app_state().tokens;

    view! {
        <div class=move || tokens.with(|t| format!(
            "{} {} rounded-2xl p-6 border {} transition-all duration-300 relative overflow-hidden",
            t.card_bg, t.card_hover, t.border
        ))>
            <div class=format!("absolute inset-0 opacity-50 {}", stat.gradient) />
            <div class="relative flex items-start justify-between">
                <div>
                    <p class=move || format!("text-sm font-medium {}", tokens.with(|t| t.text_secondary.clone()))>
                        {stat.title}
                    </p>
                    <p class=move || format!("text-3xl font-bold mt-2 {}", tokens.with(|t| t.text.clone()))>
                        {stat.value}
                    </p>
                    <p class=move || format!("text-sm mt-1 {}", tokens.with(|t| t.text_secondary.clone()))>
                        {stat.subtitle}
                    </p>
                </div>
                <div class=format!("p-3 rounded-xl text-2xl {}", stat.icon_bg)>
                    {stat.emoji}
                </div>
            </div>
        </div>
    }
}
