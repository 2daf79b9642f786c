//! Profile Card Component

use leptos::*;
use onboard::dashboard::ProfileRow;

/// Gradient card with the avatar initial and the profile rows
#[component]
pub fn ProfileCard(initial: char, rows: Vec<ProfileRow>) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden rounded-2xl transition-all duration-300">
            <div class="absolute inset-0 bg-gradient-to-r from-indigo-500 to-purple-600 opacity-90" />
            <div class="absolute -top-24 -right-24 w-48 h-48 rounded-full bg-white opacity-10" />
            <div class="absolute -bottom-32 -left-32 w-64 h-64 rounded-full bg-white opacity-10" />

            <div class="relative z-10 p-6 text-white">
                <div class="flex items-center gap-3 mb-4">
                    <div class="h-12 w-12 rounded-full bg-white/20 flex items-center justify-center">
                        <span class="text-2xl font-bold">{initial.to_string()}</span>
                    </div>
                    <div>
                        <h2 class="text-xl font-semibold mb-1">"Your Profile"</h2>
                        <p class="text-white/70 text-sm">"User details & preferences"</p>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-y-4 gap-x-6 mt-6 text-sm">
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <div class="hover:bg-white/10 p-3 rounded-lg transition-all duration-300">
                                <p class="opacity-70 mb-1">{row.label}</p>
                                <p class="font-medium">{row.value}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
