//! Progress Indicator Component
//!
//! "Step n of 3", the completion percentage and one segment per step.

use leptos::*;
use onboard::WizardStep;

use crate::state::use_app_state;

const FILLED_SEGMENT: &str = "bg-gradient-to-r from-indigo-500 to-purple-600";

/// Wizard progress header
#[component]
pub fn ProgressIndicator() -> impl IntoView {
    let state = use_app_state();
    let step = create_memo(move |_| state.wizard.with(|w| w.step()));
    let tokens = state.tokens;

    view! {
        <div class="mb-8">
            <div class="flex items-center justify-between mb-2">
                <span class=move || format!("text-sm font-medium {} transition-colors duration-300", tokens.with(|t| t.text_secondary.clone()))>
                    {move || step.get().to_string()}
                </span>
                <span class=move || format!("text-sm {} transition-colors duration-300", tokens.with(|t| t.text_secondary.clone()))>
                    {move || format!("{}% Complete", step.get().percent_complete())}
                </span>
            </div>

            <div class="flex justify-between w-full gap-2">
                {WizardStep::all()
                    .iter()
                    .map(|&segment| {
                        view! {
                            <div
                                title=segment.label()
                                class=move || {
                                    let progress_bg = tokens.with(|t| t.progress_bg.clone());
                                    segment_class(segment, step.get(), &progress_bg)
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Classes for one segment: filled up to and including the current step
fn segment_class(segment: WizardStep, current: WizardStep, progress_bg: &str) -> String {
    let fill = if segment.number() <= current.number() {
        FILLED_SEGMENT
    } else {
        progress_bg
    };
    let scale = if segment == current { " scale-105" } else { "" };
    format!("flex-1 h-2 rounded-full transition-all duration-300 {fill}{scale}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_fill_up_to_current_step() {
        let current = WizardStep::Business;
        assert!(segment_class(WizardStep::Personal, current, "bg-gray-200").contains(FILLED_SEGMENT));
        assert!(segment_class(WizardStep::Business, current, "bg-gray-200").ends_with("scale-105"));

        let pending = segment_class(WizardStep::Preferences, current, "bg-gray-200");
        assert!(pending.contains("bg-gray-200"));
        assert!(!pending.contains(FILLED_SEGMENT));
    }
}
