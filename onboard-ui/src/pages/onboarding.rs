//! Onboarding Page
//!
//! Wizard shell: progress header, the active step view and the navigation
//! buttons, on a themed card.

use leptos::*;
use onboard::profile::{COMPANY_SIZES, INDUSTRIES, LAYOUT_CHOICES, THEME_CHOICES};
use onboard::{Field, WizardStep};

use crate::components::{
    ButtonGroupField, ChoiceCards, ProgressIndicator, SelectField, StepNavigation, TextField,
    ThemeToggle,
};
use crate::state::use_app_state;

/// Wizard shell
#[component]
pub fn Onboarding() -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;
    let step = create_memo(move |_| state.wizard.with(|w| w.step()));

    view! {
        <div class=move || format!(
            "min-h-screen transition-all duration-500 {} flex items-center justify-center p-4",
            tokens.with(|t| t.background.clone())
        )>
            <div class="fixed top-6 right-6 z-50">
                <ThemeToggle />
            </div>

            <div class="fixed inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-gradient-to-br from-purple-500/20 to-indigo-500/20 rounded-full blur-3xl" />
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-gradient-to-tr from-pink-500/20 to-purple-500/20 rounded-full blur-3xl" />
            </div>

            <div class="w-full max-w-2xl relative z-10">
                <ProgressIndicator />

                <div class=move || tokens.with(|t| format!(
                    "{} rounded-3xl shadow-xl border {} overflow-hidden transition-all duration-300 backdrop-blur-lg",
                    t.card_bg, t.border
                ))>
                    <div class="p-8">
                        {move || match step.get() {
                            WizardStep::Personal => view! { <PersonalStep /> }.into_view(),
                            WizardStep::Business => view! { <BusinessStep /> }.into_view(),
                            WizardStep::Preferences => view! { <PreferencesStep /> }.into_view(),
                        }}

                        <StepNavigation />
                    </div>
                </div>

                {(!state.persistent).then(|| view! {
                    <p class="mt-4 text-center text-sm text-amber-500">
                        "Browser storage is unavailable; your answers will not be kept after reload."
                    </p>
                })}
            </div>
        </div>
    }
}

/// Icon, heading and description above a step's fields
#[component]
fn StepHeader(step: WizardStep, icon: &'static str, gradient: &'static str) -> impl IntoView {
    let tokens = use_app_state().tokens;

    view! {
        <div class="text-center mb-8">
            <div class=format!(
                "inline-flex items-center justify-center w-20 h-20 {gradient} rounded-3xl mb-4 shadow-lg text-4xl"
            )>
                {icon}
            </div>
            <h2 class=move || format!("text-3xl font-bold {} mb-2", tokens.with(|t| t.text.clone()))>
                {step.title()}
            </h2>
            <p class=move || tokens.with(|t| t.text_secondary.clone())>
                {step.description()}
            </p>
        </div>
    }
}

#[component]
fn PersonalStep() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <StepHeader
                step=WizardStep::Personal
                icon="👤"
                gradient="bg-gradient-to-r from-indigo-500 to-purple-600"
            />
            <div class="space-y-5">
                <TextField field=Field::Name placeholder="Enter your full name" />
                <TextField field=Field::Email input_type="email" placeholder="Enter your email address" />
            </div>
        </div>
    }
}

#[component]
fn BusinessStep() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <StepHeader
                step=WizardStep::Business
                icon="🏢"
                gradient="bg-gradient-to-r from-emerald-500 to-blue-600"
            />
            <div class="space-y-5">
                <TextField field=Field::Company placeholder="Enter your company name" />
                <SelectField field=Field::Industry options=&INDUSTRIES placeholder="Select your industry" />
                <ButtonGroupField field=Field::Size options=&COMPANY_SIZES suffix=" employees" />
            </div>
        </div>
    }
}

#[component]
fn PreferencesStep() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <StepHeader
                step=WizardStep::Preferences
                icon="🎨"
                gradient="bg-gradient-to-r from-pink-500 to-orange-500"
            />
            <div class="space-y-8">
                <ChoiceCards field=Field::Theme choices=&THEME_CHOICES />
                <ChoiceCards field=Field::Layout choices=&LAYOUT_CHOICES columns=2 />
            </div>
        </div>
    }
}
