//! Form Field Components
//!
//! Inputs bound to one profile field. Each edit goes through the wizard,
//! which re-validates that field; the message appears under the input.

use leptos::*;
use onboard::profile::Choice;
use onboard::Field;

use crate::state::use_app_state;

const ERROR_RING: &str = "border-red-300 focus:ring-red-200";

/// Input classes shared by text inputs and selects
fn input_class(input: &str, input_focus: &str, has_error: bool) -> String {
    let mut class = format!(
        "w-full px-4 py-3 border {input} {input_focus} focus:ring-2 focus:border-transparent transition-all duration-300"
    );
    if has_error {
        class.push(' ');
        class.push_str(ERROR_RING);
    }
    class
}

/// Label above an input
#[component]
fn FieldLabel(field: Field) -> impl IntoView {
    let tokens = use_app_state().tokens;
    view! {
        <label class=move || format!(
            "block text-sm font-medium {} mb-2 transition-colors duration-300",
            tokens.with(|t| t.text.clone())
        )>
            {field.label()}
        </label>
    }
}

/// Inline validation message for a field
#[component]
pub fn FieldError(field: Field) -> impl IntoView {
    let state = use_app_state();
    move || {
        state.field_error(field).map(|message| {
            view! { <p class="text-red-500 text-sm mt-1">{message}</p> }
        })
    }
}

/// Free-text input
#[component]
pub fn TextField(
    field: Field,
    #[prop(default = "text")]
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;

    view! {
        <div>
            <FieldLabel field=field />
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || state.field_value(field)
                on:input=move |ev| state.set_field(field, event_target_value(&ev))
                class=move || tokens.with(|t| {
                    input_class(&t.input, &t.input_focus, state.field_error(field).is_some())
                })
            />
            <FieldError field=field />
        </div>
    }
}

/// Dropdown over a fixed list of values
#[component]
pub fn SelectField(
    field: Field,
    options: &'static [&'static str],
    placeholder: &'static str,
) -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;

    view! {
        <div>
            <FieldLabel field=field />
            <select
                prop:value=move || state.field_value(field)
                on:change=move |ev| state.set_field(field, event_target_value(&ev))
                class=move || tokens.with(|t| {
                    let class = input_class(&t.input, &t.input_focus, state.field_error(field).is_some());
                    format!("{class} appearance-none")
                })
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|&value| view! { <option value=value>{value}</option> })
                    .collect_view()}
            </select>
            <FieldError field=field />
        </div>
    }
}

/// Grid of buttons, one per value; the selected one is highlighted
#[component]
pub fn ButtonGroupField(
    field: Field,
    options: &'static [&'static str],
    /// Appended to each value on its button
    #[prop(default = "")]
    suffix: &'static str,
) -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;

    view! {
        <div>
            <FieldLabel field=field />
            <div class="grid grid-cols-2 gap-3">
                {options
                    .iter()
                    .map(|&value| {
                        let selected = move || state.wizard.with(|w| w.profile().get(field) == value);
                        view! {
                            <button
                                type="button"
                                on:click=move |_| state.set_field(field, value.to_string())
                                class=move || {
                                    let base = "p-4 border-2 rounded-xl text-sm font-medium transition-all duration-300";
                                    if selected() {
                                        format!("{base} border-emerald-500 bg-emerald-500/10 text-emerald-600")
                                    } else {
                                        tokens.with(|t| format!("{base} {} {} {}", t.border, t.text, t.border_hover))
                                    }
                                }
                            >
                                {format!("{value}{suffix}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldError field=field />
        </div>
    }
}

/// Large selectable cards with an emoji, label and description
#[component]
pub fn ChoiceCards(
    field: Field,
    choices: &'static [Choice],
    #[prop(default = 3)]
    columns: u8,
) -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;

    view! {
        <div>
            <FieldLabel field=field />
            <div class=format!("grid grid-cols-1 md:grid-cols-{columns} gap-4")>
                {choices
                    .iter()
                    .map(|choice| {
                        let selected = move || state.wizard.with(|w| w.profile().get(field) == choice.value);
                        view! {
                            <button
                                type="button"
                                on:click=move |_| state.set_field(field, choice.value.to_string())
                                class=move || {
                                    let base = "p-6 border-2 rounded-2xl text-center transition-all duration-300";
                                    if selected() {
                                        format!("{base} border-indigo-500 bg-indigo-500/10")
                                    } else {
                                        tokens.with(|t| format!("{base} {} {}", t.border, t.border_hover))
                                    }
                                }
                            >
                                <div class="text-3xl mb-2">{choice.emoji}</div>
                                <div class=move || format!("font-semibold {}", tokens.with(|t| t.text.clone()))>
                                    {choice.label}
                                </div>
                                <div class=move || format!("text-sm {}", tokens.with(|t| t.text_secondary.clone()))>
                                    {choice.description}
                                </div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_marks_errors() {
        let plain = input_class("rounded-xl bg-white", "focus:ring-indigo-500", false);
        assert!(plain.starts_with("w-full px-4 py-3 border rounded-xl bg-white focus:ring-indigo-500"));
        assert!(!plain.contains(ERROR_RING));

        let failing = input_class("rounded-xl bg-white", "focus:ring-indigo-500", true);
        assert!(failing.ends_with(ERROR_RING));
    }
}
