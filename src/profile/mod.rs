//! Onboarding profile model
//!
//! - **types**: `Profile`, `Field`, `FieldErrors`, `WizardStep`
//! - **options**: choice catalogues rendered by the step views

pub mod options;
pub mod types;

pub use options::{find_choice, Choice, COMPANY_SIZES, INDUSTRIES, LAYOUT_CHOICES, THEME_CHOICES};
pub use types::{
    Field, FieldErrors, Profile, UnknownField, WizardStep, DEFAULT_LAYOUT, DEFAULT_THEME,
    TOTAL_STEPS,
};
