//! UI Components
//!
//! Reusable Leptos components for the wizard and the dashboard.

pub mod chart;
pub mod field;
pub mod profile_card;
pub mod progress;
pub mod stat_card;
pub mod step_navigation;
pub mod theme_toggle;

pub use chart::ProgressChart;
pub use field::{ButtonGroupField, ChoiceCards, SelectField, TextField};
pub use profile_card::ProfileCard;
pub use progress::ProgressIndicator;
pub use stat_card::StatCard;
pub use step_navigation::StepNavigation;
pub use theme_toggle::{StylePicker, ThemeToggle};
