//! Pages
//!
//! The wizard and the dashboard shown once it is complete.

pub mod dashboard;
pub mod onboarding;

pub use dashboard::Dashboard;
pub use onboarding::Onboarding;
