//! # Onboard
//!
//! A three-step onboarding wizard that collects a user profile, persists it
//! through a pluggable key-value store, resolves presentation tokens from a
//! light/dark flag and a style, and builds a dashboard for the finished
//! profile.
//!
//! ## Modules
//!
//! - [`profile`]: profile record, field identifiers, steps and choice lists
//! - [`validation`]: per-field rules returning a message or nothing
//! - [`store`]: the `KeyValueStore` seam with memory and file backends
//! - [`wizard`]: the step state machine
//! - [`theme`]: token resolution and the persisted theme preference
//! - [`dashboard`]: presentation model for a completed profile
//! - [`terminal`]: line-based wizard driver and text rendering
//! - [`config`]: TOML configuration with environment overrides
//!
//! The `cli` feature (on by default) adds the `onboard` binary's command
//! parser and subscriber setup. Frontends that only need the core, such as
//! the browser app, depend on the crate with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust
//! use onboard::{resolve, DashboardModel, Field, MemoryStore, OnboardingWizard, ThemeStyle};
//!
//! let mut wizard = OnboardingWizard::new(MemoryStore::new());
//! wizard.set_field(Field::Name, "Grace Hopper");
//! wizard.set_field(Field::Email, "grace@example.com");
//! assert!(wizard.advance());
//!
//! wizard.set_field(Field::Company, "Navy");
//! wizard.set_field(Field::Industry, "Other");
//! wizard.set_field(Field::Size, "200+");
//! assert!(wizard.advance());
//! assert!(wizard.submit());
//!
//! let dashboard = DashboardModel::new(wizard.profile(), true);
//! assert_eq!(dashboard.greeting, "Welcome back, Grace Hopper!");
//!
//! let tokens = resolve(true, ThemeStyle::Minimal);
//! assert_eq!(tokens.background, "bg-[#0E1117] bg-noise-pattern");
//! ```

pub mod config;
pub mod dashboard;
pub mod profile;
pub mod store;
pub mod terminal;
pub mod theme;
pub mod validation;
pub mod wizard;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

// Re-export top-level types for convenience
pub use profile::{Field, FieldErrors, Profile, UnknownField, WizardStep};

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};

pub use wizard::{OnboardingWizard, Stage, WizardSnapshot};

pub use theme::{resolve, resolve_named, ThemePreference, ThemeStyle, ThemeTokens};

pub use validation::validate;

pub use dashboard::DashboardModel;

pub use config::{Config, ConfigError, LoggingConfig, StoreConfig, ThemeConfig};
