//! Onboarding wizard
//!
//! A linear three-step flow that ends in a completed, persisted profile:
//!
//! ```text
//!   Personal ──advance──▶ Business ──advance──▶ Preferences ──submit──▶ Completed
//!      ▲                      │  ▲                    │                     │
//!      └──────retreat─────────┘  └──────retreat───────┘                     │
//!      ▲                                                                    │
//!      └─────────────────────────────── reset ──────────────────────────────┘
//! ```
//!
//! `advance` and `submit` only move forward when every field required by the
//! current step passes validation. Failures are kept as data in the error set.
//!
//! # Example
//!
//! ```rust
//! use onboard::profile::Field;
//! use onboard::store::MemoryStore;
//! use onboard::wizard::{OnboardingWizard, Stage};
//!
//! let mut wizard = OnboardingWizard::new(MemoryStore::new());
//! wizard.set_field(Field::Name, "Ada Lovelace");
//! wizard.set_field(Field::Email, "ada@example.com");
//! assert!(wizard.advance());
//!
//! wizard.set_field(Field::Company, "Analytical");
//! wizard.set_field(Field::Industry, "Technology");
//! wizard.set_field(Field::Size, "1-10");
//! assert!(wizard.advance());
//! assert!(wizard.submit());
//! assert_eq!(wizard.stage(), Stage::Completed);
//! ```

pub mod machine;

pub use machine::{OnboardingWizard, Stage, WizardSnapshot};
