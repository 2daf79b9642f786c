//! Onboarding state machine
//!
//! Owns the profile being edited, the visible validation errors, the current
//! step and the completion flag. Front ends call the mutation methods from
//! their input handlers and redraw from the query methods afterwards.

use serde::Serialize;

use crate::profile::{Field, FieldErrors, Profile, WizardStep, TOTAL_STEPS};
use crate::store::{keys, KeyValueStore, StoreResult};
use crate::validation::validate;

/// Where the flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "stage", content = "step")]
pub enum Stage {
    /// Collecting data on one of the three steps
    Step(WizardStep),
    /// Profile submitted; the dashboard is shown
    Completed,
}

/// Owned copy of everything a view needs to render the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub stage: Stage,
    pub step: WizardStep,
    pub total_steps: usize,
    pub profile: Profile,
    pub errors: FieldErrors,
}

/// The onboarding wizard, bound to the store it persists into
#[derive(Debug)]
pub struct OnboardingWizard<S: KeyValueStore> {
    store: S,
    profile: Profile,
    errors: FieldErrors,
    step: WizardStep,
    completed: bool,
}

impl<S: KeyValueStore> OnboardingWizard<S> {
    /// Create a wizard, resuming a previously completed profile if one is stored
    pub fn new(store: S) -> Self {
        let mut wizard = Self {
            store,
            profile: Profile::default(),
            errors: FieldErrors::new(),
            step: WizardStep::Personal,
            completed: false,
        };
        wizard.initialize();
        wizard
    }

    /// Load prior state from the store
    ///
    /// Anything other than a well-formed, completed profile leaves the wizard
    /// at the first step with an empty profile.
    fn initialize(&mut self) {
        match load_completed_profile(&self.store) {
            Some(profile) => {
                tracing::debug!(name = %profile.name, "Resuming completed profile");
                self.profile = profile;
                self.completed = true;
            }
            None => {
                tracing::debug!("Starting onboarding from step 1");
            }
        }
    }

    // ============ Queries ============

    pub fn stage(&self) -> Stage {
        if self.completed {
            Stage::Completed
        } else {
            Stage::Step(self.step)
        }
    }

    /// Current step (the last step reached once completed)
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        TOTAL_STEPS
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether the Back control should be enabled
    pub fn can_retreat(&self) -> bool {
        !self.completed && !self.step.is_first()
    }

    /// Whether the forward control submits instead of advancing
    pub fn is_final_step(&self) -> bool {
        self.step.is_last()
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            stage: self.stage(),
            step: self.step,
            total_steps: TOTAL_STEPS,
            profile: self.profile.clone(),
            errors: self.errors.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ============ Mutations ============

    /// Record an edit and re-validate that field only
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.completed {
            tracing::debug!(%field, "Ignoring edit to a completed profile");
            return;
        }

        let value = value.into();
        match validate(field, &value) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
        self.profile.set(field, value);
    }

    /// Try to move to the next step
    ///
    /// Returns true if the step changed. On the last step this only runs the
    /// validation pass; use [`submit`](Self::submit) to finish.
    pub fn advance(&mut self) -> bool {
        if self.completed || !self.validate_step() {
            return false;
        }

        match self.step.next() {
            Some(next) => {
                tracing::debug!(from = self.step.number(), to = next.number(), "Advancing");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Go back one step without validating; returns true if the step changed
    pub fn retreat(&mut self) -> bool {
        if self.completed {
            return false;
        }

        match self.step.previous() {
            Some(previous) => {
                tracing::debug!(from = self.step.number(), to = previous.number(), "Retreating");
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Finish onboarding and persist the profile
    ///
    /// Returns true if the wizard is now completed. A store failure is logged
    /// and does not prevent completion; the profile is then simply not
    /// remembered for the next session.
    pub fn submit(&mut self) -> bool {
        if self.completed {
            return true;
        }
        if !self.validate_step() {
            return false;
        }

        self.profile.is_completed = true;
        if let Err(e) = save_profile(&mut self.store, &self.profile) {
            tracing::warn!("Failed to persist completed profile: {}", e);
        }
        self.completed = true;

        tracing::info!(name = %self.profile.name, company = %self.profile.company, "Onboarding completed");
        true
    }

    /// Forget everything and return to the first step
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(keys::USER_DATA) {
            tracing::warn!("Failed to clear stored profile: {}", e);
        }

        self.profile = Profile::default();
        self.errors.clear();
        self.step = WizardStep::Personal;
        self.completed = false;

        tracing::info!("Onboarding reset");
    }

    /// Replace the error set with the failures of the current step's fields
    fn validate_step(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        for &field in self.step.required_fields() {
            if let Some(message) = validate(field, self.profile.get(field)) {
                errors.insert(field, message);
            }
        }

        if !errors.is_empty() {
            tracing::debug!(step = self.step.number(), failures = errors.len(), "Step validation failed");
        }

        self.errors = errors;
        self.errors.is_empty()
    }
}

/// Read `userData`, treating every failure as "nothing stored"
fn load_completed_profile<S: KeyValueStore>(store: &S) -> Option<Profile> {
    let raw = match store.get(keys::USER_DATA) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read stored profile: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<Profile>(&raw) {
        Ok(profile) if profile.is_completed => Some(profile),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Ignoring malformed stored profile: {}", e);
            None
        }
    }
}

fn save_profile<S: KeyValueStore>(store: &mut S, profile: &Profile) -> StoreResult<()> {
    let json = serde_json::to_string(profile)?;
    store.set(keys::USER_DATA, &json)
}
