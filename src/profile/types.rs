//! Core data types for the onboarding profile
//!
//! This module defines the fundamental types shared by the wizard, the
//! dashboard and both front ends:
//! - `Field`: identifier of a single profile field
//! - `Profile`: the user-entered onboarding data
//! - `FieldErrors`: current validation failures keyed by field
//! - `WizardStep`: position inside the three-step flow

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Number of steps in the onboarding flow
pub const TOTAL_STEPS: usize = 3;

/// Default visual style stored in a fresh profile
pub const DEFAULT_THEME: &str = "modern";

/// Default dashboard layout stored in a fresh profile
pub const DEFAULT_LAYOUT: &str = "cards";

/// Identifier of a profile field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Company,
    Industry,
    Size,
    Theme,
    Layout,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Industry,
        Field::Size,
        Field::Theme,
        Field::Layout,
    ];

    /// Key used in the persisted JSON blob
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Industry => "industry",
            Field::Size => "size",
            Field::Theme => "theme",
            Field::Layout => "layout",
        }
    }

    /// Human-readable label for form inputs
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Company => "Company Name",
            Field::Industry => "Industry",
            Field::Size => "Company Size",
            Field::Theme => "Choose Your Theme",
            Field::Layout => "Dashboard Layout",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a profile field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown profile field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The data collected by the onboarding wizard
///
/// Serialized in the same camelCase shape that is written to the `userData`
/// store key. `is_completed` is only ever true for a submitted profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub size: String,
    pub theme: String,
    pub layout: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            industry: String::new(),
            size: String::new(),
            theme: DEFAULT_THEME.to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
            is_completed: false,
        }
    }
}

impl Profile {
    /// Read a field value
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Industry => &self.industry,
            Field::Size => &self.size,
            Field::Theme => &self.theme,
            Field::Layout => &self.layout,
        }
    }

    /// Overwrite a field value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Industry => &mut self.industry,
            Field::Size => &mut self.size,
            Field::Theme => &mut self.theme,
            Field::Layout => &mut self.layout,
        };
        *slot = value.into();
    }

    /// Builder method: set a field
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// Validation failures currently shown to the user
///
/// A field is present if and only if its current value fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error message for a field, if it is failing
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate failures in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// One of the three sequential onboarding pages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Name and email
    Personal,
    /// Company, industry and size
    Business,
    /// Theme and layout
    Preferences,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[WizardStep::Personal, WizardStep::Business, WizardStep::Preferences]
    }

    /// 1-indexed position
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Business => 2,
            WizardStep::Preferences => 3,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Personal),
            2 => Some(WizardStep::Business),
            3 => Some(WizardStep::Preferences),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Short label shown under the progress bar
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal",
            WizardStep::Business => "Business",
            WizardStep::Preferences => "Preferences",
        }
    }

    /// Heading shown at the top of the step
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Information",
            WizardStep::Business => "Business Details",
            WizardStep::Preferences => "Customize Your Experience",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Let's start with some basic information about you",
            WizardStep::Business => "Tell us about your company",
            WizardStep::Preferences => "Choose how you want your dashboard to look",
        }
    }

    /// Fields that must pass validation before leaving this step
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            WizardStep::Personal => &[Field::Name, Field::Email],
            WizardStep::Business => &[Field::Company, Field::Industry, Field::Size],
            WizardStep::Preferences => &[],
        }
    }

    /// Progress through the flow, rounded to a whole percentage
    pub fn percent_complete(&self) -> u32 {
        ((self.number() as f64 / TOTAL_STEPS as f64) * 100.0).round() as u32
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} of {}", self.number(), TOTAL_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.theme, "modern");
        assert_eq!(profile.layout, "cards");
        assert!(profile.name.is_empty());
        assert!(!profile.is_completed);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = Profile {
            is_completed: true,
            ..Profile::default().with(Field::Name, "Ada")
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["isCompleted"], true);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["layout"], "cards");
    }

    #[test]
    fn test_profile_missing_completion_flag_defaults_false() {
        let json = r#"{"name":"a","email":"b","company":"c","industry":"d","size":"e","theme":"modern","layout":"list"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(!profile.is_completed);
        assert_eq!(profile.layout, "list");
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!("size".parse::<Field>().unwrap(), Field::Size);
        assert_eq!(
            "NAME".parse::<Field>().unwrap_err(),
            UnknownField("NAME".to_string())
        );
        assert!(" size".parse::<Field>().is_err());
        assert_eq!(
            "phone".parse::<Field>().unwrap_err(),
            UnknownField("phone".to_string())
        );
    }

    #[test]
    fn test_step_navigation_bounds() {
        assert_eq!(WizardStep::Personal.previous(), None);
        assert_eq!(WizardStep::Personal.next(), Some(WizardStep::Business));
        assert_eq!(WizardStep::Preferences.next(), None);
        assert_eq!(WizardStep::Preferences.previous(), Some(WizardStep::Business));
    }

    #[test]
    fn test_percent_complete() {
        let percents: Vec<u32> = WizardStep::all().iter().map(|s| s.percent_complete()).collect();
        assert_eq!(percents, vec![33, 67, 100]);
        assert_eq!(WizardStep::Business.to_string(), "Step 2 of 3");
    }

    #[test]
    fn test_field_errors_ordering() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Size, "b");
        errors.insert(Field::Name, "a");
        let order: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Name, Field::Size]);

        errors.remove(Field::Name);
        assert!(!errors.contains(Field::Name));
        assert_eq!(errors.len(), 1);
    }
}
