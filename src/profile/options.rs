//! Choice catalogues for the select-style fields

/// Industries offered on the business step
pub const INDUSTRIES: [&str; 7] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Education",
    "Retail",
    "Manufacturing",
    "Other",
];

/// Company size buckets offered on the business step
pub const COMPANY_SIZES: [&str; 4] = ["1-10", "11-50", "51-200", "200+"];

/// A selectable card on the preferences step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub const THEME_CHOICES: [Choice; 3] = [
    Choice { value: "modern", label: "Modern", emoji: "🎨", description: "Clean & bold design" },
    Choice { value: "classic", label: "Classic", emoji: "📚", description: "Timeless aesthetics" },
    Choice { value: "minimal", label: "Minimal", emoji: "✨", description: "Simple & focused" },
];

pub const LAYOUT_CHOICES: [Choice; 2] = [
    Choice { value: "cards", label: "Card Layout", emoji: "📊", description: "Visual block design" },
    Choice { value: "list", label: "List Layout", emoji: "📋", description: "Compact information" },
];

/// Find a choice by its stored value
pub fn find_choice(choices: &'static [Choice], value: &str) -> Option<&'static Choice> {
    choices.iter().find(|c| c.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::types::{DEFAULT_LAYOUT, DEFAULT_THEME};

    #[test]
    fn test_defaults_are_offered() {
        assert!(find_choice(&THEME_CHOICES, DEFAULT_THEME).is_some());
        assert!(find_choice(&LAYOUT_CHOICES, DEFAULT_LAYOUT).is_some());
        assert!(find_choice(&LAYOUT_CHOICES, "grid").is_none());
    }
}
