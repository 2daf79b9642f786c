//! Field validation
//!
//! Pure per-field rules applied on every edit and on every forward
//! navigation attempt. A failing rule yields the message shown inline next to
//! the field; `None` means the value is acceptable.

use regex::Regex;
use std::sync::OnceLock;

use crate::profile::Field;

/// Letters, whitespace, hyphens and apostrophes
fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("valid name pattern"))
}

/// `local@domain.tld` shape only; deliberately not RFC 5322
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Validate a single field value
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();

    match field {
        Field::Name => {
            if trimmed.is_empty() {
                Some("Name is required")
            } else if trimmed.chars().count() < 2 {
                Some("Name must be at least 2 characters")
            } else if !name_pattern().is_match(trimmed) {
                Some("Name can only contain letters, spaces, hyphens, and apostrophes")
            } else {
                None
            }
        }
        Field::Email => {
            if trimmed.is_empty() {
                Some("Email is required")
            } else if !email_pattern().is_match(trimmed) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Company => {
            if trimmed.is_empty() {
                Some("Company name is required")
            } else if trimmed.chars().count() < 2 {
                Some("Company name must be at least 2 characters")
            } else {
                None
            }
        }
        // Selections are checked untrimmed
        Field::Industry if value.is_empty() => Some("Please select an industry"),
        Field::Size if value.is_empty() => Some("Please select company size"),
        Field::Industry | Field::Size | Field::Theme | Field::Layout => None,
    }
}

/// Validate by field identifier; identifiers without a rule always pass
pub fn validate_key(key: &str, value: &str) -> Option<&'static str> {
    key.parse::<Field>().ok().and_then(|field| validate(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate(Field::Name, ""), Some("Name is required"));
        assert_eq!(validate(Field::Name, "   "), Some("Name is required"));
        assert_eq!(validate(Field::Name, "a"), Some("Name must be at least 2 characters"));
        assert_eq!(
            validate(Field::Name, "Bob3"),
            Some("Name can only contain letters, spaces, hyphens, and apostrophes")
        );
        assert_eq!(validate(Field::Name, "Ada Lovelace"), None);
        assert_eq!(validate(Field::Name, "  Mary-Jane O'Neil  "), None);
    }

    #[test]
    fn test_valid_names_pass() {
        let names = ["Al", "Jo Ann", "d'Artagnan", "Smith-Jones", "O'Hara", "x\ty"];
        for name in names {
            assert_eq!(validate(Field::Name, name), None, "{name:?} should be valid");
        }
    }

    #[test]
    fn test_name_rejects_non_ascii_letters() {
        assert!(validate(Field::Name, "José").is_some());
        assert!(validate(Field::Name, "Ann.").is_some());
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate(Field::Email, "a@b.com"), None);
        assert_eq!(validate(Field::Email, " ada@example.com "), None);
        assert_eq!(validate(Field::Email, ""), Some("Email is required"));
        assert_eq!(
            validate(Field::Email, "not-an-email"),
            Some("Please enter a valid email address")
        );
        assert!(validate(Field::Email, "a@b").is_some());
        assert!(validate(Field::Email, "a@@b.com").is_some());
        assert!(validate(Field::Email, "a b@c.com").is_some());
    }

    #[test]
    fn test_email_stays_permissive() {
        assert_eq!(validate(Field::Email, "a@b.c.d"), None);
        assert_eq!(validate(Field::Email, "!#$@x.y"), None);
    }

    #[test]
    fn test_company_rules() {
        assert_eq!(validate(Field::Company, " "), Some("Company name is required"));
        assert_eq!(
            validate(Field::Company, "X"),
            Some("Company name must be at least 2 characters")
        );
        assert_eq!(validate(Field::Company, "X1 Labs"), None);
    }

    #[test]
    fn test_lengths_count_characters() {
        assert_eq!(
            validate(Field::Company, "😀"),
            Some("Company name must be at least 2 characters")
        );
        assert_eq!(validate(Field::Company, "éé"), None);
        assert_eq!(
            validate(Field::Name, " 李 "),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_selection_rules() {
        assert_eq!(validate(Field::Industry, ""), Some("Please select an industry"));
        assert_eq!(validate(Field::Industry, "Finance"), None);
        assert_eq!(validate(Field::Size, ""), Some("Please select company size"));
        assert_eq!(validate(Field::Size, "200+"), None);
    }

    #[test]
    fn test_fields_without_rules() {
        assert_eq!(validate(Field::Theme, ""), None);
        assert_eq!(validate(Field::Layout, "anything"), None);
        assert_eq!(validate_key("nickname", ""), None);
        assert_eq!(validate_key("name", ""), Some("Name is required"));
        assert_eq!(validate_key("NAME", ""), None);
        assert_eq!(validate_key(" name", ""), None);
    }
}
