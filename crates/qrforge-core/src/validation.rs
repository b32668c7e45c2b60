//! # Validation Module
//!
//! Submit-time validation of the form for the active tab.
//!
//! ## Validation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate_input(tab, state)                         │
//! │                                                                         │
//! │  1. Required fields ─── look up (fields, message) for the tab          │
//! │     │                   first falsy field ──► MissingRequired          │
//! │     ▼                                                                   │
//! │  2. Email tab only ──── cc  non-empty & invalid ──► InvalidCc          │
//! │     │                   bcc non-empty & invalid ──► InvalidBcc         │
//! │     ▼                                                                   │
//! │  3. Ok(())                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The state snapshot is passed in on every call, so a result always reflects
//! the form as it is at submit time.
//!
//! ## Usage
//! ```rust
//! use qrforge_core::reducer::{reduce, Action};
//! use qrforge_core::validation::validate_input;
//! use qrforge_core::{Field, FormState, Tab};
//!
//! let state = FormState::initial();
//! let err = validate_input(Tab::Text, &state).unwrap_err();
//! assert_eq!(err.to_string(), "Text is required");
//!
//! let state = reduce(&state, &Action::set_field(Field::Text, "hello"));
//! assert!(validate_input(Tab::Text, &state).is_ok());
//! ```

use crate::error::ValidationError;
use crate::form::FormState;
use crate::types::{Field, Tab};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Required Fields
// =============================================================================

/// The fields a tab needs before a code can be generated, and the single
/// message shown when any of them is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields {
    pub fields: &'static [Field],
    pub message: &'static str,
}

impl RequiredFields {
    /// Looks up the required-field rule of a tab.
    ///
    /// Returns `None` for a tab with no rule; such a tab is always valid.
    pub fn for_tab(tab: Tab) -> Option<RequiredFields> {
        let required = match tab {
            Tab::Text => rule(&[Field::Text], "Text is required"),
            Tab::Url => rule(&[Field::Url], "URL is required"),
            Tab::Email => rule(&[Field::Email], "Email is required"),
            Tab::Phone => rule(&[Field::Phone], "Phone is required"),
            Tab::Wifi => rule(&[Field::Ssid], "SSID is required"),
            Tab::Sms => rule(
                &[Field::Phone, Field::Sms],
                "Phone and SMS message are required",
            ),
            Tab::Event => rule(
                &[Field::Event, Field::Venue, Field::StartTime, Field::EndTime],
                "Event, Venue, Start Time and End Time are required",
            ),
            Tab::GeoLocation => rule(
                &[Field::Latitude, Field::Longitude],
                "Latitude and Longitude are required",
            ),
            Tab::Crypto => rule(&[Field::Address], "Address is required"),
            Tab::MeCard => rule(
                &[Field::FirstName, Field::LastName, Field::Phone1],
                "First Name, Last Name and Phone are required",
            ),
            Tab::VCard => rule(
                &[Field::FirstName, Field::LastName, Field::Email, Field::PhoneWork],
                "First Name, Last Name, Email and Phone are required",
            ),
        };

        Some(required)
    }

    /// Returns the first field that is missing from `state`, if any.
    pub fn first_missing(&self, state: &FormState) -> Option<Field> {
        self.fields
            .iter()
            .copied()
            .find(|field| state.get(*field).is_falsy())
    }
}

const fn rule(fields: &'static [Field], message: &'static str) -> RequiredFields {
    RequiredFields { fields, message }
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the form for the active tab.
///
/// Stops at the first problem. The error's `Display` is the message to show.
pub fn validate_input(tab: Tab, state: &FormState) -> ValidationResult<()> {
    validate_with_rule(tab, RequiredFields::for_tab(tab), state)
}

/// Validates `state` against an explicit rule; `None` means nothing is
/// required. The CC/BCC checks still only run for [`Tab::Email`].
pub fn validate_with_rule(
    tab: Tab,
    rule: Option<RequiredFields>,
    state: &FormState,
) -> ValidationResult<()> {
    let Some(rule) = rule else {
        return Ok(());
    };

    if let Some(field) = rule.first_missing(state) {
        return Err(ValidationError::MissingRequired {
            tab,
            field,
            message: rule.message,
        });
    }

    if tab == Tab::Email {
        validate_recipients(state)?;
    }

    Ok(())
}

/// Checks the Email tab's CC and BCC lists. Empty lists are allowed.
fn validate_recipients(state: &FormState) -> ValidationResult<()> {
    if let Some(entry) = invalid_entry(state, Field::Cc) {
        return Err(ValidationError::InvalidCc { entry });
    }

    if let Some(entry) = invalid_entry(state, Field::Bcc) {
        return Err(ValidationError::InvalidBcc { entry });
    }

    Ok(())
}

fn invalid_entry(state: &FormState, field: Field) -> Option<String> {
    let value = state.get(field);
    if value.is_falsy() {
        return None;
    }

    let list = value.to_string();
    first_invalid_email(&list).map(str::to_string)
}

// =============================================================================
// Email Validators
// =============================================================================

/// Checks one address against the classic pattern
/// `^[^\s@]+@[^\s@]+\.[a-z]{2,}$` (case-insensitive).
///
/// No IDN handling and no length limits beyond the pattern itself.
///
/// ## Example
/// ```rust
/// use qrforge_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(is_valid_email("first.last@mail.example.CO"));
/// assert!(!is_valid_email("bad-email"));
/// assert!(!is_valid_email("a@b.c"));
/// ```
pub fn is_valid_email(address: &str) -> bool {
    let is_part_char = |c: char| c != '@' && !c.is_whitespace();

    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_part_char) {
        return false;
    }

    // The TLD is whatever follows the last dot; anything with a later dot
    // could not be all letters.
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty()
        && host.chars().all(is_part_char)
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Whether every comma-separated entry of `list` is a valid address.
///
/// Entries are trimmed before checking; an empty entry (as in `"a@b.com,"`)
/// is invalid.
pub fn is_valid_email_list(list: &str) -> bool {
    first_invalid_email(list).is_none()
}

/// Returns the first trimmed entry of `list` that is not a valid address.
pub fn first_invalid_email(list: &str) -> Option<&str> {
    list.split(',')
        .map(str::trim)
        .find(|entry| !is_valid_email(entry))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{reduce, Action};
    use crate::types::FieldValue;

    fn with(values: &[(Field, &str)]) -> FormState {
        values.iter().fold(FormState::initial(), |state, (field, value)| {
            reduce(&state, &Action::set_field(*field, *value))
        })
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("c@d.co"));
        assert!(is_valid_email("user+tag@sub.domain.org"));
        assert!(is_valid_email("A@B.COM"));
        assert!(is_valid_email("a@b.c.de"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b.c0m"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.com."));
    }

    #[test]
    fn test_email_list() {
        assert!(is_valid_email_list("a@b.com, c@d.co"));
        assert!(is_valid_email_list("  a@b.com  "));
        assert!(!is_valid_email_list("a@b.com, bad-email"));
        assert!(!is_valid_email_list("a@b.com,"));
        assert_eq!(first_invalid_email("a@b.com, bad-email, x"), Some("bad-email"));
    }

    #[test]
    fn test_text_required() {
        let err = validate_input(Tab::Text, &FormState::initial()).unwrap_err();
        assert_eq!(err.to_string(), "Text is required");
        assert_eq!(err.field(), Some(Field::Text));
    }

    #[test]
    fn test_stops_at_first_missing_field() {
        let state = with(&[(Field::Event, "Launch"), (Field::EndTime, "18:00")]);
        let err = validate_input(Tab::Event, &state).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequired {
                tab: Tab::Event,
                field: Field::Venue,
                message: "Event, Venue, Start Time and End Time are required",
            }
        );
    }

    #[test]
    fn test_every_tab_passes_when_required_fields_are_set() {
        for tab in Tab::ALL {
            let rule = RequiredFields::for_tab(tab).unwrap();
            let values: Vec<(Field, &str)> = rule.fields.iter().map(|f| (*f, "x")).collect();
            let state = with(&values);
            assert_eq!(validate_input(tab, &state), Ok(()), "{tab}");
        }
    }

    #[test]
    fn test_required_fields_match_schema() {
        for tab in Tab::ALL {
            let rule = RequiredFields::for_tab(tab).unwrap();
            assert_eq!(rule.fields, tab.schema().required, "{tab}");
        }
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let state = reduce(
            &with(&[(Field::Longitude, "2.29")]),
            &Action::set_field(Field::Latitude, 0.0),
        );
        let err = validate_input(Tab::GeoLocation, &state).unwrap_err();
        assert_eq!(err.to_string(), "Latitude and Longitude are required");
    }

    #[test]
    fn test_geolocation_numbers_pass() {
        let state = [
            Action::set_field(Field::Latitude, 48.8584),
            Action::set_field(Field::Longitude, 2.2945),
        ]
        .iter()
        .fold(FormState::initial(), |state, action| reduce(&state, action));
        assert!(validate_input(Tab::GeoLocation, &state).is_ok());
    }

    #[test]
    fn test_invalid_cc() {
        let state = with(&[(Field::Email, "to@x.com"), (Field::Cc, "a@b.com, bad-email")]);
        let err = validate_input(Tab::Email, &state).unwrap_err();
        assert_eq!(err.to_string(), "One or more CC emails are invalid");
        assert_eq!(
            err,
            ValidationError::InvalidCc {
                entry: "bad-email".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_bcc_checked_after_cc() {
        let state = with(&[
            (Field::Email, "to@x.com"),
            (Field::Cc, "a@b.com"),
            (Field::Bcc, "nope"),
        ]);
        let err = validate_input(Tab::Email, &state).unwrap_err();
        assert_eq!(err.to_string(), "One or more BCC emails are invalid");
    }

    #[test]
    fn test_valid_cc_with_empty_bcc() {
        let state = with(&[(Field::Email, "to@x.com"), (Field::Cc, "a@b.com, c@d.co")]);
        assert!(validate_input(Tab::Email, &state).is_ok());
    }

    #[test]
    fn test_missing_email_reported_before_cc() {
        let state = with(&[(Field::Cc, "bad-email")]);
        let err = validate_input(Tab::Email, &state).unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn test_cc_ignored_outside_email_tab() {
        let state = with(&[
            (Field::FirstName, "Ada"),
            (Field::LastName, "Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::PhoneWork, "+44 20 7946 0000"),
            (Field::Cc, "bad-email"),
        ]);
        assert!(validate_input(Tab::VCard, &state).is_ok());
    }

    #[test]
    fn test_numeric_cc_is_checked_as_text() {
        let state = reduce(
            &with(&[(Field::Email, "to@x.com")]),
            &Action::set_field(Field::Cc, FieldValue::Number(42.0)),
        );
        assert!(validate_input(Tab::Email, &state).is_err());
    }

    #[test]
    fn test_no_rule_is_always_valid() {
        let state = FormState::initial();
        assert!(validate_with_rule(Tab::Text, None, &state).is_ok());
        assert!(validate_with_rule(Tab::Email, None, &state).is_ok());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let state = with(&[(Field::Email, "to@x.com"), (Field::Cc, "bad")]);
        assert_eq!(
            validate_input(Tab::Email, &state),
            validate_input(Tab::Email, &state)
        );
    }
}
