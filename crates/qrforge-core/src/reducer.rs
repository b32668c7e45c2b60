//! # Form Reducer
//!
//! Pure state transitions for [`FormState`].
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reducer                                              │
//! │                                                                         │
//! │  Page Event               Action                  State Change          │
//! │  ──────────               ──────                  ────────────          │
//! │                                                                         │
//! │  Type in input ─────────► SET_FIELD ────────────► fields[f] = v        │
//! │                                                                         │
//! │  Click Generate ────────► SET_LOADING ──────────► isLoading = v        │
//! │                                                                         │
//! │  Code rendered ─────────► SET_QRCODE_URL ───────► qrCodeURL = v        │
//! │                                                   isLoading = false    │
//! │                                                                         │
//! │  Validation failed ─────► RESET_STATE ──────────► initial state        │
//! │                                                                         │
//! │  Anything else ─────────► (ignored) ────────────► unchanged            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::FormState;
use crate::types::{Field, FieldValue};

/// An update dispatched against the form state.
///
/// ## Wire Format
/// ```json
/// { "type": "SET_FIELD", "field": "url", "value": "https://example.com" }
/// { "type": "RESET_STATE" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetField { field: Field, value: FieldValue },
    SetLoading { value: bool },
    #[serde(rename = "SET_QRCODE_URL")]
    SetQrCodeUrl { value: String },
    ResetState,
    /// Any action type this reducer does not handle.
    #[serde(other)]
    #[ts(skip)]
    Unknown,
}

impl Action {
    /// Shorthand for [`Action::SetField`].
    pub fn set_field(field: Field, value: impl Into<FieldValue>) -> Self {
        Action::SetField {
            field,
            value: value.into(),
        }
    }
}

/// Computes the next form state.
///
/// Pure and total: the input is never modified, and an action the reducer
/// does not recognize returns the state unchanged.
///
/// ## Example
/// ```rust
/// use qrforge_core::reducer::{reduce, Action};
/// use qrforge_core::{Field, FormState};
///
/// let state = FormState::initial();
/// let next = reduce(&state, &Action::set_field(Field::Text, "hello"));
///
/// assert_eq!(next.text(Field::Text), Some("hello"));
/// assert_eq!(state.text(Field::Text), Some(""));
/// ```
pub fn reduce(state: &FormState, action: &Action) -> FormState {
    match action {
        Action::SetField { field, value } => {
            let mut next = state.clone();
            next.set(*field, value.clone());
            next
        }
        Action::SetLoading { value } => {
            let mut next = state.clone();
            next.set_loading(*value);
            next
        }
        Action::SetQrCodeUrl { value } => {
            let mut next = state.clone();
            next.set_qr_code_url(value.clone());
            next.set_loading(false);
            next
        }
        Action::ResetState => FormState::initial(),
        Action::Unknown => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::initial();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            state = reduce(&state, &Action::set_field(field, format!("value-{i}")));
        }
        reduce(&state, &Action::SetLoading { value: true })
    }

    #[test]
    fn test_set_field() {
        let state = reduce(
            &FormState::initial(),
            &Action::set_field(Field::Latitude, 48.8584),
        );
        assert_eq!(state.get(Field::Latitude), &FieldValue::Number(48.8584));
    }

    #[test]
    fn test_set_field_accepts_any_value() {
        let state = reduce(&FormState::initial(), &Action::set_field(Field::Email, "not an email"));
        assert_eq!(state.text(Field::Email), Some("not an email"));
    }

    #[test]
    fn test_set_loading() {
        let state = reduce(&FormState::initial(), &Action::SetLoading { value: true });
        assert!(state.is_loading());
    }

    #[test]
    fn test_set_qr_code_url_clears_loading() {
        let loading = reduce(&FormState::initial(), &Action::SetLoading { value: true });
        let done = reduce(
            &loading,
            &Action::SetQrCodeUrl {
                value: "data:image/png;base64,AAAA".to_string(),
            },
        );
        assert!(!done.is_loading());
        assert_eq!(done.qr_code_url(), "data:image/png;base64,AAAA");

        // Also when it was not loading to begin with.
        let idle = reduce(
            &FormState::initial(),
            &Action::SetQrCodeUrl {
                value: String::new(),
            },
        );
        assert!(!idle.is_loading());
    }

    #[test]
    fn test_reset_returns_initial_state() {
        assert_eq!(reduce(&filled(), &Action::ResetState), FormState::initial());
        assert_eq!(
            reduce(&FormState::initial(), &Action::ResetState),
            FormState::initial()
        );
    }

    #[test]
    fn test_unknown_action_is_identity() {
        let state = filled();
        assert_eq!(reduce(&state, &Action::Unknown), state);
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let state = filled();
        let action = Action::set_field(Field::Cc, "a@b.com");
        assert_eq!(reduce(&state, &action), reduce(&state, &action));
    }

    #[test]
    fn test_action_wire_format() {
        let action: Action =
            serde_json::from_str(r#"{"type":"SET_FIELD","field":"startTime","value":"10:00"}"#)
                .unwrap();
        assert_eq!(action, Action::set_field(Field::StartTime, "10:00"));

        let action: Action =
            serde_json::from_str(r#"{"type":"SET_QRCODE_URL","value":"x"}"#).unwrap();
        assert_eq!(
            action,
            Action::SetQrCodeUrl {
                value: "x".to_string()
            }
        );

        let action: Action = serde_json::from_str(r#"{"type":"RESET_STATE"}"#).unwrap();
        assert_eq!(action, Action::ResetState);

        let json = serde_json::to_string(&Action::SetLoading { value: true }).unwrap();
        assert_eq!(json, r#"{"type":"SET_LOADING","value":true}"#);
    }

    #[test]
    fn test_unrecognized_action_type_parses_as_unknown() {
        let action: Action = serde_json::from_str(r#"{"type":"SET_THEME"}"#).unwrap();
        assert_eq!(action, Action::Unknown);
    }
}
