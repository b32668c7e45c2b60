//! End-to-end form flows: edits through the reducer, then submit-time
//! validation, the way the page drives them.

use qrforge_core::validation::validate_input;
use qrforge_core::{reduce, Action, Field, FieldValue, FormState, QrCodeRequest, Tab};

fn apply(state: FormState, actions: &[Action]) -> FormState {
    actions.iter().fold(state, |state, action| reduce(&state, action))
}

#[test]
fn wifi_form_from_empty_to_valid() {
    let state = FormState::initial();
    assert_eq!(
        validate_input(Tab::Wifi, &state).unwrap_err().to_string(),
        "SSID is required"
    );

    let state = apply(
        state,
        &[
            Action::set_field(Field::Ssid, "CafeGuest"),
            Action::set_field(Field::Password, "hunter22"),
            Action::set_field(Field::Encryption, "WPA"),
        ],
    );
    assert!(validate_input(Tab::Wifi, &state).is_ok());
}

#[test]
fn generate_cycle_then_reset() {
    let state = apply(
        FormState::initial(),
        &[
            Action::set_field(Field::Url, "https://example.com"),
            Action::SetLoading { value: true },
        ],
    );
    assert!(state.is_loading());

    let state = reduce(
        &state,
        &Action::SetQrCodeUrl {
            value: "blob:qr-1".to_string(),
        },
    );
    assert!(!state.is_loading());
    assert_eq!(state.qr_code_url(), "blob:qr-1");
    assert_eq!(state.text(Field::Url), Some("https://example.com"));

    assert_eq!(reduce(&state, &Action::ResetState), FormState::initial());
}

#[test]
fn actions_from_page_json() {
    let actions: Vec<Action> = serde_json::from_str(
        r#"[
            {"type": "SET_FIELD", "field": "latitude", "value": 51.5007},
            {"type": "SET_FIELD", "field": "longitude", "value": -0.1246},
            {"type": "TOGGLE_DARK_MODE"}
        ]"#,
    )
    .unwrap();

    let state = apply(FormState::initial(), &actions);
    assert_eq!(state.get(Field::Longitude), &FieldValue::Number(-0.1246));
    assert!(validate_input(Tab::GeoLocation, &state).is_ok());
}

#[test]
fn unknown_field_in_action_is_rejected_at_parse_time() {
    let parsed = serde_json::from_str::<Action>(
        r#"{"type": "SET_FIELD", "field": "favouriteColor", "value": "blue"}"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn queued_request_is_not_affected_by_later_edits() {
    let state = reduce(
        &FormState::initial(),
        &Action::set_field(Field::Text, "first"),
    );
    let request = QrCodeRequest::from_form(Tab::Text, &state, qrforge_core::DEFAULT_CRYPTO);

    let state = reduce(&state, &Action::set_field(Field::Text, "second"));
    assert_eq!(request.field(Field::Text), Some(&FieldValue::from("first")));
    assert_eq!(state.text(Field::Text), Some("second"));
}

#[test]
fn vcard_requires_all_four_fields() {
    let state = apply(
        FormState::initial(),
        &[
            Action::set_field(Field::FirstName, "Grace"),
            Action::set_field(Field::LastName, "Hopper"),
            Action::set_field(Field::Email, "grace@navy.mil"),
        ],
    );
    assert_eq!(
        validate_input(Tab::VCard, &state).unwrap_err().to_string(),
        "First Name, Last Name, Email and Phone are required"
    );

    let state = reduce(&state, &Action::set_field(Field::PhoneWork, "+1 555 0100"));
    assert!(validate_input(Tab::VCard, &state).is_ok());
}
