//! # Domain Types
//!
//! Core domain types shared by the form state, the reducer and the validator.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Tab        │   │     Field       │   │   FieldValue    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Text, Url,     │   │  text, url,     │   │  Text(String)   │       │
//! │  │  Email, WiFi,   │   │  email, cc,     │   │  Number(f64)    │       │
//! │  │  ... VCard      │   │  ... phoneWork  │   │                 │       │
//! │  └────────┬────────┘   └─────────────────┘   └─────────────────┘       │
//! │           │ schema()                                                    │
//! │           ▼                                                             │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   TabSchema     │   │  QrCodeRequest  │                             │
//! │  │  required[]     │   │  id (UUID)      │                             │
//! │  │  optional[]     │   │  tab, fields    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::form::FormState;

// =============================================================================
// Tab
// =============================================================================

/// The QR-code content type currently being edited.
///
/// Exactly one tab is active at a time; the page starts on [`Tab::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Tab {
    #[default]
    Text,
    Url,
    Email,
    Phone,
    #[serde(rename = "WiFi")]
    Wifi,
    #[serde(rename = "SMS")]
    Sms,
    Event,
    GeoLocation,
    Crypto,
    MeCard,
    VCard,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 11] = [
        Tab::Text,
        Tab::Url,
        Tab::Email,
        Tab::Phone,
        Tab::Wifi,
        Tab::Sms,
        Tab::Event,
        Tab::GeoLocation,
        Tab::Crypto,
        Tab::MeCard,
        Tab::VCard,
    ];

    /// Wire name of the tab (matches the serde representation).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tab::Text => "Text",
            Tab::Url => "Url",
            Tab::Email => "Email",
            Tab::Phone => "Phone",
            Tab::Wifi => "WiFi",
            Tab::Sms => "SMS",
            Tab::Event => "Event",
            Tab::GeoLocation => "GeoLocation",
            Tab::Crypto => "Crypto",
            Tab::MeCard => "MeCard",
            Tab::VCard => "VCard",
        }
    }

    /// The fields this tab edits.
    pub fn schema(&self) -> TabSchema {
        use Field::*;

        match self {
            Tab::Text => TabSchema::new(&[Text], &[]),
            Tab::Url => TabSchema::new(&[Url], &[]),
            Tab::Email => TabSchema::new(&[Email], &[Subject, Body, Cc, Bcc]),
            Tab::Phone => TabSchema::new(&[Phone], &[]),
            Tab::Wifi => TabSchema::new(&[Ssid], &[Password, Encryption, Hidden]),
            Tab::Sms => TabSchema::new(&[Phone, Sms], &[]),
            Tab::Event => TabSchema::new(&[Event, Venue, StartTime, EndTime], &[]),
            Tab::GeoLocation => TabSchema::new(&[Latitude, Longitude], &[]),
            Tab::Crypto => TabSchema::new(&[Address], &[Amount]),
            Tab::MeCard => TabSchema::new(
                &[FirstName, LastName, Phone1],
                &[Nickname, Phone2, Phone3, Email, Website, Note],
            ),
            Tab::VCard => TabSchema::new(
                &[FirstName, LastName, Email, PhoneWork],
                &[Phone1, Organization, Position, Website, Note],
            ),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    /// Parses a tab name, ignoring ASCII case (`"wifi"` and `"WiFi"` both work).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownTab(s.to_string()))
    }
}

/// The fields a tab reads, split into required and optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSchema {
    pub required: &'static [Field],
    pub optional: &'static [Field],
}

impl TabSchema {
    const fn new(required: &'static [Field], optional: &'static [Field]) -> Self {
        TabSchema { required, optional }
    }

    /// Required fields first, then optional ones.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }
}

// =============================================================================
// Field
// =============================================================================

/// Name of a form field.
///
/// The set is closed: the form state holds exactly one value per variant,
/// so an unknown field name can never enter it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Text,
    Url,
    Email,
    Subject,
    Body,
    Cc,
    Bcc,
    Phone,
    Ssid,
    Password,
    Encryption,
    Hidden,
    Sms,
    Event,
    Venue,
    StartTime,
    EndTime,
    Latitude,
    Longitude,
    Address,
    Amount,
    FirstName,
    LastName,
    Nickname,
    Phone1,
    Phone2,
    Phone3,
    PhoneWork,
    Organization,
    Position,
    Website,
    Note,
}

impl Field {
    pub const ALL: [Field; 32] = [
        Field::Text,
        Field::Url,
        Field::Email,
        Field::Subject,
        Field::Body,
        Field::Cc,
        Field::Bcc,
        Field::Phone,
        Field::Ssid,
        Field::Password,
        Field::Encryption,
        Field::Hidden,
        Field::Sms,
        Field::Event,
        Field::Venue,
        Field::StartTime,
        Field::EndTime,
        Field::Latitude,
        Field::Longitude,
        Field::Address,
        Field::Amount,
        Field::FirstName,
        Field::LastName,
        Field::Nickname,
        Field::Phone1,
        Field::Phone2,
        Field::Phone3,
        Field::PhoneWork,
        Field::Organization,
        Field::Position,
        Field::Website,
        Field::Note,
    ];

    /// camelCase name used by the page.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Text => "text",
            Field::Url => "url",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Body => "body",
            Field::Cc => "cc",
            Field::Bcc => "bcc",
            Field::Phone => "phone",
            Field::Ssid => "ssid",
            Field::Password => "password",
            Field::Encryption => "encryption",
            Field::Hidden => "hidden",
            Field::Sms => "sms",
            Field::Event => "event",
            Field::Venue => "venue",
            Field::StartTime => "startTime",
            Field::EndTime => "endTime",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Address => "address",
            Field::Amount => "amount",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Nickname => "nickname",
            Field::Phone1 => "phone1",
            Field::Phone2 => "phone2",
            Field::Phone3 => "phone3",
            Field::PhoneWork => "phoneWork",
            Field::Organization => "organization",
            Field::Position => "position",
            Field::Website => "website",
            Field::Note => "note",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

// =============================================================================
// Field Value
// =============================================================================

/// The value held by a form field: free text or a number.
///
/// ## Wire Format
/// Untagged, so the page sends plain JSON scalars:
/// `"hello"` is `Text`, `48.85` is `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// An empty text value, the initial value of every field.
    pub const fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Whether the value counts as "missing": empty text, zero or NaN.
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
        }
    }

    /// Returns the text, or `None` for numbers.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

// =============================================================================
// QR Code Request
// =============================================================================

/// One queued unit of batch generation.
///
/// Uses the snapshot pattern: the tab's fields are copied out of the form at
/// the moment of queueing, so later edits don't change queued work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeRequest {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Content type to render.
    pub tab: Tab,

    /// Snapshot of the tab's schema fields.
    pub fields: BTreeMap<Field, FieldValue>,

    /// Currency name, only set for [`Tab::Crypto`].
    pub selected_crypto: Option<String>,

    /// When the request joined the batch.
    #[ts(as = "String")]
    pub queued_at: DateTime<Utc>,
}

impl QrCodeRequest {
    /// Captures the fields of `tab` from the current form state.
    pub fn from_form(tab: Tab, form: &FormState, selected_crypto: &str) -> Self {
        let fields = tab
            .schema()
            .fields()
            .map(|field| (field, form.get(field).clone()))
            .collect();

        QrCodeRequest {
            id: uuid::Uuid::new_v4().to_string(),
            tab,
            fields,
            selected_crypto: (tab == Tab::Crypto).then(|| selected_crypto.to_string()),
            queued_at: Utc::now(),
        }
    }

    /// Returns a captured field, if the tab's schema includes it.
    pub fn field(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
