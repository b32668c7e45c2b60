//! # Form State
//!
//! The values behind every input on the QR generator page.
//!
//! ## Shape
//! ```text
//! FormState
//! ├── fields      { text: "", url: "", email: "", cc: "", ... }  one per Field
//! ├── isLoading   false
//! └── qrCodeURL   ""   (last generated result)
//! ```
//!
//! The key set of `fields` is fixed at construction. Writes replace values,
//! they never add or remove keys, so every [`Field`] can always be read.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::types::{Field, FieldValue};

/// Current values of the QR generator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default = "initial_fields", deserialize_with = "complete_fields")]
    fields: BTreeMap<Field, FieldValue>,

    #[serde(default)]
    is_loading: bool,

    #[serde(default, rename = "qrCodeURL")]
    qr_code_url: String,
}

impl FormState {
    /// The state the page starts with and returns to on reset:
    /// every field empty, not loading, no generated code.
    pub fn initial() -> Self {
        FormState {
            fields: initial_fields(),
            is_loading: false,
            qr_code_url: String::new(),
        }
    }

    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &FieldValue {
        // Every field is inserted at construction and never removed.
        &self.fields[&field]
    }

    /// Returns the value of a field as text, if it holds text.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).as_text()
    }

    /// Whether a QR code is currently being generated.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last generated QR code URL (empty when none).
    #[inline]
    pub fn qr_code_url(&self) -> &str {
        &self.qr_code_url
    }

    /// Iterates over all fields in `Field` order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    pub(crate) fn set(&mut self, field: Field, value: FieldValue) {
        if let Some(slot) = self.fields.get_mut(&field) {
            *slot = value;
        }
    }

    pub(crate) fn set_loading(&mut self, value: bool) {
        self.is_loading = value;
    }

    pub(crate) fn set_qr_code_url(&mut self, value: String) {
        self.qr_code_url = value;
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::initial()
    }
}

fn initial_fields() -> BTreeMap<Field, FieldValue> {
    Field::ALL
        .into_iter()
        .map(|field| (field, FieldValue::empty()))
        .collect()
}

/// Deserializes a partial snapshot, filling absent fields with their
/// initial value so the key set stays complete.
fn complete_fields<'de, D>(deserializer: D) -> Result<BTreeMap<Field, FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let given = BTreeMap::<Field, FieldValue>::deserialize(deserializer)?;
    let mut fields = initial_fields();
    fields.extend(given);
    Ok(fields)
}
