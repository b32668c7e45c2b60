//! # Error Types
//!
//! Domain-specific error types for qrforge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  qrforge-core errors (this file)                                       │
//! │  ├── CoreError        - Batch and general domain errors                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  qrforge-state errors (separate crate)                                 │
//! │  ├── StateError       - Store / provider failures                      │
//! │  └── ApiError         - What the page sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StateError → ApiError → Page      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` of a validation error IS the message shown on the page
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::{Field, Tab};

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The batch queue already holds the maximum number of requests.
    #[error("Batch cannot have more than {max} QR codes")]
    BatchFull { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The message of each variant is the exact text the page displays in its
/// error banner, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field of the active tab is empty.
    ///
    /// ## User Workflow
    /// ```text
    /// Tab: SMS, phone = "+15550100", sms = ""
    ///      │
    ///      ▼
    /// first missing field: sms
    ///      │
    ///      ▼
    /// MissingRequired { tab: SMS, field: sms, .. }
    ///      │
    ///      ▼
    /// Page shows: "Phone and SMS message are required"
    /// ```
    #[error("{message}")]
    MissingRequired {
        tab: Tab,
        field: Field,
        message: &'static str,
    },

    /// An entry of the CC list is not an email address.
    #[error("One or more CC emails are invalid")]
    InvalidCc { entry: String },

    /// An entry of the BCC list is not an email address.
    #[error("One or more BCC emails are invalid")]
    InvalidBcc { entry: String },

    /// A field name that the form does not have.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A tab name that does not exist.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

impl ValidationError {
    /// The field that failed, when the error is tied to one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::MissingRequired { field, .. } => Some(*field),
            ValidationError::InvalidCc { .. } => Some(Field::Cc),
            ValidationError::InvalidBcc { .. } => Some(Field::Bcc),
            ValidationError::UnknownField(_) | ValidationError::UnknownTab(_) => None,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
