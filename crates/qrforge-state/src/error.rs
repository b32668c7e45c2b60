//! # Error Types
//!
//! Errors raised by the state layer, and the serialized form the page sees.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in qrforge                                │
//! │                                                                         │
//! │  Consumer call (e.g. store.enqueue_current())                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Provider not mounted? ─── StateError::ProviderMissing ──┐              │
//! │         │                                                │              │
//! │         ▼                                                ▼              │
//! │  Core rule broken? ─────── StateError::Core(..) ────── ApiError ──► Page│
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Submit-time validation is NOT reported through these types: a failed
//! `CoreStore::validate_input` returns `false` and puts the message in the
//! store's `error` value, where the page's error banner reads it.

use serde::Serialize;
use thiserror::Error;

use qrforge_core::{CoreError, ValidationError};

// =============================================================================
// State Error
// =============================================================================

/// Errors from the state layer.
#[derive(Debug, Error)]
pub enum StateError {
    /// The context was requested outside a mounted provider.
    ///
    /// This is a programming error in the consumer; it must not be papered
    /// over with a default store.
    #[error("CoreContext requested outside of a mounted CoreProvider")]
    ProviderMissing,

    /// The provider is already mounted.
    #[error("CoreProvider is already mounted")]
    AlreadyMounted,

    /// A domain rule failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ValidationError> for StateError {
    fn from(err: ValidationError) -> Self {
        StateError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with StateError.
pub type StateResult<T> = Result<T, StateError>;

// =============================================================================
// API Error
// =============================================================================

/// Error handed to the page.
///
/// ## Serialization
/// ```json
/// {
///   "code": "BATCH_FULL",
///   "message": "Batch cannot have more than 100 QR codes"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// The batch queue is full
    BatchFull,

    /// Consumer used the store outside a provider
    NoProvider,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BatchFull { .. } => ApiError::new(ErrorCode::BatchFull, err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts state errors to API errors.
impl From<StateError> for ApiError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::ProviderMissing => {
                tracing::error!("{}", err);
                ApiError::new(ErrorCode::NoProvider, err.to_string())
            }
            StateError::AlreadyMounted => ApiError::new(ErrorCode::Internal, err.to_string()),
            StateError::Core(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
