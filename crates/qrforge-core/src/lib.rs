//! # qrforge-core: Pure Form Logic for the QR Generator
//!
//! This crate holds everything the QR generator page decides without touching
//! the outside world: the form model, its reducer, and submit-time validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        qrforge Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Page (inputs, tabs, preview)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch / setters                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    qrforge-state (CoreStore)                    │   │
//! │  │    activeTab, selectedCrypto, error, qrBatchCount, batchData    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ qrforge-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   form    │  │  reducer  │  │ validation│  │   │
//! │  │   │ Tab/Field │  │ FormState │  │  Action   │  │  required │  │   │
//! │  │   │ QrRequest │  │           │  │  reduce   │  │  cc / bcc │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Tabs, fields, field values, batch requests
//! - [`form`] - The form state and its initial value
//! - [`reducer`] - Actions and the pure `reduce` function
//! - [`validation`] - Required-field and email checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use qrforge_core::reducer::{reduce, Action};
//! use qrforge_core::validation::validate_input;
//! use qrforge_core::{Field, FormState, Tab};
//!
//! let mut state = FormState::initial();
//! state = reduce(&state, &Action::set_field(Field::Email, "to@example.com"));
//! state = reduce(&state, &Action::set_field(Field::Cc, "a@b.com, bad-email"));
//!
//! let err = validate_input(Tab::Email, &state).unwrap_err();
//! assert_eq!(err.to_string(), "One or more CC emails are invalid");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod form;
pub mod reducer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use form::FormState;
pub use reducer::{reduce, Action};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency selected on the Crypto tab when the page loads.
pub const DEFAULT_CRYPTO: &str = "Bitcoin";

/// Maximum number of requests a batch may hold.
///
/// Keeps a bulk generation run to a size the page can render at once.
pub const MAX_BATCH_SIZE: usize = 100;
