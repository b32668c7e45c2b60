//! # qrforge-state
//!
//! The page-lifetime state holder for the QR generator.
//!
//! ## Module Organization
//! ```text
//! qrforge_state/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── provider.rs     ◄─── Mount / unmount / context lookup
//! ├── context.rs      ◄─── CoreContext data and the CoreStore handle
//! ├── config.rs       ◄─── Startup configuration
//! └── error.rs        ◄─── StateError and the page-facing ApiError
//! ```
//!
//! ## Typical Wiring
//! ```rust
//! use qrforge_core::{Action, Field, Tab};
//! use qrforge_state::{ConfigState, CoreProvider};
//!
//! let mut provider = CoreProvider::new(ConfigState::default());
//! let store = provider.mount().unwrap();
//!
//! store.set_active_tab(Tab::Url);
//! store.dispatch(Action::set_field(Field::Url, "https://example.com"));
//! assert!(store.validate_input());
//!
//! provider.unmount();
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod provider;

use tracing_subscriber::EnvFilter;

pub use config::ConfigState;
pub use context::{CoreContext, CoreStore};
pub use error::{ApiError, ErrorCode, StateError, StateResult};
pub use provider::CoreProvider;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=qrforge_state=trace` - Trace this crate only
/// - Default: INFO, DEBUG for qrforge crates
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,qrforge_core=debug,qrforge_state=debug"));

    // Err only means a global subscriber already exists.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
