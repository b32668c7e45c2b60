//! # Core Provider
//!
//! Owns the [`CoreStore`] for the lifetime of the page.
//!
//! ## Lifecycle
//! ```text
//!   CoreProvider::new(config)
//!          │
//!          ▼
//!   mount() ──────────► store created from config
//!          │               │
//!          │               ├── context() ──► Ok(CoreStore) (handed to consumers)
//!          │               │
//!          ▼               │
//!   unmount() ────────► store dropped
//!          │
//!          ▼
//!   context() ────────► Err(ProviderMissing)
//! ```
//!
//! There is no global instance: whoever builds the page creates one provider
//! and passes the handles from [`CoreProvider::context`] to its components.

use tracing::info;

use crate::config::ConfigState;
use crate::context::CoreStore;
use crate::error::{StateError, StateResult};

/// Holder of the page state between mount and unmount.
#[derive(Debug, Default)]
pub struct CoreProvider {
    config: ConfigState,
    store: Option<CoreStore>,
}

impl CoreProvider {
    /// Creates an unmounted provider.
    pub fn new(config: ConfigState) -> Self {
        CoreProvider {
            config,
            store: None,
        }
    }

    /// The configuration new stores are seeded from.
    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Creates the store and returns a handle to it.
    ///
    /// Fails with [`StateError::AlreadyMounted`] if called twice without an
    /// `unmount` in between; the existing state is left untouched.
    pub fn mount(&mut self) -> StateResult<CoreStore> {
        if self.store.is_some() {
            return Err(StateError::AlreadyMounted);
        }

        let store = CoreStore::new(&self.config);
        info!(
            default_tab = %self.config.default_tab,
            default_crypto = %self.config.default_crypto,
            "CoreProvider mounted"
        );
        self.store = Some(store.clone());
        Ok(store)
    }

    /// Drops the provider's store. Returns `false` if it was not mounted.
    ///
    /// Handles already given out keep their (now detached) state alive until
    /// they are dropped; [`CoreProvider::context`] stops handing out new ones.
    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.store.take().is_some();
        if was_mounted {
            info!("CoreProvider unmounted");
        }
        was_mounted
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    /// Looks up the store for a consumer.
    ///
    /// ## Errors
    /// [`StateError::ProviderMissing`] when the provider is not mounted. The
    /// consumer must treat this as a bug and bail out, not fall back to a
    /// fresh store.
    ///
    /// ## Example
    /// ```rust
    /// use qrforge_state::{ConfigState, CoreProvider, StateError};
    ///
    /// let mut provider = CoreProvider::new(ConfigState::default());
    /// assert!(matches!(provider.context(), Err(StateError::ProviderMissing)));
    ///
    /// provider.mount().unwrap();
    /// let store = provider.context().unwrap();
    /// assert_eq!(store.selected_crypto(), "Bitcoin");
    /// ```
    pub fn context(&self) -> StateResult<CoreStore> {
        self.store.clone().ok_or(StateError::ProviderMissing)
    }
}
