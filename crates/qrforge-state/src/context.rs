//! # Core Context
//!
//! The page-lifetime state shared by every part of the QR generator UI.
//!
//! ## Thread Safety
//! The context is wrapped in `Arc<Mutex<T>>` so a [`CoreStore`] handle can be
//! cloned into every consumer and each setter replaces one whole value under
//! the lock. Nothing ever observes a half-applied update.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CoreStore Operations                                 │
//! │                                                                         │
//! │  Page Event               Store Call              Context Change        │
//! │  ──────────               ──────────              ──────────────        │
//! │                                                                         │
//! │  Edit input ─────────────► dispatch(SET_FIELD) ──► state = reduce(..)   │
//! │                                                                         │
//! │  Switch tab ─────────────► set_active_tab() ─────► active_tab = t       │
//! │                                                                         │
//! │  Add to batch ───────────► enqueue_current() ────► batch_data.push(..)  │
//! │                                                   qr_batch_count = len  │
//! │                                                                         │
//! │  Click Generate ─────────► validate_input() ─────► ok: nothing          │
//! │                                                   fail: error = msg,    │
//! │                                                         batch cleared,  │
//! │                                                         RESET_STATE     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use qrforge_core::validation;
use qrforge_core::{reduce, Action, CoreError, FormState, QrCodeRequest, Tab};

use crate::config::ConfigState;
use crate::error::StateResult;

/// Everything the provider holds: the reducer-managed form state plus the
/// five independent pieces of page state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreContext {
    /// Reducer-managed form values.
    pub state: FormState,

    /// Tab currently being edited.
    pub active_tab: Tab,

    /// Currency chosen on the Crypto tab.
    pub selected_crypto: String,

    /// Message for the error banner; empty means no error.
    pub error: String,

    /// Number of codes in the pending batch.
    pub qr_batch_count: usize,

    /// Pending batch requests, in queue order.
    pub batch_data: Vec<QrCodeRequest>,
}

impl CoreContext {
    /// Creates the context a freshly mounted provider starts with.
    pub fn new(config: &ConfigState) -> Self {
        CoreContext {
            state: FormState::initial(),
            active_tab: config.default_tab,
            selected_crypto: config.default_crypto.clone(),
            error: String::new(),
            qr_batch_count: 0,
            batch_data: Vec::new(),
        }
    }

    /// Whether the error banner has something to show.
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    fn reset_batch_and_loading(&mut self) {
        self.batch_data.clear();
        self.qr_batch_count = 0;
        self.state = reduce(&self.state, &Action::ResetState);
    }
}

impl Default for CoreContext {
    fn default() -> Self {
        CoreContext::new(&ConfigState::default())
    }
}

/// Shared handle to the page state.
///
/// Cloning is cheap and every clone sees the same context. Consumers get
/// their handle from [`crate::CoreProvider::context`] and keep it for as long
/// as they are mounted.
#[derive(Debug, Clone)]
pub struct CoreStore {
    context: Arc<Mutex<CoreContext>>,
    max_batch_size: usize,
}

impl CoreStore {
    /// Creates a store seeded from `config`.
    pub fn new(config: &ConfigState) -> Self {
        CoreStore {
            context: Arc::new(Mutex::new(CoreContext::new(config))),
            max_batch_size: config.max_batch_size,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CoreContext> {
        // Every update is a whole-value replace, so a panic elsewhere can't
        // leave the context half-written.
        self.context.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the context.
    ///
    /// ## Usage
    /// ```rust
    /// # use qrforge_state::{ConfigState, CoreStore};
    /// let store = CoreStore::new(&ConfigState::default());
    /// let pending = store.with_context(|ctx| ctx.batch_data.len());
    /// assert_eq!(pending, 0);
    /// ```
    pub fn with_context<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CoreContext) -> R,
    {
        let context = self.lock();
        f(&context)
    }

    /// Executes a function with write access to the context.
    pub fn with_context_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CoreContext) -> R,
    {
        let mut context = self.lock();
        f(&mut context)
    }

    /// Returns a copy of the whole context.
    pub fn snapshot(&self) -> CoreContext {
        self.with_context(CoreContext::clone)
    }

    // =========================================================================
    // Form state
    // =========================================================================

    /// Returns a copy of the current form state.
    pub fn state(&self) -> FormState {
        self.with_context(|ctx| ctx.state.clone())
    }

    /// Runs `action` through the reducer and stores the result.
    pub fn dispatch(&self, action: Action) {
        debug!(?action, "dispatch");
        self.with_context_mut(|ctx| ctx.state = reduce(&ctx.state, &action));
    }

    // =========================================================================
    // Auxiliary state
    // =========================================================================

    pub fn active_tab(&self) -> Tab {
        self.with_context(|ctx| ctx.active_tab)
    }

    pub fn set_active_tab(&self, tab: Tab) {
        debug!(%tab, "set_active_tab");
        self.with_context_mut(|ctx| ctx.active_tab = tab);
    }

    pub fn selected_crypto(&self) -> String {
        self.with_context(|ctx| ctx.selected_crypto.clone())
    }

    pub fn set_selected_crypto(&self, crypto: impl Into<String>) {
        let crypto = crypto.into();
        self.with_context_mut(|ctx| ctx.selected_crypto = crypto);
    }

    /// Current error message; empty when there is none.
    pub fn error(&self) -> String {
        self.with_context(|ctx| ctx.error.clone())
    }

    pub fn set_error(&self, error: impl Into<String>) {
        let error = error.into();
        self.with_context_mut(|ctx| ctx.error = error);
    }

    pub fn qr_batch_count(&self) -> usize {
        self.with_context(|ctx| ctx.qr_batch_count)
    }

    pub fn set_qr_batch_count(&self, count: usize) {
        self.with_context_mut(|ctx| ctx.qr_batch_count = count);
    }

    pub fn batch_data(&self) -> Vec<QrCodeRequest> {
        self.with_context(|ctx| ctx.batch_data.clone())
    }

    pub fn set_batch_data(&self, batch: Vec<QrCodeRequest>) {
        self.with_context_mut(|ctx| ctx.batch_data = batch);
    }

    // =========================================================================
    // Batch queue
    // =========================================================================

    /// Queues the active tab's current fields as one batch request.
    ///
    /// ## Returns
    /// - `Ok(len)` with the new queue length (also stored as the batch count)
    /// - `Err(BatchFull)` when the queue is at the configured maximum
    pub fn enqueue_current(&self) -> StateResult<usize> {
        let max = self.max_batch_size;
        self.with_context_mut(|ctx| -> StateResult<usize> {
            if ctx.batch_data.len() >= max {
                return Err(CoreError::BatchFull { max }.into());
            }

            let request =
                QrCodeRequest::from_form(ctx.active_tab, &ctx.state, &ctx.selected_crypto);
            debug!(id = %request.id, tab = %request.tab, "Queued batch request");
            ctx.batch_data.push(request);
            ctx.qr_batch_count = ctx.batch_data.len();
            Ok(ctx.qr_batch_count)
        })
    }

    /// Hands the pending batch to the generator and empties the queue.
    pub fn drain_batch(&self) -> Vec<QrCodeRequest> {
        self.with_context_mut(|ctx| {
            ctx.qr_batch_count = 0;
            std::mem::take(&mut ctx.batch_data)
        })
    }

    /// Clears the batch queue, zeroes the batch count and resets the form
    /// (which also clears the loading flag).
    pub fn reset_batch_and_loading(&self) {
        self.with_context_mut(CoreContext::reset_batch_and_loading);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validates the current form against the active tab.
    ///
    /// Reads the state at call time, so it can never check stale values.
    ///
    /// ## Outcome
    /// - Pass: returns `true`; nothing is changed.
    /// - Fail: sets `error` to the tab's message, clears the batch, resets
    ///   the form, and returns `false`.
    ///
    /// ## Example
    /// ```rust
    /// # use qrforge_state::{ConfigState, CoreStore};
    /// let store = CoreStore::new(&ConfigState::default());
    /// assert!(!store.validate_input());
    /// assert_eq!(store.error(), "Text is required");
    /// ```
    pub fn validate_input(&self) -> bool {
        self.with_context_mut(|ctx| {
            let tab = ctx.active_tab;
            match validation::validate_input(tab, &ctx.state) {
                Ok(()) => true,
                Err(e) => {
                    warn!(%tab, field = ?e.field(), "Validation failed: {}", e);
                    ctx.error = e.to_string();
                    ctx.reset_batch_and_loading();
                    false
                }
            }
        })
    }
}
