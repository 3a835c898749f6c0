//! The store: single owner of [`AppState`].
//!
//! Every transition goes through [`Store::dispatch`], which holds the state
//! lock for the whole reduce-commit-publish step. Effects are scheduled only
//! after that lock is released, so by the time an effect starts, the state
//! that requested it (e.g. `is_loading = true`) is already visible.
//!
//! The reducer works on a copy. The stored state is replaced only once the
//! reducer has returned, so a panicking transition leaves it untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::effects::EffectRunner;
use crate::ui::app::{AppIntent, AppReducer, AppState};
use crate::ui::mvi::{Dispatch, EffectReducer};

/// Cheap-to-clone handle to the shared store.
#[derive(Clone)]
pub struct Store {
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<AppState>,
    updates: watch::Sender<AppState>,
    runner: EffectRunner,
    print_changes: AtomicBool,
}

impl Store {
    pub fn new(initial: AppState, runner: EffectRunner) -> Self {
        let (updates, _) = watch::channel(initial.clone());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(initial),
                updates,
                runner,
                print_changes: AtomicBool::new(false),
            }),
        }
    }

    /// Log each intent and the resulting state change at debug level.
    ///
    /// Applies to every clone of this store.
    pub fn with_change_logging(self, enabled: bool) -> Self {
        self.set_change_logging(enabled);
        self
    }

    pub fn set_change_logging(&self, enabled: bool) {
        self.shared.print_changes.store(enabled, Ordering::Relaxed);
    }

    pub fn change_logging(&self) -> bool {
        self.shared.print_changes.load(Ordering::Relaxed)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.shared.state.lock().clone()
    }

    /// Receiver that always holds the latest committed state.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.shared.updates.subscribe()
    }

    /// Run one intent through the root reducer.
    ///
    /// Dispatches are serialized: a dispatch issued by a finishing effect
    /// waits until the current one has committed.
    pub fn dispatch(&self, intent: AppIntent) {
        let effect = {
            let mut state = self.shared.state.lock();
            let print_changes = self.change_logging();
            if print_changes {
                tracing::debug!(intent = ?intent, "Received intent");
            }

            let (next, effect) = AppReducer::reduce(state.clone(), intent);

            if print_changes {
                let before: &AppState = &state;
                if next == *before {
                    tracing::debug!("State unchanged");
                } else {
                    tracing::debug!(before = ?before, after = ?next, "State changed");
                }
            }

            *state = next;

            self.shared.updates.send_replace(state.clone());
            effect
        };

        if let Some(effect) = effect {
            self.shared.runner.run(effect, self.clone());
        }
    }

    /// Wait until every scheduled effect has reported back.
    pub async fn settled(&self) {
        self.shared.runner.settled().await;
    }
}

impl Dispatch<AppIntent> for Store {
    fn dispatch(&self, intent: AppIntent) {
        Store::dispatch(self, intent);
    }
}
