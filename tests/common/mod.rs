//! Shared test utilities and fake collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tabstore::effects::{Clock, EffectRunner, ImmediateClock};
use tabstore::facts::{FactClient, LookupError, StaticFactClient};
use tabstore::store::Store;
use tabstore::ui::app::AppState;
use tokio::runtime::Handle;

/// Fact client that always fails.
pub struct FailingFactClient;

#[async_trait]
impl FactClient for FailingFactClient {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch(&self, _number: i64) -> Result<String, LookupError> {
        Err(LookupError::Unavailable {
            reason: "service is down".to_string(),
        })
    }
}

/// Fact client that answers with the call index, to tell responses apart.
#[derive(Default)]
pub struct CountingFactClient {
    calls: AtomicUsize,
}

impl CountingFactClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactClient for CountingFactClient {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn fetch(&self, number: i64) -> Result<String, LookupError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("call {} for {}", call, number))
    }
}

pub fn store_with(clock: Arc<dyn Clock>, facts: Arc<dyn FactClient>, initial: AppState) -> Store {
    let runner = EffectRunner::new(Handle::current(), clock, facts);
    Store::new(initial, runner)
}

/// Store with instant timers and the deterministic fact client.
pub fn test_store() -> Store {
    store_with(
        Arc::new(ImmediateClock),
        Arc::new(StaticFactClient),
        AppState::default(),
    )
}
