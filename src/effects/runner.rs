//! Effect runner: one tokio task per effect, one dispatch per task.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Notify;

use crate::facts::FactClient;
use crate::ui::mvi::{Dispatch, Effect, Intent};

use super::clock::Clock;

/// Executes effects off the dispatch path.
///
/// The runner owns the collaborators effects need (clock, fact client).
/// A running effect never sees state; its result goes back through the
/// [`Dispatch`] it was handed.
#[derive(Clone)]
pub struct EffectRunner {
    handle: Handle,
    clock: Arc<dyn Clock>,
    facts: Arc<dyn FactClient>,
    in_flight: Arc<InFlight>,
}

impl EffectRunner {
    pub fn new(handle: Handle, clock: Arc<dyn Clock>, facts: Arc<dyn FactClient>) -> Self {
        Self {
            handle,
            clock,
            facts,
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// Schedule `effect`. Returns immediately.
    ///
    /// Exactly one intent is dispatched once the effect completes.
    pub fn run<I, D>(&self, effect: Effect<I>, dispatcher: D)
    where
        I: Intent,
        D: Dispatch<I>,
    {
        tracing::debug!(effect = ?effect, "Scheduling effect");
        let guard = InFlightGuard::enter(Arc::clone(&self.in_flight));
        let clock = Arc::clone(&self.clock);
        let facts = Arc::clone(&self.facts);

        self.handle.spawn(async move {
            let intent = match effect {
                Effect::Timer { delay, intent } => {
                    clock.sleep(delay).await;
                    intent
                }
                Effect::Lookup { number, respond } => {
                    let outcome = facts.fetch(number).await;
                    if let Err(err) = &outcome {
                        tracing::warn!(
                            client = facts.name(),
                            number,
                            error = %err,
                            "Fact lookup failed"
                        );
                    }
                    respond(outcome)
                }
            };
            dispatcher.dispatch(intent);
            drop(guard);
        });
    }

    /// Number of effects scheduled but not yet dispatched back.
    pub fn in_flight(&self) -> usize {
        self.in_flight.count.load(Ordering::SeqCst)
    }

    /// Wait until no effect is in flight.
    ///
    /// Effects scheduled by the follow-up dispatches are counted before the
    /// originating effect is released, so a chain settles only at its end.
    pub async fn settled(&self) {
        loop {
            // Subscribe before checking the counter so a release between the
            // check and the await is not lost.
            let notified = self.in_flight.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.in_flight() == 0 {
                return;
            }
            notified.await;
        }
    }
}

#[derive(Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

/// Counts one effect as in flight for as long as it lives.
struct InFlightGuard(Arc<InFlight>);

impl InFlightGuard {
    fn enter(in_flight: Arc<InFlight>) -> Self {
        in_flight.count.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}
