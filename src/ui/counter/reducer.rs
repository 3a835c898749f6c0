//! Reducer for the counter tab.

use std::time::Duration;

use crate::facts::LookupError;
use crate::ui::mvi::{Effect, EffectReducer};

use super::intent::{CounterBinding, CounterIntent};
use super::state::CounterState;

/// Pause before a delayed increment lands.
pub const DELAYED_INCREMENT_DELAY: Duration = Duration::from_secs(1);

/// Reducer for counter state transitions.
///
/// Pure apart from log lines. The timer and the fact lookup are returned as
/// [`Effect`] values and run by the caller.
pub struct CounterReducer;

impl EffectReducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Option<Effect<Self::Intent>>) {
        match intent {
            // Unbounded count: past i64::MAX it wraps rather than panicking.
            CounterIntent::Increment => {
                state.count = state.count.wrapping_add(1);
                (state, None)
            }

            CounterIntent::Decrement => {
                state.count = state.count.wrapping_sub(1);
                (state, None)
            }

            CounterIntent::DelayedIncrementRequested => {
                state.is_loading = true;
                let effect = Effect::Timer {
                    delay: DELAYED_INCREMENT_DELAY,
                    intent: CounterIntent::DelayedIncrementResolved,
                };
                (state, Some(effect))
            }

            CounterIntent::DelayedIncrementResolved => {
                state.is_loading = false;
                state.count = state.count.wrapping_add(1);
                (state, None)
            }

            CounterIntent::Binding(binding) => {
                match binding {
                    CounterBinding::TimerEnabled(enabled) => {
                        state.is_timer_enabled = enabled;
                        tracing::info!(enabled, "Timer toggle changed");
                    }
                    CounterBinding::Memo(memo) => state.memo = memo,
                }
                (state, None)
            }

            CounterIntent::FactRequested => {
                tracing::debug!(count = state.count, "Fact requested");
                state.fact = None;
                state.is_loading = true;
                // Count is captured now; later increments don't change the question.
                let effect = Effect::Lookup {
                    number: state.count,
                    respond: Box::new(fact_response),
                };
                (state, Some(effect))
            }

            CounterIntent::FactResolved(fact) => {
                tracing::debug!(fact = %fact, "Fact received");
                state.is_loading = false;
                state.fact = Some(fact);
                (state, None)
            }
        }
    }
}

/// Fold a lookup outcome into the response intent. Errors become text.
fn fact_response(outcome: Result<String, LookupError>) -> CounterIntent {
    match outcome {
        Ok(fact) => CounterIntent::FactResolved(fact),
        Err(err) => CounterIntent::FactResolved(format!("Error: {}", err)),
    }
}
