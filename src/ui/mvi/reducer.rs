//! Reducer traits for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reducer that may also request asynchronous work.
///
/// Same contract as [`Reducer`], except the transition can return at most one
/// [`Effect`]. The effect is a value; running it is the caller's job.
pub trait EffectReducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state plus an optional effect.
    fn reduce(
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Option<Effect<Self::Intent>>);
}
