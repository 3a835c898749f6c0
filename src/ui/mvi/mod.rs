//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effect ──→ EffectRunner
//!    └─────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of feature state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Description of async work whose only output is a new intent

mod binding;
mod dispatch;
mod effect;
mod intent;
mod reducer;
mod state;

pub use binding::BindingError;
pub use dispatch::Dispatch;
pub use effect::{Effect, Respond};
pub use intent::Intent;
pub use reducer::{EffectReducer, Reducer};
pub use state::UiState;
