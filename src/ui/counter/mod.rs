//! Counter tab.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Count, loading flag, timer toggle, memo and last fact
//! - `intent.rs` - Button presses, field bindings and effect responses
//! - `reducer.rs` - State transitions plus the delayed-increment and
//!   fact-lookup effects

mod intent;
mod reducer;
mod state;

pub use intent::{CounterBinding, CounterIntent};
pub use reducer::{CounterReducer, DELAYED_INCREMENT_DELAY};
pub use state::CounterState;
