//! Root feature: both tabs plus the rule that links them.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Composed state of both tabs
//! - `intent.rs` - Intents namespaced by owning tab
//! - `reducer.rs` - Routing to child reducers, then the rank rule

mod intent;
mod reducer;
mod state;

pub use intent::AppIntent;
pub use reducer::{AppReducer, EXPERT_NICKNAME, EXPERT_THRESHOLD};
pub use state::AppState;
