//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, field edits)
/// - System events (timer fired, lookup finished)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: std::fmt::Debug + Send + 'static {}
