//! Channel through which finished effects feed intents back.

use super::intent::Intent;

/// Anything that accepts intents for processing.
///
/// Implemented by the store. Effect tasks hold a clone and use it as their
/// only way to report results.
pub trait Dispatch<I: Intent>: Clone + Send + Sync + 'static {
    fn dispatch(&self, intent: I);
}
