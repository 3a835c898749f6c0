//! Effects: asynchronous work described as data.

use std::fmt;
use std::time::Duration;

use crate::facts::LookupError;

/// Maps the outcome of a fact lookup to the intent that reports it.
///
/// Must be a pure conversion. It runs inside the effect task, after the
/// lookup resolved, and must not touch any state.
pub type Respond<I> = Box<dyn FnOnce(Result<String, LookupError>) -> I + Send>;

/// Side effect returned by a reducer.
///
/// Every effect resolves to exactly one intent, which the runner dispatches
/// back into the store that scheduled it.
pub enum Effect<I> {
    /// Wait for `delay`, then dispatch `intent`.
    Timer { delay: Duration, intent: I },

    /// Ask the fact client about `number`, then dispatch `respond(outcome)`.
    Lookup { number: i64, respond: Respond<I> },
}

impl<I: Send + 'static> Effect<I> {
    /// Lift an effect into a parent intent type.
    pub fn map<J, F>(self, lift: F) -> Effect<J>
    where
        J: 'static,
        F: FnOnce(I) -> J + Send + 'static,
    {
        match self {
            Effect::Timer { delay, intent } => Effect::Timer {
                delay,
                intent: lift(intent),
            },
            Effect::Lookup { number, respond } => Effect::Lookup {
                number,
                respond: Box::new(move |outcome| lift(respond(outcome))),
            },
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Effect<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Timer { delay, intent } => f
                .debug_struct("Timer")
                .field("delay", delay)
                .field("intent", intent)
                .finish(),
            Effect::Lookup { number, .. } => f
                .debug_struct("Lookup")
                .field("number", number)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Child {
        Done(String),
    }

    #[derive(Debug, PartialEq)]
    enum Parent {
        Child(Child),
    }

    #[test]
    fn map_lifts_timer_intent() {
        let effect = Effect::Timer {
            delay: Duration::from_millis(5),
            intent: Child::Done("tick".into()),
        };
        match effect.map(Parent::Child) {
            Effect::Timer { delay, intent } => {
                assert_eq!(delay, Duration::from_millis(5));
                assert_eq!(intent, Parent::Child(Child::Done("tick".into())));
            }
            other => panic!("Expected Timer, got {:?}", other),
        }
    }

    #[test]
    fn map_composes_lookup_response() {
        let effect: Effect<Child> = Effect::Lookup {
            number: 3,
            respond: Box::new(|outcome| match outcome {
                Ok(text) => Child::Done(text),
                Err(err) => Child::Done(err.to_string()),
            }),
        };
        match effect.map(Parent::Child) {
            Effect::Lookup { number, respond } => {
                assert_eq!(number, 3);
                assert_eq!(
                    respond(Ok("three".into())),
                    Parent::Child(Child::Done("three".into()))
                );
            }
            other => panic!("Expected Lookup, got {:?}", other),
        }
    }
}
