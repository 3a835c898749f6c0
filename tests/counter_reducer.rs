use tabstore::ui::counter::{
    CounterBinding, CounterIntent, CounterReducer, CounterState, DELAYED_INCREMENT_DELAY,
};
use tabstore::ui::mvi::{Effect, EffectReducer};

fn run(intents: &[CounterIntent]) -> CounterState {
    intents.iter().cloned().fold(CounterState::default(), |state, intent| {
        CounterReducer::reduce(state, intent).0
    })
}

#[test]
fn count_is_net_sum_of_steps() {
    use CounterIntent::{Decrement, Increment};
    let steps = [Increment, Decrement, Decrement, Decrement, Increment, Decrement];
    assert_eq!(run(&steps).count, -2);

    let many: Vec<_> = std::iter::repeat(Increment).take(25).collect();
    assert_eq!(run(&many).count, 25);
}

#[test]
fn plain_steps_have_no_effect() {
    for intent in [
        CounterIntent::Increment,
        CounterIntent::Decrement,
        CounterIntent::DelayedIncrementResolved,
        CounterIntent::FactResolved("x".into()),
        CounterIntent::Binding(CounterBinding::TimerEnabled(true)),
    ] {
        let (_, effect) = CounterReducer::reduce(CounterState::default(), intent.clone());
        assert!(effect.is_none(), "{:?} should not produce an effect", intent);
    }
}

#[test]
fn delayed_request_waits_one_second() {
    let (_, effect) =
        CounterReducer::reduce(CounterState::default(), CounterIntent::DelayedIncrementRequested);
    assert!(matches!(
        effect,
        Some(Effect::Timer { delay, intent: CounterIntent::DelayedIncrementResolved })
            if delay == DELAYED_INCREMENT_DELAY
    ));
}

#[test]
fn fact_lookup_uses_count_at_request_time() {
    let state = run(&[CounterIntent::Increment, CounterIntent::Increment]);
    let (state, effect) = CounterReducer::reduce(state, CounterIntent::FactRequested);

    // Changing the count afterwards does not alter the pending question.
    let (state, _) = CounterReducer::reduce(state, CounterIntent::Increment);
    assert_eq!(state.count, 3);
    assert!(matches!(effect, Some(Effect::Lookup { number: 2, .. })));
}

#[test]
fn timer_toggle_only_assigns_field() {
    let before = run(&[CounterIntent::Increment]);
    let (after, effect) = CounterReducer::reduce(
        before.clone(),
        CounterIntent::Binding(CounterBinding::TimerEnabled(true)),
    );
    assert!(effect.is_none());
    assert!(after.is_timer_enabled);
    assert_eq!(
        CounterState {
            is_timer_enabled: false,
            ..after
        },
        before
    );
}
