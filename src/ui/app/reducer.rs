//! Root reducer.

use crate::ui::counter::{CounterIntent, CounterReducer};
use crate::ui::mvi::{Effect, EffectReducer, Reducer};
use crate::ui::profile::{ProfileReducer, GUEST_NICKNAME};

use super::intent::AppIntent;
use super::state::AppState;

/// Count at which an increment earns the expert nickname.
pub const EXPERT_THRESHOLD: i64 = 10;

pub const EXPERT_NICKNAME: &str = "Counting Expert 🏅";

/// Routes each intent to the tab that owns it, then lets the parent react.
///
/// Child reducers never see each other. The only cross-tab rule lives here:
/// every `Counter(Increment)` rewrites the profile nickname from the new
/// count, overriding whatever the profile tab held.
pub struct AppReducer;

impl EffectReducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Option<Effect<Self::Intent>>) {
        let ranks_nickname = matches!(intent, AppIntent::Counter(CounterIntent::Increment));

        let effect = match intent {
            AppIntent::Counter(intent) => {
                let (counter, effect) =
                    CounterReducer::reduce(std::mem::take(&mut state.counter), intent);
                state.counter = counter;
                effect.map(|effect| effect.map(AppIntent::Counter))
            }
            AppIntent::Profile(intent) => {
                state.profile = ProfileReducer::reduce(std::mem::take(&mut state.profile), intent);
                None
            }
        };

        if ranks_nickname {
            state.profile.nickname = rank_nickname(state.counter.count).to_string();
        }

        (state, effect)
    }
}

fn rank_nickname(count: i64) -> &'static str {
    if count >= EXPERT_THRESHOLD {
        EXPERT_NICKNAME
    } else {
        GUEST_NICKNAME
    }
}
