use crate::ui::mvi::Reducer;

use super::intent::{ProfileBinding, ProfileIntent};
use super::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Binding(ProfileBinding::Nickname(nickname)) => ProfileState { nickname },
        }
    }
}
