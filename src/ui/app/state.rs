use crate::ui::counter::CounterState;
use crate::ui::mvi::UiState;
use crate::ui::profile::ProfileState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub counter: CounterState,
    pub profile: ProfileState,
}

impl UiState for AppState {}
