use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
    /// True while a delayed increment or fact lookup is outstanding.
    pub is_loading: bool,
    pub is_timer_enabled: bool,
    pub memo: String,
    /// Last fact received. `None` until the first lookup finishes, and
    /// cleared again whenever a new lookup starts.
    pub fact: Option<String>,
}

impl UiState for CounterState {}
