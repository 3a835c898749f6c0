use crate::ui::mvi::UiState;

/// Nickname shown before the user picks one.
pub const GUEST_NICKNAME: &str = "Guest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub nickname: String,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            nickname: GUEST_NICKNAME.to_string(),
        }
    }
}

impl UiState for ProfileState {}
