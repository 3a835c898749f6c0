use crate::ui::counter::CounterIntent;
use crate::ui::mvi::Intent;
use crate::ui::profile::ProfileIntent;

/// Intents for the whole app, tagged with the tab that owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    Counter(CounterIntent),
    Profile(ProfileIntent),
}

impl Intent for AppIntent {}

impl From<CounterIntent> for AppIntent {
    fn from(intent: CounterIntent) -> Self {
        AppIntent::Counter(intent)
    }
}

impl From<ProfileIntent> for AppIntent {
    fn from(intent: ProfileIntent) -> Self {
        AppIntent::Profile(intent)
    }
}
