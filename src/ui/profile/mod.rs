mod intent;
mod reducer;
mod state;

pub use intent::{ProfileBinding, ProfileIntent};
pub use reducer::ProfileReducer;
pub use state::{ProfileState, GUEST_NICKNAME};
