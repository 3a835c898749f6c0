//! Running the effects that reducers return.

mod clock;
mod runner;

pub use clock::{Clock, ImmediateClock, SystemClock};
pub use runner::EffectRunner;
