//! Unidirectional data flow for a two-tab application.
//!
//! A [`store::Store`] owns the composed [`ui::app::AppState`], runs the root
//! reducer on every dispatched intent and hands any returned effect to an
//! [`effects::EffectRunner`]. Effects report back only by dispatching.

pub mod config;
pub mod console;
pub mod effects;
pub mod facts;
pub mod logging;
pub mod store;
pub mod ui;
