pub mod app;
pub mod counter;
pub mod mvi;
pub mod profile;
