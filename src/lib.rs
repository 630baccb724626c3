//! Immutable browser state with a translations reducer, a single-writer
//! store, and the presenter for a "recently closed tabs" screen.

pub mod action;
pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod mvi;
pub mod recently_closed;
pub mod reducer;
pub mod script;
pub mod state;
pub mod store;
pub mod use_cases;
