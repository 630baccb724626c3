//! Model-View-Intent (MVI) primitives shared by every store in the crate.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every action
//! - **Action**: Intent to change state (user gesture or engine event)
//! - **Reducer**: Pure function that folds an action into a new snapshot

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
