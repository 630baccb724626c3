//! "Recently closed tabs" library screen.
//!
//! The screen keeps its own small store (items plus multi-selection), mirrors
//! the browser store's closed tabs into it, and routes user gestures through
//! an interactor to a controller. Drawing is left to a
//! [`RecentlyClosedFragmentView`] implementation supplied by the host.

mod action;
mod controller;
mod fragment;
mod interactor;
mod navigator;
mod reducer;
mod state;
mod view;

pub use action::RecentlyClosedFragmentAction;
pub use controller::{DefaultRecentlyClosedController, RecentlyClosedController};
pub use fragment::{MenuEntry, MenuItem, MenuLayout, RecentlyClosedFragment};
pub use interactor::RecentlyClosedFragmentInteractor;
pub use navigator::{BrowsingMode, Navigator, ShareData};
pub use reducer::RecentlyClosedFragmentReducer;
pub use state::RecentlyClosedFragmentState;
pub use view::RecentlyClosedFragmentView;
