//! Reducers for the browser store.

mod recently_closed;
mod tab_list;
mod translations;

use crate::action::BrowserAction;
use crate::mvi::Reducer;
use crate::state::BrowserState;

pub use recently_closed::RecentlyClosedStateReducer;
pub use tab_list::TabListReducer;
pub use translations::TranslationsStateReducer;

/// Root reducer: routes each action to the reducer owning its feature area.
pub struct BrowserStateReducer;

impl Reducer for BrowserStateReducer {
    type State = BrowserState;
    type Action = BrowserAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            BrowserAction::TabList(action) => TabListReducer::reduce(state, action),
            BrowserAction::RecentlyClosed(action) => {
                RecentlyClosedStateReducer::reduce(state, action)
            }
            BrowserAction::Translations(action) => TranslationsStateReducer::reduce(state, action),
        }
    }
}
