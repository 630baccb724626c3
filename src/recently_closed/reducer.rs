use crate::mvi::Reducer;

use super::action::RecentlyClosedFragmentAction;
use super::state::RecentlyClosedFragmentState;

pub struct RecentlyClosedFragmentReducer;

impl Reducer for RecentlyClosedFragmentReducer {
    type State = RecentlyClosedFragmentState;
    type Action = RecentlyClosedFragmentAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            RecentlyClosedFragmentAction::Change(items) => {
                state.items = items;
                state
            }
            RecentlyClosedFragmentAction::Select(tab) => {
                state.selected_tabs.insert(tab);
                state
            }
            RecentlyClosedFragmentAction::Deselect(tab) => {
                state.selected_tabs.remove(&tab);
                state
            }
            RecentlyClosedFragmentAction::DeselectAll => {
                state.selected_tabs.clear();
                state
            }
        }
    }
}
