//! Reducer for the list of recently closed tabs.

use std::collections::HashSet;

use crate::action::RecentlyClosedAction;
use crate::mvi::Reducer;
use crate::state::{BrowserState, RecoverableTab};

pub struct RecentlyClosedStateReducer;

impl Reducer for RecentlyClosedStateReducer {
    type State = BrowserState;
    type Action = RecentlyClosedAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            RecentlyClosedAction::AddClosedTabs { tabs } => {
                state.closed_tabs = merge_closed_tabs(tabs, state.closed_tabs);
                state
            }
            RecentlyClosedAction::RemoveClosedTab { tab } => {
                state.closed_tabs.retain(|closed| closed.id != tab.id);
                state
            }
            RecentlyClosedAction::RemoveAllClosedTabs => {
                state.closed_tabs.clear();
                state
            }
            RecentlyClosedAction::PruneClosedTabs { max_tabs } => {
                state.closed_tabs.truncate(max_tabs);
                state
            }
        }
    }
}

/// Incoming records win over existing ones with the same id.
/// Result is ordered newest `last_access` first; ties keep incoming first.
fn merge_closed_tabs(
    incoming: Vec<RecoverableTab>,
    existing: Vec<RecoverableTab>,
) -> Vec<RecoverableTab> {
    let mut seen = HashSet::new();
    let mut merged: Vec<RecoverableTab> = incoming
        .into_iter()
        .chain(existing)
        .filter(|tab| seen.insert(tab.id.clone()))
        .collect();
    merged.sort_by(|a, b| b.last_access.cmp(&a.last_access));
    merged
}
