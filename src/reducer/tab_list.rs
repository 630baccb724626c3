//! Reducer for the regular and custom tab lists.

use std::sync::Arc;

use crate::action::TabListAction;
use crate::mvi::Reducer;
use crate::state::BrowserState;

pub struct TabListReducer;

impl Reducer for TabListReducer {
    type State = BrowserState;
    type Action = TabListAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            TabListAction::AddTab { tab, select } => {
                if state.find_tab_or_custom_tab(&tab.id).is_some() {
                    tracing::debug!(tab_id = %tab.id, "Tab already exists, ignoring add");
                    return state;
                }
                // The first tab is always selected.
                if select || state.selected_tab_id.is_none() {
                    state.selected_tab_id = Some(tab.id.clone());
                }
                state.tabs.push(Arc::new(tab));
                state
            }

            TabListAction::SelectTab { tab_id } => {
                if state.find_tab(&tab_id).is_some() {
                    state.selected_tab_id = Some(tab_id);
                }
                state
            }

            TabListAction::RemoveTab { tab_id } => {
                let Some(index) = state.tabs.iter().position(|tab| tab.id == tab_id) else {
                    return state;
                };
                state.tabs.remove(index);
                if state.selected_tab_id.as_deref() == Some(tab_id.as_str()) {
                    // Prefer the tab that slid into the removed slot, then the new last tab.
                    state.selected_tab_id = state
                        .tabs
                        .get(index)
                        .or_else(|| state.tabs.last())
                        .map(|tab| tab.id.clone());
                }
                state
            }

            TabListAction::AddCustomTab { tab } => {
                if state.find_tab_or_custom_tab(&tab.id).is_none() {
                    state.custom_tabs.push(Arc::new(tab));
                }
                state
            }

            TabListAction::RemoveCustomTab { tab_id } => {
                state.custom_tabs.retain(|tab| tab.id != tab_id);
                state
            }
        }
    }
}
