use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mvi::State;

use super::recover::RecoverableTab;
use super::tab::TabSessionState;

/// Root snapshot of the browser store.
///
/// Tabs are shared through `Arc` so a reducer that touches one tab leaves
/// every other tab pointer-equal to the previous snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserState {
    pub tabs: Vec<Arc<TabSessionState>>,
    pub custom_tabs: Vec<Arc<TabSessionState>>,
    pub selected_tab_id: Option<String>,
    /// Most recently closed first.
    pub closed_tabs: Vec<RecoverableTab>,
}

impl State for BrowserState {}

impl BrowserState {
    pub fn find_tab(&self, tab_id: &str) -> Option<&TabSessionState> {
        self.tabs
            .iter()
            .find(|tab| tab.id == tab_id)
            .map(|tab| tab.as_ref())
    }

    pub fn find_custom_tab(&self, tab_id: &str) -> Option<&TabSessionState> {
        self.custom_tabs
            .iter()
            .find(|tab| tab.id == tab_id)
            .map(|tab| tab.as_ref())
    }

    /// Regular tabs first, then custom tabs.
    pub fn find_tab_or_custom_tab(&self, tab_id: &str) -> Option<&TabSessionState> {
        self.find_tab(tab_id)
            .or_else(|| self.find_custom_tab(tab_id))
    }

    pub fn selected_tab(&self) -> Option<&TabSessionState> {
        self.selected_tab_id
            .as_deref()
            .and_then(|id| self.find_tab(id))
    }

    /// Replace the tab with `tab_id` by `update(tab)`.
    ///
    /// Looks in `tabs` first, then `custom_tabs`. Unknown ids leave the state
    /// untouched. Only the matching entry gets a fresh `Arc`.
    pub fn update_tab_or_custom_tab_state<F>(mut self, tab_id: &str, update: F) -> Self
    where
        F: FnOnce(&TabSessionState) -> TabSessionState,
    {
        if let Some(slot) = self.tabs.iter_mut().find(|tab| tab.id == tab_id) {
            let updated = update(slot.as_ref());
            *slot = Arc::new(updated);
        } else if let Some(slot) = self.custom_tabs.iter_mut().find(|tab| tab.id == tab_id) {
            let updated = update(slot.as_ref());
            *slot = Arc::new(updated);
        } else {
            tracing::debug!(tab_id, "No tab or custom tab with this id, skipping update");
        }
        self
    }
}
