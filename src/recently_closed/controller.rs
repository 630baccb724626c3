use std::collections::HashSet;
use std::sync::Arc;

use crate::action::RecentlyClosedAction;
use crate::reducer::BrowserStateReducer;
use crate::state::RecoverableTab;
use crate::store::Store;
use crate::use_cases::TabsUseCases;

use super::action::RecentlyClosedFragmentAction;
use super::navigator::{BrowsingMode, Navigator, ShareData};
use super::reducer::RecentlyClosedFragmentReducer;

/// Side-effecting operations behind the recently closed screen.
pub trait RecentlyClosedController: Send + Sync + 'static {
    fn handle_open(&self, tab: &RecoverableTab, mode: Option<BrowsingMode>);
    fn handle_open_selected(&self, tabs: &HashSet<RecoverableTab>, mode: BrowsingMode);
    fn handle_select(&self, tab: &RecoverableTab);
    fn handle_deselect(&self, tab: &RecoverableTab);
    fn handle_navigate_to_history(&self);
    fn handle_share(&self, tabs: &HashSet<RecoverableTab>);
    fn handle_delete(&self, tab: &RecoverableTab);
    fn handle_delete_selected(&self, tabs: &HashSet<RecoverableTab>);
    fn handle_restore(&self, tab: &RecoverableTab);
    fn handle_close(&self);
    /// Returns `true` when the back press was consumed.
    fn handle_back_pressed(&self) -> bool;
}

pub struct DefaultRecentlyClosedController<N: Navigator> {
    browser_store: Store<BrowserStateReducer>,
    recently_closed_store: Store<RecentlyClosedFragmentReducer>,
    tabs_use_cases: TabsUseCases,
    navigator: Arc<N>,
}

impl<N: Navigator> DefaultRecentlyClosedController<N> {
    pub fn new(
        browser_store: Store<BrowserStateReducer>,
        recently_closed_store: Store<RecentlyClosedFragmentReducer>,
        tabs_use_cases: TabsUseCases,
        navigator: Arc<N>,
    ) -> Self {
        Self {
            browser_store,
            recently_closed_store,
            tabs_use_cases,
            navigator,
        }
    }
}

impl<N: Navigator> RecentlyClosedController for DefaultRecentlyClosedController<N> {
    fn handle_open(&self, tab: &RecoverableTab, mode: Option<BrowsingMode>) {
        tracing::debug!(tab_id = %tab.id, ?mode, "Opening closed tab");
        self.navigator.open_to_browser(&tab.url, mode);
    }

    fn handle_open_selected(&self, tabs: &HashSet<RecoverableTab>, mode: BrowsingMode) {
        tracing::debug!(count = tabs.len(), ?mode, "Opening selected closed tabs");
        self.recently_closed_store
            .dispatch(RecentlyClosedFragmentAction::DeselectAll);
        for tab in ordered(tabs) {
            self.tabs_use_cases.add_tab(&tab.url, mode.is_private());
        }
        self.navigator.set_browsing_mode(mode);
        self.navigator.navigate_to_tabs_tray();
    }

    fn handle_select(&self, tab: &RecoverableTab) {
        self.recently_closed_store
            .dispatch(RecentlyClosedFragmentAction::Select(tab.clone()));
    }

    fn handle_deselect(&self, tab: &RecoverableTab) {
        self.recently_closed_store
            .dispatch(RecentlyClosedFragmentAction::Deselect(tab.clone()));
    }

    fn handle_navigate_to_history(&self) {
        self.navigator.navigate_to_history();
    }

    fn handle_share(&self, tabs: &HashSet<RecoverableTab>) {
        let data = ordered(tabs)
            .into_iter()
            .map(|tab| ShareData {
                url: tab.url.clone(),
                title: tab.title.clone(),
            })
            .collect();
        self.navigator.share(data);
    }

    fn handle_delete(&self, tab: &RecoverableTab) {
        tracing::debug!(tab_id = %tab.id, "Deleting closed tab");
        self.browser_store
            .dispatch(RecentlyClosedAction::RemoveClosedTab { tab: tab.clone() });
    }

    fn handle_delete_selected(&self, tabs: &HashSet<RecoverableTab>) {
        tracing::debug!(count = tabs.len(), "Deleting selected closed tabs");
        self.recently_closed_store
            .dispatch(RecentlyClosedFragmentAction::DeselectAll);
        for tab in ordered(tabs) {
            self.browser_store
                .dispatch(RecentlyClosedAction::RemoveClosedTab { tab: tab.clone() });
        }
    }

    fn handle_restore(&self, tab: &RecoverableTab) {
        tracing::debug!(tab_id = %tab.id, "Restoring closed tab");
        self.tabs_use_cases.restore(tab);
        self.browser_store
            .dispatch(RecentlyClosedAction::RemoveClosedTab { tab: tab.clone() });
        self.navigator.navigate_to_browser();
    }

    fn handle_close(&self) {
        self.navigator.navigate_up();
    }

    fn handle_back_pressed(&self) -> bool {
        if self.recently_closed_store.state().is_selecting() {
            self.recently_closed_store
                .dispatch(RecentlyClosedFragmentAction::DeselectAll);
            true
        } else {
            false
        }
    }
}

/// Most recently closed first; sets carry no order of their own.
fn ordered(tabs: &HashSet<RecoverableTab>) -> Vec<&RecoverableTab> {
    let mut tabs: Vec<&RecoverableTab> = tabs.iter().collect();
    tabs.sort_by(|a, b| {
        b.last_access
            .cmp(&a.last_access)
            .then_with(|| a.id.cmp(&b.id))
    });
    tabs
}
