//! Tab operations that span more than one action.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::action::{RecentlyClosedAction, TabListAction};
use crate::reducer::BrowserStateReducer;
use crate::state::{RecoverableTab, TabSessionState};
use crate::store::Store;

/// Tab use cases bound to a browser store.
#[derive(Clone)]
pub struct TabsUseCases {
    store: Store<BrowserStateReducer>,
    max_saved_tabs: usize,
}

impl TabsUseCases {
    /// `max_saved_tabs` bounds the recently closed list after each removal.
    pub fn new(store: Store<BrowserStateReducer>, max_saved_tabs: usize) -> Self {
        Self {
            store,
            max_saved_tabs,
        }
    }

    /// Open `url` in a new selected tab and return its id.
    pub fn add_tab(&self, url: &str, private: bool) -> String {
        let id = Uuid::new_v4().to_string();
        let tab = TabSessionState::new(id.clone(), url)
            .private(private)
            .with_last_access(now_millis());
        self.store.dispatch(TabListAction::AddTab { tab, select: true });
        tracing::debug!(tab_id = %id, private, "Tab added");
        id
    }

    /// Close a tab, remembering it in the recently closed list.
    ///
    /// Private tabs are never remembered. Returns `false` for unknown ids.
    pub fn remove_tab(&self, tab_id: &str) -> bool {
        let Some(tab) = self.store.state().find_tab(tab_id).cloned() else {
            return false;
        };

        if !tab.content.private {
            let mut closed = RecoverableTab::from(&tab);
            closed.last_access = now_millis();
            self.store
                .dispatch(RecentlyClosedAction::AddClosedTabs { tabs: vec![closed] });
            self.store.dispatch(RecentlyClosedAction::PruneClosedTabs {
                max_tabs: self.max_saved_tabs,
            });
        }
        self.store.dispatch(TabListAction::RemoveTab {
            tab_id: tab_id.to_string(),
        });
        tracing::debug!(tab_id, "Tab removed");
        true
    }

    /// Re-open a closed tab under its original id and select it.
    ///
    /// If a tab with that id is still open it is selected instead.
    pub fn restore(&self, tab: &RecoverableTab) -> String {
        self.store.dispatch(TabListAction::AddTab {
            tab: tab.to_tab(),
            select: true,
        });
        self.store.dispatch(TabListAction::SelectTab {
            tab_id: tab.id.clone(),
        });
        tracing::debug!(tab_id = %tab.id, "Tab restored");
        tab.id.clone()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
