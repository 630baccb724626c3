use serde::{Deserialize, Serialize};

use crate::mvi::Action;
use crate::state::RecoverableTab;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecentlyClosedAction {
    AddClosedTabs { tabs: Vec<RecoverableTab> },
    RemoveClosedTab { tab: RecoverableTab },
    RemoveAllClosedTabs,
    /// Keep only the `max_tabs` most recently closed tabs.
    PruneClosedTabs { max_tabs: usize },
}

impl Action for RecentlyClosedAction {}
