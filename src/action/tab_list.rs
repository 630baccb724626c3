use serde::{Deserialize, Serialize};

use crate::mvi::Action;
use crate::state::TabSessionState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabListAction {
    AddTab {
        tab: TabSessionState,
        #[serde(default)]
        select: bool,
    },
    SelectTab { tab_id: String },
    RemoveTab { tab_id: String },
    AddCustomTab { tab: TabSessionState },
    RemoveCustomTab { tab_id: String },
}

impl Action for TabListAction {}
