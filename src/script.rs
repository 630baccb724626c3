//! TOML action scripts replayed through a browser store.
//!
//! ```toml
//! [[actions]]
//! kind = "tab_list"
//! action = { type = "add_tab", select = true, tab = { id = "t1", content = { url = "https://example.org" } } }
//!
//! [[actions]]
//! kind = "translations"
//! action = { type = "translate", tab_id = "t1", from_language = "es", to_language = "en" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::{BrowserAction, RecentlyClosedAction};
use crate::reducer::BrowserStateReducer;
use crate::store::Store;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read action script '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse action script '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionScript {
    #[serde(default)]
    pub actions: Vec<BrowserAction>,
}

impl FromStr for ActionScript {
    type Err = toml::de::Error;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content)
    }
}

impl ActionScript {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|e| ScriptError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        content.parse::<ActionScript>().map_err(|e| ScriptError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Dispatch every action in order and return how many were dispatched.
    ///
    /// The closed tab list is pruned to `max_saved_tabs` after each addition,
    /// the same bound live tab removal applies.
    pub fn replay(&self, store: &Store<BrowserStateReducer>, max_saved_tabs: usize) -> usize {
        for action in &self.actions {
            let adds_closed_tabs = matches!(
                action,
                BrowserAction::RecentlyClosed(RecentlyClosedAction::AddClosedTabs { .. })
            );
            store.dispatch(action.clone());
            if adds_closed_tabs {
                store.dispatch(RecentlyClosedAction::PruneClosedTabs {
                    max_tabs: max_saved_tabs,
                });
            }
        }
        tracing::info!(actions = self.actions.len(), "Action script replayed");
        self.actions.len()
    }
}
