use serde::{Deserialize, Serialize};

use super::tab::TabSessionState;

/// A closed tab that can be brought back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecoverableTab {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Milliseconds since the Unix epoch; newest closed tabs sort first.
    #[serde(default)]
    pub last_access: u64,
    #[serde(default)]
    pub private: bool,
}

impl RecoverableTab {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: String::new(),
            last_access: 0,
            private: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_last_access(mut self, last_access: u64) -> Self {
        self.last_access = last_access;
        self
    }

    /// Rebuild a live tab from this record. Translation state starts fresh.
    pub fn to_tab(&self) -> TabSessionState {
        TabSessionState::new(self.id.clone(), self.url.clone())
            .with_title(self.title.clone())
            .private(self.private)
            .with_last_access(self.last_access)
    }
}

impl From<&TabSessionState> for RecoverableTab {
    fn from(tab: &TabSessionState) -> Self {
        Self {
            id: tab.id.clone(),
            url: tab.content.url.clone(),
            title: tab.content.title.clone(),
            last_access: tab.last_access,
            private: tab.content.private,
        }
    }
}
