use serde::{Deserialize, Serialize};

use super::translations::TranslationsState;

/// A browsing tab (regular or custom).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabSessionState {
    pub id: String,
    #[serde(default)]
    pub content: ContentState,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_access: u64,
    #[serde(default)]
    pub translations_state: TranslationsState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentState {
    pub url: String,
    pub title: String,
    pub private: bool,
}

impl TabSessionState {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ContentState {
                url: url.into(),
                ..ContentState::default()
            },
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.content.title = title.into();
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.content.private = private;
        self
    }

    pub fn with_last_access(mut self, last_access: u64) -> Self {
        self.last_access = last_access;
        self
    }
}
