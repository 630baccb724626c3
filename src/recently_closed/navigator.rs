use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowsingMode {
    Normal,
    Private,
}

impl BrowsingMode {
    pub fn is_private(self) -> bool {
        self == BrowsingMode::Private
    }
}

/// Payload handed to the host's share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    pub url: String,
    pub title: String,
}

/// Host navigation and platform services the screen depends on.
///
/// Implementations must be cheap to call; they run on the caller's thread.
pub trait Navigator: Send + Sync + 'static {
    /// Leave the screen.
    fn navigate_up(&self);
    fn navigate_to_history(&self);
    fn navigate_to_tabs_tray(&self);
    fn navigate_to_browser(&self);
    /// Load `url` in a new browser tab, switching mode first if given.
    fn open_to_browser(&self, url: &str, mode: Option<BrowsingMode>);
    fn share(&self, data: Vec<ShareData>);
    fn set_browsing_mode(&self, mode: BrowsingMode);
}
