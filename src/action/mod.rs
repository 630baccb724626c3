//! Actions accepted by the browser store.
//!
//! `BrowserAction` is the closed set the root reducer matches on. Each
//! feature area owns a sub-enum so its reducer can match exhaustively.

mod recently_closed;
mod tab_list;
mod translations;

use serde::{Deserialize, Serialize};

use crate::mvi::Action;

pub use recently_closed::RecentlyClosedAction;
pub use tab_list::TabListAction;
pub use translations::TranslationsAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "action", rename_all = "snake_case")]
pub enum BrowserAction {
    TabList(TabListAction),
    RecentlyClosed(RecentlyClosedAction),
    Translations(TranslationsAction),
}

impl Action for BrowserAction {}

impl From<TabListAction> for BrowserAction {
    fn from(action: TabListAction) -> Self {
        BrowserAction::TabList(action)
    }
}

impl From<RecentlyClosedAction> for BrowserAction {
    fn from(action: RecentlyClosedAction) -> Self {
        BrowserAction::RecentlyClosed(action)
    }
}

impl From<TranslationsAction> for BrowserAction {
    fn from(action: TranslationsAction) -> Self {
        BrowserAction::Translations(action)
    }
}
