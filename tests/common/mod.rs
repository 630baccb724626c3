//! Shared test utilities and recording doubles.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use browser_state::recently_closed::{
    BrowsingMode, Navigator, RecentlyClosedFragmentState, RecentlyClosedFragmentView, ShareData,
};
use browser_state::state::{BrowserState, RecoverableTab, TabSessionState, TranslationsState};
use parking_lot::Mutex;

/// Browser state holding one regular tab per id, in order.
pub fn browser_state_with_tabs(ids: &[&str]) -> BrowserState {
    BrowserState {
        tabs: ids
            .iter()
            .map(|id| Arc::new(TabSessionState::new(*id, format!("https://{}.example", id))))
            .collect(),
        selected_tab_id: ids.first().map(|id| id.to_string()),
        ..BrowserState::default()
    }
}

pub fn translations<'a>(state: &'a BrowserState, tab_id: &str) -> &'a TranslationsState {
    &state
        .find_tab_or_custom_tab(tab_id)
        .expect("tab should exist")
        .translations_state
}

pub fn closed_tab(id: &str, last_access: u64) -> RecoverableTab {
    RecoverableTab::new(id, format!("https://{}.example", id))
        .with_title(id.to_uppercase())
        .with_last_access(last_access)
}

/// Poll `condition` until it holds or a second passes.
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Up,
    History,
    TabsTray,
    Browser,
    Open {
        url: String,
        mode: Option<BrowsingMode>,
    },
    Share(Vec<ShareData>),
    Mode(BrowsingMode),
}

#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().clone()
    }

    fn record(&self, event: NavEvent) {
        self.events.lock().push(event);
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_up(&self) {
        self.record(NavEvent::Up);
    }

    fn navigate_to_history(&self) {
        self.record(NavEvent::History);
    }

    fn navigate_to_tabs_tray(&self) {
        self.record(NavEvent::TabsTray);
    }

    fn navigate_to_browser(&self) {
        self.record(NavEvent::Browser);
    }

    fn open_to_browser(&self, url: &str, mode: Option<BrowsingMode>) {
        self.record(NavEvent::Open {
            url: url.to_string(),
            mode,
        });
    }

    fn share(&self, data: Vec<ShareData>) {
        self.record(NavEvent::Share(data));
    }

    fn set_browsing_mode(&self, mode: BrowsingMode) {
        self.record(NavEvent::Mode(mode));
    }
}

/// View that remembers every state it was asked to draw.
#[derive(Default)]
pub struct RecordingView {
    pub updates: Vec<RecentlyClosedFragmentState>,
    pub menu_invalidations: usize,
}

impl RecordingView {
    pub fn last(&self) -> Option<&RecentlyClosedFragmentState> {
        self.updates.last()
    }
}

impl RecentlyClosedFragmentView for RecordingView {
    fn update(&mut self, state: &RecentlyClosedFragmentState) {
        self.updates.push(state.clone());
    }

    fn invalidate_menu(&mut self) {
        self.menu_invalidations += 1;
    }
}
