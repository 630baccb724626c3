use std::collections::HashSet;

use crate::mvi::State;
use crate::state::RecoverableTab;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentlyClosedFragmentState {
    /// Closed tabs in display order (most recent first).
    pub items: Vec<RecoverableTab>,
    pub selected_tabs: HashSet<RecoverableTab>,
}

impl State for RecentlyClosedFragmentState {}

impl RecentlyClosedFragmentState {
    pub fn is_selecting(&self) -> bool {
        !self.selected_tabs.is_empty()
    }
}
