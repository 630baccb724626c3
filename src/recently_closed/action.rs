use crate::mvi::Action;
use crate::state::RecoverableTab;

#[derive(Debug, Clone, PartialEq)]
pub enum RecentlyClosedFragmentAction {
    /// The browser's closed tab list changed.
    Change(Vec<RecoverableTab>),
    Select(RecoverableTab),
    Deselect(RecoverableTab),
    DeselectAll,
}

impl Action for RecentlyClosedFragmentAction {}
