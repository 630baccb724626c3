use std::sync::Arc;

use crate::state::RecoverableTab;

use super::controller::RecentlyClosedController;

/// Translates list gestures into controller calls.
pub struct RecentlyClosedFragmentInteractor<C: RecentlyClosedController> {
    controller: Arc<C>,
}

impl<C: RecentlyClosedController> Clone for RecentlyClosedFragmentInteractor<C> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

impl<C: RecentlyClosedController> RecentlyClosedFragmentInteractor<C> {
    pub fn new(controller: Arc<C>) -> Self {
        Self { controller }
    }

    /// A row was tapped outside of selection mode.
    pub fn on_recently_closed_clicked(&self, tab: &RecoverableTab) {
        self.controller.handle_restore(tab);
    }

    pub fn on_navigate_to_history(&self) {
        self.controller.handle_navigate_to_history();
    }

    pub fn on_delete(&self, tab: &RecoverableTab) {
        self.controller.handle_delete(tab);
    }

    pub fn select(&self, tab: &RecoverableTab) {
        self.controller.handle_select(tab);
    }

    pub fn deselect(&self, tab: &RecoverableTab) {
        self.controller.handle_deselect(tab);
    }
}
