use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::lifecycle::{LifecyclePhase, ViewLifecycle};
use crate::reducer::BrowserStateReducer;
use crate::state::BrowserState;
use crate::store::Store;
use crate::use_cases::TabsUseCases;

use super::action::RecentlyClosedFragmentAction;
use super::controller::{DefaultRecentlyClosedController, RecentlyClosedController};
use super::interactor::RecentlyClosedFragmentInteractor;
use super::navigator::{BrowsingMode, Navigator};
use super::reducer::RecentlyClosedFragmentReducer;
use super::state::RecentlyClosedFragmentState;
use super::view::RecentlyClosedFragmentView;

/// Options menu variant shown by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLayout {
    /// Nothing selected: only "close".
    Library,
    /// At least one tab selected.
    MultiSelect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Close,
    Share,
    Delete,
    OpenInNormalTabs,
    OpenInPrivateTabs,
    /// An entry contributed by someone else; not handled here.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub item: MenuItem,
    /// Rendered with the warning color.
    pub destructive: bool,
}

impl MenuLayout {
    pub fn entries(self) -> Vec<MenuEntry> {
        let entry = |item, destructive| MenuEntry { item, destructive };
        match self {
            MenuLayout::Library => vec![entry(MenuItem::Close, false)],
            MenuLayout::MultiSelect => vec![
                entry(MenuItem::Share, false),
                entry(MenuItem::Delete, true),
                entry(MenuItem::OpenInNormalTabs, false),
                entry(MenuItem::OpenInPrivateTabs, false),
            ],
        }
    }
}

type Controller<N> = DefaultRecentlyClosedController<N>;

/// Presenter for the recently closed screen.
///
/// Created together with its view. Each [`on_view_created`](Self::on_view_created)
/// starts observers under a fresh view lifecycle; they live until
/// [`on_destroy_view`](Self::on_destroy_view), the next view is created, or
/// the fragment is dropped. The screen store outlives individual views.
pub struct RecentlyClosedFragment<N: Navigator, V: RecentlyClosedFragmentView> {
    browser_store: Store<BrowserStateReducer>,
    recently_closed_store: Store<RecentlyClosedFragmentReducer>,
    controller: Arc<Controller<N>>,
    interactor: RecentlyClosedFragmentInteractor<Controller<N>>,
    view: Arc<Mutex<V>>,
    lifecycle: Mutex<ViewLifecycle>,
}

impl<N: Navigator, V: RecentlyClosedFragmentView> RecentlyClosedFragment<N, V> {
    pub fn create_view(
        browser_store: Store<BrowserStateReducer>,
        tabs_use_cases: TabsUseCases,
        navigator: Arc<N>,
        view: V,
    ) -> Self {
        let recently_closed_store = Store::new(RecentlyClosedFragmentState::default());
        let controller = Arc::new(DefaultRecentlyClosedController::new(
            browser_store.clone(),
            recently_closed_store.clone(),
            tabs_use_cases,
            navigator,
        ));
        let interactor = RecentlyClosedFragmentInteractor::new(Arc::clone(&controller));
        let lifecycle = ViewLifecycle::new();
        lifecycle.advance(LifecyclePhase::Created);

        Self {
            browser_store,
            recently_closed_store,
            controller,
            interactor,
            view: Arc::new(Mutex::new(view)),
            lifecycle: Mutex::new(lifecycle),
        }
    }

    /// Start rendering the screen store and mirroring the browser's closed tabs.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_view_created(&self) -> Vec<JoinHandle<()>> {
        let mut lifecycle = self.lifecycle.lock();
        if lifecycle.phase() != LifecyclePhase::Created {
            // Replacing drops the old lifecycle, which stops its observers.
            *lifecycle = ViewLifecycle::new();
            lifecycle.advance(LifecyclePhase::Created);
        }
        let handle = lifecycle.handle();

        let view = Arc::clone(&self.view);
        let render = self.recently_closed_store.consume_from(&handle, move |state| {
            let mut view = view.lock();
            view.update(state);
            view.invalidate_menu();
        });

        let recently_closed_store = self.recently_closed_store.clone();
        let mirror = self.browser_store.flow_scoped(
            &handle,
            |state: &BrowserState| state.closed_tabs.clone(),
            move |tabs| recently_closed_store.dispatch(RecentlyClosedFragmentAction::Change(tabs)),
        );

        lifecycle.advance(LifecyclePhase::Started);
        vec![render, mirror]
    }

    pub fn on_resume(&self) {
        self.lifecycle.lock().advance(LifecyclePhase::Resumed);
    }

    pub fn on_destroy_view(&self) {
        self.lifecycle.lock().destroy();
    }

    pub fn menu_layout(&self) -> MenuLayout {
        if self.recently_closed_store.state().is_selecting() {
            MenuLayout::MultiSelect
        } else {
            MenuLayout::Library
        }
    }

    /// Returns `false` for items this screen does not own.
    pub fn on_menu_item_selected(&self, item: &MenuItem) -> bool {
        let selected_tabs = self.recently_closed_store.state().selected_tabs;

        match item {
            MenuItem::Close => self.controller.handle_close(),
            MenuItem::Share => self.controller.handle_share(&selected_tabs),
            MenuItem::Delete => self.controller.handle_delete_selected(&selected_tabs),
            MenuItem::OpenInNormalTabs => self
                .controller
                .handle_open_selected(&selected_tabs, BrowsingMode::Normal),
            MenuItem::OpenInPrivateTabs => self
                .controller
                .handle_open_selected(&selected_tabs, BrowsingMode::Private),
            MenuItem::Other(_) => return false,
        }
        true
    }

    pub fn on_back_pressed(&self) -> bool {
        self.controller.handle_back_pressed()
    }

    pub fn interactor(&self) -> &RecentlyClosedFragmentInteractor<Controller<N>> {
        &self.interactor
    }

    pub fn state(&self) -> RecentlyClosedFragmentState {
        self.recently_closed_store.state()
    }

    pub fn lifecycle_phase(&self) -> LifecyclePhase {
        self.lifecycle.lock().phase()
    }

    /// Shared access to the view, e.g. for the host to read back what it drew.
    pub fn view(&self) -> Arc<Mutex<V>> {
        Arc::clone(&self.view)
    }
}
