mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use browser_state::action::RecentlyClosedAction;
use browser_state::lifecycle::LifecyclePhase;
use browser_state::recently_closed::{
    BrowsingMode, DefaultRecentlyClosedController, MenuItem, MenuLayout, RecentlyClosedController,
    RecentlyClosedFragment, RecentlyClosedFragmentReducer, RecentlyClosedFragmentState,
    ShareData,
};
use browser_state::reducer::BrowserStateReducer;
use browser_state::state::{BrowserState, RecoverableTab};
use browser_state::store::Store;
use browser_state::use_cases::TabsUseCases;
use common::{closed_tab, eventually, NavEvent, RecordingNavigator, RecordingView};

struct Harness {
    browser_store: Store<BrowserStateReducer>,
    navigator: Arc<RecordingNavigator>,
    fragment: RecentlyClosedFragment<RecordingNavigator, RecordingView>,
}

fn harness(closed: Vec<RecoverableTab>) -> Harness {
    let browser_store = Store::new(BrowserState {
        closed_tabs: closed,
        ..BrowserState::default()
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let fragment = RecentlyClosedFragment::create_view(
        browser_store.clone(),
        TabsUseCases::new(browser_store.clone(), 10),
        Arc::clone(&navigator),
        RecordingView::default(),
    );
    Harness {
        browser_store,
        navigator,
        fragment,
    }
}

fn two_closed() -> Vec<RecoverableTab> {
    vec![closed_tab("b", 20), closed_tab("a", 10)]
}

// -- Controller -----------------------------------------------------------------

fn controller() -> (
    Store<BrowserStateReducer>,
    Store<RecentlyClosedFragmentReducer>,
    Arc<RecordingNavigator>,
    DefaultRecentlyClosedController<RecordingNavigator>,
) {
    let browser_store = Store::new(BrowserState {
        closed_tabs: two_closed(),
        ..BrowserState::default()
    });
    let fragment_store = Store::new(RecentlyClosedFragmentState::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller = DefaultRecentlyClosedController::new(
        browser_store.clone(),
        fragment_store.clone(),
        TabsUseCases::new(browser_store.clone(), 10),
        Arc::clone(&navigator),
    );
    (browser_store, fragment_store, navigator, controller)
}

#[test]
fn open_single_tab_goes_to_browser() {
    let (_, _, navigator, controller) = controller();
    controller.handle_open(&closed_tab("a", 10), Some(BrowsingMode::Private));
    assert_eq!(
        navigator.events(),
        vec![NavEvent::Open {
            url: "https://a.example".to_string(),
            mode: Some(BrowsingMode::Private),
        }]
    );
}

#[test]
fn open_selected_in_private_tabs() {
    let (browser_store, fragment_store, navigator, controller) = controller();
    controller.handle_select(&closed_tab("a", 10));
    controller.handle_select(&closed_tab("b", 20));
    let selected = fragment_store.state().selected_tabs;

    controller.handle_open_selected(&selected, BrowsingMode::Private);

    assert!(fragment_store.state().selected_tabs.is_empty());
    let state = browser_store.state();
    let urls: Vec<_> = state.tabs.iter().map(|t| t.content.url.as_str()).collect();
    assert_eq!(urls, vec!["https://b.example", "https://a.example"]);
    assert!(state.tabs.iter().all(|t| t.content.private));
    assert_eq!(
        navigator.events(),
        vec![NavEvent::Mode(BrowsingMode::Private), NavEvent::TabsTray]
    );
}

#[test]
fn delete_selected_removes_from_browser_store() {
    let (browser_store, fragment_store, _, controller) = controller();
    controller.handle_select(&closed_tab("a", 10));
    let selected = fragment_store.state().selected_tabs;

    controller.handle_delete_selected(&selected);

    assert!(fragment_store.state().selected_tabs.is_empty());
    let remaining: Vec<_> = browser_store
        .state()
        .closed_tabs
        .iter()
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(remaining, vec!["b".to_string()]);
}

#[test]
fn share_maps_url_and_title() {
    let (_, _, navigator, controller) = controller();
    let tabs: HashSet<_> = two_closed().into_iter().collect();
    controller.handle_share(&tabs);
    assert_eq!(
        navigator.events(),
        vec![NavEvent::Share(vec![
            ShareData {
                url: "https://b.example".to_string(),
                title: "B".to_string(),
            },
            ShareData {
                url: "https://a.example".to_string(),
                title: "A".to_string(),
            },
        ])]
    );
}

#[test]
fn restore_reopens_and_forgets_closed_tab() {
    let (browser_store, _, navigator, controller) = controller();
    controller.handle_restore(&closed_tab("a", 10));

    let state = browser_store.state();
    assert_eq!(state.selected_tab_id.as_deref(), Some("a"));
    assert!(state.closed_tabs.iter().all(|t| t.id != "a"));
    assert_eq!(navigator.events(), vec![NavEvent::Browser]);
}

#[test]
fn back_press_clears_selection_once() {
    let (_, fragment_store, _, controller) = controller();
    assert!(!controller.handle_back_pressed());

    controller.handle_select(&closed_tab("a", 10));
    assert!(controller.handle_back_pressed());
    assert!(fragment_store.state().selected_tabs.is_empty());
    assert!(!controller.handle_back_pressed());
}

// -- Fragment -------------------------------------------------------------------

#[test]
fn menu_layout_follows_selection() {
    let h = harness(two_closed());
    assert_eq!(h.fragment.menu_layout(), MenuLayout::Library);

    h.fragment.interactor().select(&closed_tab("a", 10));
    assert_eq!(h.fragment.menu_layout(), MenuLayout::MultiSelect);

    let entries = MenuLayout::MultiSelect.entries();
    let destructive: Vec<_> = entries
        .iter()
        .filter(|e| e.destructive)
        .map(|e| e.item.clone())
        .collect();
    assert_eq!(destructive, vec![MenuItem::Delete]);
}

#[test]
fn menu_items_route_to_controller() {
    let h = harness(two_closed());
    h.fragment.interactor().select(&closed_tab("a", 10));

    assert!(h.fragment.on_menu_item_selected(&MenuItem::Share));
    assert!(h.fragment.on_menu_item_selected(&MenuItem::OpenInNormalTabs));
    assert!(h.fragment.on_menu_item_selected(&MenuItem::Close));
    assert!(!h
        .fragment
        .on_menu_item_selected(&MenuItem::Other("settings".to_string())));

    assert_eq!(
        h.navigator.events(),
        vec![
            NavEvent::Share(vec![ShareData {
                url: "https://a.example".to_string(),
                title: "A".to_string(),
            }]),
            NavEvent::Mode(BrowsingMode::Normal),
            NavEvent::TabsTray,
            NavEvent::Up,
        ]
    );
    assert_eq!(h.browser_store.state().tabs.len(), 1);
}

#[test]
fn delete_menu_item_with_selection() {
    let h = harness(two_closed());
    h.fragment.interactor().select(&closed_tab("b", 20));
    assert!(h.fragment.on_menu_item_selected(&MenuItem::Delete));

    assert!(h.fragment.state().selected_tabs.is_empty());
    assert_eq!(h.browser_store.state().closed_tabs, vec![closed_tab("a", 10)]);
}

#[test]
fn interactor_forwards_gestures() {
    let h = harness(two_closed());
    h.fragment.interactor().on_navigate_to_history();
    h.fragment.interactor().on_delete(&closed_tab("b", 20));
    h.fragment.interactor().on_recently_closed_clicked(&closed_tab("a", 10));

    let state = h.browser_store.state();
    assert!(state.closed_tabs.is_empty());
    assert_eq!(state.selected_tab_id.as_deref(), Some("a"));
    assert_eq!(h.navigator.events(), vec![NavEvent::History, NavEvent::Browser]);
}

#[test]
fn back_press_delegates_to_controller() {
    let h = harness(two_closed());
    assert!(!h.fragment.on_back_pressed());
    h.fragment.interactor().select(&closed_tab("a", 10));
    assert!(h.fragment.on_back_pressed());
    assert_eq!(h.fragment.menu_layout(), MenuLayout::Library);
}

#[tokio::test]
async fn view_mirrors_closed_tabs_until_destroyed() {
    let h = harness(two_closed());
    let tasks = h.fragment.on_view_created();
    h.fragment.on_resume();
    assert_eq!(h.fragment.lifecycle_phase(), LifecyclePhase::Resumed);

    let view = h.fragment.view();
    assert!(eventually(|| view.lock().last().map(|s| s.items.len()) == Some(2)).await);
    assert!(view.lock().menu_invalidations >= 1);

    h.browser_store.dispatch(RecentlyClosedAction::AddClosedTabs {
        tabs: vec![closed_tab("c", 30)],
    });
    assert!(
        eventually(|| {
            view.lock()
                .last()
                .and_then(|s| s.items.first().map(|t| t.id.clone()))
                == Some("c".to_string())
        })
        .await
    );

    h.fragment.on_destroy_view();
    for task in tasks {
        task.await.expect("observer should not panic");
    }
    let updates_at_destroy = view.lock().updates.len();

    h.browser_store.dispatch(RecentlyClosedAction::RemoveAllClosedTabs);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(view.lock().updates.len(), updates_at_destroy);
    assert_eq!(h.fragment.state().items.len(), 3);
}

#[tokio::test]
async fn dropping_fragment_stops_observers() {
    let Harness {
        browser_store,
        fragment,
        ..
    } = harness(two_closed());
    let tasks = fragment.on_view_created();
    let view = fragment.view();
    assert!(eventually(|| view.lock().last().map(|s| s.items.len()) == Some(2)).await);

    drop(fragment);
    for task in tasks {
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("observer should finish once the fragment is gone")
            .expect("observer should not panic");
    }
    let updates_at_drop = view.lock().updates.len();

    browser_store.dispatch(RecentlyClosedAction::AddClosedTabs {
        tabs: vec![closed_tab("x", 30)],
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(view.lock().updates.len(), updates_at_drop);
}

#[tokio::test]
async fn recreated_view_renders_again() {
    let h = harness(two_closed());
    let first = h.fragment.on_view_created();
    let view = h.fragment.view();
    assert!(eventually(|| view.lock().last().map(|s| s.items.len()) == Some(2)).await);

    h.fragment.on_destroy_view();
    assert_eq!(h.fragment.lifecycle_phase(), LifecyclePhase::Destroyed);
    for task in first {
        task.await.expect("observer should not panic");
    }

    let second = h.fragment.on_view_created();
    assert_eq!(h.fragment.lifecycle_phase(), LifecyclePhase::Started);
    h.browser_store.dispatch(RecentlyClosedAction::AddClosedTabs {
        tabs: vec![closed_tab("c", 30)],
    });
    assert!(eventually(|| view.lock().last().map(|s| s.items.len()) == Some(3)).await);
    assert_eq!(h.fragment.state().items.len(), 3);

    h.fragment.on_destroy_view();
    for task in second {
        task.await.expect("observer should not panic");
    }
}

#[tokio::test]
async fn second_view_replaces_first_observers() {
    let h = harness(two_closed());
    let first = h.fragment.on_view_created();
    let second = h.fragment.on_view_created();

    for task in first {
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("replaced observer should finish")
            .expect("observer should not panic");
    }
    assert!(second.iter().all(|task| !task.is_finished()));

    h.fragment.on_destroy_view();
    for task in second {
        task.await.expect("observer should not panic");
    }
}
