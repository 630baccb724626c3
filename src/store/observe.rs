//! Lifecycle-scoped observation of a [`Store`].

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::lifecycle::LifecycleHandle;
use crate::mvi::Reducer;

use super::Store;

impl<R: Reducer> Store<R> {
    /// Call `on_state` with the current snapshot and then with every new one,
    /// until `lifecycle` is destroyed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn consume_from<F>(&self, lifecycle: &LifecycleHandle, on_state: F) -> JoinHandle<()>
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        spawn_scoped(self.subscribe(), lifecycle.clone(), on_state)
    }

    /// Map every snapshot with `map` and call `on_change` only when the mapped
    /// value differs from the previous one, until `lifecycle` is destroyed.
    ///
    /// The first mapped value is always delivered.
    pub fn flow_scoped<T, M, F>(
        &self,
        lifecycle: &LifecycleHandle,
        map: M,
        mut on_change: F,
    ) -> JoinHandle<()>
    where
        T: Clone + PartialEq + Send + 'static,
        M: Fn(&R::State) -> T + Send + 'static,
        F: FnMut(T) + Send + 'static,
    {
        let mut last: Option<T> = None;
        spawn_scoped(self.subscribe(), lifecycle.clone(), move |state| {
            let value = map(state);
            if last.as_ref() == Some(&value) {
                return;
            }
            last = Some(value.clone());
            on_change(value);
        })
    }
}

fn spawn_scoped<S, F>(
    mut receiver: watch::Receiver<S>,
    lifecycle: LifecycleHandle,
    mut on_state: F,
) -> JoinHandle<()>
where
    S: Clone + Send + Sync + 'static,
    F: FnMut(&S) + Send + 'static,
{
    tokio::spawn(async move {
        if lifecycle.is_destroyed() {
            return;
        }
        // Clone out of the channel so callbacks may dispatch back into the store.
        let initial = receiver.borrow_and_update().clone();
        on_state(&initial);

        loop {
            tokio::select! {
                biased;
                _ = lifecycle.wait_destroyed() => break,
                changed = receiver.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = receiver.borrow_and_update().clone();
                    on_state(&snapshot);
                }
            }
        }
        tracing::trace!("Scoped store observer stopped");
    })
}
