//! Single-writer state store.
//!
//! A [`Store`] owns the current snapshot of one reducer's state. Dispatches
//! are applied one at a time and each resulting snapshot is published to
//! subscribers through a `tokio::sync::watch` channel.

mod observe;

use std::sync::Arc;

use tokio::sync::watch;

use crate::mvi::Reducer;

/// Cloneable handle to a store. All clones share the same state.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

struct StoreInner<R: Reducer> {
    sender: watch::Sender<R::State>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial_state: R::State) -> Self {
        let (sender, _receiver) = watch::channel(initial_state);
        Self {
            inner: Arc::new(StoreInner { sender }),
        }
    }

    /// Clone of the current snapshot.
    pub fn state(&self) -> R::State {
        self.inner.sender.borrow().clone()
    }

    /// Apply `action` to the current snapshot and publish the result.
    ///
    /// Concurrent dispatches are serialized by the channel's write lock, so
    /// every reducer call sees the snapshot produced by the previous one.
    /// Subscribers are only notified when the snapshot actually changed.
    pub fn dispatch(&self, action: impl Into<R::Action>) {
        let action = action.into();
        tracing::trace!(?action, "Dispatching action");
        self.inner.sender.send_if_modified(|state| {
            let next = R::reduce(state.clone(), action);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }

    /// Raw subscription; the current snapshot counts as already seen.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.inner.sender.subscribe()
    }
}
