use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Phases a view moves through between creation and teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LifecyclePhase {
    Initialized = 0,
    Created = 1,
    Started = 2,
    Resumed = 3,
    Destroyed = 4,
}

/// Owner side of a view lifecycle.
///
/// Observers started against a [`LifecycleHandle`] stop once [`destroy`]
/// is called or the lifecycle is dropped. Destroy is terminal; later phase
/// changes are ignored.
///
/// [`destroy`]: ViewLifecycle::destroy
pub struct ViewLifecycle {
    destroyed: Arc<AtomicBool>,
    phase: Arc<AtomicU8>,
    notify: Arc<Notify>,
}

impl ViewLifecycle {
    pub fn new() -> Self {
        Self {
            destroyed: Arc::new(AtomicBool::new(false)),
            phase: Arc::new(AtomicU8::new(LifecyclePhase::Initialized as u8)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Get current phase
    pub fn phase(&self) -> LifecyclePhase {
        match self.phase.load(Ordering::SeqCst) {
            0 => LifecyclePhase::Initialized,
            1 => LifecyclePhase::Created,
            2 => LifecyclePhase::Started,
            3 => LifecyclePhase::Resumed,
            _ => LifecyclePhase::Destroyed,
        }
    }

    /// Move to `phase`. Use [`destroy`](Self::destroy) to end the lifecycle.
    pub fn advance(&self, phase: LifecyclePhase) {
        if phase == LifecyclePhase::Destroyed {
            self.destroy();
            return;
        }
        if self.is_destroyed() {
            return;
        }
        self.phase.store(phase as u8, Ordering::SeqCst);
        tracing::trace!(?phase, "View lifecycle advanced");
    }

    /// End the lifecycle and wake every observer. Idempotent.
    pub fn destroy(&self) {
        if !self.destroyed.swap(true, Ordering::SeqCst) {
            self.phase.store(LifecyclePhase::Destroyed as u8, Ordering::SeqCst);
            tracing::debug!("View lifecycle destroyed");
            self.notify.notify_waiters();
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing
    pub fn handle(&self) -> LifecycleHandle {
        LifecycleHandle {
            destroyed: Arc::clone(&self.destroyed),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ViewLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewLifecycle {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Lightweight handle observers hold to learn when their view is gone.
#[derive(Clone)]
pub struct LifecycleHandle {
    destroyed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl LifecycleHandle {
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub async fn wait_destroyed(&self) {
        // Register with Notify before checking the flag, otherwise a destroy()
        // landing between the check and the await would never wake us.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_destroyed() {
            return;
        }
        notified.await;
    }
}
