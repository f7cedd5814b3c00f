use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::debug;

/// Callback run every time the refresh timer fires.
pub type RefreshListener = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Trailing-edge debounce for overlay refreshes.
///
/// Holds at most one pending timer. Every [`schedule_refresh`] cancels the
/// pending timer and starts a new one, so listeners are notified once,
/// `interval` after the last call with no call in between.
///
/// Must be used from within a Tokio runtime.
///
/// [`schedule_refresh`]: RefreshCoordinator::schedule_refresh
pub struct RefreshCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    interval_ms: AtomicU64,
    /// Bumped under the `pending` lock on every re-arm; a timer only fires
    /// if the generation it was armed with is still current.
    generation: AtomicU64,
    pending: Mutex<Option<JoinHandle<()>>>,
    listeners: DashMap<SubscriptionId, RefreshListener>,
    next_subscription: AtomicU64,
    fired: AtomicU64,
    disposed: AtomicBool,
}

impl RefreshCoordinator {
    pub fn new(interval: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                interval_ms: AtomicU64::new(duration_ms(interval)),
                generation: AtomicU64::new(0),
                pending: Mutex::new(None),
                listeners: DashMap::new(),
                next_subscription: AtomicU64::new(1),
                fired: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.inner.interval_ms.load(Ordering::Relaxed))
    }

    /// Takes effect for the next [`schedule_refresh`](Self::schedule_refresh);
    /// an already pending timer keeps its original deadline.
    pub fn set_interval(
        &self,
        interval: Duration,
    ) {
        self.inner.interval_ms.store(duration_ms(interval), Ordering::Relaxed);
    }

    /// Cancel any pending timer and arm a new one.
    pub fn schedule_refresh(&self) {
        if self.inner.disposed.load(Ordering::Acquire) {
            return;
        }

        let delay = self.interval();
        let mut pending = lock(&self.inner.pending);
        let generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
        if let Some(previous) = pending.take() {
            previous.abort();
            debug!("[refresh] re-armed ({}ms)", delay.as_millis());
        } else {
            debug!("[refresh] armed ({}ms)", delay.as_millis());
        }

        let inner = Arc::clone(&self.inner);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut pending = lock(&inner.pending);
                if inner.generation.load(Ordering::Acquire) != generation {
                    return;
                }
                pending.take();
            }
            inner.fire();
        }));
    }

    pub fn has_pending(&self) -> bool {
        lock(&self.inner.pending).is_some()
    }

    /// Number of times listeners have been notified.
    pub fn fired_count(&self) -> u64 {
        self.inner.fired.load(Ordering::Relaxed)
    }

    pub fn subscribe(
        &self,
        listener: RefreshListener,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.insert(id, listener);
        id
    }

    pub fn unsubscribe(
        &self,
        id: SubscriptionId,
    ) -> bool {
        self.inner.listeners.remove(&id).is_some()
    }

    /// Cancel the pending timer and drop every listener. Later calls to
    /// `schedule_refresh` are ignored. Idempotent.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::Release);
        self.cancel_pending();
        self.inner.listeners.clear();
    }

    fn cancel_pending(&self) {
        let mut pending = lock(&self.inner.pending);
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(task) = pending.take() {
            task.abort();
        }
    }
}

impl Drop for RefreshCoordinator {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl Inner {
    fn fire(&self) {
        let count = self.fired.fetch_add(1, Ordering::Relaxed) + 1;
        // Snapshot first so a listener may (un)subscribe without deadlocking.
        let listeners = self.listeners.iter().map(|entry| Arc::clone(entry.value())).collect::<Vec<_>>();
        debug!("[refresh] fired #{count} to {} listener(s)", listeners.len());
        for listener in listeners {
            listener();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn duration_ms(interval: Duration) -> u64 {
    u64::try_from(interval.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "../../tests/src/refresh/coordinator_tests.rs"]
mod tests;
