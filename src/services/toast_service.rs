//! Toast lifecycle management
//!
//! Each toast is appended to the service registry and then driven through
//! `Created -> Shown -> Hiding -> removed` by its own pair of timers; the
//! render loop draws whatever `snapshot` returns. Toasts never share
//! timer state, so any number may be mid-lifecycle at once. A capacity
//! bound keeps the overlay from growing without limit: when full, the
//! oldest toast is dropped early in favor of the new one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Toast, ToastKind, ToastPhase};

const DEFAULT_CAPACITY: usize = 5;

/// Timer pair for one toast lifecycle. `entry` is the single-frame delay
/// before the toast counts as shown, the hook the enter transition hangs
/// off of.
#[derive(Debug, Clone, Copy)]
pub struct ToastTiming {
    pub entry: Duration,
    pub visible: Duration,
    pub exit: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        ToastTiming {
            entry: Duration::from_millis(20),
            visible: Duration::from_millis(3000),
            exit: Duration::from_millis(400),
        }
    }
}

struct ToastEntry {
    toast: Toast,
    task: Option<JoinHandle<()>>,
}

struct Inner {
    entries: Mutex<Vec<ToastEntry>>,
    timing: ToastTiming,
    capacity: usize,
}

impl Inner {
    fn entries(&self) -> MutexGuard<'_, Vec<ToastEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_phase(&self, id: Uuid, phase: ToastPhase) {
        if let Some(entry) = self.entries().iter_mut().find(|e| e.toast.id == id) {
            entry.toast.phase = phase;
        }
    }

    fn remove(&self, id: Uuid) {
        self.entries().retain(|e| e.toast.id != id);
    }

    async fn lifecycle(inner: Arc<Inner>, id: Uuid) {
        sleep(inner.timing.entry).await;
        inner.set_phase(id, ToastPhase::Shown);
        sleep(inner.timing.visible).await;
        inner.set_phase(id, ToastPhase::Hiding);
        sleep(inner.timing.exit).await;
        inner.remove(id);
    }
}

/// Process-wide toast surface. Cheap to clone; all clones share the same
/// registry.
#[derive(Clone)]
pub struct ToastService {
    inner: Arc<Inner>,
}

impl Default for ToastService {
    fn default() -> Self {
        ToastService::with_timing(ToastTiming::default(), DEFAULT_CAPACITY)
    }
}

impl ToastService {
    pub fn new() -> Self {
        ToastService::default()
    }

    pub fn with_timing(timing: ToastTiming, capacity: usize) -> Self {
        ToastService {
            inner: Arc::new(Inner {
                entries: Mutex::new(Vec::new()),
                timing,
                capacity: capacity.max(1),
            }),
        }
    }

    /// Append a toast and schedule its own teardown. Fire-and-forget;
    /// keep the handle only to dismiss early.
    pub fn show(&self, text: impl Into<String>, kind: ToastKind) -> ToastHandle {
        let toast = Toast::new(text, kind);
        let id = toast.id;
        {
            let mut entries = self.inner.entries();
            if entries.len() >= self.inner.capacity {
                let evicted = entries.remove(0);
                if let Some(task) = evicted.task {
                    task.abort();
                }
                debug!(evicted = %evicted.toast.id, "toast capacity reached, dropping oldest");
            }
            entries.push(ToastEntry { toast, task: None });
        }

        let lifecycle = tokio::spawn(Inner::lifecycle(Arc::clone(&self.inner), id));
        let mut entries = self.inner.entries();
        match entries.iter_mut().find(|e| e.toast.id == id) {
            Some(entry) => entry.task = Some(lifecycle),
            // evicted in the meantime; stop the orphaned timers
            None => lifecycle.abort(),
        }

        ToastHandle {
            id,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Current toasts in display order (oldest first)
    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.entries().iter().map(|e| e.toast.clone()).collect()
    }

    pub fn live_count(&self) -> usize {
        self.inner.entries().len()
    }
}

/// Handle to one live toast
pub struct ToastHandle {
    id: Uuid,
    inner: Arc<Inner>,
}

impl ToastHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Skip the remaining visible time and play the exit animation now
    pub fn dismiss(self) {
        let exit = {
            let mut entries = self.inner.entries();
            match entries.iter_mut().find(|e| e.toast.id == self.id) {
                Some(entry) => {
                    if let Some(task) = entry.task.take() {
                        task.abort();
                    }
                    entry.toast.phase = ToastPhase::Hiding;
                    true
                }
                None => false,
            }
        };
        if exit {
            let inner = self.inner;
            let id = self.id;
            tokio::spawn(async move {
                sleep(inner.timing.exit).await;
                inner.remove(id);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> ToastTiming {
        ToastTiming {
            entry: Duration::from_millis(10),
            visible: Duration::from_millis(50),
            exit: Duration::from_millis(30),
        }
    }

    #[tokio::test]
    async fn test_toast_walks_through_its_phases() {
        let service = ToastService::with_timing(fast(), 5);
        service.show("saved", ToastKind::Success);

        let toasts = service.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].phase, ToastPhase::Created);
        assert_eq!(toasts[0].kind, ToastKind::Success);

        sleep(Duration::from_millis(25)).await;
        assert_eq!(service.snapshot()[0].phase, ToastPhase::Shown);

        sleep(Duration::from_millis(50)).await;
        assert_eq!(service.snapshot()[0].phase, ToastPhase::Hiding);

        sleep(Duration::from_millis(40)).await;
        assert_eq!(service.live_count(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_toasts_have_independent_lifecycles() {
        let service = ToastService::with_timing(fast(), 5);
        service.show("one", ToastKind::Info);
        service.show("two", ToastKind::Error);
        service.show("three", ToastKind::Success);
        assert_eq!(service.live_count(), 3);

        // all three ride their own timers down to removal
        sleep(Duration::from_millis(120)).await;
        assert_eq!(service.live_count(), 0);
    }

    #[tokio::test]
    async fn test_capacity_drops_the_oldest_toast() {
        let service = ToastService::with_timing(fast(), 2);
        let first = service.show("first", ToastKind::Info);
        service.show("second", ToastKind::Info);
        service.show("third", ToastKind::Info);

        let toasts = service.snapshot();
        assert_eq!(toasts.len(), 2);
        assert!(toasts.iter().all(|t| t.id != first.id()));
        assert_eq!(toasts[1].text, "third");
    }

    #[tokio::test]
    async fn test_dismiss_short_circuits_the_visible_timer() {
        let timing = ToastTiming {
            entry: Duration::from_millis(5),
            visible: Duration::from_secs(60),
            exit: Duration::from_millis(20),
        };
        let service = ToastService::with_timing(timing, 5);
        let handle = service.show("long-lived", ToastKind::Info);

        sleep(Duration::from_millis(15)).await;
        handle.dismiss();
        assert_eq!(service.snapshot()[0].phase, ToastPhase::Hiding);

        sleep(Duration::from_millis(40)).await;
        assert_eq!(service.live_count(), 0);
    }
}
