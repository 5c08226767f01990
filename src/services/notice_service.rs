//! Plain notifications
//!
//! The simpler sibling of the toast system. A notification is one text
//! line with a single removal timer and no phases, rendered on its own
//! surface separate from the toast stack.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::models::Notice;

struct Inner {
    notices: Mutex<Vec<Notice>>,
    ttl: Duration,
}

impl Inner {
    fn notices(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Bottom-corner notification surface. Clones share one list.
#[derive(Clone)]
pub struct NoticeService {
    inner: Arc<Inner>,
}

impl Default for NoticeService {
    fn default() -> Self {
        NoticeService::with_ttl(Duration::from_millis(3000))
    }
}

impl NoticeService {
    pub fn new() -> Self {
        NoticeService::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        NoticeService {
            inner: Arc::new(Inner {
                notices: Mutex::new(Vec::new()),
                ttl,
            }),
        }
    }

    /// Post a notification and schedule its removal
    pub fn post(&self, text: impl Into<String>) {
        let notice = Notice::new(text);
        let id = notice.id;
        debug!(%id, "notification posted");
        self.inner.notices().push(notice);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            sleep(inner.ttl).await;
            inner.notices().retain(|n| n.id != id);
        });
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.inner.notices().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notice_expires_after_its_ttl() {
        let service = NoticeService::with_ttl(Duration::from_millis(30));
        service.post("Quick Actions Coming Soon 🚀");
        assert_eq!(service.snapshot().len(), 1);

        sleep(Duration::from_millis(60)).await;
        assert!(service.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_notices_expire_independently() {
        let service = NoticeService::with_ttl(Duration::from_millis(50));
        service.post("first");
        sleep(Duration::from_millis(30)).await;
        service.post("second");

        sleep(Duration::from_millis(35)).await;
        let remaining = service.snapshot();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "second");
    }
}
