//! Display ports
//!
//! Every writable surface on a screen is registered here by id, and the
//! animated services write through the `DisplayPort` trait instead of
//! reaching for the surface directly. The render loop reads the same
//! slots back. Tests substitute their own port implementations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::utils::DashboardError;

/// Ids of the surfaces the dashboard writes to
pub const LIVE_BALANCE: &str = "liveBalance";
pub const SCORE_VALUE: &str = "scoreValue";
pub const SCORE_LABEL: &str = "scoreLabel";
pub const TOAST_CONTAINER: &str = "toastContainer";
pub const NOTICE_CONTAINER: &str = "notificationContainer";

/// A surface that accepts text writes
pub trait DisplayPort: Send + Sync {
    fn set_text(&self, text: &str);
}

/// In-process text surface backed by shared state; the writer side is a
/// `DisplayPort`, the render loop reads with [`TextSlot::read`]
#[derive(Debug, Clone, Default)]
pub struct TextSlot {
    text: Arc<Mutex<String>>,
}

impl TextSlot {
    pub fn new(initial: &str) -> Self {
        TextSlot {
            text: Arc::new(Mutex::new(initial.to_string())),
        }
    }

    pub fn read(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DisplayPort for TextSlot {
    fn set_text(&self, text: &str) {
        let mut guard = self.text.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = text.to_string();
    }
}

/// Registry of display surfaces, keyed by element id
#[derive(Debug, Default)]
pub struct ViewRegistry {
    ports: HashMap<String, TextSlot>,
}

impl ViewRegistry {
    /// Registry with every dashboard surface present
    pub fn with_dashboard_ports() -> Self {
        let mut registry = ViewRegistry::default();
        for id in [
            LIVE_BALANCE,
            SCORE_VALUE,
            SCORE_LABEL,
            TOAST_CONTAINER,
            NOTICE_CONTAINER,
        ] {
            registry.insert(id, TextSlot::default());
        }
        registry
    }

    pub fn insert(&mut self, id: &str, slot: TextSlot) {
        self.ports.insert(id.to_string(), slot);
    }

    /// Optional lookup for the guarded paths: absence means the feature
    /// silently skips
    pub fn get(&self, id: &str) -> Option<TextSlot> {
        self.ports.get(id).cloned()
    }

    /// Required lookup for the unguarded paths: absence is a precondition
    /// violation
    pub fn require(&self, id: &str) -> Result<TextSlot, DashboardError> {
        self.ports
            .get(id)
            .cloned()
            .ok_or_else(|| DashboardError::ElementNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_roundtrip() {
        let slot = TextSlot::new("$0");
        assert_eq!(slot.read(), "$0");
        slot.set_text("$1,000");
        assert_eq!(slot.read(), "$1,000");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ViewRegistry::with_dashboard_ports();
        assert!(registry.get(LIVE_BALANCE).is_some());
        assert!(registry.require(SCORE_VALUE).is_ok());

        let empty = ViewRegistry::default();
        assert!(empty.get(TOAST_CONTAINER).is_none());
        let err = empty.require(LIVE_BALANCE).unwrap_err();
        assert!(err.to_string().contains("liveBalance"));
    }
}
