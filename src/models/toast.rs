//! Toast and notification models

use uuid::Uuid;

/// Toast severity, mapped to its display style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Lifecycle phase of a toast. Each toast moves through the phases in
/// order, driven by its own timers, and is dropped after `Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Appended but not yet visible (the pre-transition frame)
    Created,
    /// Fully visible
    Shown,
    /// Playing the exit animation
    Hiding,
}

/// A short-lived, auto-dismissing message overlay
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub text: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn new(text: impl Into<String>, kind: ToastKind) -> Self {
        Toast {
            id: Uuid::new_v4(),
            text: text.into(),
            kind,
            phase: ToastPhase::Created,
        }
    }
}

/// The plain notification variant: a single text line with one removal
/// timer and no phases
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub text: String,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Notice {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}
