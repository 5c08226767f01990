//! Simulated biometric login
//!
//! A scripted fake-delay state transition on the login trigger: idle,
//! scanning for a fixed delay, success feedback, then navigation to the
//! dashboard after a further delay. No credential of any kind is checked;
//! this exists purely for the demo login screen and must never be wired
//! to anything that matters.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::models::ToastKind;
use crate::services::toast_service::ToastService;

pub const IDLE_LABEL: &str = "Login with Face ID";
pub const SCANNING_LABEL: &str = "Scanning Face ID...";

/// Scan trigger state. Success returns the trigger to `Idle`; the
/// outcome travels on the event channel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
}

/// Events emitted by a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// The fake scan finished; the trigger is re-enabled
    Authenticated,
    /// The post-success pause elapsed; switch to the dashboard
    Navigate,
}

/// Delays of the scripted scan
#[derive(Debug, Clone, Copy)]
pub struct AuthTiming {
    pub scan: Duration,
    pub redirect: Duration,
}

impl Default for AuthTiming {
    fn default() -> Self {
        AuthTiming {
            scan: Duration::from_millis(2000),
            redirect: Duration::from_millis(900),
        }
    }
}

/// The login trigger and its re-entrancy gate
#[derive(Clone)]
pub struct BiometricAuth {
    state: Arc<Mutex<ScanState>>,
    timing: AuthTiming,
}

impl Default for BiometricAuth {
    fn default() -> Self {
        BiometricAuth::with_timing(AuthTiming::default())
    }
}

impl BiometricAuth {
    pub fn new() -> Self {
        BiometricAuth::default()
    }

    pub fn with_timing(timing: AuthTiming) -> Self {
        BiometricAuth {
            state: Arc::new(Mutex::new(ScanState::Idle)),
            timing,
        }
    }

    pub fn state(&self) -> ScanState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_scanning(&self) -> bool {
        self.state() == ScanState::Scanning
    }

    /// Label for the login trigger in its current state
    pub fn button_label(&self) -> &'static str {
        match self.state() {
            ScanState::Idle => IDLE_LABEL,
            ScanState::Scanning => SCANNING_LABEL,
        }
    }

    /// Start the fake scan. Returns false without starting any timers
    /// when a scan is already running.
    pub fn begin_scan(&self, toasts: ToastService, events: UnboundedSender<AuthEvent>) -> bool {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if *state == ScanState::Scanning {
                debug!("scan already in progress, ignoring trigger");
                return false;
            }
            *state = ScanState::Scanning;
        }

        toasts.show("Scanning biometric data...", ToastKind::Info);

        let state = Arc::clone(&self.state);
        let timing = self.timing;
        tokio::spawn(async move {
            sleep(timing.scan).await;
            *state.lock().unwrap_or_else(PoisonError::into_inner) = ScanState::Idle;
            toasts.show("Authentication Successful ✅", ToastKind::Success);
            info!("biometric scan complete");
            let _ = events.send(AuthEvent::Authenticated);

            sleep(timing.redirect).await;
            let _ = events.send(AuthEvent::Navigate);
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::toast_service::ToastTiming;
    use tokio::sync::mpsc::unbounded_channel;

    fn fast() -> AuthTiming {
        AuthTiming {
            scan: Duration::from_millis(30),
            redirect: Duration::from_millis(20),
        }
    }

    fn quiet_toasts() -> ToastService {
        ToastService::with_timing(
            ToastTiming {
                entry: Duration::from_millis(1),
                visible: Duration::from_millis(10),
                exit: Duration::from_millis(1),
            },
            5,
        )
    }

    #[tokio::test]
    async fn test_scan_completes_and_navigates() {
        let auth = BiometricAuth::with_timing(fast());
        let toasts = quiet_toasts();
        let (tx, mut rx) = unbounded_channel();

        assert!(auth.begin_scan(toasts.clone(), tx));
        assert!(auth.is_scanning());
        assert_eq!(auth.button_label(), SCANNING_LABEL);
        // the info toast goes up as the scan starts
        assert_eq!(toasts.snapshot()[0].kind, ToastKind::Info);

        assert_eq!(rx.recv().await, Some(AuthEvent::Authenticated));
        assert_eq!(auth.state(), ScanState::Idle);
        assert_eq!(auth.button_label(), IDLE_LABEL);

        assert_eq!(rx.recv().await, Some(AuthEvent::Navigate));
    }

    #[tokio::test]
    async fn test_retrigger_while_scanning_is_a_noop() {
        let auth = BiometricAuth::with_timing(fast());
        let toasts = quiet_toasts();
        let (tx, mut rx) = unbounded_channel();

        assert!(auth.begin_scan(toasts.clone(), tx.clone()));
        assert!(!auth.begin_scan(toasts.clone(), tx.clone()));
        assert!(!auth.begin_scan(toasts, tx));

        // exactly one scan's worth of events, no duplicate timers
        assert_eq!(rx.recv().await, Some(AuthEvent::Authenticated));
        assert_eq!(rx.recv().await, Some(AuthEvent::Navigate));
        sleep(Duration::from_millis(80)).await;
        assert!(rx.try_recv().is_err());
    }
}
