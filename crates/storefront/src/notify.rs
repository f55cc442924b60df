//! User-visible notifications (toasts).
//!
//! Store mutations emit `(message, severity)` pairs; the presenter is
//! injected so the store never knows how toasts are rendered.

use std::sync::Mutex;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A notification as emitted by store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Consumer of user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Present a transient notification to the user.
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier that forwards toasts to `tracing` at the matching level.
///
/// Useful as a default presenter when no UI layer is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => tracing::info!(toast = message),
            Severity::Warning => tracing::warn!(toast = message),
            Severity::Error => tracing::error!(toast = message),
        }
    }
}

/// Notifier that records every toast for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded notifications, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (a prior test panic).
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notification lock poisoned")
            .clone()
    }

    /// The most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }

    /// Drain all recorded notifications.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (a prior test panic).
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(
            &mut *self
                .notifications
                .lock()
                .expect("notification lock poisoned"),
        )
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(Notification {
                message: message.to_owned(),
                severity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_records_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first", Severity::Success);
        notifier.notify("second", Severity::Error);

        let recorded = notifier.notifications();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].message, "first");
        assert_eq!(recorded[1].severity, Severity::Error);

        assert_eq!(notifier.last().map(|n| n.message), Some("second".to_owned()));
    }

    #[test]
    fn test_take_drains() {
        let notifier = RecordingNotifier::new();
        notifier.notify("only", Severity::Info);

        assert_eq!(notifier.take().len(), 1);
        assert!(notifier.notifications().is_empty());
    }
}
