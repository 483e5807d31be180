//! User-facing notifications emitted by the application layer.

use std::time::Duration;

/// How long a toast stays on screen before the host dismisses it.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Classifies notifications by intent so the host can style them.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient message for the user. Not persisted anywhere.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Seam through which the host UI receives toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Routes notifications to the log. Used when no UI is attached.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => {
                tracing::info!(message = %notification.message, "notification")
            }
            Severity::Warning => tracing::warn!(message = %notification.message, "notification"),
            Severity::Error => tracing::error!(message = %notification.message, "notification"),
        }
    }
}

/// Seam through which the host UI prompts the user before a destructive
/// action proceeds.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}
