//! User-facing notification capability.

/// Shown after a lookup succeeded.
pub const SUCCESS_MESSAGE: &str = "Successfully fetched WHOIS data";

/// Shown after a lookup failed, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to fetch WHOIS data";

/// Outcome class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Receives the single notification fired by each completed submission.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications of the given kind.
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.notifications.iter().filter(|n| n.kind == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
