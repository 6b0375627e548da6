//! 通知状态
//!
//! 成功通知显示 2 秒，失败通知显示 4 秒；最新的在最前。

use std::time::{Duration, Instant};

use whois_lookup_core::{Notification, NotificationKind, Notifier};

/// 成功通知的显示时长
pub const SUCCESS_TTL: Duration = Duration::from_secs(2);

/// 失败通知的显示时长
pub const FAILURE_TTL: Duration = Duration::from_secs(4);

/// 一条正在显示的通知
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn kind(&self) -> NotificationKind {
        self.notification.kind
    }

    pub fn ttl(&self) -> Duration {
        match self.kind() {
            NotificationKind::Success => SUCCESS_TTL,
            NotificationKind::Failure => FAILURE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl()
    }
}

/// 通知栈
#[derive(Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
}

impl ToastState {
    /// 压入一条通知（放在最前）
    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.toasts.insert(
            0,
            Toast {
                notification,
                shown_at: now,
            },
        );
    }

    /// 移除已过期的通知
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// 从新到旧遍历
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastState {
    fn notify(&mut self, notification: Notification) {
        log::debug!("[toast] {:?}: {}", notification.kind, notification.message);
        self.push(notification, Instant::now());
    }
}
