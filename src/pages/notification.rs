use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

/// One banner at a time: a new notification replaces the previous one and
/// each expires `ttl` after it was shown.
#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<Notification>,
    ttl: Duration,
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            created_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Seconds left before the banner disappears, for the countdown hint
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.current
            .as_ref()
            .map(|n| self.ttl.saturating_sub(now.saturating_duration_since(n.created_at)).as_secs())
            .unwrap_or(0)
    }

    /// Drop the banner once it has outlived its ttl
    pub fn expire(&mut self, now: Instant) {
        if let Some(n) = &self.current {
            if now.saturating_duration_since(n.created_at) >= self.ttl {
                self.current = None;
            }
        }
    }
}
