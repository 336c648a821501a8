//! Transient user notifications (toasts).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub created_at: Instant,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = match self.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Failure => "error",
        };
        write!(f, "[{}] {}: {}", mark, self.title, self.description)
    }
}

#[derive(Debug, Clone)]
pub struct Notifications {
    items: VecDeque<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 1,
            ttl,
        }
    }

    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        self.push_at(kind, title, description, Instant::now())
    }

    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.items.push_back(Notification {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            created_at: now,
        });
        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        id
    }

    /// Drops every notification older than the ttl. Returns whether any
    /// were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
        self.items.len() != before
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Notifications newer than `id`, oldest first.
    pub fn since(&self, id: u64) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| n.id > id)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/notification.rs"]
mod tests;
