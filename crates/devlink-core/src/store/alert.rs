//! Alert slice: active notifications and their expiry.

use std::time::{Duration, Instant};

use devlink_types::Alert;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ActiveAlert {
    pub alert: Alert,
    pub expires_at: Instant,
}

/// Notifications currently shown, oldest first.
#[derive(Debug, Clone, Default)]
pub struct AlertState {
    entries: Vec<ActiveAlert>,
}

impl AlertState {
    pub(super) fn push(&mut self, alert: Alert, now: Instant) {
        let expires_at = now + Duration::from_millis(alert.timeout_ms);
        self.entries.push(ActiveAlert { alert, expires_at });
    }

    pub(super) fn remove(&mut self, id: Uuid) {
        self.entries.retain(|entry| entry.alert.id != id);
    }

    pub(super) fn expired(&self, now: Instant) -> Vec<Uuid> {
        self.entries
            .iter()
            .filter(|entry| entry.expires_at <= now)
            .map(|entry| entry.alert.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveAlert> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
