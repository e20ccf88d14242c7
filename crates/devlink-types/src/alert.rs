//! Transient user notifications.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of an alert. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Success,
    Danger,
    /// Neutral message (no styling)
    #[default]
    Info,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Success => "success",
            AlertSeverity::Danger => "danger",
            AlertSeverity::Info => "info",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A message shown to the user until its timeout elapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub msg: String,
    pub alert_type: AlertSeverity,
    /// Lifetime in milliseconds, counted from when the store receives it
    pub timeout_ms: u64,
}

impl Alert {
    /// Creates an alert with a fresh random id.
    pub fn new(msg: impl Into<String>, alert_type: AlertSeverity, timeout_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            msg: msg.into(),
            alert_type,
            timeout_ms,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.alert_type, self.msg)
    }
}
