//! Action creators: one HTTP call each, outcome reported through the store.

mod profile;

pub use profile::{DELETE_ACCOUNT_PROMPT, ProfileActions};

/// How an action invocation ended.
///
/// The store holds the details; this only tells the caller which branch ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Succeeded,
    Failed,
    /// The user declined the confirmation prompt; nothing was sent.
    Declined,
}

impl ActionStatus {
    pub fn is_success(self) -> bool {
        matches!(self, ActionStatus::Succeeded)
    }
}
