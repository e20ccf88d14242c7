//! Central application store.
//!
//! State changes only through [`Dispatch::dispatch`]. Each [`Action`]
//! is routed to exactly one slice reducer; reducers mutate their slice
//! and never perform I/O.

mod alert;
mod auth;
mod profile;

use std::time::Instant;

use devlink_types::{Alert, AuthState, GithubRepo, Profile, ProfileError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use alert::{ActiveAlert, AlertState};
pub use profile::ProfileState;

/// Updates accepted by the store.
///
/// Serializes as `{"type": "GET_PROFILE", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    GetProfile(Profile),
    GetProfiles(Vec<Profile>),
    GetRepos(Vec<GithubRepo>),
    UpdateProfile(Profile),
    ProfileError(ProfileError),
    ClearProfile,
    AccountDeleted,
    SetAlert(Alert),
    RemoveAlert(Uuid),
}

impl Action {
    /// Wire name of the update kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::GetProfile(_) => "GET_PROFILE",
            Action::GetProfiles(_) => "GET_PROFILES",
            Action::GetRepos(_) => "GET_REPOS",
            Action::UpdateProfile(_) => "UPDATE_PROFILE",
            Action::ProfileError(_) => "PROFILE_ERROR",
            Action::ClearProfile => "CLEAR_PROFILE",
            Action::AccountDeleted => "ACCOUNT_DELETED",
            Action::SetAlert(_) => "SET_ALERT",
            Action::RemoveAlert(_) => "REMOVE_ALERT",
        }
    }
}

/// Sink for store updates.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// Records updates in order without applying them.
impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

impl<D: Dispatch + ?Sized> Dispatch for &mut D {
    fn dispatch(&mut self, action: Action) {
        (**self).dispatch(action);
    }
}

/// Whole application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub profile: ProfileState,
    pub alerts: AlertState,
}

/// Owns [`AppState`] and applies dispatched updates to it.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(auth: AuthState) -> Self {
        Self {
            state: AppState {
                auth,
                ..AppState::default()
            },
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one update as if received at `now`.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) {
        tracing::debug!(kind = action.kind(), "dispatch");
        match action {
            Action::SetAlert(alert) => self.state.alerts.push(alert, now),
            Action::RemoveAlert(id) => self.state.alerts.remove(id),
            Action::AccountDeleted => auth::account_deleted(&mut self.state.auth),
            other => profile::reduce(&mut self.state.profile, other),
        }
    }

    /// Removes alerts whose timeout has elapsed at `now`.
    ///
    /// Each removal goes through `REMOVE_ALERT`. Returns how many were removed.
    pub fn prune_alerts(&mut self, now: Instant) -> usize {
        let expired = self.state.alerts.expired(now);
        let count = expired.len();
        for id in expired {
            self.dispatch_at(Action::RemoveAlert(id), now);
        }
        count
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        self.dispatch_at(action, Instant::now());
    }
}
