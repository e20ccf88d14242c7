//! Profile slice reducer.

use devlink_types::{GithubRepo, Profile, ProfileError};
use serde::Serialize;

use super::Action;

/// Cached profile data. At most one profile is cached at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub profiles: Vec<Profile>,
    pub repos: Vec<GithubRepo>,
    pub loading: bool,
    pub error: Option<ProfileError>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            profiles: Vec::new(),
            repos: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

pub(super) fn reduce(state: &mut ProfileState, action: Action) {
    match action {
        Action::GetProfile(profile) | Action::UpdateProfile(profile) => {
            state.profile = Some(profile);
            state.loading = false;
        }
        Action::GetProfiles(profiles) => {
            state.profiles = profiles;
            state.loading = false;
        }
        Action::GetRepos(repos) => {
            state.repos = repos;
            state.loading = false;
        }
        Action::ProfileError(error) => {
            state.error = Some(error);
            state.profile = None;
            state.loading = false;
        }
        Action::ClearProfile => {
            state.profile = None;
            state.repos.clear();
            state.loading = false;
        }
        Action::AccountDeleted | Action::SetAlert(_) | Action::RemoveAlert(_) => {}
    }
}
