//! Profile action set.

use devlink_types::{Alert, AlertSeverity, EducationForm, ExperienceForm, ProfileForm};

use super::ActionStatus;
use crate::api::{ApiError, ProfileClient};
use crate::confirm::Confirm;
use crate::navigation::{DASHBOARD, Navigate};
use crate::store::{Action, Dispatch};

/// Question asked before an account is deleted.
pub const DELETE_ACCOUNT_PROMPT: &str = "Are you positive? Account cannot be recovered!";

/// Profile API calls translated into store updates.
///
/// Success dispatches the response payload; failure dispatches
/// `PROFILE_ERROR` with the response status. Invocations are independent:
/// nothing is deduplicated, retried or cancelled.
#[derive(Debug, Clone)]
pub struct ProfileActions {
    client: ProfileClient,
    alert_timeout_ms: u64,
}

impl ProfileActions {
    pub fn new(client: ProfileClient, alert_timeout_ms: u64) -> Self {
        Self {
            client,
            alert_timeout_ms,
        }
    }

    /// Loads the signed-in user's profile.
    pub async fn get_current_profile(&self, dispatch: &mut impl Dispatch) -> ActionStatus {
        match self.client.current_profile().await {
            Ok(profile) => {
                dispatch.dispatch(Action::GetProfile(profile));
                ActionStatus::Succeeded
            }
            Err(err) => Self::fail(dispatch, &err),
        }
    }

    /// Loads every profile. The cached profile is cleared first, whatever the outcome.
    pub async fn get_profiles(&self, dispatch: &mut impl Dispatch) -> ActionStatus {
        dispatch.dispatch(Action::ClearProfile);

        match self.client.profiles().await {
            Ok(profiles) => {
                dispatch.dispatch(Action::GetProfiles(profiles));
                ActionStatus::Succeeded
            }
            Err(err) => Self::fail(dispatch, &err),
        }
    }

    pub async fn get_profile_by_id(
        &self,
        user_id: &str,
        dispatch: &mut impl Dispatch,
    ) -> ActionStatus {
        match self.client.profile_by_user(user_id).await {
            Ok(profile) => {
                dispatch.dispatch(Action::GetProfile(profile));
                ActionStatus::Succeeded
            }
            Err(err) => Self::fail(dispatch, &err),
        }
    }

    pub async fn get_github_repos(
        &self,
        username: &str,
        dispatch: &mut impl Dispatch,
    ) -> ActionStatus {
        match self.client.github_repos(username).await {
            Ok(repos) => {
                dispatch.dispatch(Action::GetRepos(repos));
                ActionStatus::Succeeded
            }
            Err(err) => Self::fail(dispatch, &err),
        }
    }

    /// Creates or updates the profile, then goes to the dashboard.
    ///
    /// `edit` only selects the confirmation wording.
    pub async fn create_profile(
        &self,
        form: &ProfileForm,
        edit: bool,
        nav: &mut impl Navigate,
        dispatch: &mut impl Dispatch,
    ) -> ActionStatus {
        match self.client.upsert_profile(form).await {
            Ok(profile) => {
                dispatch.dispatch(Action::GetProfile(profile));
                let msg = if edit {
                    "Profile Updated"
                } else {
                    "Profile Created"
                };
                self.alert(dispatch, msg, AlertSeverity::Success);
                nav.push(DASHBOARD);
                ActionStatus::Succeeded
            }
            Err(err) => self.fail_with_field_errors(dispatch, &err),
        }
    }

    pub async fn add_experience(
        &self,
        form: &ExperienceForm,
        nav: &mut impl Navigate,
        dispatch: &mut impl Dispatch,
    ) -> ActionStatus {
        match self.client.add_experience(form).await {
            Ok(profile) => {
                dispatch.dispatch(Action::UpdateProfile(profile));
                self.alert(dispatch, "Experience Added", AlertSeverity::Success);
                nav.push(DASHBOARD);
                ActionStatus::Succeeded
            }
            Err(err) => self.fail_with_field_errors(dispatch, &err),
        }
    }

    pub async fn add_education(
        &self,
        form: &EducationForm,
        nav: &mut impl Navigate,
        dispatch: &mut impl Dispatch,
    ) -> ActionStatus {
        match self.client.add_education(form).await {
            Ok(profile) => {
                dispatch.dispatch(Action::UpdateProfile(profile));
                self.alert(dispatch, "Education Added", AlertSeverity::Success);
                nav.push(DASHBOARD);
                ActionStatus::Succeeded
            }
            Err(err) => self.fail_with_field_errors(dispatch, &err),
        }
    }

    pub async fn delete_experience(&self, id: &str, dispatch: &mut impl Dispatch) -> ActionStatus {
        match self.client.delete_experience(id).await {
            Ok(profile) => {
                dispatch.dispatch(Action::UpdateProfile(profile));
                self.alert(dispatch, "Experience Removed", AlertSeverity::Success);
                ActionStatus::Succeeded
            }
            Err(err) => Self::fail(dispatch, &err),
        }
    }

    pub async fn delete_education(&self, id: &str, dispatch: &mut impl Dispatch) -> ActionStatus {
        match self.client.delete_education(id).await {
            Ok(profile) => {
                dispatch.dispatch(Action::UpdateProfile(profile));
                self.alert(dispatch, "Education Removed", AlertSeverity::Success);
                ActionStatus::Succeeded
            }
            Err(err) => Self::fail(dispatch, &err),
        }
    }

    /// Deletes the account after an explicit confirmation.
    ///
    /// Declining sends nothing and dispatches nothing.
    pub async fn delete_account(
        &self,
        confirm: &mut impl Confirm,
        dispatch: &mut impl Dispatch,
    ) -> ActionStatus {
        if !confirm.confirm(DELETE_ACCOUNT_PROMPT) {
            tracing::debug!("account deletion declined");
            return ActionStatus::Declined;
        }

        match self.client.delete_account().await {
            Ok(()) => {
                dispatch.dispatch(Action::ClearProfile);
                dispatch.dispatch(Action::AccountDeleted);
                self.alert(dispatch, "Your account has been deleted", AlertSeverity::Info);
                ActionStatus::Succeeded
            }
            Err(err) => Self::fail(dispatch, &err),
        }
    }

    fn alert(&self, dispatch: &mut impl Dispatch, msg: &str, severity: AlertSeverity) {
        dispatch.dispatch(Action::SetAlert(Alert::new(
            msg,
            severity,
            self.alert_timeout_ms,
        )));
    }

    fn fail(dispatch: &mut impl Dispatch, err: &ApiError) -> ActionStatus {
        tracing::warn!(status = err.status, error = %err, "profile action failed");
        dispatch.dispatch(Action::ProfileError(err.to_payload()));
        ActionStatus::Failed
    }

    /// One danger alert per field error, then the usual error update.
    fn fail_with_field_errors(&self, dispatch: &mut impl Dispatch, err: &ApiError) -> ActionStatus {
        for field_error in &err.errors {
            self.alert(dispatch, &field_error.msg, AlertSeverity::Danger);
        }
        Self::fail(dispatch, err)
    }
}
