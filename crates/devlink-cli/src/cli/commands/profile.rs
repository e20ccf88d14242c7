//! Profile command handlers.

use std::path::Path;

use anyhow::Result;
use devlink_core::types::ProfileForm;

use super::{Session, pretty, read_form};

pub async fn me(session: &mut Session) -> Result<()> {
    session.require_login()?;
    session.pending();
    let status = session
        .actions
        .get_current_profile(&mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.profile))
}

pub async fn list(session: &mut Session) -> Result<()> {
    session.pending();
    let status = session.actions.get_profiles(&mut session.store).await;
    session.finish(status, |state| pretty(&state.profile.profiles))
}

pub async fn show(session: &mut Session, user_id: &str) -> Result<()> {
    session.pending();
    let status = session
        .actions
        .get_profile_by_id(user_id, &mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.profile))
}

pub async fn repos(session: &mut Session, username: &str) -> Result<()> {
    session.pending();
    let status = session
        .actions
        .get_github_repos(username, &mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.repos))
}

/// Prints the current profile as a pre-filled edit form.
pub async fn form(session: &mut Session) -> Result<()> {
    session.require_login()?;
    session.pending();
    let status = session
        .actions
        .get_current_profile(&mut session.store)
        .await;
    session.finish(status, |state| {
        let form = state
            .profile
            .profile
            .as_ref()
            .map(ProfileForm::from_profile)
            .unwrap_or_default();
        pretty(&form)
    })
}

pub async fn save(session: &mut Session, file: &Path, edit: bool) -> Result<()> {
    session.require_login()?;
    let form: ProfileForm = read_form(file)?;
    session.pending();
    let status = session
        .actions
        .create_profile(&form, edit, &mut session.history, &mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.profile))
}
