//! Experience and education command handlers.

use std::path::Path;

use anyhow::Result;
use devlink_core::types::{EducationForm, ExperienceForm};

use super::{Session, pretty, read_form};

pub async fn add_experience(session: &mut Session, file: &Path) -> Result<()> {
    session.require_login()?;
    let form: ExperienceForm = read_form(file)?;
    session.pending();
    let status = session
        .actions
        .add_experience(&form, &mut session.history, &mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.profile))
}

pub async fn remove_experience(session: &mut Session, id: &str) -> Result<()> {
    session.require_login()?;
    session.pending();
    let status = session
        .actions
        .delete_experience(id, &mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.profile))
}

pub async fn add_education(session: &mut Session, file: &Path) -> Result<()> {
    session.require_login()?;
    let form: EducationForm = read_form(file)?;
    session.pending();
    let status = session
        .actions
        .add_education(&form, &mut session.history, &mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.profile))
}

pub async fn remove_education(session: &mut Session, id: &str) -> Result<()> {
    session.require_login()?;
    session.pending();
    let status = session
        .actions
        .delete_education(id, &mut session.store)
        .await;
    session.finish(status, |state| pretty(&state.profile.profile))
}
