//! Account command handlers.

use std::io::{self, Write};

use anyhow::{Context, Result};
use devlink_core::actions::ActionStatus;
use devlink_core::config::{Config, paths};
use devlink_core::confirm::Confirm;

use super::{Session, pretty};

/// Asks on stderr and reads the answer from stdin.
///
/// Anything but `y`/`yes` (including a closed stdin) declines.
struct TerminalConfirm {
    assume_yes: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut err = io::stderr();
        if write!(err, "{message} [y/N] ").and_then(|()| err.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

pub async fn delete(session: &mut Session, yes: bool) -> Result<()> {
    session.require_login()?;
    let mut confirm = TerminalConfirm { assume_yes: yes };
    session.pending();
    let status = session
        .actions
        .delete_account(&mut confirm, &mut session.store)
        .await;

    if status == ActionStatus::Succeeded {
        forget_token()?;
    }
    session.finish(status, |state| pretty(&state.auth))
}

/// The session is gone with the account; drop a stored token too.
fn forget_token() -> Result<()> {
    let config_path = paths::config_path();
    if !config_path.exists() {
        return Ok(());
    }
    Config::save_token(&config_path, None)
        .with_context(|| format!("clear token in {}", config_path.display()))
}
