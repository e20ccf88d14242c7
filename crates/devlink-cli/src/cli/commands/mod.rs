//! Command handlers and the per-invocation session they share.

pub mod account;
pub mod config;
pub mod entries;
pub mod profile;

use std::fs;
use std::io::{IsTerminal, stderr};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use devlink_core::actions::{ActionStatus, ProfileActions};
use devlink_core::api::{ApiConfig, ProfileClient};
use devlink_core::config::Config;
use devlink_core::navigation::{History, LOGIN};
use devlink_core::routing::PrivateRoute;
use devlink_core::spinner::Spinner;
use devlink_core::store::{AppState, Store};
use devlink_core::types::AuthState;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Everything one command needs: the action set, the store it dispatches
/// into, and the route history.
pub struct Session {
    pub actions: ProfileActions,
    pub store: Store,
    pub history: History,
    guard: PrivateRoute,
}

impl Session {
    pub fn new(config: &Config, api_url_override: Option<&str>) -> Result<Self> {
        let mut api = ApiConfig::from_config(config)?;
        if let Some(url) = api_url_override {
            api.base_url = url.trim().to_string();
        }
        let auth = AuthState::with_token(api.token.clone());
        let client = ProfileClient::new(api).context("create profile client")?;
        tracing::debug!(
            base_url = %client.base_url(),
            authenticated = auth.is_authenticated,
            "session ready"
        );

        Ok(Self {
            actions: ProfileActions::new(client, config.alert_timeout_ms),
            store: Store::new(auth),
            history: History::new(),
            guard: PrivateRoute::default(),
        })
    }

    /// Gate for commands on private routes.
    pub fn require_login(&mut self) -> Result<()> {
        let auth = &self.store.state().auth;
        if self
            .guard
            .render(auth, &mut self.history, (), |()| ())
            .is_some()
        {
            return Ok(());
        }
        if auth.loading {
            anyhow::bail!("Session is still loading");
        }
        let path = self.history.current().unwrap_or(LOGIN);
        anyhow::bail!(
            "Not logged in (redirect to {path}). Run `devlink login --token <TOKEN>` first."
        )
    }

    /// Shows the loading indicator while a request is in flight.
    pub fn pending(&self) {
        if stderr().is_terminal() {
            eprintln!("{}", Spinner::ALT);
        }
    }

    /// Reports alerts and navigation, then prints `view` on success.
    ///
    /// A failed action becomes an error carrying the stored status.
    pub fn finish(
        &mut self,
        status: ActionStatus,
        view: impl FnOnce(&AppState) -> Result<String>,
    ) -> Result<()> {
        for entry in self.store.state().alerts.iter() {
            eprintln!("{}", entry.alert);
        }
        // shown once; expired alerts leave the store afterwards
        self.store.prune_alerts(Instant::now());
        for path in self.history.entries() {
            eprintln!("-> {path}");
        }

        match status {
            ActionStatus::Succeeded => {
                println!("{}", view(self.store.state())?);
                Ok(())
            }
            ActionStatus::Declined => {
                println!("Cancelled.");
                Ok(())
            }
            ActionStatus::Failed => match &self.store.state().profile.error {
                Some(error) if error.status == 0 => anyhow::bail!("Request failed: {}", error.msg),
                Some(error) => anyhow::bail!("Request failed: {} {}", error.status, error.msg),
                None => anyhow::bail!("Request failed"),
            },
        }
    }
}

/// Pretty JSON for stdout.
pub fn pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}

/// Reads a JSON form file.
pub fn read_form<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse form from {}", path.display()))
}
