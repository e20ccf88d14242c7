//! Config and login command handlers.

use anyhow::{Context, Result};
use devlink_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn login(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        anyhow::bail!("Token must not be empty");
    }
    let config_path = config::paths::config_path();
    config::Config::save_token(&config_path, Some(token))
        .with_context(|| format!("save token to {}", config_path.display()))?;
    println!("Saved token to {}", config_path.display());
    Ok(())
}

pub fn logout() -> Result<()> {
    let config_path = config::paths::config_path();
    if config_path.exists() {
        config::Config::save_token(&config_path, None)
            .with_context(|| format!("clear token in {}", config_path.display()))?;
    }
    println!("Logged out");
    Ok(())
}
