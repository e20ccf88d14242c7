//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates a temp DEVLINK_HOME directory for test isolation.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp devlink home")
}

/// `devlink` command isolated from the caller's environment.
pub fn devlink(home: &TempDir) -> assert_cmd::Command {
    devlink_at(home.path())
}

/// Same as [`devlink`] with an arbitrary `DEVLINK_HOME`.
pub fn devlink_at(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("devlink");
    cmd.env("DEVLINK_HOME", home)
        .env_remove("DEVLINK_API_URL")
        .env_remove("DEVLINK_TOKEN")
        .env_remove("DEVLINK_LOG");
    cmd
}

/// Same as [`devlink`], pointed at `api_url` with a session token.
pub fn devlink_signed_in(home: &TempDir, api_url: &str) -> assert_cmd::Command {
    let mut cmd = devlink(home);
    cmd.env("DEVLINK_API_URL", api_url)
        .env("DEVLINK_TOKEN", "test-token");
    cmd
}

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

pub fn profile_json(user_id: &str, name: &str) -> Value {
    json!({
        "_id": format!("profile-{user_id}"),
        "user": {"_id": user_id, "name": name, "avatar": "//www.gravatar.com/avatar/x"},
        "status": "Developer",
        "skills": ["rust", "sql"],
        "githubusername": "ada",
        "experience": [{
            "_id": "exp-1",
            "title": "Engineer",
            "company": "Acme",
            "from": "2019-01-01T00:00:00.000Z",
            "to": null,
            "current": true
        }],
        "education": [],
        "date": "2020-01-01T00:00:00.000Z"
    })
}

/// Concatenated contents of every log file under `$DEVLINK_HOME/logs`.
pub fn read_logs(home: &TempDir) -> String {
    let Ok(entries) = std::fs::read_dir(home.path().join("logs")) else {
        return String::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| std::fs::read_to_string(entry.path()).ok())
        .collect()
}

pub fn validation_errors(msgs: &[&str]) -> Value {
    let errors: Vec<Value> = msgs.iter().map(|msg| json!({ "msg": msg })).collect();
    json!({ "errors": errors })
}
