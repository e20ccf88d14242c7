//! Integration tests for profile, experience and education commands.

mod fixtures;

use std::fs;

use fixtures::{
    can_bind_localhost, devlink, devlink_signed_in, profile_json, read_logs, temp_home,
    validation_errors,
};
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_profile_list_prints_profiles() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            profile_json("u1", "Ada Lovelace"),
            profile_json("u2", "Grace Hopper")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let output = devlink(&home)
        .args(["profile", "list", "--api-url", &server.uri()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let printed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(printed.as_array().map(Vec::len), Some(2));
    assert_eq!(printed[1]["user"]["name"], "Grace Hopper");
}

#[tokio::test]
async fn test_profile_show_failure_reports_status() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/user/missing"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"msg": "Profile not found"})))
        .mount(&server)
        .await;

    devlink(&home)
        .env("DEVLINK_API_URL", server.uri())
        .args(["profile", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request failed: 400 Bad Request"))
        .stderr(predicate::str::contains("profile action failed").not());

    assert!(read_logs(&home).contains("profile action failed"));
}

#[tokio::test]
async fn test_profile_form_prefills_from_current_profile() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    let mut body = profile_json("u1", "Ada Lovelace");
    body["bio"] = Value::Null;
    body["social"] = json!({"twitter": "https://twitter.com/ada", "youtube": null});
    Mock::given(method("GET"))
        .and(path("/api/profile/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let output = devlink_signed_in(&home, &server.uri())
        .args(["profile", "form"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let form: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        form,
        json!({
            "status": "Developer",
            "skills": "rust,sql",
            "githubusername": "ada",
            "twitter": "https://twitter.com/ada"
        })
    );
}

#[tokio::test]
async fn test_profile_me_keeps_nulls_in_output() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    let mut body = profile_json("u1", "Ada Lovelace");
    body["company"] = Value::Null;
    body.as_object_mut().unwrap().remove("education");
    Mock::given(method("GET"))
        .and(path("/api/profile/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let output = devlink_signed_in(&home, &server.uri())
        .args(["profile", "me"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let printed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(printed, body);
}

#[tokio::test]
async fn test_profile_repos() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/github/ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "analytical-engine",
            "html_url": "https://github.com/ada/analytical-engine",
            "description": "Notes",
            "stargazers_count": 42,
            "watchers_count": 42,
            "forks_count": 7
        }])))
        .expect(1)
        .mount(&server)
        .await;

    devlink(&home)
        .env("DEVLINK_API_URL", server.uri())
        .args(["profile", "repos", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("analytical-engine"))
        .stdout(predicate::str::contains("\"stargazers_count\": 42"));
}

#[test]
fn test_profile_me_requires_login() {
    let home = temp_home();

    devlink(&home)
        .env("DEVLINK_API_URL", "http://127.0.0.1:9")
        .args(["profile", "me"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in (redirect to /login)"));
}

#[tokio::test]
async fn test_profile_me_sends_stored_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/me"))
        .and(header("x-auth-token", "stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("u1", "Ada Lovelace")))
        .expect(1)
        .mount(&server)
        .await;

    devlink(&home)
        .args(["login", "--token", "stored-token"])
        .assert()
        .success();

    devlink(&home)
        .env("DEVLINK_API_URL", server.uri())
        .args(["profile", "me"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"));
}

#[tokio::test]
async fn test_profile_save_success_alerts_and_redirects() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let form_path = home.path().join("profile.json");
    fs::write(&form_path, r#"{"status": "Developer", "skills": "rust,sql"}"#).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/profile"))
        .and(body_json(json!({"status": "Developer", "skills": "rust,sql"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("u1", "Ada Lovelace")))
        .expect(1)
        .mount(&server)
        .await;

    devlink_signed_in(&home, &server.uri())
        .args(["profile", "save", "--file", form_path.to_str().unwrap(), "--edit"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[success] Profile Updated"))
        .stderr(predicate::str::contains("-> /dashboard"));
}

#[tokio::test]
async fn test_profile_save_validation_errors() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let form_path = home.path().join("profile.json");
    fs::write(&form_path, r#"{"status": "", "skills": ""}"#).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(400).set_body_json(validation_errors(&[
            "Status is required",
            "Skills is required",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    devlink_signed_in(&home, &server.uri())
        .args(["profile", "save", "--file", form_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[danger] Status is required"))
        .stderr(predicate::str::contains("[danger] Skills is required"))
        .stderr(predicate::str::contains("Request failed: 400 Bad Request"))
        .stderr(predicate::str::contains("/dashboard").not());
}

#[test]
fn test_profile_save_rejects_malformed_form() {
    let home = temp_home();
    let form_path = home.path().join("profile.json");
    fs::write(&form_path, "{not json").unwrap();

    devlink_signed_in(&home, "http://127.0.0.1:9")
        .args(["profile", "save", "--file", form_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse form"));
}

#[tokio::test]
async fn test_experience_add_and_remove() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let form_path = home.path().join("experience.json");
    fs::write(
        &form_path,
        r#"{"title": "Engineer", "company": "Acme", "from": "2019-01-01", "current": true}"#,
    )
    .unwrap();

    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/profile/experience"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("u1", "Ada Lovelace")))
        .expect(1)
        .mount(&server)
        .await;
    let mut without_experience = profile_json("u1", "Ada Lovelace");
    without_experience["experience"] = json!([]);
    Mock::given(method("DELETE"))
        .and(path("/api/profile/experience/exp-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(without_experience))
        .expect(1)
        .mount(&server)
        .await;

    devlink_signed_in(&home, &server.uri())
        .args(["experience", "add", "--file", form_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("[success] Experience Added"))
        .stderr(predicate::str::contains("-> /dashboard"))
        .stdout(predicate::str::contains("exp-1"));

    devlink_signed_in(&home, &server.uri())
        .args(["experience", "remove", "exp-1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[success] Experience Removed"))
        .stderr(predicate::str::contains("-> ").not())
        .stdout(predicate::str::contains("exp-1").not());
}

#[tokio::test]
async fn test_education_add_validation_errors() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let form_path = home.path().join("education.json");
    fs::write(
        &form_path,
        r#"{"school": "", "degree": "", "fieldofstudy": "", "from": ""}"#,
    )
    .unwrap();

    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/profile/education"))
        .respond_with(ResponseTemplate::new(400).set_body_json(validation_errors(&[
            "School is required",
            "Degree is required",
            "Field of study is required",
            "From date is required",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let assert = devlink_signed_in(&home, &server.uri())
        .args(["education", "add", "--file", form_path.to_str().unwrap()])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("[danger]").count(), 4, "stderr: {stderr}");
}

#[tokio::test]
async fn test_zero_alert_timeout_still_shows_alerts() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    fs::write(home.path().join("config.toml"), "alert_timeout_ms = 0\n").unwrap();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/profile/experience/exp-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("u1", "Ada Lovelace")))
        .expect(1)
        .mount(&server)
        .await;

    devlink_signed_in(&home, &server.uri())
        .args(["experience", "remove", "exp-1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[success] Experience Removed"));
}

#[tokio::test]
async fn test_education_remove() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/profile/education/edu-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("u1", "Ada Lovelace")))
        .expect(1)
        .mount(&server)
        .await;

    devlink_signed_in(&home, &server.uri())
        .args(["education", "remove", "edu-1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[success] Education Removed"));
}

#[test]
fn test_unreachable_api_reports_transport_error() {
    let home = temp_home();

    devlink(&home)
        .env("DEVLINK_API_URL", "http://127.0.0.1:9")
        .args(["profile", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request failed:"));
}
