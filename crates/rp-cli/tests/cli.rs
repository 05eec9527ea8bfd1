//! End-to-end tests for the recipe-page binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PAGE: &str = r#"{
    "recipe": {"slug": "pasta", "title": "Weeknight Pasta"},
    "rating": {},
    "comment_form": {
        "url": "/api/recipes/recipe/pasta/comment/",
        "fields": {"csrfmiddlewaretoken": "tok"}
    },
    "comments": [
        {"id": "42", "author": "alice", "html": "<p>Lovely</p>"}
    ]
}"#;

fn recipe_page(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("recipe-page").unwrap();
    cmd.arg("--no-color").arg("--config").arg(config);
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Config pointing at a port nothing listens on
fn offline_config(dir: &TempDir) -> PathBuf {
    write(
        dir,
        "config.toml",
        "[site]\nbase_url = \"http://127.0.0.1:9\"\n\n[http]\ntimeout_secs = 5\n",
    )
}

#[test]
fn test_help() {
    Command::cargo_bin("recipe-page")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("comment"))
        .stdout(predicate::str::contains("rate"));
}

#[test]
fn test_config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    recipe_page(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_init_then_validate() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");

    recipe_page(&config).args(["config", "init"]).assert().success();
    assert!(config.exists());

    recipe_page(&config)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    recipe_page(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_show_json() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("missing.toml");
    recipe_page(&config)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"placeholder\": \"Write a comment...\""));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.toml", "[rating]\nmin = 3\nmax = 2\n");
    recipe_page(&config)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_reset_force_keeps_backup() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.toml", "[ui]\ntheme = \"plain\"\n");
    recipe_page(&config)
        .args(["config", "reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed up"));

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("theme = \"default\""));
}

#[test]
fn test_rate_without_transport() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(&dir);
    let page = write(&dir, "page.json", PAGE);

    recipe_page(&config)
        .args(["rate", "--page"])
        .arg(&page)
        .args(["--value", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-3.0"))
        .stdout(predicate::str::contains("was not sent"));
}

#[test]
fn test_rate_out_of_range() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(&dir);
    let page = write(&dir, "page.json", PAGE);

    recipe_page(&config)
        .args(["rate", "--page"])
        .arg(&page)
        .args(["--value", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}

#[test]
fn test_comment_transport_failure() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(&dir);
    let page = write(&dir, "page.json", PAGE);

    recipe_page(&config)
        .args(["comment", "--page"])
        .arg(&page)
        .args(["--text", "Nice dish!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to post comment. Please try again."));
}

#[test]
fn test_reply_to_unknown_comment() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(&dir);
    let page = write(&dir, "page.json", PAGE);

    recipe_page(&config)
        .args(["comment", "--page"])
        .arg(&page)
        .args(["--text", "Thanks!", "--reply-to", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Comment not found: 999"));
}

#[test]
fn test_guest_cannot_comment() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(&dir);
    let page = write(
        &dir,
        "page.json",
        &PAGE.replace("\"fields\"", "\"guest\": true, \"fields\""),
    );

    recipe_page(&config)
        .args(["comment", "--page"])
        .arg(&page)
        .args(["--text", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sign in"));
}

#[test]
fn test_missing_page_file() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(&dir);

    recipe_page(&config)
        .args(["rate", "--page"])
        .arg(dir.path().join("nope.json"))
        .args(["--value", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load page"));
}
