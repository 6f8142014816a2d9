//! Configuration as the binary sees it.
//!
//! Merge order and format handling are unit-tested in `inkgauge-core`; these
//! tests check that discovery runs from the working directory and that the
//! loaded values reach `analyze` and `info`.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("INKGAUGE_MAX_SCORE")
        .env_remove("INKGAUGE_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .arg("-C")
        .arg(dir);
    cmd
}

/// `info --json` run from `dir`, returning its `config` object.
fn effective_config(dir: &Path) -> Value {
    let output = cmd_in(dir).args(["info", "--json"]).output().unwrap();
    assert!(
        output.status.success(),
        "info failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    json["config"].clone()
}

/// A temp directory with a `.git` marker, so discovery cannot escape it.
fn repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    tmp
}

const COMPLEX_POST: &str = "<p>Beautiful.</p>";

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn no_config_reports_defaults() {
    let repo = repo();
    let config = effective_config(repo.path());

    assert!(config["config_file"].is_null());
    assert_eq!(config["log_level"], "info");
    assert!(config["max_score"].is_null());
    assert_eq!(config["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn config_found_from_nested_directory() {
    let repo = repo();
    let drafts = repo.path().join("posts").join("drafts");
    fs::create_dir_all(&drafts).unwrap();
    fs::write(repo.path().join(".inkgauge.toml"), "max_score = 6.5\n").unwrap();

    let config = effective_config(&drafts);
    assert_eq!(config["max_score"], 6.5);
    let file = config["config_file"].as_str().unwrap();
    assert!(file.ends_with(".inkgauge.toml"), "reported {file}");
}

#[test]
fn parent_of_repo_is_not_searched_from_inside() {
    let outer = TempDir::new().unwrap();
    let src = outer.path().join("repo").join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(outer.path().join("repo").join(".git")).unwrap();
    fs::write(outer.path().join(".inkgauge.toml"), "max_score = 2.5\n").unwrap();

    let config = effective_config(&src);
    assert!(config["config_file"].is_null());
    assert!(config["max_score"].is_null());
}

#[test]
fn parent_of_repo_is_not_searched_from_repo_root() {
    let outer = TempDir::new().unwrap();
    let root = outer.path().join("repo");
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(outer.path().join(".inkgauge.toml"), "max_score = 2.5\n").unwrap();
    fs::write(root.join("post.html"), COMPLEX_POST).unwrap();

    let config = effective_config(&root);
    assert!(config["config_file"].is_null());
    assert!(config["max_score"].is_null());

    // The outside gate would fail this post
    cmd_in(&root).args(["analyze", "post.html"]).assert().success();
}

#[test]
fn explicit_config_is_merged_last() {
    let repo = repo();
    fs::write(
        repo.path().join("inkgauge.toml"),
        "max_score = 6.0\nlog_level = \"warn\"\n",
    )
    .unwrap();
    let strict = repo.path().join("strict.yaml");
    fs::write(&strict, "max_score: 3.0\n").unwrap();

    let output = cmd_in(repo.path())
        .arg("--config")
        .arg(&strict)
        .args(["info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["max_score"], 3.0);
    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["config_files"].as_array().unwrap().len(), 2);
    assert!(
        json["config"]["config_file"]
            .as_str()
            .unwrap()
            .ends_with("strict.yaml")
    );
}

#[test]
fn environment_overrides_file() {
    let repo = repo();
    fs::write(repo.path().join(".inkgauge.toml"), "max_score = 2.0\n").unwrap();

    let output = cmd_in(repo.path())
        .env("INKGAUGE_MAX_SCORE", "8.5")
        .args(["info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_score"], 8.5);
}

// =============================================================================
// Readability settings reach `analyze`
// =============================================================================

#[test]
fn configured_gate_fails_analyze() {
    let repo = repo();
    fs::write(repo.path().join(".inkgauge.toml"), "max_score = 2.0\n").unwrap();
    fs::write(repo.path().join("post.html"), COMPLEX_POST).unwrap();

    cmd_in(repo.path())
        .args(["analyze", "post.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("(max: 2.0)"));
}

#[test]
fn flag_gate_overrides_configured_gate() {
    let repo = repo();
    fs::write(repo.path().join(".inkgauge.toml"), "max_score = 2.0\n").unwrap();
    fs::write(repo.path().join("post.html"), COMPLEX_POST).unwrap();

    cmd_in(repo.path())
        .args(["analyze", "post.html", "--max-score", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn configured_input_limit_rejects_large_file() {
    let repo = repo();
    fs::write(repo.path().join(".inkgauge.toml"), "max_input_bytes = 16\n").unwrap();
    fs::write(
        repo.path().join("post.html"),
        format!("<p>{}</p>", "word ".repeat(20)),
    )
    .unwrap();

    cmd_in(repo.path())
        .args(["analyze", "post.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_accepts_large_file() {
    let repo = repo();
    fs::write(
        repo.path().join(".inkgauge.toml"),
        "max_input_bytes = 16\ndisable_input_limit = true\n",
    )
    .unwrap();
    fs::write(
        repo.path().join("post.html"),
        format!("<p>{}</p>", "word ".repeat(20)),
    )
    .unwrap();

    assert!(effective_config(repo.path())["max_input_bytes"].is_null());
    cmd_in(repo.path())
        .args(["analyze", "post.html"])
        .assert()
        .success();
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_config_fails_every_format() {
    for (name, contents) in [
        (".inkgauge.toml", "max_score = [[["),
        (".inkgauge.yaml", "max_score: [unclosed\n"),
        (".inkgauge.json", "{not json}"),
    ] {
        let repo = repo();
        fs::write(repo.path().join(name), contents).unwrap();

        cmd_in(repo.path())
            .arg("info")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

#[test]
fn wrong_type_is_rejected() {
    let repo = repo();
    fs::write(repo.path().join("inkgauge.toml"), "max_score = \"strict\"\n").unwrap();

    cmd_in(repo.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn unknown_keys_are_ignored() {
    let repo = repo();
    fs::write(
        repo.path().join("inkgauge.toml"),
        "max_score = 7.0\ntheme = \"dark\"\n",
    )
    .unwrap();

    assert_eq!(effective_config(repo.path())["max_score"], 7.0);
}
