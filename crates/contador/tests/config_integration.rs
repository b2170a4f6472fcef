//! Configuration integration tests.
//!
//! Config discovery, format parsing, and precedence checked through the
//! compiled binary. `info --json` exposes the resolved values; `analyze`
//! confirms they change the actual results.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run the binary from `dir` with extra args and parse JSON stdout.
fn run_json(dir: &Path, args: &[&str], stdin: Option<&str>) -> Value {
    let mut command = cmd();
    command
        .args(["-C", dir.to_str().unwrap()])
        .args(args)
        .arg("--json");
    if let Some(input) = stdin {
        command.write_stdin(input);
    }
    let output = command.output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// Resolved configuration as reported by `info --json`.
fn config_json(dir: &Path) -> Value {
    run_json(dir, &["info"], None)["config"].clone()
}

fn excluded(config: &Value) -> Vec<String> {
    config["excluded_classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn defaults_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = config_json(tmp.path());

    assert!(config["config_file"].is_null(), "no config file expected");
    assert_eq!(config["log_level"], "info");
    assert_eq!(config["keyword_matching"], "literal");
    assert_eq!(config["top_words"], 5);
    assert_eq!(excluded(&config).len(), 5, "every class excluded by default");
}

#[test]
fn discovers_dotfile_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.toml"),
        "[exclusions]\npronouns = false\n",
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert!(!excluded(&config).contains(&"pronouns".to_string()));
    let reported = config["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".contador.toml"), "reported: {reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("capitulos").join("uno");
    fs::create_dir_all(&nested).unwrap();
    fs::write(tmp.path().join("contador.toml"), "top_words = 3\n").unwrap();

    let config = config_json(&nested);
    assert_eq!(config["top_words"], 3);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".contador.toml"), "top_words = 3\n").unwrap();
    fs::write(tmp.path().join("contador.toml"), "top_words = 8\n").unwrap();

    assert_eq!(config_json(tmp.path())["top_words"], 8);
}

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let child = tmp.path().join("libro");
    fs::create_dir_all(&child).unwrap();
    fs::write(tmp.path().join(".contador.toml"), "top_words = 3\n").unwrap();
    fs::write(child.join(".contador.toml"), "top_words = 9\n").unwrap();

    assert_eq!(config_json(&child)["top_words"], 9);
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let src = parent.join("repo").join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(parent.join("repo").join(".git")).unwrap();
    fs::write(parent.join(".contador.toml"), "top_words = 3\n").unwrap();

    let config = config_json(&src);
    assert_eq!(config["top_words"], 5, "search should stop at .git");
    assert!(config["config_file"].is_null());
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".contador.toml"), "top_words = 3\n").unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "top_words = 7\n").unwrap();

    let config = run_json(
        tmp.path(),
        &["--config", explicit.to_str().unwrap(), "info"],
        None,
    )["config"]
        .clone();
    assert_eq!(config["top_words"], 7);
    let reported = config["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "reported: {reported}");
}

// =============================================================================
// Formats
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.yaml"),
        "keywords:\n  - perro\n  - gato\nkeyword_matching: pattern\n",
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert_eq!(config["keywords"], serde_json::json!(["perro", "gato"]));
    assert_eq!(config["keyword_matching"], "pattern");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.json"),
        r#"{"exclusions": {"determiners": false, "adverbs": false}}"#,
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert_eq!(
        excluded(&config),
        ["prepositions", "pronouns", "conjunctions"]
    );
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".contador.toml"), "top_words = 3\n").unwrap();
    fs::write(tmp.path().join(".contador.yaml"), "top_words: 4\n").unwrap();

    assert_eq!(config_json(tmp.path())["top_words"], 4);
}

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".contador.toml"), "esto no es toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn invalid_keyword_matching_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.toml"),
        "keyword_matching = \"fuzzy\"\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.toml"),
        "top_words = 2\nidioma = \"es\"\n",
    )
    .unwrap();

    assert_eq!(config_json(tmp.path())["top_words"], 2);
}

// =============================================================================
// Environment
// =============================================================================

#[test]
fn env_var_overrides_nested_exclusion() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.toml"),
        "[exclusions]\nconjunctions = true\n",
    )
    .unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .env("CONTADOR_EXCLUSIONS__CONJUNCTIONS", "false")
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(!excluded(&json["config"]).contains(&"conjunctions".to_string()));
}

// =============================================================================
// Config drives analysis
// =============================================================================

#[test]
fn configured_exclusions_change_ranking() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.toml"),
        "top_words = 1\n\n[exclusions]\ndeterminers = false\n",
    )
    .unwrap();

    let json = run_json(tmp.path(), &["analyze"], Some("el perro y el gato"));
    assert_eq!(json["top_words"][0]["word"], "el");
    assert_eq!(json["top_words"].as_array().unwrap().len(), 1);
}

#[test]
fn configured_keywords_are_counted() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.toml"),
        "keywords = [\"gato\", \" \", \"gato\"]\n",
    )
    .unwrap();

    let json = run_json(tmp.path(), &["analyze"], Some("El gato. Otro gato."));
    let keywords = json["keywords"].as_array().unwrap();
    assert_eq!(keywords.len(), 1, "blank and duplicate entries dropped");
    assert_eq!(keywords[0]["word"], "gato");
    assert_eq!(keywords[0]["count"], 2);
}

#[test]
fn keep_flag_overrides_configured_exclusion() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".contador.toml"),
        "[exclusions]\nconjunctions = true\n",
    )
    .unwrap();

    let json = run_json(
        tmp.path(),
        &["analyze", "--keep", "conjunctions", "--top", "1"],
        Some("pero pero pero casa"),
    );
    assert_eq!(json["top_words"][0]["word"], "pero");
}
