//! Integration tests for CLI behavior
//!
//! These tests drive the built binary and check what a user sees:
//! exit codes, stdout and stderr.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the a11ylint CLI
fn a11ylint_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_a11ylint"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        a11ylint_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        a11ylint_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn check_requires_a_file() {
        a11ylint_cmd().arg("check").assert().failure();
    }
}

mod check_command {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn clean_document_exits_zero() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(fixture("clean.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Checked 1 documents, found 0 issues",
            ));
    }

    #[test]
    fn errors_exit_one_and_list_diagnostics() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(fixture("issues.json"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Broken"))
            .stdout(predicate::str::contains(
                "7:5 error [1.1.1]: Include an alt attribute on every image",
            ))
            .stdout(predicate::str::contains(
                "6:3 warning: <center> tag is deprecated",
            ))
            .stdout(predicate::str::contains(
                "Checked 1 documents, found 2 issues",
            ));
    }

    #[test]
    fn json_output_lists_documents() {
        let dir = tempdir().unwrap();

        let output = a11ylint_cmd()
            .current_dir(dir.path())
            .args(["check", "--format", "json"])
            .arg(fixture("clean.json"))
            .arg(fixture("issues.json"))
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let documents = json.as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["title"], "Home");
        assert_eq!(documents[0]["diagnostics"].as_array().unwrap().len(), 0);

        let diagnostics = documents[1]["diagnostics"].as_array().unwrap();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0]["code"], "");
        assert_eq!(diagnostics[1]["code"], "1.1.1");
        assert_eq!(diagnostics[1]["source"], "a11ylint");
        assert_eq!(diagnostics[1]["range"]["start"]["line"], 7);
    }

    #[test]
    fn json_summary_includes_statistics() {
        let dir = tempdir().unwrap();

        let output = a11ylint_cmd()
            .current_dir(dir.path())
            .args(["check", "--format", "json", "--summary"])
            .arg(fixture("issues.json"))
            .output()
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["overall"]["tallies"], serde_json::json!([1, 0, 0, 0]));
        assert_eq!(json["overall"]["guidelines"], serde_json::json!(["1.1.1"]));
        assert_eq!(json["overall"]["uncoded"], 1);
        assert_eq!(json["documents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn text_summary_prints_principles() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .args(["check", "--summary"])
            .arg(fixture("issues.json"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("By principle:"))
            .stdout(predicate::str::contains("Perceivable"))
            .stdout(predicate::str::contains("Without success criterion: 1"));
    }

    #[test]
    fn missing_file_is_reported_and_fails() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg("does_not_exist.json")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("1 file(s) failed to load"))
            .stdout(predicate::str::contains(
                "Checked 0 documents, found 0 issues",
            ));
    }

    #[test]
    fn malformed_tree_is_reported_and_fails() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(fixture("malformed.json"))
            .arg(fixture("clean.json"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("malformed.json"))
            .stdout(predicate::str::contains(
                "Checked 1 documents, found 0 issues",
            ));
    }

    #[test]
    fn invalid_config_exits_two() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("bad.json");
        std::fs::write(&config, r#"{ "unknown": {} }"#).unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("--config")
            .arg(&config)
            .arg("check")
            .arg(fixture("clean.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unknown"));
    }

    #[test]
    fn discovered_config_disables_rule() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let config_path = dir.path().join(".a11ylint.jsonc");
        let content = std::fs::read_to_string(&config_path).unwrap();
        let mut config: serde_json::Value = serde_json::from_str(&content).unwrap();
        config["perceivable"]["textAlternatives"]["img element missing alt attribute"] =
            serde_json::Value::Bool(false);
        std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("check")
            .arg(fixture("issues.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("[1.1.1]").not())
            .stdout(predicate::str::contains(
                "Checked 1 documents, found 1 issues",
            ));
    }
}

mod init_command {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_config_with_every_rule_enabled() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let content = std::fs::read_to_string(dir.path().join(".a11ylint.jsonc")).unwrap();
        let config: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            config["operable"]["enoughTime"]["Marquee element used"],
            serde_json::Value::Bool(true)
        );
        assert_eq!(
            config["deprecated"]["obsoleteTags"]["<center> tag is deprecated"],
            serde_json::Value::Bool(true)
        );
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".a11ylint.jsonc");
        std::fs::write(&config_path, "{}").unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("already exists"));

        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "{}");
    }

    #[test]
    fn overwrites_with_force() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".a11ylint.jsonc");
        std::fs::write(&config_path, "{}").unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("perceivable"));
    }

    #[test]
    fn writes_to_config_path_when_given() {
        let dir = tempdir().unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .args(["--config", "custom.jsonc", "init"])
            .assert()
            .success();

        assert!(dir.path().join("custom.jsonc").exists());
        assert!(!dir.path().join(".a11ylint.jsonc").exists());

        a11ylint_cmd()
            .current_dir(dir.path())
            .args(["--config", "custom.jsonc", "check"])
            .arg(fixture("clean.json"))
            .assert()
            .success();
    }

    #[test]
    fn refuses_existing_config_path_without_force() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom.jsonc");
        std::fs::write(&config_path, "{}").unwrap();

        a11ylint_cmd()
            .current_dir(dir.path())
            .args(["--config", "custom.jsonc", "init"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("custom.jsonc already exists"));

        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "{}");
    }
}

mod rules_command {
    use super::*;

    #[test]
    fn lists_rules_as_text() {
        a11ylint_cmd()
            .arg("rules")
            .assert()
            .success()
            .stdout(predicate::str::contains("perceivable.textAlternatives:"))
            .stdout(predicate::str::contains("img element missing alt attribute"))
            .stdout(predicate::str::contains("72 rules"));
    }

    #[test]
    fn lists_rules_as_json() {
        let output = a11ylint_cmd().args(["rules", "--json"]).output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let rules = json.as_array().unwrap();
        assert_eq!(rules.len(), 72);
        assert_eq!(rules[0]["category"], "perceivable");
        assert_eq!(rules[0]["code"], "1.1.1");
        assert_eq!(rules[0]["severity"], "error");
    }
}
