//! End-to-end tests for the devcli-demo binary.
//!
//! Every test points `--config` at a temp path so the user's real config
//! is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn devcli_demo(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devcli-demo").unwrap();
    cmd.arg("--config").arg(config_dir.path().join("config.toml"));
    cmd
}

const TWO_ENTRY_SCRIPT: &str = r#"
[[entry]]
command = "x --v"
output = ["v1.0"]
post_typing_delay_ms = 500

[[entry]]
command = "y"
output = ["ok", "done"]
delay = 300
"#;

// ============================================================================
// transcript
// ============================================================================

#[test]
fn transcript_prints_builtin_session() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .arg("transcript")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$ devcli --version\nDevCLI v2.4.1 (stable)\n"))
        .stdout(predicate::str::contains("✓ Build complete in 3.2s"))
        .stdout(predicate::str::contains("$ devcli env status"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn transcript_from_script_file_repeats_loops() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("demo.toml");
    fs::write(&script, TWO_ENTRY_SCRIPT).unwrap();

    devcli_demo(&dir)
        .args(["transcript", "--loops", "2", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout("$ x --v\nv1.0\n$ y\nok\ndone\n$ x --v\nv1.0\n$ y\nok\ndone\n");
}

#[test]
fn transcript_json_has_lines_and_duration() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("demo.toml");
    fs::write(&script, TWO_ENTRY_SCRIPT).unwrap();

    let output = devcli_demo(&dir)
        .args(["transcript", "--json", "--script"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["duration_ms"], 5100);
    assert_eq!(value["lines"].as_array().unwrap().len(), 5);
    assert_eq!(value["lines"][0]["category"], "command-echo");
    assert_eq!(value["lines"][4]["text"], "done");
}

#[test]
fn transcript_uses_configured_pacing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[playback]\nhold_ms = 0\nspeed = 2.0\n").unwrap();
    let script = dir.path().join("demo.toml");
    fs::write(&script, TWO_ENTRY_SCRIPT).unwrap();

    // At 2x: 5 * 25 + 250 + 1, then 25 + 150 + 1; a zero hold still takes 1ms
    let output = devcli_demo(&dir)
        .args(["transcript", "--json", "--script"])
        .arg(&script)
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["duration_ms"], 552);
}

#[test]
fn empty_script_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("empty.toml");
    fs::write(&script, "# nothing here\n").unwrap();

    devcli_demo(&dir)
        .args(["transcript", "--script"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entries"));
}

#[test]
fn malformed_script_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("bad.toml");
    fs::write(&script, "[[entry]]\noutput = [\"missing command\"]\n").unwrap();

    devcli_demo(&dir)
        .args(["transcript", "--script"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load script"));
}

#[test]
fn missing_script_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["transcript", "--script"])
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn zero_loops_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["transcript", "--loops", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn loops_above_the_cap_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["transcript", "--loops", "1001"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("1001"));
}

// ============================================================================
// commands
// ============================================================================

#[test]
fn commands_lists_all_ten() {
    let dir = TempDir::new().unwrap();
    let assert = devcli_demo(&dir).arg("commands").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for name in ["project", "run", "env", "serve", "create", "gen", "snippet", "ai", "files", "update"] {
        assert!(
            stdout.lines().any(|line| line.starts_with(name)),
            "missing {}",
            name
        );
    }
    assert!(stdout.contains("DevCLI."));
}

#[test]
fn commands_single_match_shows_details() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["commands", "LIBRARY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: devcli snippet <subcommand> [options]"))
        .stdout(predicate::str::contains("--tags, -t"));
}

#[test]
fn commands_category_filter_is_exact() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["commands", "--category", "File Manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyboard-driven file manager"))
        .stdout(predicate::str::contains("Generate files from templates").not());
}

#[test]
fn commands_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["commands", "--category", "Deploy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Deploy'"));
}

#[test]
fn commands_no_match_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["commands", "kubernetes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commands match 'kubernetes'"));
}

#[test]
fn categories_list_starts_with_all() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["commands", "--categories"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All\nProject\nTask\nEnvironment\n"));
}

// ============================================================================
// install
// ============================================================================

#[test]
fn install_prints_every_method_and_platform() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("curl -fsSL https://devcli.sh/install | bash"))
        .stdout(predicate::str::contains("go install github.com/devcli/devcli@latest"))
        .stdout(predicate::str::contains("Platform Support"))
        .stdout(predicate::str::contains("System Requirements"));
}

#[test]
fn install_single_method() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["install", "brew"])
        .assert()
        .success()
        .stdout("Homebrew (macOS)\nInstall via Homebrew package manager\n  brew install devcli\n");
}

#[test]
fn install_unknown_method_fails() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["install", "apt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("curl, wget, brew, go, manual"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("typing_ms = 50"))
        .stdout(predicate::str::contains("theme = \"terminal\""));
}

#[test]
fn config_init_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join("config.toml").exists());

    devcli_demo(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_path_echoes_override() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[ui]\ntheme = \"neon\"\n").unwrap();
    devcli_demo(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

// ============================================================================
// completions and version
// ============================================================================

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    devcli_demo(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devcli-demo"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("devcli-demo")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("devcli-demo 0.1.0"));
}
