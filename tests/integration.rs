//! End-to-end tests for the `fib` binary
//!
//! Each test runs the built binary with its config and home directories
//! redirected into a fresh temporary directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test context owning an isolated home/config directory
struct TestContext {
    home: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn config_home(&self) -> std::path::PathBuf {
        self.home.path().join("config")
    }

    /// Write a config file where the binary will look for it
    fn write_config(&self, content: &str) {
        let dir = self.config_home().join("fib-cli");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    fn run(&self, args: &[&str]) -> Output {
        fib_command(self.home.path(), &self.config_home())
            .args(args)
            .output()
            .expect("Failed to run fib binary")
    }
}

fn fib_command(home: &Path, config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fib"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_prints_34() {
    let ctx = TestContext::new();
    let output = ctx.run(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "34\n");
}

#[test]
fn test_explicit_n() {
    let ctx = TestContext::new();
    let output = ctx.run(&["10"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "55\n");
}

#[test]
fn test_sequence_flag() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--sequence", "6"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0\n1\n1\n2\n3\n5\n8\n");
}

#[test]
fn test_negative_n_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["-3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("must be non-negative"), "stderr: {}", stderr(&output));
}

#[test]
fn test_checked_overflow_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--checked", "93"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("F(93)"), "stderr: {}", stderr(&output));
}

#[test]
fn test_wrapping_overflow_succeeds() {
    let ctx = TestContext::new();
    let output = ctx.run(&["93"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with('-'));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_default_n() {
    let ctx = TestContext::new();
    ctx.write_config("[defaults]\nn = 12\n");
    let output = ctx.run(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "144\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_checked_mode() {
    let ctx = TestContext::new();
    ctx.write_config("[defaults]\noverflow = \"checked\"\n");
    let output = ctx.run(&["100"]);
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(target_os = "linux")]
#[test]
fn test_invalid_config_fails() {
    let ctx = TestContext::new();
    ctx.write_config("[defaults\n");
    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid configuration file"), "stderr: {}", stderr(&output));
}
