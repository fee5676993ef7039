//! Shared testing utilities for vfsctl CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory every CLI invocation runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `vfsctl` binary with no `--out`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vfsctl").expect("Failed to locate vfsctl binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env_remove("VFSCTL_OUT");
        cmd
    }

    /// Build a command that stores its state at `out` (relative to the work dir).
    pub fn cli_with_out(&self, out: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["--out", out]);
        cmd
    }

    /// Default JSON document location.
    pub fn default_document(&self) -> PathBuf {
        self.work_dir.join("out").join("vfs.json")
    }

    /// Parse the JSON document at `relative`.
    pub fn read_document(&self, relative: &str) -> serde_json::Value {
        let content = fs::read_to_string(self.work_dir.join(relative))
            .expect("Failed to read JSON document");
        serde_json::from_str(&content).expect("JSON document should parse")
    }

    /// Write `~/.config/vfsctl/config.toml`.
    pub fn write_home_config(&self, content: &str) {
        let dir = self.home().join(".config").join("vfsctl");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }
}

/// Stdout lines of a finished command.
#[allow(dead_code)]
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

/// First column of each stdout line.
#[allow(dead_code)]
pub fn first_column(output: &std::process::Output) -> Vec<String> {
    stdout_lines(output)
        .iter()
        .map(|line| line.split(' ').next().unwrap_or_default().to_string())
        .collect()
}
