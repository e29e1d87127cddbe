//! Common test utilities for dcfcalc CLI tests.
//!
//! `TestEnv` runs the binary from an isolated project directory with its own
//! HOME, so neither the developer's config nor `DCFCALC_*` variables leak in.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a dcfcalc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Non-empty stdout lines parsed as JSON events.
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not a JSON event: {l}\n{e}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

const ENV_OVERRIDES: &[&str] = &[
    "DCFCALC_START_YEAR",
    "DCFCALC_YEARS",
    "DCFCALC_DISCOUNT_RATE",
    "DCFCALC_GROWTH_RATE",
    "DCFCALC_UNIT",
    "DCFCALC_COLOR",
    "RUST_LOG",
];

/// Isolated project and home directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.project_path(relative), content)
    }

    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(".config/dcfcalc/config.toml");
        write_file(&path, content)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dcfcalc"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        for key in ENV_OVERRIDES {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute dcfcalc");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
    path.to_path_buf()
}
