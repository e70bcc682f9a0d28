//! Test environment builder for isolated printwatch testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running a printwatch CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout split into parsed NDJSON values
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json {l:?}: {e}")))
            .collect()
    }
}

/// Isolated environment: config and history live under `home`,
/// documents under `docs`.
pub struct TestEnv {
    pub home: TempDir,
    pub docs: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("temp home"),
            docs: TempDir::new().expect("temp docs"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("config.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.home.path().join("history.json")
    }

    pub fn write_config(&self, json: &str) {
        fs::write(self.config_path(), json).expect("write config");
    }

    pub fn doc(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.docs.path().join(name);
        fs::write(&path, content).expect("write document");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_printwatch"))
            .args(args)
            .env("PRINTWATCH_HOME", self.home.path())
            .env_remove("PRINTWATCH_CONFIG")
            .env_remove("PRINTWATCH_HISTORY")
            .env_remove("PRINTWATCH_DEFAULT_PRINTER")
            .env_remove("PRINTWATCH_AUTO_PRINT")
            .env_remove("RUST_LOG")
            .current_dir(self.docs.path())
            .output()
            .expect("run printwatch");

        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
