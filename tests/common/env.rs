//! Isolated environment for running the apiconsole binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running an apiconsole command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON document
    pub fn json(&self) -> Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }

    /// Parse every non-empty stderr line as JSON
    pub fn stderr_events(&self) -> Vec<Value> {
        self.stderr
            .lines()
            .filter(|l| l.trim_start().starts_with('{'))
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad event {l}: {e}")))
            .collect()
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp project directory (the working directory) and temp home, so no
/// user or project configuration leaks into a test.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_apiconsole")),
        }
    }

    /// Environment with `./apiconsole.toml` already written
    pub fn with_project_config(content: &str) -> Self {
        let env = Self::new();
        env.write_project_file("apiconsole.toml", content);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// User config file location as seen by the binary
    pub fn user_config_path(&self) -> PathBuf {
        let base = if cfg!(target_os = "macos") {
            self.home_dir.path().join("Library").join("Application Support")
        } else {
            self.home_dir.path().join(".config")
        };
        base.join("apiconsole").join("config.toml")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("APICONSOLE_CONFIG")
            .env_remove("APICONSOLE_BASE_PATH")
            .env_remove("APICONSOLE_DEFAULT_KEY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute apiconsole");
        to_result(output)
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) -> PathBuf {
        write_file(&self.project_path(relative_path), content)
    }

    pub fn write_user_config(&self, content: &str) -> PathBuf {
        write_file(&self.user_config_path(), content)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
    path.to_path_buf()
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
