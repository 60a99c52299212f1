//! Isolated environment for running the `climenu` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the climenu binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Project and home directories that only this test sees.
///
/// The binary runs from the project directory with `HOME` and the XDG
/// config directory pointing into the private home, so no real user config
/// is picked up.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file into the project directory and return its path.
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write a file into the private home directory.
    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_climenu"));
        cmd.current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("CLIMENU_LOG")
            .env_remove("CLIMENU_COLOR")
            .env_remove("CLIMENU_CLEAR_SCREEN")
            .env_remove("CLIMENU_SHELL")
            .env_remove("CLIMENU_PAUSE");
        cmd
    }

    /// Run with `args` and an empty stdin.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, "")
    }

    /// Run with `args`, feeding `input` on stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with_env(args, input, &[])
    }

    pub fn run_with_env(
        &self,
        args: &[&str],
        input: &str,
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute climenu");
        {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            // The binary may exit before reading everything.
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for climenu");
        output_to_result(output)
    }

    /// Write the standard menu and actions fixtures and return their paths
    /// as CLI arguments.
    pub fn with_fixtures(&self, menu: &str, actions: &str) -> Vec<String> {
        let menu_path = self.write_project_file("menu.json", menu);
        let actions_path = self.write_project_file("actions.toml", actions);
        vec![
            "--menu".to_string(),
            path_arg(&menu_path),
            "--actions".to_string(),
            path_arg(&actions_path),
        ]
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
