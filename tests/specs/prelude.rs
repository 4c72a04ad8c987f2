//! Shared helpers for CLI specs

use assert_cmd::Command;
use predicates::Predicate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use serde_json::json;
pub use similar_asserts::assert_eq;

/// Scratch directory holding workflow and config files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// `ephem` invocation isolated from the user's config directory
    pub fn ephem(&self) -> Cli {
        let mut cmd = Command::cargo_bin("ephem").unwrap();
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env("RUST_LOG", "warn");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit code 0
    pub fn passes(mut self) -> Output {
        let output = Output::from(self.cmd.output().unwrap());
        assert!(
            output.success,
            "expected success\nstdout: {}\nstderr: {}",
            output.stdout, output.stderr
        );
        output
    }

    /// Run and require a non-zero exit code
    pub fn fails(mut self) -> Output {
        let output = Output::from(self.cmd.output().unwrap());
        assert!(
            !output.success,
            "expected failure\nstdout: {}\nstderr: {}",
            output.stdout, output.stderr
        );
        output
    }
}

pub struct Output {
    success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn stdout_has(&self, needle: &str) -> &Self {
        assert!(
            predicates::str::contains(needle).eval(&self.stdout),
            "stdout missing {needle:?}\nstdout: {}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        assert!(
            predicates::str::contains(needle).eval(&self.stderr),
            "stderr missing {needle:?}\nstderr: {}",
            self.stderr
        );
        self
    }

    pub fn stdout_eq(&self, expected: &str) -> &Self {
        assert_eq!(self.stdout.trim_end(), expected.trim_end());
        self
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
