//! Configuration file specs

use crate::prelude::*;

const FAILING: &str = r#"
name = "failing"

[[step]]
name = "boom"
task = { resource = "shell", args = { command = "exit 1" } }
"#;

#[test]
fn stall_policy_ends_run_as_stalled() {
    let project = Project::empty();
    project.file("failing.toml", FAILING);
    project.file("ephem.toml", "[runtime]\ntask_failure = \"stall\"\n");

    project
        .ephem()
        .args(&["--config", "ephem.toml", "run", "failing.toml"])
        .fails()
        .stderr_has("stalled");
}

#[test]
fn shell_timeout_kills_slow_tasks() {
    let project = Project::empty();
    project.file(
        "slow.toml",
        "name = \"slow\"\n[[step]]\nname = \"sleep\"\ntask = { resource = \"shell\", args = { command = \"sleep 10\" } }\n",
    );
    project.file("ephem.toml", "[shell]\ntimeout = \"200ms\"\n");

    project
        .ephem()
        .args(&["--config", "ephem.toml", "run", "slow.toml"])
        .fails()
        .stderr_has("timed out");
}

#[test]
fn user_config_directory_is_used_by_default() {
    let project = Project::empty();
    project.file("failing.toml", FAILING);
    project.file(".config/ephem/config.toml", "[runtime]\ntask_failure = \"stall\"\n");

    project
        .ephem()
        .args(&["run", "failing.toml"])
        .fails()
        .stderr_has("stalled");
}

#[test]
fn log_file_receives_logs() {
    let project = Project::empty();
    project.file("failing.toml", FAILING);
    project.file("ephem.toml", "log_file = \"logs/ephem.log\"\n");

    project
        .ephem()
        .env("RUST_LOG", "info")
        .args(&["--config", "ephem.toml", "run", "failing.toml"])
        .fails();

    let log = project.read("logs/ephem.log");
    assert!(log.contains("invocation failed"), "log: {log}");
}

#[test]
fn invalid_config_is_reported() {
    let project = Project::empty();
    project.file("failing.toml", FAILING);
    project.file("ephem.toml", "[runtime]\ntask_failure = \"retry\"\n");

    project
        .ephem()
        .args(&["--config", "ephem.toml", "run", "failing.toml"])
        .fails()
        .stderr_has("invalid config");
}
