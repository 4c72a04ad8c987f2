//! `ephem validate` specs

use crate::prelude::*;

#[test]
fn valid_workflow_reports_step_count() {
    let project = Project::empty();
    project.file(
        "greet.toml",
        r#"
name = "greet"
inputs = ["who"]

[[step]]
name = "pause"
wait = { seconds = 1 }

[[step]]
name = "hello"
task = { resource = "shell", args = { command = "echo hello {who}" } }
"#,
    );

    project
        .ephem()
        .args(&["validate", "greet.toml"])
        .passes()
        .stdout_eq("ok: greet (2 steps)");
}

#[test]
fn duplicate_steps_are_rejected() {
    let project = Project::empty();
    project.file(
        "dup.toml",
        "name = \"dup\"\n[[step]]\nname = \"a\"\n[[step]]\nname = \"a\"\n",
    );

    project
        .ephem()
        .args(&["validate", "dup.toml"])
        .fails()
        .stderr_has("duplicate step name: a");
}

#[test]
fn non_positive_wait_is_rejected() {
    let project = Project::empty();
    project.file(
        "wait.toml",
        "name = \"w\"\n[[step]]\nname = \"nap\"\nwait = { seconds = -1 }\n",
    );

    project
        .ephem()
        .args(&["validate", "wait.toml"])
        .fails()
        .stderr_has("seconds must be positive");
}

#[test]
fn missing_file_is_reported() {
    let project = Project::empty();
    project
        .ephem()
        .args(&["validate", "nope.toml"])
        .fails()
        .stderr_has("nope.toml");
}
