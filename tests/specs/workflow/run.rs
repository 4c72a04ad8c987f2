//! `ephem run` specs
//!
//! Verify workflows run to completion and report their result.

use crate::prelude::*;
use crate::prelude::assert_eq;

/// Past-timestamp wait followed by a shell task using an input
const GREET: &str = r#"
name = "greet"
inputs = ["who"]

[[step]]
name = "pause"
wait = { timestamp = "2000-01-01T00:00:00Z" }

[[step]]
name = "hello"
task = { resource = "shell", args = { command = "echo hello {who}" } }
"#;

#[test]
fn run_prints_workflow_result() {
    let project = Project::empty();
    project.file("greet.toml", GREET);

    let output = project
        .ephem()
        .args(&["run", "greet.toml", "--arg", "who=world"])
        .passes()
        .json();

    assert_eq!(
        output,
        json!({
            "workflow": "greet",
            "outputs": {
                "pause": null,
                "hello": {"exit_code": 0, "stdout": "hello world\n", "stderr": ""},
            }
        })
    );
}

#[test]
fn missing_input_fails_before_starting() {
    let project = Project::empty();
    project.file("greet.toml", GREET);

    project
        .ephem()
        .args(&["run", "greet.toml"])
        .fails()
        .stderr_has("missing input: who");
}

#[test]
fn short_wait_completes() {
    let project = Project::empty();
    project.file(
        "nap.toml",
        "name = \"nap\"\n[[step]]\nname = \"nap\"\nwait = { seconds = 1 }\n",
    );

    let output = project.ephem().args(&["run", "nap.toml"]).passes().json();
    assert_eq!(output, json!({"workflow": "nap", "outputs": {"nap": null}}));
}

#[test]
fn step_output_feeds_later_steps() {
    let project = Project::empty();
    project.file(
        "chain.toml",
        r#"
name = "chain"

[[step]]
name = "first"
task = { resource = "shell", args = { command = "printf abc" } }

[[step]]
name = "second"
task = { resource = "shell", args = { command = "echo got {first} > out.txt" } }
"#,
    );

    project.ephem().args(&["run", "chain.toml"]).passes();
    assert_eq!(project.read("out.txt"), "got abc\n");
}

#[test]
fn execution_id_reaches_shell_tasks() {
    let project = Project::empty();
    project.file(
        "id.toml",
        r#"
name = "id"

[[step]]
name = "show"
task = { resource = "shell", args = { command = "echo $EPHEM_EXECUTION_ID {execution_id}" } }
"#,
    );

    let output = project
        .ephem()
        .args(&["run", "id.toml", "--execution-id", "run-42"])
        .passes()
        .json();
    assert_eq!(output["outputs"]["show"]["stdout"], json!("run-42 run-42\n"));
}

#[test]
fn failing_task_fails_the_run() {
    let project = Project::empty();
    project.file(
        "fail.toml",
        r#"
name = "fail"

[[step]]
name = "boom"
task = { resource = "shell", args = { command = "echo bad >&2; exit 3" } }

[[step]]
name = "after"
task = { resource = "shell", args = { command = "touch after.txt" } }
"#,
    );

    project
        .ephem()
        .args(&["run", "fail.toml"])
        .fails()
        .stderr_has("task in step boom failed")
        .stderr_has("exit code 3: bad");
    assert!(!project.path().join("after.txt").exists());
}

#[test]
fn continue_on_error_records_failure() {
    let project = Project::empty();
    project.file(
        "soft.toml",
        r#"
name = "soft"

[[step]]
name = "flaky"
task = { resource = "shell", args = { command = "exit 1" } }
continue_on_error = true

[[step]]
name = "after"
task = { resource = "shell", args = { command = "printf done" } }
"#,
    );

    let output = project.ephem().args(&["run", "soft.toml"]).passes().json();
    assert_eq!(
        output["outputs"]["flaky"],
        json!({"error": "shell failed: exit code 1: "})
    );
    assert_eq!(output["outputs"]["after"]["stdout"], json!("done"));
}

#[test]
fn unknown_resource_fails_the_run() {
    let project = Project::empty();
    project.file(
        "http.toml",
        "name = \"http\"\n[[step]]\nname = \"get\"\ntask = { resource = \"http\" }\n",
    );

    project
        .ephem()
        .args(&["run", "http.toml"])
        .fails()
        .stderr_has("unknown resource: http");
}
