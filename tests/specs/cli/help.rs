//! CLI help specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let project = Project::empty();
    project
        .ephem()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("validate");
}

#[test]
fn run_help_documents_inputs() {
    let project = Project::empty();
    project
        .ephem()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--arg")
        .stdout_has("--execution-id");
}

#[test]
fn missing_subcommand_fails() {
    let project = Project::empty();
    project.ephem().fails().stderr_has("Usage");
}
