// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow TOML parsing

use crate::WorkflowDef;
use ephem_core::WaitSpec;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during workflow parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a workflow from TOML content
///
/// `wait.timestamp` may be written as a quoted RFC 3339 string or as a
/// native TOML offset datetime.
pub fn parse_workflow(content: &str) -> Result<WorkflowDef, ParseError> {
    let mut raw: toml::Value = toml::from_str(content)?;
    timestamps_to_strings(&mut raw);
    let workflow: WorkflowDef = raw.try_into()?;
    validate(&workflow)?;
    Ok(workflow)
}

/// Rewrite native datetimes under `step[].wait.timestamp` as strings
fn timestamps_to_strings(raw: &mut toml::Value) {
    let Some(steps) = raw.get_mut("step").and_then(toml::Value::as_array_mut) else {
        return;
    };
    for step in steps {
        let Some(timestamp) = step
            .get_mut("wait")
            .and_then(|wait| wait.get_mut("timestamp"))
        else {
            continue;
        };
        let text = match timestamp {
            toml::Value::Datetime(datetime) => datetime.to_string(),
            _ => continue,
        };
        *timestamp = toml::Value::String(text);
    }
}

/// Read and parse a workflow file
pub fn load_workflow(path: &Path) -> Result<WorkflowDef, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_workflow(&content)
}

fn validate(workflow: &WorkflowDef) -> Result<(), ParseError> {
    if workflow.name.trim().is_empty() {
        return Err(ParseError::MissingField("name".to_string()));
    }

    let mut seen = HashSet::new();
    for (index, step) in workflow.steps.iter().enumerate() {
        if step.name.trim().is_empty() {
            return Err(ParseError::MissingField(format!("step[{}].name", index)));
        }
        if !seen.insert(step.name.as_str()) {
            return Err(ParseError::InvalidFormat(format!(
                "duplicate step name: {}",
                step.name
            )));
        }
        if step.wait.is_some() && step.task.is_some() {
            return Err(ParseError::InvalidFormat(format!(
                "step.{}: wait and task are mutually exclusive",
                step.name
            )));
        }
        if let Some(WaitSpec::Seconds(seconds)) = step.wait {
            if seconds <= 0 {
                return Err(ParseError::InvalidFormat(format!(
                    "step.{}.wait: seconds must be positive, got {}",
                    step.name, seconds
                )));
            }
        }
        if let Some(task) = &step.task {
            if task.resource.trim().is_empty() {
                return Err(ParseError::MissingField(format!(
                    "step.{}.task.resource",
                    step.name
                )));
            }
        }
    }

    let mut inputs = HashSet::new();
    for input in &workflow.inputs {
        if !inputs.insert(input.as_str()) {
            return Err(ParseError::InvalidFormat(format!("duplicate input: {}", input)));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
