// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow definitions

use ephem_core::WaitSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resource invocation performed by a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDef {
    pub resource: String,
    /// Arguments; string values may contain `{var}` placeholders
    #[serde(default)]
    pub args: serde_json::Value,
}

/// A step within a workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDef {
    pub name: String,
    #[serde(default)]
    pub wait: Option<WaitSpec>,
    #[serde(default)]
    pub task: Option<TaskDef>,
    /// Record a task failure as the step's output instead of aborting
    #[serde(default)]
    pub continue_on_error: bool,
}

/// A workflow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDef {
    pub name: String,
    /// Required input variables
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Default values for inputs
    #[serde(default)]
    pub defaults: HashMap<String, String>,
    /// Ordered steps (`[[step]]` tables)
    #[serde(default, rename = "step")]
    pub steps: Vec<StepDef>,
}

impl WorkflowDef {
    /// Required inputs that neither `provided` nor the defaults supply
    pub fn missing_inputs<'a>(&'a self, provided: &HashMap<String, String>) -> Vec<&'a str> {
        self.inputs
            .iter()
            .filter(|name| !provided.contains_key(*name) && !self.defaults.contains_key(*name))
            .map(String::as_str)
            .collect()
    }
}
