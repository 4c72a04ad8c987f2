// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution identity and context

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for one workflow run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionId(String);

impl ExecutionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExecutionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ExecutionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Context handed to the transition engine at start and to every resource
/// invocation of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub execution_id: ExecutionId,
    /// Caller-supplied values visible to invoked resources
    #[serde(default)]
    pub vars: serde_json::Map<String, serde_json::Value>,
}

impl Context {
    pub fn new(execution_id: impl Into<ExecutionId>) -> Self {
        Self {
            execution_id: execution_id.into(),
            vars: serde_json::Map::new(),
        }
    }

    /// Attach a context variable
    pub fn with_var(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.vars.insert(key.into(), value);
        self
    }
}
