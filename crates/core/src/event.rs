// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events emitted by the transition engine

use crate::wait::WaitSpec;
use serde::{Deserialize, Serialize};

/// Work the transition engine has decided should happen outside itself
///
/// Only `WaitStarted` and `TaskStarted` carry side effects; the remaining
/// variants are informational and are acknowledged without action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Hold the workflow until the wait elapses
    WaitStarted { wait: WaitSpec },

    /// Invoke an external resource
    TaskStarted {
        resource: String,
        #[serde(default)]
        args: serde_json::Value,
    },

    /// The engine entered a named state
    StateEntered { name: String },

    /// The engine left a named state
    StateExited { name: String },

    /// Engine-specific event for extensibility
    Custom {
        name: String,
        #[serde(default)]
        data: serde_json::Value,
    },
}

impl Event {
    /// Get the event name for logging
    /// Format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            Event::WaitStarted { .. } => "wait:started",
            Event::TaskStarted { .. } => "task:started",
            Event::StateEntered { .. } => "state:entered",
            Event::StateExited { .. } => "state:exited",
            Event::Custom { .. } => "custom",
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
