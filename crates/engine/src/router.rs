// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion routing: side-effect results back into transition commands

use ephem_adapters::InvokeError;
use ephem_core::{Command, Event};
use serde::{Deserialize, Serialize};

/// Result of an asynchronous side effect, delivered to the driver
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A wait's timer expired
    TimerFired { event: Event },
    /// A task invocation returned
    TaskCompleted {
        event: Event,
        result: serde_json::Value,
    },
    /// A task invocation failed
    TaskFailed { event: Event, error: InvokeError },
}

impl Completion {
    /// Get the completion name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Completion::TimerFired { .. } => "timer:fired",
            Completion::TaskCompleted { .. } => "task:completed",
            Completion::TaskFailed { .. } => "task:failed",
        }
    }
}

/// What to do when a resource invocation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFailurePolicy {
    /// Feed a `FailTask` command to the transition engine
    #[default]
    Surface,
    /// Log the failure and issue no command
    ///
    /// The run does not idle waiting for that task. Once nothing else is in
    /// flight the driver ends it with [`ExecutionError::Stalled`].
    ///
    /// [`ExecutionError::Stalled`]: crate::ExecutionError::Stalled
    Stall,
}

/// Translate a completion into the command for the next transition
///
/// Returns `None` only for task failures under [`TaskFailurePolicy::Stall`].
pub fn route(completion: Completion, policy: TaskFailurePolicy) -> Option<Command> {
    match completion {
        Completion::TimerFired { event } => Some(Command::FinishWaiting { event }),
        Completion::TaskCompleted { event, result } => Some(Command::CompleteTask { event, result }),
        Completion::TaskFailed { event, error } => match policy {
            TaskFailurePolicy::Surface => Some(Command::FailTask {
                event,
                error: error.to_string(),
            }),
            TaskFailurePolicy::Stall => {
                tracing::warn!(error = %error, "task failure dropped by stall policy");
                None
            }
        },
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
