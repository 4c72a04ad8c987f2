// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands fed back into the transition engine

use crate::event::Event;
use serde::{Deserialize, Serialize};

/// An external stimulus for the transition engine
///
/// Each command carries the event whose side effect produced it, so the
/// engine can correlate the completion with its own bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// A wait's timer fired
    FinishWaiting { event: Event },

    /// A task invocation returned a value
    CompleteTask {
        event: Event,
        result: serde_json::Value,
    },

    /// A task invocation failed
    FailTask { event: Event, error: String },
}

impl Command {
    /// Get the command name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::FinishWaiting { .. } => "finish_waiting",
            Command::CompleteTask { .. } => "complete_task",
            Command::FailTask { .. } => "fail_task",
        }
    }

    /// The event this command answers
    pub fn event(&self) -> &Event {
        match self {
            Command::FinishWaiting { event }
            | Command::CompleteTask { event, .. }
            | Command::FailTask { event, .. } => event,
        }
    }
}
