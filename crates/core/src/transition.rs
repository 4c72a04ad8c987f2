// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The transition engine contract
//!
//! A transition engine is a pure decision function: given the workflow
//! definition, its previous state and a command, it returns the next state
//! together with the events it wants performed. It never performs side
//! effects itself.

use crate::command::Command;
use crate::context::Context;
use crate::event::Event;
use thiserror::Error;

/// Outcome of one transition
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<S> {
    /// The run is not finished
    Continue { state: S, events: Vec<Event> },
    /// Terminal; no further commands may be issued
    Succeed {
        result: serde_json::Value,
        events: Vec<Event>,
    },
}

/// Errors signalled by a transition engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("invalid workflow input: {0}")]
    InvalidInput(String),
    #[error("unexpected {command} in state {state}")]
    UnexpectedCommand { command: String, state: String },
    #[error("task in step {step} failed: {message}")]
    TaskFailed { step: String, message: String },
    #[error("transition engine error: {0}")]
    Engine(String),
}

/// Pure workflow state-transition function
pub trait TransitionEngine: Send + Sync + 'static {
    /// Immutable workflow definition, shared read-only by the run
    type Workflow: Send + Sync + 'static;
    /// Opaque engine state threaded between calls
    type State: Send + 'static;

    /// Begin a run
    fn start(
        &self,
        workflow: &Self::Workflow,
        ctx: &Context,
        args: &serde_json::Value,
    ) -> Result<Transition<Self::State>, TransitionError>;

    /// Advance a run with an external stimulus
    ///
    /// The state is borrowed so that an error leaves the caller holding the
    /// last good state.
    fn resume(
        &self,
        workflow: &Self::Workflow,
        state: &Self::State,
        command: Command,
    ) -> Result<Transition<Self::State>, TransitionError>;
}
