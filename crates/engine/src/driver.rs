// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution driver
//!
//! The driver is the only owner of an execution's state. It is a small
//! actor: the transition engine is called from one place, effects run as
//! independent tasks, and their results come back as [`Completion`]
//! messages that are processed one at a time in arrival order.

use crate::dispatcher::Dispatcher;
use crate::error::ExecutionError;
use crate::queue::EventQueue;
use crate::router::{route, Completion, TaskFailurePolicy};
use ephem_adapters::ResourceInvoker;
use ephem_core::{Clock, Context, ExecutionId, Transition, TransitionEngine, TransitionError};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Receives the final result of a run, at most once
pub type CompletionListener = oneshot::Sender<Value>;

/// Mutable state of one run
pub struct ExecutionState<E: TransitionEngine> {
    pub workflow: Arc<E::Workflow>,
    /// `None` until `start` returns `Continue`
    pub engine_state: Option<E::State>,
    pub execution_id: ExecutionId,
    pub pending_events: EventQueue,
    pub listener: Option<CompletionListener>,
    /// Most recent error from `resume`; the state it was given is kept
    pub last_error: Option<TransitionError>,
}

impl<E: TransitionEngine> ExecutionState<E> {
    pub fn new(workflow: Arc<E::Workflow>, execution_id: ExecutionId) -> Self {
        Self {
            workflow,
            engine_state: None,
            execution_id,
            pending_events: EventQueue::new(),
            listener: None,
            last_error: None,
        }
    }

    fn notify(&mut self, result: &Value) {
        if let Some(listener) = self.listener.take() {
            if listener.send(result.clone()).is_err() {
                tracing::debug!("completion listener dropped before result");
            }
        }
    }
}

/// Drives one execution from `start` to `Succeed`
pub struct Driver<E: TransitionEngine, I, C> {
    engine: Arc<E>,
    dispatcher: Dispatcher<I, C>,
    completions: mpsc::UnboundedReceiver<Completion>,
    policy: TaskFailurePolicy,
    ctx: Context,
    state: ExecutionState<E>,
    /// Dispatched effects whose completion has not arrived yet
    in_flight: usize,
}

impl<E, I, C> Driver<E, I, C>
where
    E: TransitionEngine,
    I: ResourceInvoker,
    C: Clock,
{
    pub fn new(
        engine: Arc<E>,
        workflow: Arc<E::Workflow>,
        ctx: Context,
        invoker: I,
        clock: C,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            engine,
            dispatcher: Dispatcher::new(invoker, clock, tx),
            completions: rx,
            policy: TaskFailurePolicy::default(),
            state: ExecutionState::new(workflow, ctx.execution_id.clone()),
            ctx,
            in_flight: 0,
        }
    }

    /// Set how task failures reach the transition engine
    pub fn with_policy(mut self, policy: TaskFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attach a listener for the final result
    pub fn with_listener(mut self, listener: CompletionListener) -> Self {
        self.state.listener = Some(listener);
        self
    }

    pub fn execution_id(&self) -> &ExecutionId {
        &self.state.execution_id
    }

    /// Run the execution to completion
    ///
    /// Returns the `Succeed` result. The listener, if any, is notified just
    /// before returning; on any error it is dropped without a value.
    ///
    /// An error from `start` ends the run. An error from `resume` is logged
    /// and the command has no effect: the previous engine state is kept and
    /// the loop goes on with the remaining completions.
    pub async fn run(mut self, args: Value) -> Result<Value, ExecutionError> {
        let transition = self
            .engine
            .start(&self.state.workflow, &self.ctx, &args)
            .map_err(|source| {
                tracing::error!(error = %source, "transition engine failed to start");
                ExecutionError::Transition {
                    execution_id: self.state.execution_id.clone(),
                    source,
                }
            })?;
        if let Some(result) = self.apply(transition) {
            return Ok(result);
        }

        loop {
            self.drain();

            if self.in_flight == 0 {
                tracing::error!("no pending events and no effects in flight, execution stalled");
                return Err(ExecutionError::Stalled {
                    execution_id: self.state.execution_id.clone(),
                    last_error: self.state.last_error.take(),
                });
            }

            let Some(completion) = self.completions.recv().await else {
                return Err(ExecutionError::ChannelClosed(
                    self.state.execution_id.clone(),
                ));
            };
            self.in_flight = self.in_flight.saturating_sub(1);
            tracing::debug!(completion = completion.name(), "completion received");

            let Some(command) = route(completion, self.policy) else {
                continue;
            };

            let Some(engine_state) = self.state.engine_state.as_ref() else {
                return Err(ExecutionError::MissingState(
                    self.state.execution_id.clone(),
                ));
            };
            let command_name = command.name();
            match self
                .engine
                .resume(&self.state.workflow, engine_state, command)
            {
                Ok(transition) => {
                    tracing::debug!(command = command_name, "engine resumed");
                    self.state.last_error = None;
                    if let Some(result) = self.apply(transition) {
                        return Ok(result);
                    }
                }
                Err(e) => {
                    tracing::error!(
                        command = command_name,
                        error = %e,
                        "transition engine failed, keeping previous state"
                    );
                    self.state.last_error = Some(e);
                }
            }
        }
    }

    /// Interpret a transition result; `Some` means the run is finished
    fn apply(&mut self, transition: Transition<E::State>) -> Option<Value> {
        match transition {
            Transition::Continue { state, events } => {
                tracing::info!(
                    events = events.len(),
                    in_flight = self.in_flight,
                    "engine continued"
                );
                self.state.engine_state = Some(state);
                self.state.pending_events.extend(events);
                None
            }
            Transition::Succeed { result, events } => {
                let dropped = events.len() + self.state.pending_events.len();
                if dropped > 0 {
                    tracing::debug!(dropped, "discarding events emitted before success");
                }
                tracing::info!(result = %result, "execution succeeded");
                self.state.notify(&result);
                Some(result)
            }
        }
    }

    /// Hand every pending event to the dispatcher, oldest first
    fn drain(&mut self) {
        while let Some(event) = self.state.pending_events.pop() {
            let name = event.name();
            match self.dispatcher.dispatch(event, &self.ctx) {
                Ok(ack) => {
                    if ack.is_in_flight() {
                        self.in_flight += 1;
                    }
                    tracing::debug!(event = name, ?ack, "dispatched");
                }
                Err(e) => {
                    tracing::error!(event = name, error = %e, "dispatch failed, event has no effect");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
