// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Side-effect dispatcher

use crate::router::Completion;
use ephem_adapters::ResourceInvoker;
use ephem_core::{Clock, Context, Event, WaitError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Errors that can occur while dispatching an event
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid wait: {0}")]
    InvalidWait(#[from] WaitError),
}

/// Acknowledgement that an event has been handed off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// A one-shot timer will report `TimerFired`
    TimerScheduled { delay: Duration },
    /// A background invocation will report `TaskCompleted` or `TaskFailed`
    TaskLaunched,
    /// Informational event; nothing will be reported
    NoEffect,
}

impl Ack {
    /// Whether a completion will eventually arrive for this event
    pub fn is_in_flight(&self) -> bool {
        !matches!(self, Ack::NoEffect)
    }
}

/// Starts the side effect behind each event without blocking the caller
///
/// Every launched effect sends exactly one [`Completion`] on the channel
/// given at construction. Effects are never cancelled; if the receiving
/// driver is gone the completion is dropped.
pub struct Dispatcher<I, C> {
    invoker: I,
    clock: C,
    completions: mpsc::UnboundedSender<Completion>,
}

impl<I, C> Dispatcher<I, C>
where
    I: ResourceInvoker,
    C: Clock,
{
    /// Create a new dispatcher
    pub fn new(invoker: I, clock: C, completions: mpsc::UnboundedSender<Completion>) -> Self {
        Self {
            invoker,
            clock,
            completions,
        }
    }

    /// Dispatch a single event
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, event: Event, ctx: &Context) -> Result<Ack, DispatchError> {
        match &event {
            Event::WaitStarted { wait } => {
                let delay = wait.delay(self.clock.now())?;
                let completions = self.completions.clone();
                let span = tracing::debug_span!(
                    "effect.timer",
                    execution_id = %ctx.execution_id,
                    delay_ms = delay.as_millis() as u64
                );

                tokio::spawn(
                    async move {
                        tokio::time::sleep(delay).await;
                        tracing::debug!("fired");
                        send(&completions, Completion::TimerFired { event });
                    }
                    .instrument(span),
                );

                Ok(Ack::TimerScheduled { delay })
            }

            Event::TaskStarted { resource, args } => {
                let invoker = self.invoker.clone();
                let completions = self.completions.clone();
                let resource = resource.clone();
                let args = args.clone();
                let ctx = ctx.clone();
                let span = tracing::debug_span!(
                    "effect.task",
                    execution_id = %ctx.execution_id,
                    resource = %resource
                );

                tokio::spawn(
                    async move {
                        let completion = match invoker.invoke(&resource, &ctx, &args).await {
                            Ok(result) => Completion::TaskCompleted { event, result },
                            Err(error) => {
                                tracing::error!(error = %error, "resource invocation failed");
                                Completion::TaskFailed { event, error }
                            }
                        };
                        send(&completions, completion);
                    }
                    .instrument(span),
                );

                Ok(Ack::TaskLaunched)
            }

            Event::StateEntered { .. } | Event::StateExited { .. } | Event::Custom { .. } => {
                Ok(Ack::NoEffect)
            }
        }
    }
}

fn send(completions: &mpsc::UnboundedSender<Completion>, completion: Completion) {
    if let Err(e) = completions.send(completion) {
        tracing::debug!(
            completion = e.0.name(),
            "execution no longer running, dropping completion"
        );
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
