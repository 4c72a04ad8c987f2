// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime facade for starting executions

use crate::driver::{CompletionListener, Driver};
use crate::error::ExecutionError;
use crate::router::TaskFailurePolicy;
use ephem_adapters::ResourceInvoker;
use ephem_core::{Clock, Context, ExecutionId, TransitionEngine};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Runtime behaviour shared by every execution
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub task_failure: TaskFailurePolicy,
}

/// Per-execution options
#[derive(Debug, Default)]
pub struct ExecutionOptions {
    pub listener: Option<CompletionListener>,
}

/// Handle to a running execution
pub struct ExecutionHandle {
    execution_id: ExecutionId,
    task: JoinHandle<Result<Value, ExecutionError>>,
}

impl ExecutionHandle {
    pub fn execution_id(&self) -> &ExecutionId {
        &self.execution_id
    }

    /// Wait for the execution to end
    pub async fn wait(self) -> Result<Value, ExecutionError> {
        self.task
            .await
            .map_err(|e| ExecutionError::Join(e.to_string()))?
    }
}

/// Starts executions of one transition engine against shared adapters
pub struct Runtime<E, I, C> {
    engine: Arc<E>,
    invoker: I,
    clock: C,
    config: RuntimeConfig,
}

impl<E, I: Clone, C: Clone> Clone for Runtime<E, I, C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            invoker: self.invoker.clone(),
            clock: self.clock.clone(),
            config: self.config.clone(),
        }
    }
}

impl<E, I, C> Runtime<E, I, C>
where
    E: TransitionEngine,
    I: ResourceInvoker,
    C: Clock,
{
    pub fn new(engine: E, invoker: I, clock: C, config: RuntimeConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            invoker,
            clock,
            config,
        }
    }

    /// Spawn a driver for a new execution
    ///
    /// Must be called from within a tokio runtime. The execution runs
    /// independently of the returned handle; dropping the handle does not
    /// cancel it.
    pub fn start_execution(
        &self,
        workflow: Arc<E::Workflow>,
        ctx: Context,
        args: Value,
        options: ExecutionOptions,
    ) -> ExecutionHandle {
        let execution_id = ctx.execution_id.clone();
        let mut driver = Driver::new(
            Arc::clone(&self.engine),
            workflow,
            ctx,
            self.invoker.clone(),
            self.clock.clone(),
        )
        .with_policy(self.config.task_failure);
        if let Some(listener) = options.listener {
            driver = driver.with_listener(listener);
        }

        let span = tracing::info_span!("execution", execution_id = %execution_id);
        let task = tokio::spawn(
            async move {
                tracing::info!("starting execution");
                driver.run(args).await
            }
            .instrument(span),
        );

        ExecutionHandle { execution_id, task }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
