// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake resource invoker for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{InvokeError, ResourceInvoker};
use async_trait::async_trait;
use ephem_core::{Context, ExecutionId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded invocation
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeCall {
    pub resource: String,
    pub execution_id: ExecutionId,
    pub args: serde_json::Value,
}

/// Fake invoker with scripted responses per resource
///
/// Unscripted resources fail with `InvokeError::UnknownResource`.
#[derive(Clone, Default)]
pub struct FakeInvoker {
    responses: Arc<Mutex<HashMap<String, Result<serde_json::Value, String>>>>,
    latency: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<InvokeCall>>>,
}

impl FakeInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for a resource
    pub fn respond(&self, resource: &str, value: serde_json::Value) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(resource.to_string(), Ok(value));
        self
    }

    /// Script a failure for a resource
    pub fn fail(&self, resource: &str, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(resource.to_string(), Err(message.to_string()));
        self
    }

    /// Delay responses for a resource (honours paused tokio time)
    pub fn delay(&self, resource: &str, latency: Duration) -> &Self {
        self.latency
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(resource.to_string(), latency);
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<InvokeCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ResourceInvoker for FakeInvoker {
    async fn invoke(
        &self,
        resource: &str,
        ctx: &Context,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, InvokeError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(InvokeCall {
                resource: resource.to_string(),
                execution_id: ctx.execution_id.clone(),
                args: args.clone(),
            });

        let latency = self
            .latency
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(resource)
            .copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let response = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(resource)
            .cloned();

        match response {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(InvokeError::Failed {
                resource: resource.to_string(),
                message,
            }),
            None => Err(InvokeError::UnknownResource(resource.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
