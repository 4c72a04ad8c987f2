// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource invocation adapters

mod noop;
mod shell;

pub use noop::NoOpInvoker;
pub use shell::{ShellInvoker, SHELL_RESOURCE};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeInvoker, InvokeCall};

use async_trait::async_trait;
use ephem_core::Context;
use std::time::Duration;
use thiserror::Error;

/// Errors from resource invocations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("invalid arguments for {resource}: {message}")]
    InvalidArgs { resource: String, message: String },
    #[error("{resource} failed: {message}")]
    Failed { resource: String, message: String },
    #[error("{resource} timed out after {after:?}")]
    Timeout { resource: String, after: Duration },
}

/// Performs the external call behind a `TaskStarted` event
///
/// Retries and backoff, if any, belong to the implementation; the execution
/// loop calls `invoke` exactly once per task event.
#[async_trait]
pub trait ResourceInvoker: Clone + Send + Sync + 'static {
    async fn invoke(
        &self,
        resource: &str,
        ctx: &Context,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, InvokeError>;
}
