// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced invoker wrapper for consistent observability

use crate::invoker::{InvokeError, ResourceInvoker};
use async_trait::async_trait;
use ephem_core::Context;
use tracing::Instrument;

/// Wrapper that adds tracing to any ResourceInvoker
#[derive(Clone)]
pub struct TracedInvoker<I> {
    inner: I,
}

impl<I> TracedInvoker<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<I: ResourceInvoker> ResourceInvoker for TracedInvoker<I> {
    async fn invoke(
        &self,
        resource: &str,
        ctx: &Context,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, InvokeError> {
        let span = tracing::info_span!(
            "resource.invoke",
            resource,
            execution_id = %ctx.execution_id
        );

        async {
            tracing::info!(args = %args, "starting");

            let start = std::time::Instant::now();
            let result = self.inner.invoke(resource, ctx, args).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(_) => {
                    tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "invocation succeeded")
                }
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "invocation failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
