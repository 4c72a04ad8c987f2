// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op invoker for workflows whose tasks need no real backend.

use super::{InvokeError, ResourceInvoker};
use async_trait::async_trait;
use ephem_core::Context;

/// Invoker that does nothing and returns `null`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpInvoker;

impl NoOpInvoker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResourceInvoker for NoOpInvoker {
    async fn invoke(
        &self,
        _resource: &str,
        _ctx: &Context,
        _args: &serde_json::Value,
    ) -> Result<serde_json::Value, InvokeError> {
        Ok(serde_json::Value::Null)
    }
}
