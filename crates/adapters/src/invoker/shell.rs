// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command invoker
//!
//! Handles the `shell` resource. Arguments:
//! - `command` (required): passed to `sh -c`
//! - `cwd` (optional): working directory
//! - `env` (optional): table of extra environment variables
//!
//! The result is `{exit_code, stdout, stderr}`. A non-zero exit status is an
//! invocation failure.

use super::{InvokeError, ResourceInvoker};
use async_trait::async_trait;
use ephem_core::Context;
use serde_json::json;
use std::time::Duration;

/// Resource name handled by [`ShellInvoker`]
pub const SHELL_RESOURCE: &str = "shell";

/// Runs shell commands for `shell` tasks
#[derive(Clone, Debug, Default)]
pub struct ShellInvoker {
    timeout: Option<Duration>,
}

impl ShellInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill commands that run longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ResourceInvoker for ShellInvoker {
    async fn invoke(
        &self,
        resource: &str,
        ctx: &Context,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, InvokeError> {
        if resource != SHELL_RESOURCE {
            return Err(InvokeError::UnknownResource(resource.to_string()));
        }

        let invalid = |message: &str| InvokeError::InvalidArgs {
            resource: resource.to_string(),
            message: message.to_string(),
        };

        let command = args
            .get("command")
            .and_then(|v| v.as_str())
            .ok_or_else(|| invalid("missing string field 'command'"))?;

        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c")
            .arg(command)
            .env("EPHEM_EXECUTION_ID", ctx.execution_id.as_str())
            .kill_on_drop(true);

        if let Some(cwd) = args.get("cwd") {
            let cwd = cwd
                .as_str()
                .ok_or_else(|| invalid("'cwd' must be a string"))?;
            cmd.current_dir(cwd);
        }

        if let Some(env) = args.get("env") {
            let env = env
                .as_object()
                .ok_or_else(|| invalid("'env' must be a table"))?;
            for (key, value) in env {
                let value = value
                    .as_str()
                    .ok_or_else(|| invalid("'env' values must be strings"))?;
                cmd.env(key, value);
            }
        }

        let output = match self.timeout {
            Some(after) => tokio::time::timeout(after, cmd.output())
                .await
                .map_err(|_| InvokeError::Timeout {
                    resource: resource.to_string(),
                    after,
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| InvokeError::Failed {
            resource: resource.to_string(),
            message: e.to_string(),
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(InvokeError::Failed {
                resource: resource.to_string(),
                message: format!("exit code {}: {}", exit_code, stderr.trim()),
            });
        }

        Ok(json!({
            "exit_code": exit_code,
            "stdout": stdout,
            "stderr": stderr,
        }))
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
