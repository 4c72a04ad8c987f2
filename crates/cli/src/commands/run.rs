// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ephem run <file> [--arg k=v]...` - Run a workflow to completion

use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use ephem_adapters::{ShellInvoker, TracedInvoker};
use ephem_core::{Context, ExecutionId, IdGen, SystemClock, UuidIdGen};
use ephem_engine::{ExecutionOptions, Runtime};
use ephem_runbook::{load_workflow, StepMachine};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct RunArgs {
    /// Workflow file (TOML)
    pub file: PathBuf,

    /// Workflow inputs (key=value)
    #[arg(short = 'a', long = "arg", value_parser = parse_key_val)]
    pub named_args: Vec<(String, String)>,

    /// Execution id (defaults to a random UUID)
    #[arg(long)]
    pub execution_id: Option<String>,
}

pub async fn run(args: RunArgs, config: &Config) -> Result<()> {
    let workflow = load_workflow(&args.file)?;

    let named: HashMap<String, String> = args.named_args.into_iter().collect();

    // Validate required inputs before starting the execution
    let missing = workflow.missing_inputs(&named);
    if !missing.is_empty() {
        bail!("missing input: {}", missing.join(", "));
    }

    let execution_id = args
        .execution_id
        .map(ExecutionId::new)
        .unwrap_or_else(|| UuidIdGen.next());

    let invoker = TracedInvoker::new(ShellInvoker::new().with_timeout(config.shell.timeout));
    let runtime = Runtime::new(
        StepMachine::new(),
        invoker,
        SystemClock,
        config.runtime.clone(),
    );

    let handle = runtime.start_execution(
        Arc::new(workflow),
        Context::new(execution_id),
        input_args(named),
        ExecutionOptions::default(),
    );
    tracing::debug!(execution_id = %handle.execution_id(), "execution started");

    let result = handle.wait().await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn input_args(named: HashMap<String, String>) -> Value {
    let map: Map<String, Value> = named
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();
    Value::Object(map)
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    if pos == 0 {
        return Err(format!("invalid key=value: empty key in `{s}`"));
    }
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
