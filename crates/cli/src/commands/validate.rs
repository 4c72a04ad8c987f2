// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ephem validate <file>` - Parse and check a workflow

use anyhow::Result;
use clap::Args;
use ephem_runbook::load_workflow;
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    /// Workflow file (TOML)
    pub file: PathBuf,
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let workflow = load_workflow(&args.file)?;
    println!("ok: {} ({} steps)", workflow.name, workflow.steps.len());
    Ok(())
}
