// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ephem - run workflow definitions to completion in-process

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, validate};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "ephem",
    version,
    about = "ephem - transient workflow execution"
)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a workflow until it completes
    Run(run::RunArgs),
    /// Check a workflow file without running it
    Validate(validate::ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::setup_logging(&config)?;

    match cli.command {
        Commands::Run(args) => run::run(args, &config).await,
        Commands::Validate(args) => validate::validate(args),
    }
}
