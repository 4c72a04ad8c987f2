// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Workflow definitions and the step-sequence transition engine

mod machine;
mod parser;
mod template;
mod workflow;

pub use machine::{StepMachine, StepState};
pub use parser::{load_workflow, parse_workflow, ParseError};
pub use template::{interpolate, interpolate_value};
pub use workflow::{StepDef, TaskDef, WorkflowDef};
