// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ephem execution loop
//!
//! One [`Driver`] per run owns the execution state, feeds commands into the
//! transition engine, and drains emitted events through the [`Dispatcher`].
//! Side effects report back as [`Completion`]s, which the router turns into
//! commands for the next transition.

mod dispatcher;
mod driver;
mod error;
mod queue;
mod router;
mod runtime;

#[cfg(test)]
mod test_support;

pub use dispatcher::{Ack, DispatchError, Dispatcher};
pub use driver::{CompletionListener, Driver, ExecutionState};
pub use error::ExecutionError;
pub use queue::EventQueue;
pub use router::{route, Completion, TaskFailurePolicy};
pub use runtime::{ExecutionHandle, ExecutionOptions, Runtime, RuntimeConfig};
