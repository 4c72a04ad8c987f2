// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Resource invokers: the external calls behind `TaskStarted` events

pub mod invoker;
pub mod traced;

pub use invoker::{InvokeError, NoOpInvoker, ResourceInvoker, ShellInvoker, SHELL_RESOURCE};
pub use traced::TracedInvoker;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use invoker::{FakeInvoker, InvokeCall};
