// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ephem-core: data model shared by the execution loop and its collaborators
//!
//! This crate provides:
//! - Events emitted by a transition engine and the commands fed back into it
//! - The `TransitionEngine` contract (a pure decision function)
//! - Wait specifications and their delay arithmetic
//! - Clock and id generation abstractions

pub mod clock;
pub mod command;
pub mod context;
pub mod event;
pub mod id;
pub mod transition;
pub mod wait;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use command::Command;
pub use context::{Context, ExecutionId};
pub use event::Event;
pub use id::{IdGen, UuidIdGen};
pub use transition::{Transition, TransitionEngine, TransitionError};
pub use wait::{WaitError, WaitSpec};
