// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution id generation

use crate::context::ExecutionId;

/// Generates unique execution identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> ExecutionId;
}

/// UUID-based ID generator for production use
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> ExecutionId {
        ExecutionId::new(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
