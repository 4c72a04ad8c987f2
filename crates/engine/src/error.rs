// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types

use ephem_core::{ExecutionId, TransitionError};
use thiserror::Error;

/// Ways a run can end without reaching `Succeed`
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// `start` failed, so the run never had a state to fall back on
    #[error("execution {execution_id}: {source}")]
    Transition {
        execution_id: ExecutionId,
        #[source]
        source: TransitionError,
    },
    /// The queue is empty and no effect is in flight, so no completion can
    /// ever arrive. The run ends with this error rather than idling forever.
    ///
    /// `last_error` is the most recent error the engine returned from
    /// `resume`, when one left the run without further work.
    #[error("execution {execution_id} stalled: no pending events and no effects in flight")]
    Stalled {
        execution_id: ExecutionId,
        #[source]
        last_error: Option<TransitionError>,
    },
    #[error("execution {0} has no engine state to resume")]
    MissingState(ExecutionId),
    #[error("execution {0} lost its completion channel")]
    ChannelClosed(ExecutionId),
    #[error("execution task failed: {0}")]
    Join(String),
}
