// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wait specifications
//!
//! A wait is either a relative number of seconds or an absolute target
//! timestamp. Relative waits must be strictly positive; absolute targets in
//! the past collapse to a zero delay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from resolving a wait into a concrete delay
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    #[error("wait duration must be a positive number of seconds, got {0}")]
    NonPositiveSeconds(i64),
}

/// How long a `WaitStarted` event should hold the workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitSpec {
    /// Relative wait in whole seconds
    Seconds(i64),
    /// Absolute target time
    Timestamp(DateTime<Utc>),
}

impl WaitSpec {
    /// Resolve into a delay relative to `now`
    pub fn delay(&self, now: DateTime<Utc>) -> Result<Duration, WaitError> {
        match self {
            WaitSpec::Seconds(secs) if *secs > 0 => {
                Ok(Duration::from_millis((*secs as u64).saturating_mul(1000)))
            }
            WaitSpec::Seconds(secs) => Err(WaitError::NonPositiveSeconds(*secs)),
            WaitSpec::Timestamp(target) => {
                let millis = (*target - now).num_milliseconds();
                Ok(Duration::from_millis(millis.max(0) as u64))
            }
        }
    }
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
