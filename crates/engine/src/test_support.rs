// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate

use ephem_core::{
    Command, Context, Event, Transition, TransitionEngine, TransitionError, WaitSpec,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) type Scripted = Result<Transition<u32>, TransitionError>;

/// Transition engine that replays scripted results and records commands
///
/// Once the resume script runs out, every command yields
/// `Continue { state + 1, [] }`.
pub(crate) struct ScriptedEngine {
    start: Mutex<Option<Scripted>>,
    resumes: Mutex<VecDeque<Scripted>>,
    commands: Mutex<Vec<Command>>,
}

impl ScriptedEngine {
    pub(crate) fn new(start: Scripted) -> Self {
        Self {
            start: Mutex::new(Some(start)),
            resumes: Mutex::new(VecDeque::new()),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Queue the result of the next unscripted resume
    pub(crate) fn then(self, next: Scripted) -> Self {
        self.resumes.lock().unwrap().push_back(next);
        self
    }

    pub(crate) fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }
}

impl TransitionEngine for ScriptedEngine {
    type Workflow = ();
    type State = u32;

    fn start(&self, _: &(), _: &Context, _: &Value) -> Scripted {
        self.start
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(TransitionError::Engine("started twice".to_string())))
    }

    fn resume(&self, _: &(), state: &u32, command: Command) -> Scripted {
        self.commands.lock().unwrap().push(command);
        self.resumes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Transition::Continue {
                state: state + 1,
                events: Vec::new(),
            }))
    }
}

pub(crate) fn cont(events: Vec<Event>) -> Scripted {
    Ok(Transition::Continue { state: 0, events })
}

pub(crate) fn succeed(result: Value) -> Scripted {
    Ok(Transition::Succeed {
        result,
        events: Vec::new(),
    })
}

pub(crate) fn task(resource: &str) -> Event {
    Event::TaskStarted {
        resource: resource.to_string(),
        args: Value::Null,
    }
}

pub(crate) fn wait_secs(seconds: i64) -> Event {
    Event::WaitStarted {
        wait: WaitSpec::Seconds(seconds),
    }
}
