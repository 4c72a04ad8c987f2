// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step-sequence transition engine
//!
//! Runs a [`WorkflowDef`]'s steps in order. A step with a `wait` or `task`
//! emits the matching side-effect event and suspends until the driver
//! reports its completion; a step with neither completes immediately.

use crate::template::interpolate_value;
use crate::workflow::{StepDef, WorkflowDef};
use ephem_core::{Command, Context, Event, Transition, TransitionEngine, TransitionError};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Engine state between transitions
#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    /// Index of the step awaiting its completion
    pub step: usize,
    /// Template variables: inputs, defaults, and outputs of finished steps
    pub vars: HashMap<String, String>,
    /// Output of each finished step, keyed by step name
    pub outputs: Map<String, Value>,
}

/// Transition engine over sequential workflow steps
#[derive(Debug, Clone, Copy, Default)]
pub struct StepMachine;

impl StepMachine {
    pub fn new() -> Self {
        Self
    }

    /// Enter steps from `state.step` until one needs a side effect or the
    /// workflow runs out of steps
    fn advance(
        &self,
        workflow: &WorkflowDef,
        mut state: StepState,
        mut events: Vec<Event>,
    ) -> Transition<StepState> {
        while let Some(step) = workflow.steps.get(state.step) {
            events.push(Event::StateEntered {
                name: step.name.clone(),
            });

            if let Some(effect) = effect_event(step, &state.vars) {
                events.push(effect);
                return Transition::Continue { state, events };
            }

            finish_step(step, &mut state, Value::Null);
            events.push(Event::StateExited {
                name: step.name.clone(),
            });
        }

        Transition::Succeed {
            result: json!({
                "workflow": workflow.name,
                "outputs": state.outputs,
            }),
            events,
        }
    }
}

impl TransitionEngine for StepMachine {
    type Workflow = WorkflowDef;
    type State = StepState;

    fn start(
        &self,
        workflow: &WorkflowDef,
        ctx: &Context,
        args: &Value,
    ) -> Result<Transition<StepState>, TransitionError> {
        let provided = match args {
            Value::Null => HashMap::new(),
            Value::Object(map) => stringify_vars(map),
            other => {
                return Err(TransitionError::InvalidInput(format!(
                    "arguments must be an object, got {}",
                    other
                )))
            }
        };

        let missing = workflow.missing_inputs(&provided);
        if !missing.is_empty() {
            return Err(TransitionError::InvalidInput(format!(
                "missing input: {}",
                missing.join(", ")
            )));
        }

        // Later sources win: context vars, then defaults, then arguments
        let mut vars = stringify_vars(&ctx.vars);
        vars.extend(workflow.defaults.clone());
        vars.extend(provided);
        vars.insert(
            "execution_id".to_string(),
            ctx.execution_id.as_str().to_string(),
        );

        let state = StepState {
            step: 0,
            vars,
            outputs: Map::new(),
        };
        Ok(self.advance(workflow, state, Vec::new()))
    }

    fn resume(
        &self,
        workflow: &WorkflowDef,
        state: &StepState,
        command: Command,
    ) -> Result<Transition<StepState>, TransitionError> {
        let command_name = command.name();
        let unexpected = |current: &str| TransitionError::UnexpectedCommand {
            command: command_name.to_string(),
            state: current.to_string(),
        };

        let Some(step) = workflow.steps.get(state.step) else {
            return Err(unexpected("finished"));
        };
        if effect_event(step, &state.vars).as_ref() != Some(command.event()) {
            return Err(unexpected(&step.name));
        }

        let output = match command {
            Command::FinishWaiting { event: Event::WaitStarted { .. } } => Value::Null,
            Command::CompleteTask {
                event: Event::TaskStarted { .. },
                result,
            } => result,
            Command::FailTask {
                event: Event::TaskStarted { .. },
                error,
            } => {
                if !step.continue_on_error {
                    return Err(TransitionError::TaskFailed {
                        step: step.name.clone(),
                        message: error,
                    });
                }
                json!({ "error": error })
            }
            _ => return Err(unexpected(&step.name)),
        };

        let mut state = state.clone();
        finish_step(step, &mut state, output);
        let events = vec![Event::StateExited {
            name: step.name.clone(),
        }];
        Ok(self.advance(workflow, state, events))
    }
}

/// The side-effect event a step emits, with templates resolved
fn effect_event(step: &StepDef, vars: &HashMap<String, String>) -> Option<Event> {
    if let Some(wait) = &step.wait {
        return Some(Event::WaitStarted { wait: wait.clone() });
    }
    step.task.as_ref().map(|task| Event::TaskStarted {
        resource: task.resource.clone(),
        args: interpolate_value(&task.args, vars),
    })
}

/// Record a step's output and expose it to later templates as `{step}`
fn finish_step(step: &StepDef, state: &mut StepState, output: Value) {
    if let Some(text) = output_text(&output) {
        state.vars.insert(step.name.clone(), text);
    }
    state.outputs.insert(step.name.clone(), output);
    state.step += 1;
}

/// Template text for an output: strings verbatim, shell results by their
/// trimmed stdout
fn output_text(output: &Value) -> Option<String> {
    match output {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("stdout") {
            Some(Value::String(stdout)) => Some(stdout.trim_end().to_string()),
            _ => Some(output.to_string()),
        },
        other => Some(other.to_string()),
    }
}

fn stringify_vars(map: &Map<String, Value>) -> HashMap<String, String> {
    map.iter()
        .map(|(k, v)| {
            let text = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), text)
        })
        .collect()
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
