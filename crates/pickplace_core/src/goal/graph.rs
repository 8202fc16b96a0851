use crate::error::Result;

use super::{available_transitions, finish, next_state, CallResult, State, Transition, ALL_STATES};

/// Goal slot transition graph derived from the state/transition tables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransitionGraph {
    pub states: Vec<State>,
    pub transitions: Vec<TransitionEdge>,
}

/// Directed goal slot edge.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TransitionEdge {
    pub start: State,
    pub transition: Transition,
    pub goal: State,
}

/// Build the canonical goal slot graph: external transitions plus the
/// server-driven `Complete` edges out of `Active` and `Preempted`.
pub fn transition_graph() -> Result<TransitionGraph> {
    let mut transitions = Vec::new();

    for state in ALL_STATES {
        for transition in available_transitions(state) {
            transitions.push(TransitionEdge {
                start: state,
                transition: *transition,
                goal: next_state(state, *transition)?,
            });
        }
    }

    for start in [State::Active, State::Preempted] {
        for result in [CallResult::Success, CallResult::Failure] {
            transitions.push(TransitionEdge {
                start,
                transition: Transition::Complete(result),
                goal: finish(start, result)?,
            });
        }
    }

    Ok(TransitionGraph {
        states: ALL_STATES.to_vec(),
        transitions,
    })
}
