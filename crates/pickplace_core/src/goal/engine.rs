use crate::error::{CoreError, Result};

use super::{State, Transition};

/// Collapsed result of the single downstream motion call.
///
/// Any failure detail (service error, timeout, bad response) is folded into
/// `Failure` before it reaches the state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CallResult {
    Success,
    Failure,
}

impl From<bool> for CallResult {
    fn from(success: bool) -> Self {
        if success {
            CallResult::Success
        } else {
            CallResult::Failure
        }
    }
}

/// Apply `via` to the goal slot in state `current`.
///
/// This enforces:
/// - acceptance is never gated: any state accepts a new goal (replacement)
/// - preempt, complete are only meaningful while a goal is outstanding
/// - a recorded preempt absorbs the late call result
/// - terminal states only leave through `Report` (or a replacing `Accept`)
pub fn next_state(current: State, via: Transition) -> Result<State> {
    use State::*;
    use Transition::*;

    let next = match (current, via) {
        (_, Accept) => Active,

        (Active, Preempt) => Preempted,

        (Active, Complete(CallResult::Success)) => Succeeded,
        (Active, Complete(CallResult::Failure)) => Aborted,
        (Preempted, Complete(_)) => Preempted,

        (Succeeded | Aborted | Preempted, Report) => Idle,

        _ => {
            return Err(CoreError::invalid_goal_transition(current.id(), via.id()));
        }
    };

    Ok(next)
}

/// Settle the slot once the downstream call has returned (or been abandoned).
pub fn finish(current: State, result: CallResult) -> Result<State> {
    next_state(current, Transition::Complete(result))
}

/// Transitions an external party may request from `state`.
///
/// `Complete` is driven by the server itself and is not listed.
pub fn available_transitions(state: State) -> &'static [Transition] {
    use State::*;
    use Transition::*;

    match state {
        Idle => &[Accept],
        Active => &[Accept, Preempt],
        Succeeded | Aborted | Preempted => &[Accept, Report],
    }
}

//
// Tests
//
