use pickplace_core::goal::{Outcome, State};

/// actionlib goal status values.
///
/// These mirror `actionlib_msgs/GoalStatus` numeric constants.
pub mod goal_status_ids {
    pub const PENDING: u8 = 0;
    pub const ACTIVE: u8 = 1;
    pub const PREEMPTED: u8 = 2;
    pub const SUCCEEDED: u8 = 3;
    pub const ABORTED: u8 = 4;
    pub const REJECTED: u8 = 5;
    pub const PREEMPTING: u8 = 6;
    pub const RECALLING: u8 = 7;
    pub const RECALLED: u8 = 8;
    pub const LOST: u8 = 9;
}

/// Map a slot state to its actionlib status. `Idle` has no goal to report on.
pub fn ros_status_id(state: State) -> Option<u8> {
    match state {
        State::Idle => None,
        State::Active => Some(goal_status_ids::ACTIVE),
        State::Succeeded => Some(goal_status_ids::SUCCEEDED),
        State::Aborted => Some(goal_status_ids::ABORTED),
        State::Preempted => Some(goal_status_ids::PREEMPTED),
    }
}

pub fn outcome_status_id(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Succeeded => goal_status_ids::SUCCEEDED,
        Outcome::Aborted => goal_status_ids::ABORTED,
        Outcome::Preempted => goal_status_ids::PREEMPTED,
    }
}

/// Map an actionlib terminal status back to an outcome.
///
/// Only the three statuses this server produces map; everything else is `None`.
pub fn outcome_from_status_id(id: u8) -> Option<Outcome> {
    match id {
        goal_status_ids::SUCCEEDED => Some(Outcome::Succeeded),
        goal_status_ids::ABORTED => Some(Outcome::Aborted),
        goal_status_ids::PREEMPTED => Some(Outcome::Preempted),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickplace_core::goal::ALL_STATES;

    #[test]
    fn terminal_states_round_trip_through_status_ids() {
        for state in ALL_STATES {
            if let Some(outcome) = state.outcome() {
                let id = ros_status_id(state).expect("terminal state has a status");
                assert_eq!(id, outcome_status_id(outcome));
                assert_eq!(outcome_from_status_id(id), Some(outcome));
            }
        }
    }

    #[test]
    fn idle_and_non_terminal_statuses() {
        assert_eq!(ros_status_id(State::Idle), None);
        assert_eq!(ros_status_id(State::Active), Some(goal_status_ids::ACTIVE));
        assert_eq!(outcome_from_status_id(goal_status_ids::ACTIVE), None);
        assert_eq!(outcome_from_status_id(goal_status_ids::REJECTED), None);
    }
}
