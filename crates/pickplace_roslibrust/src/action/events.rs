//! Goal event types (ROS-agnostic).
//!
//! Transport layers subscribe and map these onto actionlib result/feedback topics.

use std::time::Duration;

use pickplace_core::goal::{GoalId, Outcome};

/// Emitted exactly once per accepted goal, when it reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalOutcome {
    pub goal_id: GoalId,
    pub outcome: Outcome,
}

/// Progress stages of the active goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Accepted,
    SequenceReady { steps: usize, motion_time: Duration },
    Dispatched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalFeedback {
    pub goal_id: GoalId,
    pub progress: Progress,
}
