//! Downstream service DTOs.
//!
//! These are adapter-side request/response types for `simple_arm_server/MoveArm`.
//! The transport layer maps real ROS messages into and out of these.

/// Minimal representation of the `MoveArm` request/response.
pub mod move_arm {
    use std::time::Duration;

    use pickplace_core::motion::{MotionSequence, MotionStep, Pose};

    /// `ArmAction.type` for a tool pose move.
    pub const MOVE_ARM: u8 = 0;
    /// `ArmAction.type` for a gripper command.
    pub const MOVE_GRIPPER: u8 = 1;

    /// One queued action. Unused fields stay at their defaults
    /// (`goal` for gripper moves, `command` for arm moves).
    #[derive(Debug, Copy, Clone, PartialEq)]
    pub struct ArmAction {
        pub action_type: u8,
        pub goal: Pose,
        pub command: f64,
        pub move_time: Duration,
    }

    impl From<MotionStep> for ArmAction {
        fn from(step: MotionStep) -> Self {
            match step {
                MotionStep::ArmMove { target, duration } => ArmAction {
                    action_type: MOVE_ARM,
                    goal: target,
                    command: 0.0,
                    move_time: duration,
                },
                MotionStep::GripperMove { command, duration } => ArmAction {
                    action_type: MOVE_GRIPPER,
                    goal: Pose::default(),
                    command,
                    move_time: duration,
                },
            }
        }
    }

    /// Request: header frame + ordered actions.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Request {
        pub frame_id: String,
        pub goals: Vec<ArmAction>,
    }

    impl From<MotionSequence> for Request {
        fn from(seq: MotionSequence) -> Self {
            let (frame_id, steps) = seq.into_parts();
            Request {
                frame_id,
                goals: steps.into_iter().map(ArmAction::from).collect(),
            }
        }
    }

    /// Response: all-or-nothing result for the whole sequence.
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Response {
        pub success: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::move_arm;
    use pickplace_core::goal::{GoalParameters, PickPlaceGoal};
    use pickplace_core::motion::{synthesize, Pose, GRIPPER_DOWN};

    #[test]
    fn request_preserves_frame_order_and_kinds() {
        let goal = PickPlaceGoal {
            params: GoalParameters {
                frame: "arm_base_link".to_string(),
                gripper_open: 0.04,
                gripper_closed: 0.024,
                z_up: 0.08,
                z_down: -0.04,
            },
            pickup: Pose::at(0.2, 0.0, 0.0),
            place: Pose::at(0.0, 0.2, 0.0),
        };

        let req = move_arm::Request::from(synthesize(&goal));

        assert_eq!(req.frame_id, "arm_base_link");
        let kinds: Vec<u8> = req.goals.iter().map(|a| a.action_type).collect();
        assert_eq!(
            kinds,
            vec![
                move_arm::MOVE_GRIPPER,
                move_arm::MOVE_ARM,
                move_arm::MOVE_ARM,
                move_arm::MOVE_GRIPPER,
                move_arm::MOVE_ARM,
                move_arm::MOVE_ARM,
                move_arm::MOVE_ARM,
                move_arm::MOVE_GRIPPER,
                move_arm::MOVE_ARM,
            ]
        );

        assert_eq!(req.goals[0].command, 0.04);
        assert_eq!(req.goals[0].goal, Pose::default());
        assert_eq!(req.goals[1].goal.orientation, GRIPPER_DOWN);
        assert_eq!(req.goals[1].command, 0.0);
        assert_eq!(req.goals[3].command, 0.024);
    }
}
