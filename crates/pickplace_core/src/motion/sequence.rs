use std::time::Duration;

use crate::goal::{GoalParameters, PickPlaceGoal};

use super::{MotionStep, Point, Pose, GRIPPER_DOWN};

/// Number of steps in a pick-and-place sequence.
pub const STEP_COUNT: usize = 9;

/// Every gripper actuation, including the release over the place pose.
pub const GRIPPER_MOVE_TIME: Duration = Duration::from_secs(1);
/// Approach / transit / descent moves.
pub const ARM_HOVER_TIME: Duration = Duration::from_millis(1500);
/// Short vertical moves straight up after grasp and release.
pub const ARM_RETREAT_TIME: Duration = Duration::from_millis(250);

/// Ordered, immutable list of steps for one goal plus the frame they are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSequence {
    frame: String,
    steps: Vec<MotionStep>,
}

impl MotionSequence {
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn steps(&self) -> &[MotionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total commanded motion time.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(MotionStep::duration).sum()
    }

    /// Hand the sequence over to a request builder.
    pub fn into_parts(self) -> (String, Vec<MotionStep>) {
        (self.frame, self.steps)
    }
}

/// Build the pick-and-place sequence for `goal`.
pub fn synthesize(goal: &PickPlaceGoal) -> MotionSequence {
    synthesize_parts(&goal.pickup, &goal.place, &goal.params)
}

/// Build the pick-and-place sequence from its raw inputs.
///
/// Only the x/y of `pickup` and `place` are used; heights come from
/// `params.z_up`/`params.z_down` and every arm move points the tool down.
pub fn synthesize_parts(pickup: &Pose, place: &Pose, params: &GoalParameters) -> MotionSequence {
    let above = |pose: &Pose, z: f64| MotionStep::ArmMove {
        target: Pose::new(Point::new(pose.position.x, pose.position.y, z), GRIPPER_DOWN),
        duration: ARM_HOVER_TIME,
    };
    let retreat = |pose: &Pose| MotionStep::ArmMove {
        target: Pose::new(
            Point::new(pose.position.x, pose.position.y, params.z_up),
            GRIPPER_DOWN,
        ),
        duration: ARM_RETREAT_TIME,
    };
    let gripper = |command: f64| MotionStep::GripperMove {
        command,
        duration: GRIPPER_MOVE_TIME,
    };

    let steps: [MotionStep; STEP_COUNT] = [
        gripper(params.gripper_open),
        above(pickup, params.z_up),
        above(pickup, params.z_down),
        gripper(params.gripper_closed),
        retreat(pickup),
        above(place, params.z_up),
        above(place, params.z_down),
        gripper(params.gripper_open),
        retreat(place),
    ];

    MotionSequence {
        frame: params.frame.clone(),
        steps: steps.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GoalParameters {
        GoalParameters {
            frame: "arm_base_link".to_string(),
            gripper_open: 0.04,
            gripper_closed: 0.024,
            z_up: 0.08,
            z_down: -0.04,
        }
    }

    #[test]
    fn durations_follow_template() {
        let seq = synthesize_parts(&Pose::at(0.2, 0.1, 0.0), &Pose::at(0.1, -0.2, 0.0), &params());
        let durations: Vec<_> = seq.steps().iter().map(MotionStep::duration).collect();

        assert_eq!(
            durations,
            vec![
                GRIPPER_MOVE_TIME,
                ARM_HOVER_TIME,
                ARM_HOVER_TIME,
                GRIPPER_MOVE_TIME,
                ARM_RETREAT_TIME,
                ARM_HOVER_TIME,
                ARM_HOVER_TIME,
                GRIPPER_MOVE_TIME,
                ARM_RETREAT_TIME,
            ]
        );
        assert_eq!(seq.total_duration(), Duration::from_millis(9500));
    }

    #[test]
    fn input_z_and_orientation_are_ignored() {
        let tilted = Pose::new(
            Point::new(0.3, 0.0, 5.0),
            crate::motion::Quaternion::from_rpy(1.0, 0.0, 0.5),
        );
        let seq = synthesize_parts(&tilted, &tilted, &params());

        for step in seq.steps() {
            if let Some(target) = step.arm_target() {
                assert_eq!(target.orientation, GRIPPER_DOWN);
                assert!(target.position.z == 0.08 || target.position.z == -0.04);
            }
        }
    }

    #[test]
    fn frame_is_carried_through() {
        let seq = synthesize_parts(&Pose::default(), &Pose::default(), &params());
        assert_eq!(seq.frame(), "arm_base_link");
        let (frame, steps) = seq.into_parts();
        assert_eq!(frame, "arm_base_link");
        assert_eq!(steps.len(), STEP_COUNT);
    }
}
