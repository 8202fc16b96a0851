use std::time::Duration;

use super::Pose;

/// One queued instruction for the motion service.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MotionStep {
    /// Move the tool to `target`, taking `duration`.
    ArmMove { target: Pose, duration: Duration },
    /// Drive the gripper to `command` (opening width as the goal provides it).
    GripperMove { command: f64, duration: Duration },
}

impl MotionStep {
    pub const fn duration(&self) -> Duration {
        match self {
            MotionStep::ArmMove { duration, .. } | MotionStep::GripperMove { duration, .. } => {
                *duration
            }
        }
    }

    pub const fn is_arm(&self) -> bool {
        matches!(self, MotionStep::ArmMove { .. })
    }

    pub const fn is_gripper(&self) -> bool {
        matches!(self, MotionStep::GripperMove { .. })
    }

    pub fn arm_target(&self) -> Option<&Pose> {
        match self {
            MotionStep::ArmMove { target, .. } => Some(target),
            MotionStep::GripperMove { .. } => None,
        }
    }

    pub fn gripper_command(&self) -> Option<f64> {
        match self {
            MotionStep::GripperMove { command, .. } => Some(*command),
            MotionStep::ArmMove { .. } => None,
        }
    }
}
