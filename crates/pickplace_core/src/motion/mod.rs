//! pickplace_core::motion
//!
//! Geometry value types and the fixed pick-and-place waypoint template.

mod pose;
mod sequence;
mod step;

pub use pose::{Point, Pose, Quaternion, GRIPPER_DOWN};
pub use sequence::{
    synthesize, synthesize_parts, MotionSequence, ARM_HOVER_TIME, ARM_RETREAT_TIME,
    GRIPPER_MOVE_TIME, STEP_COUNT,
};
pub use step::MotionStep;
