//! pickplace_roslibrust
//!
//! ROS-facing adapter layer for the pick-and-place coordinator.
//! Hosts the async goal server and the downstream MoveArm seam,
//! while keeping state machine and waypoint semantics in `pickplace_core`.

pub mod action;
pub mod error;
pub mod transport;

// Re-export core types that adapter users will commonly need
pub use pickplace_core::error::{CoreError, Result};
pub use pickplace_core::goal::{GoalId, GoalParameters, Outcome, PickPlaceGoal, State};
pub use pickplace_core::motion::{Point, Pose, Quaternion};
