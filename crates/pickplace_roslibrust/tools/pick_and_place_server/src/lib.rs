//! pick_and_place_server
//!
//! rosbridge front end for the pick-and-place goal server: actionlib topics in,
//! `simple_arm_server/MoveArm` service calls out.

pub mod bridge;
pub mod config;
pub mod messages;
