//! pickplace_roslibrust::action
//!
//! Single-goal pick-and-place action server and its downstream MoveArm seam.

// Downstream MoveArm request/response DTOs.
pub mod dtos;

// Downstream call seam.
mod client;
pub use client::{MoveArmClient, MoveArmFuture};

// Outcome + progress event streams.
mod events;
pub use events::{GoalFeedback, GoalOutcome, Progress};

// actionlib GoalStatus id mapping.
mod ros;
pub use ros::{goal_status_ids, outcome_from_status_id, outcome_status_id, ros_status_id};

// The goal lifecycle manager.
mod server;
pub use server::{AcceptedGoal, PickAndPlaceServer, ServerOptions, DEFAULT_CALL_TIMEOUT};
