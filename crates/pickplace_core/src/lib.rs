//! pickplace_core: ROS-agnostic core for single-goal pick-and-place coordination.
//!
//! Design goals:
//! - Pure, testable logic (no ROS deps, no async runtime).
//! - Explicit types; no macro wizardry.
//! - Small, stable public API surface.

pub mod error;

/// Goal lifecycle state machine (accept / preempt / settle / report).
pub mod goal;

/// Poses, motion steps and the pick-and-place waypoint synthesizer.
pub mod motion;
