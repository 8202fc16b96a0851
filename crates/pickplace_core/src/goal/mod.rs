//! pickplace_core::goal
//!
//! Single-slot goal lifecycle semantics. No transport, no async runtime.
//!
//! Key ideas:
//! - One slot: `Idle -> Active -> {Succeeded | Aborted | Preempted} -> Idle`
//! - A new goal replaces an active one (latest goal wins, no queue)
//! - A preempt recorded before the downstream call settles wins over its result
//! - The async server drives these tables; it owns the slot and the cancel signal

mod engine;
mod graph;
mod request;
mod state;
mod transition;

pub use engine::{available_transitions, finish, next_state, CallResult};
pub use graph::{transition_graph, TransitionEdge, TransitionGraph};
pub use request::{GoalId, GoalParameters, PickPlaceGoal};
pub use state::{Outcome, State, ALL_STATES};
pub use transition::Transition;
