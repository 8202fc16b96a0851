use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use pickplace_core::error::{CoreError, Domain, ErrorKind, Result};
use pickplace_core::goal::{
    finish, next_state, CallResult, GoalId, Outcome, PickPlaceGoal, State, Transition,
};
use pickplace_core::motion::synthesize;
use tokio::sync::{broadcast, Notify};
use tracing::{debug, info, warn};

use super::dtos::move_arm;
use super::{GoalFeedback, GoalOutcome, MoveArmClient, Progress};
use crate::error::log_core_error;

/// Upper bound on a single MoveArm call unless configured otherwise.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ServerOptions {
    /// `None` waits for the motion service indefinitely.
    pub call_timeout: Option<Duration>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            call_timeout: Some(DEFAULT_CALL_TIMEOUT),
        }
    }
}

struct ActiveGoal {
    id: GoalId,
    cancel: Arc<Notify>,
}

/// A goal that holds (or held) the slot but has not been run yet.
///
/// Returned by [`PickAndPlaceServer::accept`]; pass it to
/// [`PickAndPlaceServer::run`]. Preempts issued in between are kept.
#[must_use = "an accepted goal reports no outcome until it is run"]
#[derive(Debug)]
pub struct AcceptedGoal {
    id: GoalId,
    goal: PickPlaceGoal,
    cancel: Arc<Notify>,
}

impl AcceptedGoal {
    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn goal(&self) -> &PickPlaceGoal {
        &self.goal
    }
}

struct Slot {
    state: State,
    current: Option<ActiveGoal>,
}

/// Single-slot pick-and-place goal server.
///
/// Responsibilities:
/// - Hold the goal slot state (at most one outstanding goal)
/// - Replace an active goal when a new one arrives (latest goal wins)
/// - Synthesize the waypoint sequence and issue one MoveArm call per goal
/// - Race that call against preemption and the call timeout
/// - Report exactly one outcome per goal (return value + outcome stream)
pub struct PickAndPlaceServer<C: MoveArmClient> {
    name: String,
    client: Arc<C>,
    options: ServerOptions,
    next_id: AtomicU64,
    slot: Mutex<Slot>,
    outcomes: broadcast::Sender<GoalOutcome>,
    feedback: broadcast::Sender<GoalFeedback>,
}

/// Public API (library user facing).
impl<C: MoveArmClient> PickAndPlaceServer<C> {
    /// Create a new server. Starts `Idle`.
    pub fn new(name: impl Into<String>, client: Arc<C>, options: ServerOptions) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::error()
                .domain(Domain::Goal)
                .kind(ErrorKind::InvalidArgument)
                .msg("action name must not be empty")
                .build());
        }

        let (outcomes, _rx) = broadcast::channel(32);
        let (feedback, _rx) = broadcast::channel(64);

        Ok(Self {
            name,
            client,
            options,
            next_id: AtomicU64::new(1),
            slot: Mutex::new(Slot {
                state: State::Idle,
                current: None,
            }),
            outcomes,
            feedback,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> ServerOptions {
        self.options
    }

    /// Current slot state.
    pub fn state(&self) -> State {
        self.slot().state
    }

    /// Goal currently holding the slot, if any.
    pub fn active_goal(&self) -> Option<GoalId> {
        self.slot().current.as_ref().map(|goal| goal.id)
    }

    /// Terminal outcomes, one per accepted goal.
    pub fn subscribe_outcomes(&self) -> broadcast::Receiver<GoalOutcome> {
        self.outcomes.subscribe()
    }

    /// Progress of accepted goals.
    pub fn subscribe_feedback(&self) -> broadcast::Receiver<GoalFeedback> {
        self.feedback.subscribe()
    }

    /// Accept `goal`, run it to a terminal state and return its outcome.
    ///
    /// Shorthand for [`accept`](Self::accept) followed by [`run`](Self::run).
    pub async fn submit_goal(&self, goal: PickPlaceGoal) -> Outcome {
        let accepted = self.accept(goal);
        self.run(accepted).await
    }

    /// Make `goal` the active goal without awaiting anything.
    ///
    /// An active goal is replaced unconditionally and settles as `Preempted`.
    /// No validation is applied to the goal's numbers. Once this returns,
    /// [`request_preempt`](Self::request_preempt) applies to the new goal.
    pub fn accept(&self, goal: PickPlaceGoal) -> AcceptedGoal {
        let id = GoalId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let cancel = Arc::new(Notify::new());

        {
            let mut slot = self.slot();
            if let Some(previous) = slot.current.take() {
                info!(server = %self.name, replaced = %previous.id, by = %id, "replacing outstanding goal");
                previous.cancel.notify_one();
            }

            slot.state = next_state(slot.state, Transition::Accept).unwrap_or_else(|err| {
                log_core_error(&err);
                State::Active
            });
            slot.current = Some(ActiveGoal {
                id,
                cancel: Arc::clone(&cancel),
            });
        }

        info!(
            server = %self.name,
            goal = %id,
            frame = %goal.params.frame,
            pickup = ?goal.pickup.position,
            place = ?goal.place.position,
            "goal accepted"
        );
        self.emit(id, Progress::Accepted);

        AcceptedGoal { id, goal, cancel }
    }

    /// Synthesize, dispatch and settle an accepted goal.
    ///
    /// A goal preempted or replaced before dispatch settles as `Preempted`
    /// without calling the motion service.
    pub async fn run(&self, accepted: AcceptedGoal) -> Outcome {
        let AcceptedGoal { id, goal, cancel } = accepted;

        let sequence = synthesize(&goal);
        self.emit(
            id,
            Progress::SequenceReady {
                steps: sequence.len(),
                motion_time: sequence.total_duration(),
            },
        );
        let request = move_arm::Request::from(sequence);

        let result = if self.owns_active_slot(id) {
            self.emit(id, Progress::Dispatched);
            self.call(id, request, &cancel).await
        } else {
            debug!(server = %self.name, goal = %id, "goal preempted before dispatch");
            CallResult::Failure
        };

        self.settle(id, result)
    }

    /// Preempt the active goal.
    ///
    /// Returns `false` (and changes nothing) when no goal is active.
    /// A MoveArm call already on the wire is abandoned, not recalled.
    pub fn request_preempt(&self) -> bool {
        let mut slot = self.slot();
        if slot.state != State::Active {
            debug!(server = %self.name, state = slot.state.label(), "preempt ignored: no active goal");
            return false;
        }

        match next_state(slot.state, Transition::Preempt) {
            Ok(state) => slot.state = state,
            Err(err) => {
                log_core_error(&err);
                return false;
            }
        }

        if let Some(goal) = &slot.current {
            info!(server = %self.name, goal = %goal.id, "preempt requested");
            goal.cancel.notify_one();
        }
        true
    }
}

/// Internal goal pipeline.
impl<C: MoveArmClient> PickAndPlaceServer<C> {
    fn slot(&self) -> MutexGuard<'_, Slot> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poison) => {
                warn!(server = %self.name, "goal slot mutex poisoned");
                poison.into_inner()
            }
        }
    }

    fn owns_active_slot(&self, id: GoalId) -> bool {
        let slot = self.slot();
        slot.state == State::Active && slot.current.as_ref().map(|g| g.id) == Some(id)
    }

    async fn call(&self, id: GoalId, request: move_arm::Request, cancel: &Notify) -> CallResult {
        let mut task = tokio::spawn(invoke(
            Arc::clone(&self.client),
            request,
            self.options.call_timeout,
        ));
        let abort = task.abort_handle();

        let joined = tokio::select! {
            _ = cancel.notified() => {
                abort.abort();
                warn!(
                    server = %self.name,
                    goal = %id,
                    "abandoning in-flight MoveArm call; motion already sent may still run"
                );
                return CallResult::Failure;
            }
            joined = &mut task => joined,
        };

        match joined {
            Ok(Ok(response)) => {
                if !response.success {
                    log_core_error(&CoreError::motion_rejected(id.0));
                }
                CallResult::from(response.success)
            }
            Ok(Err(err)) => {
                log_core_error(&err);
                CallResult::Failure
            }
            Err(join_err) => {
                log_core_error(&CoreError::motion_transport(join_err));
                CallResult::Failure
            }
        }
    }

    /// Decide and report the outcome of `id`, then free the slot if it still owns it.
    fn settle(&self, id: GoalId, result: CallResult) -> Outcome {
        let mut slot = self.slot();
        let owns_slot = slot.current.as_ref().map(|g| g.id) == Some(id);

        // A goal that lost the slot was replaced, which preempts it.
        let before = if owns_slot {
            slot.state
        } else {
            State::Preempted
        };
        let terminal = finish(before, result).unwrap_or_else(|err| {
            log_core_error(&err);
            State::Aborted
        });
        let outcome = terminal.outcome().unwrap_or(Outcome::Aborted);

        if owns_slot {
            slot.state = terminal;
        }

        info!(server = %self.name, goal = %id, outcome = outcome.label(), "goal finished");
        // No receivers is fine; the return value still carries the outcome.
        let _ = self.outcomes.send(GoalOutcome {
            goal_id: id,
            outcome,
        });

        if owns_slot {
            slot.state = next_state(terminal, Transition::Report).unwrap_or(State::Idle);
            slot.current = None;
        }

        outcome
    }

    fn emit(&self, goal_id: GoalId, progress: Progress) {
        let _ = self.feedback.send(GoalFeedback { goal_id, progress });
    }
}

async fn invoke<C: MoveArmClient>(
    client: Arc<C>,
    request: move_arm::Request,
    limit: Option<Duration>,
) -> Result<move_arm::Response> {
    let call = client.move_arm(&request);
    let response = match limit {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(response) => response,
            Err(_) => return Err(CoreError::motion_timeout(limit)),
        },
        None => call.await,
    };
    response.map_err(CoreError::motion_transport)
}

/// Unit tests for PickAndPlaceServer.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveArmFuture;
    use pickplace_core::goal::GoalParameters;
    use pickplace_core::motion::Pose;

    struct FixedClient(bool);

    impl MoveArmClient for FixedClient {
        type Error = String;

        fn move_arm<'a>(&'a self, _req: &'a move_arm::Request) -> MoveArmFuture<'a, String> {
            let success = self.0;
            Box::pin(async move { Ok(move_arm::Response { success }) })
        }
    }

    fn goal() -> PickPlaceGoal {
        PickPlaceGoal {
            params: GoalParameters {
                frame: "base".to_string(),
                gripper_open: 0.04,
                gripper_closed: 0.024,
                z_up: 0.08,
                z_down: -0.04,
            },
            pickup: Pose::at(1.0, 0.0, 0.0),
            place: Pose::at(0.0, 1.0, 0.0),
        }
    }

    fn server(success: bool) -> PickAndPlaceServer<FixedClient> {
        PickAndPlaceServer::new(
            "pick_and_place",
            Arc::new(FixedClient(success)),
            ServerOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = PickAndPlaceServer::new("", Arc::new(FixedClient(true)), ServerOptions::default())
            .err()
            .expect("empty name must fail");
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn preempt_when_idle_is_a_no_op() {
        let server = server(true);
        let mut outcomes = server.subscribe_outcomes();

        assert!(!server.request_preempt());
        assert_eq!(server.state(), State::Idle);
        assert!(outcomes.try_recv().is_err());
    }

    #[tokio::test]
    async fn slot_returns_to_idle_after_outcome() {
        let server = server(true);

        assert_eq!(server.submit_goal(goal()).await, Outcome::Succeeded);
        assert_eq!(server.state(), State::Idle);
        assert_eq!(server.active_goal(), None);
    }

    #[tokio::test]
    async fn feedback_reports_stages_in_order() {
        let server = server(false);
        let mut feedback = server.subscribe_feedback();

        assert_eq!(server.submit_goal(goal()).await, Outcome::Aborted);

        let stages: Vec<Progress> = std::iter::from_fn(|| feedback.try_recv().ok())
            .map(|fb| fb.progress)
            .collect();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0], Progress::Accepted);
        assert!(matches!(stages[1], Progress::SequenceReady { steps: 9, .. }));
        assert_eq!(stages[2], Progress::Dispatched);
    }

    #[tokio::test]
    async fn goal_ids_increase() {
        let server = server(true);
        let mut outcomes = server.subscribe_outcomes();

        server.submit_goal(goal()).await;
        server.submit_goal(goal()).await;

        let first = outcomes.try_recv().unwrap().goal_id;
        let second = outcomes.try_recv().unwrap().goal_id;
        assert!(second > first);
    }
}
