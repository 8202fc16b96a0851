//! Mapping between actionlib topic messages and the goal server.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use pickplace_core::goal::{GoalId, GoalParameters, Outcome, PickPlaceGoal, State};
use pickplace_core::motion::{Point, Pose, Quaternion};
use pickplace_roslibrust::action::dtos::move_arm;
use pickplace_roslibrust::action::{
    goal_status_ids, outcome_status_id, AcceptedGoal, MoveArmClient, PickAndPlaceServer,
};
use tracing::warn;
use pickplace_roslibrust::transport::roslibrust::move_arm::{FromMoveArmRequest, MoveArmResponse};

use crate::messages::actionlib_msgs::{GoalID, GoalStatus, GoalStatusArray};
use crate::messages::simple_arm_server::{ArmAction, MoveArmRequest, MoveArmResponse as MoveArmResponseMsg};
use crate::messages::std_msgs::Header;
use crate::messages::turtlebot_block_manipulation::{
    PickAndPlaceActionFeedback, PickAndPlaceActionResult, PickAndPlaceFeedback, PickAndPlaceGoal,
    PickAndPlaceResult,
};
use crate::messages::{geometry_msgs, Time};

/// actionlib publishes goal status at 5 Hz by default.
pub const STATUS_PERIOD: Duration = Duration::from_millis(200);

/// actionlib topic names for one action server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTopics {
    pub goal: String,
    pub cancel: String,
    pub result: String,
    pub status: String,
    pub feedback: String,
}

impl ActionTopics {
    pub fn for_action(action_name: &str) -> Self {
        let base = format!("/{}", action_name.trim_matches('/'));
        Self {
            goal: format!("{base}/goal"),
            cancel: format!("{base}/cancel"),
            result: format!("{base}/result"),
            status: format!("{base}/status"),
            feedback: format!("{base}/feedback"),
        }
    }
}

pub fn pose_from_msg(msg: &geometry_msgs::Pose) -> Pose {
    Pose::new(
        Point::new(msg.position.x, msg.position.y, msg.position.z),
        Quaternion {
            x: msg.orientation.x,
            y: msg.orientation.y,
            z: msg.orientation.z,
            w: msg.orientation.w,
        },
    )
}

pub fn pose_to_msg(pose: &Pose) -> geometry_msgs::Pose {
    geometry_msgs::Pose {
        position: geometry_msgs::Point {
            x: pose.position.x,
            y: pose.position.y,
            z: pose.position.z,
        },
        orientation: geometry_msgs::Quaternion {
            x: pose.orientation.x,
            y: pose.orientation.y,
            z: pose.orientation.z,
            w: pose.orientation.w,
        },
    }
}

/// Capture an incoming action goal as a per-goal value. Nothing is validated.
pub fn goal_from_msg(msg: &PickAndPlaceGoal) -> PickPlaceGoal {
    PickPlaceGoal {
        params: GoalParameters {
            frame: msg.frame.clone(),
            gripper_open: msg.gripper_open,
            gripper_closed: msg.gripper_closed,
            z_up: msg.z_up,
            z_down: msg.z_down,
        },
        pickup: pose_from_msg(&msg.pickup_pose),
        place: pose_from_msg(&msg.place_pose),
    }
}

/// Whether a cancel message targets the goal with actionlib id `active`.
///
/// An empty id cancels whatever is running (actionlib "cancel all").
pub fn cancel_applies(cancel: &GoalID, active: Option<&str>) -> bool {
    cancel.id.is_empty() || active == Some(cancel.id.as_str())
}

#[derive(Debug, Clone, PartialEq)]
struct TrackedGoal {
    goal: GoalId,
    ros_id: GoalID,
}

/// Pairs the server's active goal with its actionlib id.
///
/// Acceptance and cancellation both go through this lock, so a cancel sees
/// either the previous goal or the new one with its id, never a mix.
#[derive(Debug, Default)]
pub struct ActiveRosGoal {
    slot: Mutex<Option<TrackedGoal>>,
}

impl ActiveRosGoal {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<TrackedGoal>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poison) => {
                warn!("active goal mutex poisoned");
                poison.into_inner()
            }
        }
    }

    /// Accept `goal` on `server` and record `ros_id` for it.
    pub fn accept<C: MoveArmClient>(
        &self,
        server: &PickAndPlaceServer<C>,
        ros_id: &GoalID,
        goal: PickPlaceGoal,
    ) -> AcceptedGoal {
        let mut slot = self.slot();
        let accepted = server.accept(goal);
        *slot = Some(TrackedGoal {
            goal: accepted.id(),
            ros_id: ros_id.clone(),
        });
        accepted
    }

    /// Preempt the active goal if `cancel` targets it.
    pub fn cancel<C: MoveArmClient>(&self, server: &PickAndPlaceServer<C>, cancel: &GoalID) -> bool {
        let slot = self.slot();
        let active = slot.as_ref().map(|tracked| tracked.ros_id.id.as_str());
        if !cancel_applies(cancel, active) {
            return false;
        }
        server.request_preempt()
    }

    /// Forget `goal`. A replaced goal leaves its successor in place.
    pub fn release(&self, goal: GoalId) -> bool {
        let mut slot = self.slot();
        if slot.as_ref().map(|tracked| tracked.goal) == Some(goal) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<GoalID> {
        self.slot().as_ref().map(|tracked| tracked.ros_id.clone())
    }

    /// actionlib id of `goal`, while it is the tracked goal.
    pub fn ros_id(&self, goal: GoalId) -> Option<GoalID> {
        self.slot()
            .as_ref()
            .filter(|tracked| tracked.goal == goal)
            .map(|tracked| tracked.ros_id.clone())
    }

    /// Periodic status for a server in `state`; empty when nothing runs.
    pub fn status(&self, state: State) -> GoalStatusArray {
        let status = match state {
            State::Active => goal_status_ids::ACTIVE,
            State::Preempted => goal_status_ids::PREEMPTING,
            _ => return empty_status(),
        };
        match self.current() {
            Some(ros_id) => status_array(&ros_id, status),
            None => empty_status(),
        }
    }
}

pub fn empty_status() -> GoalStatusArray {
    GoalStatusArray {
        header: Header {
            stamp: Time::now(),
            ..Default::default()
        },
        status_list: Vec::new(),
    }
}

pub fn status_array(goal_id: &GoalID, status: u8) -> GoalStatusArray {
    GoalStatusArray {
        header: Header {
            stamp: Time::now(),
            ..Default::default()
        },
        status_list: vec![GoalStatus {
            goal_id: goal_id.clone(),
            status,
            text: String::new(),
        }],
    }
}

pub fn active_status(goal_id: &GoalID) -> GoalStatusArray {
    status_array(goal_id, goal_status_ids::ACTIVE)
}

pub fn feedback_msg(goal_id: &GoalID) -> PickAndPlaceActionFeedback {
    PickAndPlaceActionFeedback {
        header: Header {
            stamp: Time::now(),
            ..Default::default()
        },
        status: GoalStatus {
            goal_id: goal_id.clone(),
            status: goal_status_ids::ACTIVE,
            text: String::new(),
        },
        feedback: PickAndPlaceFeedback::default(),
    }
}

pub fn result_msg(goal_id: &GoalID, outcome: Outcome) -> PickAndPlaceActionResult {
    PickAndPlaceActionResult {
        header: Header {
            stamp: Time::now(),
            ..Default::default()
        },
        status: GoalStatus {
            goal_id: goal_id.clone(),
            status: outcome_status_id(outcome),
            text: outcome.label().to_string(),
        },
        result: PickAndPlaceResult::default(),
    }
}

impl FromMoveArmRequest for MoveArmRequest {
    fn from_request(req: &move_arm::Request) -> Self {
        MoveArmRequest {
            header: Header {
                stamp: Time::now(),
                frame_id: req.frame_id.clone(),
                ..Default::default()
            },
            goals: req
                .goals
                .iter()
                .map(|action| ArmAction {
                    action_type: action.action_type,
                    goal: pose_to_msg(&action.goal),
                    command: action.command,
                    move_time: action.move_time.into(),
                })
                .collect(),
        }
    }
}

impl MoveArmResponse for MoveArmResponseMsg {
    fn success(&self) -> bool {
        self.success
    }
}
