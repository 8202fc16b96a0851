//! ROS1 message types spoken over rosbridge.
//!
//! Declared by hand (field-for-field with the `.msg`/`.srv`/`.action` files) so
//! the server builds without a ROS installation. Only types that cross the
//! bridge directly implement `RosMessageType`/`RosServiceType`.
//!
//! rosbridge matches types by name and never checks checksums, so types
//! without a well-known checksum carry the wildcard `MD5SUM = "*"`.

use std::time::{SystemTime, UNIX_EPOCH};

use roslibrust::{RosMessageType, RosServiceType};
use serde::{Deserialize, Serialize};

/// ROS1 `time`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub secs: u32,
    pub nsecs: u32,
}

impl Time {
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|dur| Time {
                secs: dur.as_secs() as u32,
                nsecs: dur.subsec_nanos(),
            })
            .unwrap_or_default()
    }
}

/// ROS1 `duration`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosDuration {
    pub secs: i32,
    pub nsecs: i32,
}

impl From<std::time::Duration> for RosDuration {
    fn from(d: std::time::Duration) -> Self {
        RosDuration {
            secs: d.as_secs() as i32,
            nsecs: d.subsec_nanos() as i32,
        }
    }
}

pub mod std_msgs {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Header {
        pub seq: u32,
        pub stamp: Time,
        pub frame_id: String,
    }
}

pub mod geometry_msgs {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
    pub struct Quaternion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub w: f64,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
    pub struct Pose {
        pub position: Point,
        pub orientation: Quaternion,
    }
}

pub mod actionlib_msgs {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GoalID {
        pub stamp: Time,
        pub id: String,
    }

    impl RosMessageType for GoalID {
        const ROS_TYPE_NAME: &'static str = "actionlib_msgs/GoalID";
        const MD5SUM: &'static str = "302881f31927c1df708a2dbab0e80ee8";
        const DEFINITION: &'static str = "time stamp\nstring id";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GoalStatus {
        pub goal_id: GoalID,
        pub status: u8,
        pub text: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GoalStatusArray {
        pub header: std_msgs::Header,
        pub status_list: Vec<GoalStatus>,
    }

    impl RosMessageType for GoalStatusArray {
        const ROS_TYPE_NAME: &'static str = "actionlib_msgs/GoalStatusArray";
        const MD5SUM: &'static str = "8b2b82f13216d0a8ea88bd3af735e619";
        const DEFINITION: &'static str = "Header header\nGoalStatus[] status_list";
    }
}

pub mod simple_arm_server {
    use super::*;

    pub const MOVE_ARM: u8 = 0;
    pub const MOVE_GRIPPER: u8 = 1;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct ArmAction {
        #[serde(rename = "type")]
        pub action_type: u8,
        pub goal: geometry_msgs::Pose,
        pub command: f64,
        pub move_time: RosDuration,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct MoveArmRequest {
        pub header: std_msgs::Header,
        pub goals: Vec<ArmAction>,
    }

    impl RosMessageType for MoveArmRequest {
        const ROS_TYPE_NAME: &'static str = "simple_arm_server/MoveArmRequest";
        const MD5SUM: &'static str = "*";
        const DEFINITION: &'static str = "Header header\nArmAction[] goals";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct MoveArmResponse {
        pub success: bool,
    }

    impl RosMessageType for MoveArmResponse {
        const ROS_TYPE_NAME: &'static str = "simple_arm_server/MoveArmResponse";
        const MD5SUM: &'static str = "*";
        const DEFINITION: &'static str = "bool success";
    }

    pub struct MoveArm;

    impl RosServiceType for MoveArm {
        const ROS_SERVICE_NAME: &'static str = "simple_arm_server/MoveArm";
        const MD5SUM: &'static str = "*";
        type Request = MoveArmRequest;
        type Response = MoveArmResponse;
    }
}

pub mod turtlebot_block_manipulation {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PickAndPlaceGoal {
        pub frame: String,
        pub z_up: f64,
        pub z_down: f64,
        pub gripper_open: f64,
        pub gripper_closed: f64,
        pub pickup_pose: geometry_msgs::Pose,
        pub place_pose: geometry_msgs::Pose,
        pub topic: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct PickAndPlaceActionGoal {
        pub header: std_msgs::Header,
        pub goal_id: actionlib_msgs::GoalID,
        pub goal: PickAndPlaceGoal,
    }

    impl RosMessageType for PickAndPlaceActionGoal {
        const ROS_TYPE_NAME: &'static str = "turtlebot_block_manipulation/PickAndPlaceActionGoal";
        const MD5SUM: &'static str = "*";
        const DEFINITION: &'static str =
            "Header header\nactionlib_msgs/GoalID goal_id\nPickAndPlaceGoal goal";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct PickAndPlaceResult {}

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct PickAndPlaceFeedback {}

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct PickAndPlaceActionFeedback {
        pub header: std_msgs::Header,
        pub status: actionlib_msgs::GoalStatus,
        pub feedback: PickAndPlaceFeedback,
    }

    impl RosMessageType for PickAndPlaceActionFeedback {
        const ROS_TYPE_NAME: &'static str = "turtlebot_block_manipulation/PickAndPlaceActionFeedback";
        const MD5SUM: &'static str = "*";
        const DEFINITION: &'static str =
            "Header header\nactionlib_msgs/GoalStatus status\nPickAndPlaceFeedback feedback";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct PickAndPlaceActionResult {
        pub header: std_msgs::Header,
        pub status: actionlib_msgs::GoalStatus,
        pub result: PickAndPlaceResult,
    }

    impl RosMessageType for PickAndPlaceActionResult {
        const ROS_TYPE_NAME: &'static str = "turtlebot_block_manipulation/PickAndPlaceActionResult";
        const MD5SUM: &'static str = "*";
        const DEFINITION: &'static str =
            "Header header\nactionlib_msgs/GoalStatus status\nPickAndPlaceResult result";
    }
}
