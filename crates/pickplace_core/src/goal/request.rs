use crate::motion::Pose;

/// Identity of an accepted goal. Assigned by the server, strictly increasing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GoalId(pub u64);

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "goal-{}", self.0)
    }
}

/// Per-goal parameters, captured when the goal is accepted.
///
/// Values are forwarded verbatim: no range checks, no unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalParameters {
    /// Reference frame the poses and heights are expressed in.
    pub frame: String,
    pub gripper_open: f64,
    pub gripper_closed: f64,
    /// Travel height above pickup/place.
    pub z_up: f64,
    /// Grasp/release height.
    pub z_down: f64,
}

/// A pick-and-place request as submitted by the requester.
#[derive(Debug, Clone, PartialEq)]
pub struct PickPlaceGoal {
    pub params: GoalParameters,
    pub pickup: Pose,
    pub place: Pose,
}
