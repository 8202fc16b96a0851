use pickplace_core::goal::{GoalParameters, PickPlaceGoal};
use pickplace_core::motion::{
    synthesize, MotionStep, Point, Pose, Quaternion, GRIPPER_DOWN, STEP_COUNT,
};

fn demo_goal() -> PickPlaceGoal {
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

fn target(step: &MotionStep) -> Point {
    step.arm_target().expect("expected an arm move").position
}

#[test]
fn demo_goal_produces_expected_waypoints() {
    let seq = synthesize(&demo_goal());
    let steps = seq.steps();

    assert_eq!(seq.frame(), "base");
    assert_eq!(steps.len(), STEP_COUNT);

    assert_eq!(steps[0].gripper_command(), Some(0.04));
    assert_eq!(target(&steps[1]), Point::new(1.0, 0.0, 0.08));
    assert_eq!(target(&steps[2]), Point::new(1.0, 0.0, -0.04));
    assert_eq!(steps[3].gripper_command(), Some(0.024));
    assert_eq!(target(&steps[4]), Point::new(1.0, 0.0, 0.08));
    assert_eq!(target(&steps[5]), Point::new(0.0, 1.0, 0.08));
    assert_eq!(target(&steps[6]), Point::new(0.0, 1.0, -0.04));
    assert_eq!(steps[7].gripper_command(), Some(0.04));
    assert_eq!(target(&steps[8]), Point::new(0.0, 1.0, 0.08));
}

#[test]
fn sequence_starts_open_and_ends_above_place() {
    let goal = demo_goal();
    let seq = synthesize(&goal);
    let steps = seq.steps();

    assert_eq!(steps.first().and_then(MotionStep::gripper_command), Some(goal.params.gripper_open));

    let last = steps.last().expect("non-empty");
    assert_eq!(
        target(last),
        Point::new(goal.place.position.x, goal.place.position.y, goal.params.z_up)
    );
}

#[test]
fn grasp_happens_once_right_after_first_descent() {
    let goal = demo_goal();
    let seq = synthesize(&goal);
    let steps = seq.steps();

    let closes: Vec<usize> = steps
        .iter()
        .enumerate()
        .filter(|(_, s)| s.gripper_command() == Some(goal.params.gripper_closed))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(closes.len(), 1);

    let first_descent = steps
        .iter()
        .position(|s| s.arm_target().map(|p| p.position.z) == Some(goal.params.z_down))
        .expect("descent present");
    assert_eq!(closes[0], first_descent + 1);
}

#[test]
fn orientation_is_input_independent() {
    let mut goal = demo_goal();
    goal.pickup.orientation = Quaternion::from_rpy(0.4, -0.2, 1.3);
    goal.place.orientation = Quaternion::from_rpy(-2.0, 0.7, 0.1);

    for step in synthesize(&goal).steps().iter().filter(|s| s.is_arm()) {
        assert_eq!(step.arm_target().map(|p| p.orientation), Some(GRIPPER_DOWN));
    }
}

#[test]
fn synthesis_is_deterministic() {
    let goal = demo_goal();
    assert_eq!(synthesize(&goal), synthesize(&goal));
}

#[test]
fn parameters_pass_through_unclamped() {
    let mut goal = demo_goal();
    goal.params.z_up = -3.0;
    goal.params.z_down = 12.5;
    goal.params.gripper_open = -1.0;
    goal.params.gripper_closed = f64::MAX;

    let seq = synthesize(&goal);
    let steps = seq.steps();
    assert_eq!(target(&steps[1]).z, -3.0);
    assert_eq!(target(&steps[2]).z, 12.5);
    assert_eq!(steps[0].gripper_command(), Some(-1.0));
    assert_eq!(steps[3].gripper_command(), Some(f64::MAX));
}
