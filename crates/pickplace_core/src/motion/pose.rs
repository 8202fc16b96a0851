use std::f64::consts::FRAC_1_SQRT_2;

/// Position in the goal's reference frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Orientation as a unit quaternion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Fixed-axis roll/pitch/yaw (radians), same convention as `tf::Quaternion::setRPY`.
    pub fn from_rpy(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Tool pointing straight down: roll 0, pitch +90°, yaw 0.
pub const GRIPPER_DOWN: Quaternion = Quaternion {
    x: 0.0,
    y: FRAC_1_SQRT_2,
    z: 0.0,
    w: FRAC_1_SQRT_2,
};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

impl Pose {
    pub const fn new(position: Point, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at `position` with identity orientation.
    pub const fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point::new(x, y, z), Quaternion::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn gripper_down_matches_pitch_quarter_turn() {
        let q = Quaternion::from_rpy(0.0, FRAC_PI_2, 0.0);
        assert!(close(q.x, GRIPPER_DOWN.x));
        assert!(close(q.y, GRIPPER_DOWN.y));
        assert!(close(q.z, GRIPPER_DOWN.z));
        assert!(close(q.w, GRIPPER_DOWN.w));
    }

    #[test]
    fn zero_rpy_is_identity() {
        assert_eq!(Quaternion::from_rpy(0.0, 0.0, 0.0), Quaternion::IDENTITY);
    }

    #[test]
    fn from_rpy_is_unit_length() {
        let q = Quaternion::from_rpy(0.3, -1.1, 2.4);
        let norm = (q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w).sqrt();
        assert!(close(norm, 1.0));
    }
}
