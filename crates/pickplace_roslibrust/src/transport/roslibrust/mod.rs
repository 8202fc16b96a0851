//! roslibrust (rosbridge) transport glue.
//!
//! Contains **no ROS message types**: downstream crates provide concrete
//! service/message types and implement the small mapping traits here.

pub mod move_arm;
