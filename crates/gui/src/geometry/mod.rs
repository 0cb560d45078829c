//! Coordinate and geometry kernel shared by both views.
//!
//! Horizontal world points are carried as `kurbo::Point` with `x` = world x
//! (room length axis) and `y` = world z (room width axis).

pub mod boundary;
pub mod constraint;
pub mod hit_test;
pub mod plan_transform;
pub mod rotation;

pub use boundary::{RoomOutline, WallSegment};
pub use constraint::clamp_to_room;
pub use hit_test::{hit_test_plan, item_contains};
pub use plan_transform::PlanTransform;
pub use rotation::{angle_to_pointer, local_to_world, snap_angle, step_yaw, world_to_local, SNAP_DEGREES};
