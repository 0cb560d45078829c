//! Yaw conventions and 15° snapping
//!
//! Yaw is degrees about the vertical axis. A local offset `(lx, lz)` maps to
//! world `(lx·cos − lz·sin, lx·sin + lz·cos)`, the same in both views.

use kurbo::{Point, Vec2};

/// Rotation grid shared by the 2D snap and the 3D step
pub const SNAP_DEGREES: f64 = 15.0;

/// Snap an angle to the nearest multiple of `step` degrees
pub fn snap_angle(degrees: f64, step: f64) -> f64 {
    let snapped = (degrees / step).round() * step;
    // Avoid -0.0 leaking into stored rotations
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}

/// Advance a yaw by one step. The remainder keeps the sign of the yaw, so a
/// negative angle from the 2D snap stays negative until it crosses zero.
pub fn step_yaw(yaw: f64, step: f64) -> f64 {
    (yaw + step) % 360.0
}

/// Angle (degrees) from `center` to `target`, snapped to the rotation grid
pub fn angle_to_pointer(center: Point, target: Point) -> f64 {
    let d = target - center;
    snap_angle(d.y.atan2(d.x).to_degrees(), SNAP_DEGREES)
}

/// Rotate a local offset by `yaw_degrees` into world orientation
pub fn local_to_world(local: Vec2, yaw_degrees: f64) -> Vec2 {
    rotate(local, yaw_degrees.to_radians())
}

/// Rotate a world offset by `-yaw_degrees` into the item's local frame
pub fn world_to_local(world: Vec2, yaw_degrees: f64) -> Vec2 {
    rotate(world, -yaw_degrees.to_radians())
}

fn rotate(v: Vec2, radians: f64) -> Vec2 {
    let (s, c) = radians.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}
