//! Boundary clamping against the room's bounding rectangle

use shared::{Dimensions, RoomDimensions};

/// Clamp a candidate centre so the item's un-rotated footprint stays inside
/// the room's outer rectangle. Rotation and the true room silhouette are not
/// considered. An item wider than the room is centred on that axis.
pub fn clamp_to_room(x: f64, z: f64, item: &Dimensions, room: &RoomDimensions) -> (f64, f64) {
    (
        clamp_axis(x, room.length, item.width),
        clamp_axis(z, room.width, item.depth),
    )
}

fn clamp_axis(v: f64, room_extent: f64, item_extent: f64) -> f64 {
    let limit = (room_extent - item_extent) / 2.0;
    if limit <= 0.0 {
        return 0.0;
    }
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_example_clamp() {
        let room = RoomDimensions::new(6.0, 4.0, 2.7);
        let item = Dimensions::new(2.0, 1.0, 0.8);
        assert_eq!(clamp_to_room(10.0, 0.0, &item, &room), (2.0, 0.0));
        assert_eq!(clamp_to_room(-10.0, -10.0, &item, &room), (-2.0, -1.5));
    }

    #[test]
    fn test_inside_untouched() {
        let room = RoomDimensions::new(6.0, 4.0, 2.7);
        let item = Dimensions::new(1.0, 1.0, 1.0);
        assert_eq!(clamp_to_room(0.3, -0.7, &item, &room), (0.3, -0.7));
    }

    #[test]
    fn test_oversized_item_centred() {
        let room = RoomDimensions::new(2.0, 2.0, 2.0);
        let item = Dimensions::new(3.0, 1.0, 1.0);
        assert_eq!(clamp_to_room(0.8, 0.8, &item, &room), (0.0, 0.5));
    }

    proptest! {
        #[test]
        fn prop_result_within_bounds(
            length in 0.1f64..20.0, width in 0.1f64..20.0,
            w in 0.05f64..5.0, d in 0.05f64..5.0,
            x in -50.0f64..50.0, z in -50.0f64..50.0,
        ) {
            prop_assume!(w <= length && d <= width);
            let room = RoomDimensions::new(length, width, 2.5);
            let item = Dimensions::new(w, d, 1.0);
            let (cx, cz) = clamp_to_room(x, z, &item, &room);
            prop_assert!(cx >= -length / 2.0 + w / 2.0 - 1e-9);
            prop_assert!(cx <= length / 2.0 - w / 2.0 + 1e-9);
            prop_assert!(cz >= -width / 2.0 + d / 2.0 - 1e-9);
            prop_assert!(cz <= width / 2.0 - d / 2.0 + 1e-9);
        }
    }
}
