//! Floor-plan hit testing

use kurbo::Point;
use shared::FurnitureItem;

use super::rotation::world_to_local;

/// Whether a horizontal world point lies inside the item's rotated footprint
pub fn item_contains(item: &FurnitureItem, world: Point) -> bool {
    let offset = world - Point::new(item.position.x, item.position.z);
    let local = world_to_local(offset, item.yaw());
    local.x.abs() <= item.dimensions.width / 2.0 && local.y.abs() <= item.dimensions.depth / 2.0
}

/// Topmost item under `world`. Later items are drawn on top, so the
/// collection is searched back to front.
pub fn hit_test_plan(items: &[FurnitureItem], world: Point) -> Option<&FurnitureItem> {
    items.iter().rev().find(|item| item_contains(item, world))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;
    use shared::{Dimensions, FurnitureKind};

    fn long_item(id: &str, x: f64, z: f64, yaw: f64) -> FurnitureItem {
        let mut it = item(id, FurnitureKind::Sofa, x, z);
        it.dimensions = Dimensions::new(2.0, 0.5, 0.8);
        it.rotation.y = yaw;
        it
    }

    #[test]
    fn test_unrotated_bounds() {
        let it = long_item("a", 0.0, 0.0, 0.0);
        assert!(item_contains(&it, Point::new(0.9, 0.2)));
        assert!(!item_contains(&it, Point::new(0.2, 0.9)));
    }

    #[test]
    fn test_rotated_bounds() {
        let it = long_item("a", 0.0, 0.0, 90.0);
        assert!(item_contains(&it, Point::new(0.2, 0.9)));
        assert!(!item_contains(&it, Point::new(0.9, 0.2)));
    }

    #[test]
    fn test_later_item_wins() {
        let items = vec![long_item("under", 0.0, 0.0, 0.0), long_item("over", 0.5, 0.0, 0.0)];
        assert_eq!(hit_test_plan(&items, Point::new(0.4, 0.0)).map(|i| i.id.as_str()), Some("over"));
        assert_eq!(hit_test_plan(&items, Point::new(-0.8, 0.0)).map(|i| i.id.as_str()), Some("under"));
        assert!(hit_test_plan(&items, Point::new(0.0, 2.0)).is_none());
    }
}
