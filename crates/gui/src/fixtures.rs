//! Factory functions for creating test data.
//!
//! Used by unit tests, integration tests and the command interface.

use shared::*;

/// A 1×1×1 item of `kind` standing on the floor at (x, z)
pub fn item(id: &str, kind: FurnitureKind, x: f64, z: f64) -> FurnitureItem {
    FurnitureItem {
        id: id.to_string(),
        name: format!("{} {}", kind, id),
        kind,
        position: Vec3::on_floor(x, z),
        dimensions: Dimensions::default(),
        rotation: Vec3::ZERO,
        color: "#8a7f72".to_string(),
        material: "fabric".to_string(),
    }
}

/// Item with explicit dimensions (width, depth, height)
pub fn sized_item(id: &str, kind: FurnitureKind, x: f64, z: f64, dims: [f64; 3]) -> FurnitureItem {
    FurnitureItem {
        dimensions: Dimensions::new(dims[0], dims[1], dims[2]),
        ..item(id, kind, x, z)
    }
}

/// Same as [`item`], turned `yaw` degrees about the vertical axis
pub fn rotated_item(id: &str, kind: FurnitureKind, x: f64, z: f64, yaw: f64) -> FurnitureItem {
    FurnitureItem {
        rotation: Vec3::new(0.0, yaw, 0.0),
        ..item(id, kind, x, z)
    }
}

/// Snapshot of a 6×4×2.8 rectangular room holding `items`
pub fn design(name: &str, items: Vec<FurnitureItem>) -> DesignSnapshot {
    DesignSnapshot {
        id: format!("design-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        room_dimensions: RoomDimensions::new(6.0, 4.0, 2.8),
        wall_color: Appearance::default().wall_color,
        floor_color: Appearance::default().floor_color,
        floor_type: FloorType::Hardwood,
        room_shape: RoomShape::Rectangular,
        furniture_items: items,
        last_edited: chrono::Utc::now(),
        thumbnail: String::new(),
    }
}

/// Living room with a sofa, a table and a lamp
pub fn living_room() -> DesignSnapshot {
    design(
        "Living Room",
        vec![
            sized_item("sofa", FurnitureKind::Sofa, 0.0, -1.2, [2.0, 0.9, 0.85]),
            sized_item("table", FurnitureKind::Table, 0.0, 0.0, [1.2, 0.6, 0.45]),
            sized_item("lamp", FurnitureKind::Lamp, 2.2, -1.4, [0.4, 0.4, 1.6]),
        ],
    )
}
