//! Room dimension, shape and appearance setters

use shared::{FloorType, RoomDimensions, RoomShape};

use super::SceneState;

impl SceneState {
    /// Replace room dimensions, flooring each axis at 0.1 m.
    /// Furniture is left where it is.
    pub fn set_room_dimensions(&mut self, dims: RoomDimensions) {
        let dims = dims.clamped();
        if dims != self.room {
            tracing::debug!(
                length = dims.length,
                width = dims.width,
                height = dims.height,
                "room dimensions changed"
            );
            self.room = dims;
            self.notify_mutated();
        }
    }

    pub fn set_room_shape(&mut self, shape: RoomShape) {
        if shape != self.shape {
            tracing::debug!(?shape, "room shape changed");
            self.shape = shape;
            self.notify_mutated();
        }
    }

    pub fn set_wall_color(&mut self, color: impl Into<String>) {
        self.appearance.wall_color = color.into();
        self.notify_mutated();
    }

    pub fn set_floor_color(&mut self, color: impl Into<String>) {
        self.appearance.floor_color = color.into();
        self.notify_mutated();
    }

    pub fn set_floor_type(&mut self, floor_type: FloorType) {
        self.appearance.floor_type = floor_type;
        self.notify_mutated();
    }
}
