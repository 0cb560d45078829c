//! Furniture collection operations

use chrono::Utc;
use shared::{DesignSnapshot, FurnitureItem, FurniturePatch, Vec3};

use super::SceneState;
use crate::geometry::constraint::clamp_to_room;

impl SceneState {
    /// Look up an item by id
    pub fn get_furniture_item(&self, id: &str) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|f| f.id == id)
    }

    /// Append an item. Id uniqueness is the caller's responsibility.
    pub fn add_furniture_item(&mut self, item: FurnitureItem) {
        tracing::debug!(id = %item.id, kind = %item.kind, "furniture added");
        self.furniture.push(item);
        self.notify_furniture_mutated();
    }

    /// Shallow-merge `patch` into the item with `id`. Unknown ids are ignored.
    /// Returns true when the item changed.
    pub fn update_furniture_item(&mut self, id: &str, patch: &FurniturePatch) -> bool {
        let Some(item) = self.furniture.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        let before = item.clone();
        patch.apply_to(item);
        if *item == before {
            return false;
        }
        self.notify_furniture_mutated();
        true
    }

    /// Remove by id. Selection is not touched here.
    pub fn remove_furniture_item(&mut self, id: &str) -> Option<FurnitureItem> {
        let index = self.furniture.iter().position(|f| f.id == id)?;
        let removed = self.furniture.remove(index);
        tracing::debug!(id, "furniture removed");
        self.notify_furniture_mutated();
        Some(removed)
    }

    /// Swap the whole collection (undo/redo/load)
    pub fn replace_furniture_items(&mut self, items: Vec<FurnitureItem>) {
        tracing::debug!(count = items.len(), "furniture replaced");
        self.furniture = items;
        self.notify_furniture_mutated();
    }

    /// Move an item horizontally, clamping its un-rotated footprint into the
    /// room's bounding rectangle. Height is preserved.
    pub fn move_furniture_item(&mut self, id: &str, x: f64, z: f64) -> bool {
        let Some(item) = self.get_furniture_item(id) else {
            return false;
        };
        let (x, z) = clamp_to_room(x, z, &item.dimensions, &self.room);
        let position = Vec3::new(x, item.position.y, z);
        self.update_furniture_item(id, &FurniturePatch::position(position))
    }

    /// Set the yaw (degrees), keeping the other rotation components
    pub fn set_furniture_yaw(&mut self, id: &str, yaw: f64) -> bool {
        let Some(item) = self.get_furniture_item(id) else {
            return false;
        };
        let rotation = Vec3::new(item.rotation.x, yaw, item.rotation.z);
        self.update_furniture_item(id, &FurniturePatch::rotation(rotation))
    }

    /// Multiply every dimension of an item by `factor`
    pub fn scale_furniture_item(&mut self, id: &str, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let Some(item) = self.get_furniture_item(id) else {
            return false;
        };
        let dims = item.dimensions.scaled(factor);
        self.update_furniture_item(id, &FurniturePatch::dimensions(dims))
    }

    /// Force every item onto the floor (y = 0). Returns the number of items moved.
    pub fn flatten_furniture(&mut self) -> usize {
        let mut moved = 0;
        for item in &mut self.furniture {
            if item.position.y != 0.0 {
                item.position.y = 0.0;
                moved += 1;
            }
        }
        if moved > 0 {
            self.notify_furniture_mutated();
        }
        moved
    }

    /// Clamp every item into the room's bounding rectangle.
    /// Returns the number of items moved.
    pub fn constrain_all_to_room(&mut self) -> usize {
        let room = self.room;
        let mut moved = 0;
        for item in &mut self.furniture {
            let (x, z) = clamp_to_room(item.position.x, item.position.z, &item.dimensions, &room);
            if x != item.position.x || z != item.position.z {
                item.position.x = x;
                item.position.z = z;
                moved += 1;
            }
        }
        if moved > 0 {
            tracing::debug!(moved, "furniture pulled inside room");
            self.notify_furniture_mutated();
        }
        moved
    }

    /// Replace room, appearance and furniture from a stored design
    pub fn load_snapshot(&mut self, snapshot: &DesignSnapshot) {
        self.room = snapshot.room_dimensions.clamped();
        self.shape = snapshot.room_shape;
        self.appearance = snapshot.appearance();
        self.furniture = snapshot.furniture_items.clone();
        self.notify_furniture_mutated();
    }

    /// Capture the current design
    pub fn to_snapshot(&self, id: &str, name: &str, thumbnail: &str) -> DesignSnapshot {
        DesignSnapshot {
            id: id.to_string(),
            name: name.to_string(),
            room_dimensions: self.room,
            wall_color: self.appearance.wall_color.clone(),
            floor_color: self.appearance.floor_color.clone(),
            floor_type: self.appearance.floor_type,
            room_shape: self.shape,
            furniture_items: self.furniture.clone(),
            last_edited: Utc::now(),
            thumbnail: thumbnail.to_string(),
        }
    }
}
