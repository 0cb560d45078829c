//! Scene state management
//!
//! Single source of truth for the room (dimensions, shape, appearance) and the
//! ordered furniture collection. Every mutation is synchronous and total.

mod display;
mod furniture_ops;
mod persistence;
mod room_ops;

pub use display::{item_display_name, parse_hex_color, short_id};
pub use persistence::{
    read_snapshot_file, write_snapshot_file, DesignStore, FileDesignStore, MemoryDesignStore,
    StoreError,
};

use shared::{Appearance, FurnitureItem, RoomDimensions, RoomShape};

/// Room and furniture state
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    pub(crate) room: RoomDimensions,
    pub(crate) shape: RoomShape,
    pub(crate) appearance: Appearance,
    /// Insertion order is the 2D z-order hint
    pub(crate) furniture: Vec<FurnitureItem>,
    /// Bumped on every mutation (room or furniture), drives render caches
    pub(crate) version: u64,
    /// Bumped only when the furniture collection changes, drives history
    pub(crate) furniture_version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Version of the furniture collection alone
    pub fn furniture_version(&self) -> u64 {
        self.furniture_version
    }

    pub fn room(&self) -> RoomDimensions {
        self.room
    }

    pub fn shape(&self) -> RoomShape {
        self.shape
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Ordered furniture collection
    pub fn furniture(&self) -> &[FurnitureItem] {
        &self.furniture
    }

    /// Bump version without touching furniture
    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    pub(crate) fn notify_furniture_mutated(&mut self) {
        self.version += 1;
        self.furniture_version += 1;
    }
}
