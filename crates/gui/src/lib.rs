// Library crate: exposes testable modules for integration tests and the command interface.
// GUI-specific modules (app, ui, painters, GL) remain in the binary crate.

pub mod catalog;
pub mod command;
pub mod export;
pub mod fixtures;
pub mod furniture;
pub mod geometry;
pub mod harness;
pub mod plan;
pub mod state;

/// Renderer-independent part of the 3D view: meshes, picking, camera and gestures.
/// The GL renderer and egui wiring stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod interaction;
    pub mod mesh;
    pub mod picking;
    pub mod scene_mesh;
}
