//! CPU-side meshes for the 3D view, rebuilt only when the scene or the layer
//! visibility changes.

use std::collections::HashMap;

use glam::{Mat4, Vec3};
use shared::FurnitureItem;

use super::mesh::{self, LineMeshData, MeshData};
use super::picking::{item_local_bounds, item_transform};
use crate::furniture::{style, VolumePart, VolumeShape, VolumeTone};
use crate::geometry::RoomOutline;
use crate::state::layers::{LayerSet, WALLS_FLOOR};
use crate::state::scene::parse_hex_color;
use crate::state::SceneState;

/// Wall thickness in meters
pub const WALL_THICKNESS: f64 = 0.1;
/// Mesh key of the floor
pub const FLOOR_ID: &str = "room:floor";
/// Mesh key of the walls
pub const WALLS_ID: &str = "room:walls";

const CURVE_SEGMENTS: u32 = 24;
const FALLBACK_COLOR: [f32; 3] = [0.54, 0.5, 0.45];

/// Hex colour to linear-ish float RGB
pub fn color_rgb(hex: &str) -> [f32; 3] {
    parse_hex_color(hex)
        .map(|[r, g, b]| [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
        .unwrap_or(FALLBACK_COLOR)
}

fn shade(c: [f32; 3], factor: f32) -> [f32; 3] {
    [c[0] * factor, c[1] * factor, c[2] * factor]
}

fn tone_color(tone: VolumeTone, base: [f32; 3]) -> [f32; 3] {
    match tone {
        VolumeTone::Body => base,
        VolumeTone::Detail => shade(base, 0.8),
        VolumeTone::Leg => [0.4, 0.4, 0.4],
        VolumeTone::Shade => [0.96, 0.93, 0.82],
        VolumeTone::Leaf => [0.29, 0.49, 0.35],
    }
}

fn part_mesh(part: &VolumePart, base: [f32; 3]) -> MeshData {
    let color = tone_color(part.tone, base);
    let [sx, sy, sz] = part.size.map(|v| v as f32);
    let local = match part.shape {
        VolumeShape::Box => mesh::cube(sx, sy, sz, color),
        VolumeShape::Cylinder => mesh::cylinder(sx / 2.0, sy, CURVE_SEGMENTS, color),
        VolumeShape::Cone => mesh::cone(sx / 2.0, sy, CURVE_SEGMENTS, color),
    };
    let [cx, cy, cz] = part.center.map(|v| v as f32);
    local.transformed(Mat4::from_translation(Vec3::new(cx, cy, cz)))
}

/// World-space mesh for one furniture item
pub fn furniture_mesh(item: &FurnitureItem) -> MeshData {
    let base = color_rgb(&item.color);
    let parts = (style(&item.kind).volume)(&item.dimensions);
    let mut local = MeshData::default();
    for part in &parts {
        local.append(&part_mesh(part, base));
    }
    local.transformed(item_transform(item))
}

/// Floor slab built from the shared outline's convex parts
pub fn floor_mesh(outline: &RoomOutline, color: [f32; 3]) -> MeshData {
    let mut out = MeshData::default();
    for part in &outline.convex_parts {
        let points: Vec<[f32; 2]> = part.iter().map(|p| [p.x as f32, p.y as f32]).collect();
        out.append(&mesh::convex_polygon(&points, 0.0, color));
    }
    out
}

/// One box per outline edge, `height` tall, centred on the edge line
pub fn wall_mesh(outline: &RoomOutline, height: f64, color: [f32; 3]) -> MeshData {
    let mut out = MeshData::default();
    for wall in outline.walls() {
        // Overlap by the thickness so corners close
        let len = (wall.length() + WALL_THICKNESS) as f32;
        let slab = mesh::cube(len, height as f32, WALL_THICKNESS as f32, color);
        let mid = wall.midpoint();
        let m = Mat4::from_translation(Vec3::new(mid.x as f32, height as f32 / 2.0, mid.y as f32))
            * Mat4::from_rotation_y(-wall.angle() as f32);
        out.append(&slab.transformed(m));
    }
    out
}

/// Wireframe box around a selected item (dims + 0.1 m)
pub fn selection_box(item: &FurnitureItem, color: [f32; 4]) -> LineMeshData {
    let b = item_local_bounds(item);
    let pad = Vec3::splat(0.05);
    mesh::wire_box(b.min - pad, b.max + pad, item_transform(item), color)
}

/// Where the selected item's label floats
pub fn label_anchor(item: &FurnitureItem) -> [f32; 3] {
    let p = item.position;
    [p.x as f32, (p.y + item.dimensions.height + 0.3) as f32, p.z as f32]
}

/// Cached meshes keyed by id, rebuilt on scene version or layer changes
#[derive(Default)]
pub struct MeshCache {
    key: Option<(u64, Vec<bool>)>,
    meshes: HashMap<String, MeshData>,
    version: u64,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incremented each time the meshes are rebuilt
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn meshes(&self) -> &HashMap<String, MeshData> {
        &self.meshes
    }

    /// Rebuild if the scene or layers changed. Returns true if rebuilt.
    pub fn sync(&mut self, scene: &SceneState, layers: &LayerSet) -> bool {
        let key = (scene.version(), layers.all().iter().map(|l| l.visible).collect::<Vec<_>>());
        if self.key.as_ref() == Some(&key) {
            return false;
        }
        self.meshes.clear();

        if layers.is_visible(WALLS_FLOOR) {
            let outline = RoomOutline::new(scene.shape(), &scene.room());
            let appearance = scene.appearance();
            self.meshes
                .insert(FLOOR_ID.to_string(), floor_mesh(&outline, color_rgb(&appearance.floor_color)));
            self.meshes.insert(
                WALLS_ID.to_string(),
                wall_mesh(&outline, scene.room().height, color_rgb(&appearance.wall_color)),
            );
        }

        for item in scene.furniture() {
            if layers.shows_kind(&item.kind) {
                self.meshes.insert(item.id.clone(), furniture_mesh(item));
            }
        }

        self.key = Some(key);
        self.version += 1;
        tracing::debug!(meshes = self.meshes.len(), "3D meshes rebuilt");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;
    use crate::state::layers::FURNITURE;
    use shared::{FurnitureKind, RoomDimensions, RoomShape};

    fn mesh_bounds(m: &MeshData) -> (Vec3, Vec3) {
        m.vertices.chunks_exact(9).fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::new(v[0], v[1], v[2]);
                (lo.min(p), hi.max(p))
            },
        )
    }

    #[test]
    fn test_furniture_mesh_sits_on_floor_at_position() {
        let it = item("a", FurnitureKind::Table, 1.0, -1.0);
        let m = furniture_mesh(&it);
        assert!(m.is_well_formed());
        let (lo, hi) = mesh_bounds(&m);
        assert!(lo.y.abs() < 1e-5);
        assert!((hi.y - 1.0).abs() < 1e-5);
        assert!(((lo.x + hi.x) / 2.0 - 1.0).abs() < 1e-4);
        assert!(((lo.z + hi.z) / 2.0 + 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_l_shaped_walls_follow_notch() {
        let room = RoomDimensions::new(6.0, 5.0, 2.8);
        let outline = RoomOutline::new(RoomShape::LShaped, &room);
        let walls = wall_mesh(&outline, room.height, [1.0; 3]);
        // Six boxes of 24 vertices
        assert_eq!(walls.vertex_count(), 6 * 24);
        let floor = floor_mesh(&outline, [1.0; 3]);
        assert_eq!(floor.triangle_count(), 4);
        // Nothing of the floor lies in the notch (x > 0.6, z > 0.5)
        for v in floor.vertices.chunks_exact(9) {
            assert!(!(v[0] > 0.6 + 1e-5 && v[2] > 0.5 + 1e-5));
        }
    }

    #[test]
    fn test_cache_rebuilds_on_change_only() {
        let mut scene = SceneState::default();
        let layers = LayerSet::default();
        let mut cache = MeshCache::new();
        assert!(cache.sync(&scene, &layers));
        assert!(!cache.sync(&scene, &layers));
        assert_eq!(cache.meshes().len(), 2);
        scene.add_furniture_item(item("a", FurnitureKind::Chair, 0.0, 0.0));
        assert!(cache.sync(&scene, &layers));
        assert!(cache.meshes().contains_key("a"));
    }

    #[test]
    fn test_cache_honours_layers() {
        let mut scene = SceneState::default();
        scene.add_furniture_item(item("a", FurnitureKind::Chair, 0.0, 0.0));
        let mut layers = LayerSet::default();
        let mut cache = MeshCache::new();
        layers.toggle(WALLS_FLOOR);
        cache.sync(&scene, &layers);
        assert!(!cache.meshes().contains_key(FLOOR_ID));
        layers.toggle(FURNITURE);
        assert!(cache.sync(&scene, &layers));
        assert!(cache.meshes().is_empty());
    }

    #[test]
    fn test_selection_box_and_label() {
        let it = item("a", FurnitureKind::Sofa, 0.0, 0.0);
        assert_eq!(selection_box(&it, [1.0; 4]).segments().count(), 12);
        assert!((label_anchor(&it)[1] - 1.3).abs() < 1e-6);
    }
}
