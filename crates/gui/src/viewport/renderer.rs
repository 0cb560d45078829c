//! Software rendering for the viewport when no GL context is available
//!
//! Triangles are projected with the camera and painted back to front.

use std::collections::HashMap;

use egui::{Color32, Rect, Stroke, Ui};
use glam::{Vec3, Vec4};

use super::camera::OrbitCamera;
use super::mesh::{LineMeshData, MeshData};
use crate::state::AppState;

struct ProjectedTriangle {
    points: [egui::Pos2; 3],
    depth: f32,
    color: Color32,
}

/// Paint the 3D viewport using egui's painter
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    camera: &OrbitCamera,
    state: &AppState,
    meshes: &HashMap<String, MeshData>,
    overlay: Option<&LineMeshData>,
) {
    let painter = ui.painter_at(rect);

    let bg = &state.settings.viewport.background_color;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

    let aspect = rect.width() / rect.height();
    let vp = camera.view_projection(aspect);
    let light_dir = Vec3::new(0.4, 0.9, 0.3).normalize();

    let mut triangles = Vec::new();
    for mesh in meshes.values() {
        collect_triangles(mesh, vp, rect, light_dir, &mut triangles);
    }
    triangles.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let mut shape = egui::Mesh::default();
    for tri in &triangles {
        let base = shape.vertices.len() as u32;
        for p in tri.points {
            shape.colored_vertex(p, tri.color);
        }
        shape.add_triangle(base, base + 1, base + 2);
    }
    painter.add(egui::Shape::mesh(shape));

    if !state.preview_mode {
        draw_grid(&painter, rect, camera, state.settings.viewport.grid_color);
    }

    if let Some(lines) = overlay {
        let c = state.settings.viewport.selection_color;
        let stroke = Stroke::new(2.0, Color32::from_rgb(c[0], c[1], c[2]));
        for (a, b) in lines.segments() {
            if let (Some(a), Some(b)) = (
                camera.project(a.to_array(), rect),
                camera.project(b.to_array(), rect),
            ) {
                painter.line_segment([a, b], stroke);
            }
        }
    }
}

fn collect_triangles(
    mesh: &MeshData,
    vp: glam::Mat4,
    rect: Rect,
    light_dir: Vec3,
    out: &mut Vec<ProjectedTriangle>,
) {
    let vertex = |i: u32| {
        let base = i as usize * 9;
        &mesh.vertices[base..base + 9]
    };
    for tri in mesh.indices.chunks_exact(3) {
        let mut points = [egui::Pos2::ZERO; 3];
        let mut depth = 0.0;
        let mut visible = true;
        for (k, &index) in tri.iter().enumerate() {
            let v = vertex(index);
            let clip = vp * Vec4::new(v[0], v[1], v[2], 1.0);
            if clip.w <= 0.0 {
                visible = false;
                break;
            }
            let ndc = clip.truncate() / clip.w;
            points[k] = egui::pos2(
                rect.center().x + ndc.x * rect.width() * 0.5,
                rect.center().y - ndc.y * rect.height() * 0.5,
            );
            depth += ndc.z;
        }
        if !visible {
            continue;
        }

        let v = vertex(tri[0]);
        let normal = Vec3::new(v[3], v[4], v[5]);
        let light = 0.45 + normal.dot(light_dir).abs() * 0.55;
        let channel = |c: f32| ((c * light).clamp(0.0, 1.0) * 255.0) as u8;
        out.push(ProjectedTriangle {
            points,
            depth: depth / 3.0,
            color: Color32::from_rgb(channel(v[6]), channel(v[7]), channel(v[8])),
        });
    }
}

fn draw_grid(painter: &egui::Painter, rect: Rect, camera: &OrbitCamera, color: [u8; 4]) {
    let stroke = Stroke::new(
        0.5,
        Color32::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]),
    );
    let extent = 10.0;
    for i in -10..=10 {
        let f = i as f32;
        for (a, b) in [
            ([f, 0.0, -extent], [f, 0.0, extent]),
            ([-extent, 0.0, f], [extent, 0.0, f]),
        ] {
            if let (Some(a), Some(b)) = (camera.project(a, rect), camera.project(b, rect)) {
                if rect.contains(a) || rect.contains(b) {
                    painter.line_segment([a, b], stroke);
                }
            }
        }
    }
}
