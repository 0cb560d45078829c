//! Floor-plan drawing with the egui painter.
//!
//! Everything goes through `PlanTransform::world_to_screen`, offset by the
//! canvas' top-left corner.

use std::f64::consts::{PI, TAU};

use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};
use kurbo::{PathEl, Point, Vec2};
use shared::{FurnitureItem, RoomShape};

use crate::furniture::{self, GlyphFill, GlyphShape};
use crate::geometry::boundary::{openings, Opening, OpeningKind, DOOR_SWING_DEGREES};
use crate::geometry::{local_to_world, PlanTransform, RoomOutline};
use crate::state::layers::{MEASUREMENTS, WALLS_FLOOR};
use crate::state::scene::parse_hex_color;
use crate::state::AppState;

const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);
const GRID: Color32 = Color32::from_rgb(229, 229, 229);
const INK: Color32 = Color32::from_rgb(51, 51, 51);
const DOOR_SWING: Color32 = Color32::from_rgb(136, 136, 136);
const WINDOW: Color32 = Color32::from_rgb(135, 206, 235);
const HIGHLIGHT: Color32 = Color32::from_rgb(255, 152, 0);

/// Wall stroke width in pixels
const WALL_WIDTH: f32 = 15.0;
/// Dimension line distance from the room edge in pixels
const MEASURE_OFFSET: f32 = 30.0;
const ARROW_LENGTH: f32 = 10.0;
const COMPASS_RADIUS: f32 = 40.0;

/// Maps world (x, z) onto the canvas rect
struct Canvas<'a> {
    transform: &'a PlanTransform,
    origin: Pos2,
}

impl Canvas<'_> {
    fn pos(&self, world: Point) -> Pos2 {
        let p = self.transform.world_to_screen(world);
        self.origin + egui::vec2(p.x as f32, p.y as f32)
    }

    fn px(&self, meters: f64) -> f32 {
        self.transform.to_pixels(meters) as f32
    }
}

fn hex_color(hex: &str) -> Color32 {
    let [r, g, b] = parse_hex_color(hex).unwrap_or([128, 128, 128]);
    Color32::from_rgb(r, g, b)
}

fn shade(color: Color32, factor: f32) -> Color32 {
    let f = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
    Color32::from_rgb(f(color.r()), f(color.g()), f(color.b()))
}

/// Paint the whole floor plan into `rect`
pub fn paint(painter: &Painter, rect: egui::Rect, transform: &PlanTransform, state: &AppState) {
    let canvas = Canvas {
        transform,
        origin: rect.min,
    };
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let layers = &state.layers;
    if layers.is_visible(MEASUREMENTS) {
        draw_grid(painter, &canvas, state);
    }
    if layers.is_visible(WALLS_FLOOR) {
        draw_room(painter, &canvas, state);
    }
    if layers.is_visible(MEASUREMENTS) {
        draw_measurements(painter, &canvas, state);
    }
    draw_furniture(painter, &canvas, state);
    if state.settings.plan.show_compass {
        draw_compass(painter, rect);
    }
}

fn draw_grid(painter: &Painter, canvas: &Canvas, state: &AppState) {
    let step = state.settings.plan.grid_step.max(0.05);
    let extent = state.settings.plan.grid_extent;
    let stroke = Stroke::new(1.0, GRID);
    let lines = (2.0 * extent / step).floor() as i64;
    for i in 0..=lines {
        let v = -extent + i as f64 * step;
        painter.line_segment(
            [canvas.pos(Point::new(v, -extent)), canvas.pos(Point::new(v, extent))],
            stroke,
        );
        painter.line_segment(
            [canvas.pos(Point::new(-extent, v)), canvas.pos(Point::new(extent, v))],
            stroke,
        );
    }
}

fn draw_room(painter: &Painter, canvas: &Canvas, state: &AppState) {
    let room = state.scene.room();
    let shape = state.scene.shape();
    let appearance = state.scene.appearance();
    let floor = hex_color(&appearance.floor_color);
    let wall = hex_color(&appearance.wall_color);
    let outline = RoomOutline::new(shape, &room);

    for part in &outline.convex_parts {
        let points: Vec<Pos2> = part.iter().map(|p| canvas.pos(*p)).collect();
        painter.add(Shape::convex_polygon(points, floor, Stroke::NONE));
    }

    let wall_stroke = Stroke::new(WALL_WIDTH, wall);
    let mut closed: Vec<Pos2> = outline.polygon.iter().map(|p| canvas.pos(*p)).collect();
    if let Some(first) = closed.first().copied() {
        closed.push(first);
    }
    painter.add(Shape::line(closed, wall_stroke));
    // Square caps at the corners
    for corner in &outline.polygon {
        painter.rect_filled(
            egui::Rect::from_center_size(canvas.pos(*corner), egui::Vec2::splat(WALL_WIDTH)),
            0.0,
            wall,
        );
    }

    if shape == RoomShape::Rectangular {
        draw_openings(painter, canvas, state, floor);
    }
}

fn draw_openings(painter: &Painter, canvas: &Canvas, state: &AppState, floor: Color32) {
    let room = state.scene.room();
    for opening in openings(state.scene.shape(), &room) {
        let a = canvas.pos(opening.start);
        let b = canvas.pos(opening.end);
        match opening.kind {
            OpeningKind::Door => {
                // Gap in the wall
                painter.line_segment([a, b], Stroke::new(WALL_WIDTH + 2.0, floor));
                draw_door_swing(painter, canvas, &opening);
            }
            OpeningKind::Window => {
                painter.line_segment([a, b], Stroke::new(WALL_WIDTH * 0.6, WINDOW));
                // Sill on the outside
                let out = -opening.inward;
                let sill = egui::vec2(out.x as f32, out.y as f32) * 5.0;
                painter.add(Shape::line(
                    vec![a, a + sill, b + sill, b],
                    Stroke::new(1.0, INK),
                ));
            }
        }
    }
}

fn draw_door_swing(painter: &Painter, canvas: &Canvas, door: &Opening) {
    let hinge = door.start;
    let width = door.width();
    let along = (door.end - door.start).atan2();
    let inward = door.inward.atan2();
    // Sweep from the closed leaf towards the room by the swing angle
    let sweep = DOOR_SWING_DEGREES.to_radians();
    let direction = if angle_between(along, inward) > 0.0 { 1.0 } else { -1.0 };
    let segments = 16;
    let arc: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let a = along + direction * sweep * i as f64 / segments as f64;
            canvas.pos(hinge + Vec2::from_angle(a) * width)
        })
        .collect();
    let stroke = Stroke::new(2.0, DOOR_SWING);
    if let Some(tip) = arc.last().copied() {
        painter.line_segment([canvas.pos(hinge), tip], stroke);
    }
    painter.add(Shape::line(arc, stroke));
}

/// Signed smallest angle from `a` to `b`
fn angle_between(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(TAU);
    if d > PI {
        d - TAU
    } else {
        d
    }
}

fn draw_measurements(painter: &Painter, canvas: &Canvas, state: &AppState) {
    let room = state.scene.room();
    let hl = room.length / 2.0;
    let hw = room.width / 2.0;
    let stroke = Stroke::new(1.0, INK);
    let font = FontId::proportional(14.0);

    // Length along the top edge
    let left = canvas.pos(Point::new(-hl, -hw)) - egui::vec2(0.0, MEASURE_OFFSET);
    let right = canvas.pos(Point::new(hl, -hw)) - egui::vec2(0.0, MEASURE_OFFSET);
    painter.line_segment([left, right], stroke);
    arrow_head(painter, left, egui::vec2(1.0, 0.0));
    arrow_head(painter, right, egui::vec2(-1.0, 0.0));
    painter.text(
        egui::pos2((left.x + right.x) / 2.0, left.y - 15.0),
        Align2::CENTER_CENTER,
        format!("{:.2}m", room.length),
        font.clone(),
        INK,
    );

    // Width along the left edge
    let top = canvas.pos(Point::new(-hl, -hw)) - egui::vec2(MEASURE_OFFSET, 0.0);
    let bottom = canvas.pos(Point::new(-hl, hw)) - egui::vec2(MEASURE_OFFSET, 0.0);
    painter.line_segment([top, bottom], stroke);
    arrow_head(painter, top, egui::vec2(0.0, 1.0));
    arrow_head(painter, bottom, egui::vec2(0.0, -1.0));

    let galley = painter.layout_no_wrap(format!("{:.2}m", room.width), font, INK);
    let center = egui::pos2(top.x - 15.0, (top.y + bottom.y) / 2.0);
    // Rotated a quarter turn counter-clockwise about its centre
    let offset = egui::vec2(-galley.size().y / 2.0, galley.size().x / 2.0);
    painter.add(
        egui::epaint::TextShape::new(center + offset, galley, INK)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );
}

/// Filled arrow head with its tip at `tip`, pointing against `inward`
fn arrow_head(painter: &Painter, tip: Pos2, inward: egui::Vec2) {
    let base = tip + inward * ARROW_LENGTH;
    let side = egui::vec2(-inward.y, inward.x) * 5.0;
    painter.add(Shape::convex_polygon(
        vec![tip, base + side, base - side],
        INK,
        Stroke::NONE,
    ));
}

fn draw_furniture(painter: &Painter, canvas: &Canvas, state: &AppState) {
    let items = state.scene.furniture();
    for item in furniture::plan_draw_order(items) {
        if !state.layers.shows_kind(&item.kind) {
            continue;
        }
        let selected = state.view.is_selected(&item.id);
        draw_glyph(painter, canvas, item, selected);
        if selected {
            draw_selection(painter, canvas, item);
        }
    }
}

fn draw_glyph(painter: &Painter, canvas: &Canvas, item: &FurnitureItem, selected: bool) {
    let body = hex_color(&item.color);
    let outline = if selected {
        Stroke::new(3.0, HIGHLIGHT)
    } else {
        Stroke::new(1.5, INK)
    };
    let center = Point::new(item.position.x, item.position.z);
    let yaw = item.yaw();
    let to_screen = |local: Point| canvas.pos(center + local_to_world(local.to_vec2(), yaw));
    // Flatten curves to about half a pixel
    let tolerance = 0.5 / canvas.transform.scale.max(1e-6);

    for primitive in (furniture::style(&item.kind).glyph)(&item.dimensions) {
        let fill = match primitive.fill {
            GlyphFill::Body => body,
            GlyphFill::Detail => shade(body, 0.75),
            GlyphFill::Leg => Color32::from_rgb(102, 102, 102),
            GlyphFill::Pot => Color32::from_rgb(139, 90, 43),
            GlyphFill::Leaf => Color32::from_rgb(76, 175, 80),
            GlyphFill::Glow => Color32::from_rgba_unmultiplied(255, 236, 150, 90),
            GlyphFill::None => Color32::TRANSPARENT,
        };
        let stroke = if primitive.outline { outline } else { Stroke::NONE };

        match &primitive.shape {
            GlyphShape::Line { from, to } => {
                painter.line_segment([to_screen(*from), to_screen(*to)], outline);
            }
            GlyphShape::Rect { rect, corner } => {
                let local = flatten(&rect.to_rounded_rect(*corner), tolerance);
                let points = local.into_iter().map(to_screen).collect();
                painter.add(Shape::convex_polygon(points, fill, stroke));
            }
            GlyphShape::Circle { center, radius } => {
                let c = to_screen(*center);
                painter.circle(c, canvas.px(*radius), fill, stroke);
            }
            GlyphShape::Polygon(points) => {
                let points = points.iter().copied().map(to_screen).collect();
                painter.add(Shape::convex_polygon(points, fill, stroke));
            }
        }
    }
}

/// Polyline approximation of a closed kurbo shape
fn flatten(shape: &impl kurbo::Shape, tolerance: f64) -> Vec<Point> {
    let mut points = Vec::new();
    kurbo::flatten(shape.path_elements(tolerance), tolerance, |el| match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(p),
        _ => {}
    });
    // Drop the closing duplicate
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

fn draw_selection(painter: &Painter, canvas: &Canvas, item: &FurnitureItem) {
    let center = canvas.pos(Point::new(item.position.x, item.position.z));
    let size = canvas.px(item.dimensions.width.max(item.dimensions.depth) * 1.2);
    let r = egui::Rect::from_center_size(center, egui::Vec2::splat(size));
    let corners = [r.left_top(), r.right_top(), r.right_bottom(), r.left_bottom(), r.left_top()];
    painter.extend(Shape::dashed_line(&corners, Stroke::new(2.0, HIGHLIGHT), 5.0, 3.0));

    let depth_px = canvas.px(item.dimensions.depth);
    painter.text(
        center - egui::vec2(0.0, depth_px / 2.0 + 10.0),
        Align2::CENTER_BOTTOM,
        &item.name,
        FontId::proportional(14.0),
        INK,
    );
}

/// North-up compass rose in the bottom-right corner
fn draw_compass(painter: &Painter, rect: egui::Rect) {
    let r = COMPASS_RADIUS;
    let c = rect.right_bottom() - egui::vec2(r + 20.0, r + 20.0);
    painter.circle(
        c,
        r,
        Color32::from_rgba_unmultiplied(255, 255, 255, 178),
        Stroke::new(1.0, INK),
    );

    let arm = r * 0.8;
    let minor = Stroke::new(1.0, Color32::from_rgb(102, 102, 102));
    painter.line_segment([c, c + egui::vec2(0.0, -arm)], Stroke::new(2.0, INK));
    painter.add(Shape::convex_polygon(
        vec![
            c + egui::vec2(0.0, -arm - 10.0),
            c + egui::vec2(5.0, -arm),
            c + egui::vec2(-5.0, -arm),
        ],
        INK,
        Stroke::NONE,
    ));
    for dir in [egui::vec2(1.0, 0.0), egui::vec2(0.0, 1.0), egui::vec2(-1.0, 0.0)] {
        painter.line_segment([c, c + dir * arm], minor);
    }

    let font = FontId::proportional(12.0);
    for (label, offset) in [
        ("N", egui::vec2(0.0, -arm - 20.0)),
        ("E", egui::vec2(arm + 10.0, 0.0)),
        ("S", egui::vec2(0.0, arm + 10.0)),
        ("W", egui::vec2(-arm - 10.0, 0.0)),
    ] {
        painter.text(c + offset, Align2::CENTER_CENTER, label, font.clone(), INK);
    }
}
