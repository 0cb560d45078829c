//! Room outlines for the three room shapes. Both the floor-plan painter and
//! the 3D wall/floor mesh builder consume these, so the views cannot drift.

use std::f64::consts::FRAC_PI_4;

use kurbo::{Point, Rect, Vec2};
use shared::{RoomDimensions, RoomShape};

/// Share of each horizontal dimension removed by the L-shape notch
pub const L_NOTCH_RATIO: f64 = 0.4;

/// Straight wall between two outline vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub start: Point,
    pub end: Point,
}

impl WallSegment {
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Direction angle in radians, measured from +x towards +z
    pub fn angle(&self) -> f64 {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }
}

/// Horizontal outline of a room in world (x, z)
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOutline {
    /// Closed polygon starting at the (-x, -z) corner
    pub polygon: Vec<Point>,
    /// Convex pieces whose union is the polygon (fill and floor mesh)
    pub convex_parts: Vec<Vec<Point>>,
}

impl RoomOutline {
    pub fn new(shape: RoomShape, room: &RoomDimensions) -> Self {
        match shape {
            RoomShape::Rectangular => Self::rectangular(room),
            RoomShape::LShaped => Self::l_shaped(room),
            RoomShape::Custom => Self::octagon(room),
        }
    }

    fn rectangular(room: &RoomDimensions) -> Self {
        let polygon = rect_points(bounding_rect(room));
        Self {
            convex_parts: vec![polygon.clone()],
            polygon,
        }
    }

    fn l_shaped(room: &RoomDimensions) -> Self {
        let hl = room.length / 2.0;
        let hw = room.width / 2.0;
        let notch = l_notch(room);
        let polygon = vec![
            Point::new(-hl, -hw),
            Point::new(hl, -hw),
            Point::new(hl, notch.y0),
            Point::new(notch.x0, notch.y0),
            Point::new(notch.x0, hw),
            Point::new(-hl, hw),
        ];
        let convex_parts = vec![
            rect_points(Rect::new(-hl, -hw, hl, notch.y0)),
            rect_points(Rect::new(-hl, notch.y0, notch.x0, hw)),
        ];
        Self {
            polygon,
            convex_parts,
        }
    }

    fn octagon(room: &RoomDimensions) -> Self {
        let radius = room.length.min(room.width) / 2.0;
        let polygon: Vec<Point> = (0..8)
            .map(|i| {
                let a = i as f64 * FRAC_PI_4;
                Point::new(radius * a.cos(), radius * a.sin())
            })
            .collect();
        Self {
            convex_parts: vec![polygon.clone()],
            polygon,
        }
    }

    /// Wall polyline, one segment per polygon edge (closed)
    pub fn walls(&self) -> Vec<WallSegment> {
        let n = self.polygon.len();
        (0..n)
            .map(|i| WallSegment {
                start: self.polygon[i],
                end: self.polygon[(i + 1) % n],
            })
            .collect()
    }

    /// Enclosed area (shoelace)
    pub fn area(&self) -> f64 {
        let n = self.polygon.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.polygon[i];
                let b = self.polygon[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }

    pub fn bounds(&self) -> Rect {
        self.polygon
            .iter()
            .fold(Rect::from_points(self.polygon[0], self.polygon[0]), |r, p| {
                r.union_pt(*p)
            })
    }
}

/// The room's outer rectangle, centred on the origin
pub fn bounding_rect(room: &RoomDimensions) -> Rect {
    Rect::from_center_size(Point::ZERO, (room.length, room.width))
}

/// Rectangle removed from the +x/+z corner of an L-shaped room
pub fn l_notch(room: &RoomDimensions) -> Rect {
    let hl = room.length / 2.0;
    let hw = room.width / 2.0;
    Rect::new(
        hl - room.length * L_NOTCH_RATIO,
        hw - room.width * L_NOTCH_RATIO,
        hl,
        hw,
    )
}

fn rect_points(r: Rect) -> Vec<Point> {
    vec![
        Point::new(r.x0, r.y0),
        Point::new(r.x1, r.y0),
        Point::new(r.x1, r.y1),
        Point::new(r.x0, r.y1),
    ]
}

/// What sits in a wall gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningKind {
    Door,
    Window,
}

/// Door or window on a wall of a rectangular room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opening {
    pub kind: OpeningKind,
    /// Gap start on the wall line; for doors this is the hinge
    pub start: Point,
    pub end: Point,
    /// Unit vector pointing into the room
    pub inward: Vec2,
}

impl Opening {
    pub fn width(&self) -> f64 {
        (self.end - self.start).hypot()
    }
}

pub const DOOR_WIDTH: f64 = 1.0;
pub const WINDOW_WIDTH: f64 = 1.5;
/// Drawn opening angle of the door leaf
pub const DOOR_SWING_DEGREES: f64 = 40.0;

/// Door on the +z wall and windows on the -z and +x walls. Only rectangular
/// rooms get openings.
pub fn openings(shape: RoomShape, room: &RoomDimensions) -> Vec<Opening> {
    if shape != RoomShape::Rectangular {
        return Vec::new();
    }
    let hl = room.length / 2.0;
    let hw = room.width / 2.0;
    let door = DOOR_WIDTH.min(room.length) / 2.0;
    let window_x = WINDOW_WIDTH.min(room.length) / 2.0;
    let window_z = WINDOW_WIDTH.min(room.width) / 2.0;
    vec![
        Opening {
            kind: OpeningKind::Door,
            start: Point::new(-door, hw),
            end: Point::new(door, hw),
            inward: Vec2::new(0.0, -1.0),
        },
        Opening {
            kind: OpeningKind::Window,
            start: Point::new(-window_x, -hw),
            end: Point::new(window_x, -hw),
            inward: Vec2::new(0.0, 1.0),
        },
        Opening {
            kind: OpeningKind::Window,
            start: Point::new(hl, -window_z),
            end: Point::new(hl, window_z),
            inward: Vec2::new(-1.0, 0.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular() {
        let room = RoomDimensions::new(6.0, 4.0, 2.7);
        let o = RoomOutline::new(RoomShape::Rectangular, &room);
        assert_eq!(o.polygon.len(), 4);
        assert_eq!(o.walls().len(), 4);
        assert!((o.area() - 24.0).abs() < 1e-12);
        assert_eq!(o.bounds(), Rect::new(-3.0, -2.0, 3.0, 2.0));
    }

    #[test]
    fn test_l_notch_dimensions() {
        let room = RoomDimensions::new(6.0, 5.0, 2.8);
        let notch = l_notch(&room);
        assert!((notch.width() - 2.4).abs() < 1e-12);
        assert!((notch.height() - 2.0).abs() < 1e-12);
        let o = RoomOutline::new(RoomShape::LShaped, &room);
        assert_eq!(o.polygon.len(), 6);
        assert!((o.area() - (30.0 - 2.4 * 2.0)).abs() < 1e-9);
        let parts_area: f64 = o
            .convex_parts
            .iter()
            .map(|p| RoomOutline { polygon: p.clone(), convex_parts: vec![] }.area())
            .sum();
        assert!((parts_area - o.area()).abs() < 1e-9);
    }

    #[test]
    fn test_l_walls_trace_notch() {
        let room = RoomDimensions::new(6.0, 5.0, 2.8);
        let walls = RoomOutline::new(RoomShape::LShaped, &room).walls();
        assert_eq!(walls.len(), 6);
        // The two notch walls
        assert!((walls[2].length() - 2.4).abs() < 1e-12);
        assert!((walls[3].length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_octagon_inscribed() {
        let room = RoomDimensions::new(5.0, 4.0, 2.7);
        let o = RoomOutline::new(RoomShape::Custom, &room);
        assert_eq!(o.polygon.len(), 8);
        for p in &o.polygon {
            assert!((p.to_vec2().hypot() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_openings_only_for_rectangular() {
        let room = RoomDimensions::new(6.0, 4.0, 2.7);
        let all = openings(RoomShape::Rectangular, &room);
        assert_eq!(all.iter().filter(|o| o.kind == OpeningKind::Door).count(), 1);
        assert_eq!(all.iter().filter(|o| o.kind == OpeningKind::Window).count(), 2);
        assert!((all[0].width() - DOOR_WIDTH).abs() < 1e-12);
        assert!(openings(RoomShape::LShaped, &room).is_empty());
        assert!(openings(RoomShape::Custom, &room).is_empty());
    }

    #[test]
    fn test_wall_angle() {
        let w = WallSegment {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 2.0),
        };
        assert!((w.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(w.midpoint(), Point::new(0.0, 1.0));
    }
}
