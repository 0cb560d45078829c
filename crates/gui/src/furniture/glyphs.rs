//! Floor-plan glyphs. Coordinates are item-local meters: x along the item's
//! width, y along its depth (world z), origin at the footprint centre.

use std::f64::consts::TAU;

use kurbo::{Point, Rect};
use shared::Dimensions;

/// Paint role, resolved to a colour by the painter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphFill {
    /// The item's own colour
    Body,
    /// Darker shade of the item colour
    Detail,
    Leg,
    Pot,
    Leaf,
    /// Translucent light halo
    Glow,
    /// Outline only
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlyphShape {
    Rect { rect: Rect, corner: f64 },
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
    Polygon(Vec<Point>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPrimitive {
    pub shape: GlyphShape,
    pub fill: GlyphFill,
    pub outline: bool,
}

impl GlyphPrimitive {
    fn rect(rect: Rect, fill: GlyphFill) -> Self {
        Self {
            shape: GlyphShape::Rect { rect, corner: 0.0 },
            fill,
            outline: true,
        }
    }

    fn rounded(rect: Rect, corner: f64, fill: GlyphFill) -> Self {
        Self {
            shape: GlyphShape::Rect { rect, corner },
            fill,
            outline: true,
        }
    }

    fn circle(center: Point, radius: f64, fill: GlyphFill) -> Self {
        Self {
            shape: GlyphShape::Circle { center, radius },
            fill,
            outline: fill != GlyphFill::Glow,
        }
    }

    fn line(from: Point, to: Point) -> Self {
        Self {
            shape: GlyphShape::Line { from, to },
            fill: GlyphFill::None,
            outline: true,
        }
    }
}

fn footprint(d: &Dimensions) -> Rect {
    Rect::from_center_size(Point::ZERO, (d.width, d.depth))
}

/// Seat with a back rest along the far edge and four legs
pub fn chair(d: &Dimensions) -> Vec<GlyphPrimitive> {
    let (w, dp) = (d.width, d.depth);
    let leg = w.min(dp) * 0.05;
    let mut out = vec![
        GlyphPrimitive::rect(footprint(d), GlyphFill::Body),
        GlyphPrimitive::rect(
            Rect::new(-0.4 * w, -dp / 2.0, 0.4 * w, -dp / 2.0 + 0.2 * dp),
            GlyphFill::Detail,
        ),
    ];
    out.extend(corner_points(0.4 * w, 0.4 * dp).map(|c| GlyphPrimitive::circle(c, leg, GlyphFill::Leg)));
    out
}

/// Table top with four legs
pub fn table(d: &Dimensions) -> Vec<GlyphPrimitive> {
    let leg = d.width.min(d.depth) * 0.05;
    let mut out = vec![GlyphPrimitive::rect(footprint(d), GlyphFill::Body)];
    out.extend(corner_points(0.4 * d.width, 0.4 * d.depth).map(|c| GlyphPrimitive::circle(c, leg, GlyphFill::Leg)));
    out
}

/// Rounded base, back rest, two arms and three seat cushions
pub fn sofa(d: &Dimensions) -> Vec<GlyphPrimitive> {
    let (w, dp) = (d.width, d.depth);
    let hw = w / 2.0;
    let hd = dp / 2.0;
    let arm = 0.1 * w;
    let back = 0.25 * dp;
    let mut out = vec![
        GlyphPrimitive::rounded(footprint(d), 0.1 * w.min(dp), GlyphFill::Body),
        GlyphPrimitive::rect(Rect::new(-hw, -hd, hw, -hd + back), GlyphFill::Detail),
        GlyphPrimitive::rect(Rect::new(-hw, -hd, -hw + arm, hd), GlyphFill::Detail),
        GlyphPrimitive::rect(Rect::new(hw - arm, -hd, hw, hd), GlyphFill::Detail),
    ];
    let seat_x0 = -hw + arm;
    let cushion = (w - 2.0 * arm) / 3.0;
    out.extend((0..3).map(|i| {
        let x0 = seat_x0 + i as f64 * cushion;
        GlyphPrimitive::rounded(
            Rect::new(x0, -hd + back, x0 + cushion, hd).inset(-0.02 * w.min(dp)),
            0.05 * w.min(dp),
            GlyphFill::Body,
        )
    }));
    out
}

/// Cabinet seen from above: shelf edges, a centre door seam and two handles
pub fn storage(d: &Dimensions) -> Vec<GlyphPrimitive> {
    let (w, dp) = (d.width, d.depth);
    let hw = w / 2.0;
    let hd = dp / 2.0;
    let mut out = vec![GlyphPrimitive::rect(footprint(d), GlyphFill::Body)];
    for frac in [1.0 / 3.0, 2.0 / 3.0] {
        let y = -hd + frac * dp;
        out.push(GlyphPrimitive::line(Point::new(-hw, y), Point::new(hw, y)));
    }
    out.push(GlyphPrimitive::line(Point::new(0.0, -hd), Point::new(0.0, hd)));
    let handle = w.min(dp) * 0.04;
    for x in [-0.08 * w, 0.08 * w] {
        out.push(GlyphPrimitive::circle(Point::new(x, hd - 0.12 * dp), handle, GlyphFill::Leg));
    }
    out
}

/// Light halo, shade and bulb
pub fn lamp(d: &Dimensions) -> Vec<GlyphPrimitive> {
    let r = d.width.min(d.depth) / 2.0;
    vec![
        GlyphPrimitive::circle(Point::ZERO, r * 1.4, GlyphFill::Glow),
        GlyphPrimitive::circle(Point::ZERO, r, GlyphFill::Body),
        GlyphPrimitive::circle(Point::ZERO, r * 0.35, GlyphFill::Detail),
    ]
}

/// Potted plant: pot rim and five leaves
pub fn decor(d: &Dimensions) -> Vec<GlyphPrimitive> {
    let r = d.width.min(d.depth) / 2.0;
    let mut out = vec![GlyphPrimitive::circle(Point::ZERO, r * 0.6, GlyphFill::Pot)];
    out.extend((0..5).map(|i| {
        let a = i as f64 * TAU / 5.0;
        GlyphPrimitive {
            shape: GlyphShape::Polygon(leaf(a, r)),
            fill: GlyphFill::Leaf,
            outline: true,
        }
    }));
    out.push(GlyphPrimitive::circle(Point::ZERO, r * 0.2, GlyphFill::Leaf));
    out
}

/// Plain footprint rectangle
pub fn fallback(d: &Dimensions) -> Vec<GlyphPrimitive> {
    vec![GlyphPrimitive::rect(footprint(d), GlyphFill::Body)]
}

fn corner_points(x: f64, y: f64) -> [Point; 4] {
    [
        Point::new(-x, -y),
        Point::new(x, -y),
        Point::new(x, y),
        Point::new(-x, y),
    ]
}

/// Pointed ellipse reaching from near the centre to `r` along `angle`
fn leaf(angle: f64, r: f64) -> Vec<Point> {
    const STEPS: usize = 10;
    let (s, c) = angle.sin_cos();
    let half_len = r * 0.4;
    let half_width = r * 0.18;
    let centre = Point::new(c * r * 0.55, s * r * 0.55);
    (0..STEPS)
        .map(|i| {
            let t = i as f64 * TAU / STEPS as f64;
            let (lx, ly) = (half_len * t.cos(), half_width * t.sin());
            Point::new(centre.x + lx * c - ly * s, centre.y + lx * s + ly * c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_footprint(prims: &[GlyphPrimitive], d: &Dimensions, slack: f64) -> bool {
        let bound = footprint(d).inflate(slack, slack);
        prims.iter().all(|p| match &p.shape {
            GlyphShape::Rect { rect, .. } => bound.contains(rect.origin()) && bound.contains(Point::new(rect.x1, rect.y1)),
            GlyphShape::Circle { center, .. } => bound.contains(*center),
            GlyphShape::Line { from, to } => bound.contains(*from) && bound.contains(*to),
            GlyphShape::Polygon(points) => points.iter().all(|pt| bound.contains(*pt)),
        })
    }

    #[test]
    fn test_chair_parts() {
        let d = Dimensions::new(0.5, 0.55, 0.9);
        let g = chair(&d);
        assert_eq!(g.len(), 6);
        assert_eq!(g.iter().filter(|p| p.fill == GlyphFill::Leg).count(), 4);
        assert!(within_footprint(&g, &d, 1e-9));
    }

    #[test]
    fn test_sofa_has_three_cushions() {
        let d = Dimensions::new(2.0, 0.9, 0.8);
        let g = sofa(&d);
        let cushions = g
            .iter()
            .filter(|p| matches!(p.shape, GlyphShape::Rect { corner, .. } if corner > 0.0) && p.fill == GlyphFill::Body)
            .count();
        // Rounded base plus three cushions
        assert_eq!(cushions, 4);
        assert!(within_footprint(&g, &d, 1e-9));
    }

    #[test]
    fn test_decor_leaves() {
        let d = Dimensions::new(0.5, 0.5, 1.0);
        let g = decor(&d);
        assert_eq!(g.iter().filter(|p| matches!(p.shape, GlyphShape::Polygon(_))).count(), 5);
        assert!(within_footprint(&g, &d, 1e-9));
    }

    #[test]
    fn test_storage_and_table_inside_footprint() {
        let d = Dimensions::new(1.2, 0.4, 1.8);
        assert!(within_footprint(&storage(&d), &d, 1e-9));
        assert!(within_footprint(&table(&d), &d, 1e-9));
    }
}
