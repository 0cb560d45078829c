//! 3D volume compositions. Coordinates are item-local meters with the
//! footprint centre at the origin and the floor at y = 0.

use shared::Dimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeShape {
    Box,
    /// Axis along y; `size.x` is the diameter
    Cylinder,
    /// Apex up; `size.x` is the base diameter
    Cone,
}

/// Colour role, resolved by the mesh builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTone {
    Body,
    Detail,
    Leg,
    Shade,
    Leaf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumePart {
    pub shape: VolumeShape,
    pub center: [f64; 3],
    /// Full extents (x, y, z)
    pub size: [f64; 3],
    pub tone: VolumeTone,
}

impl VolumePart {
    fn cuboid(center: [f64; 3], size: [f64; 3], tone: VolumeTone) -> Self {
        Self {
            shape: VolumeShape::Box,
            center,
            size,
            tone,
        }
    }

    fn round(shape: VolumeShape, center: [f64; 3], diameter: f64, height: f64, tone: VolumeTone) -> Self {
        Self {
            shape,
            center,
            size: [diameter, height, diameter],
            tone,
        }
    }

    /// Top of the part above the floor
    pub fn top(&self) -> f64 {
        self.center[1] + self.size[1] / 2.0
    }
}

fn legs(x: f64, z: f64, thickness: f64, height: f64) -> [VolumePart; 4] {
    [(-x, -z), (x, -z), (x, z), (-x, z)].map(|(lx, lz)| {
        VolumePart::cuboid([lx, height / 2.0, lz], [thickness, height, thickness], VolumeTone::Leg)
    })
}

/// Seat, back rest and four legs
pub fn chair(d: &Dimensions) -> Vec<VolumePart> {
    let (w, dp, h) = (d.width, d.depth, d.height);
    let seat_y = 0.45 * h;
    let seat_t = 0.08 * h;
    let leg = 0.06 * w.min(dp);
    let mut out = vec![
        VolumePart::cuboid([0.0, seat_y, 0.0], [w, seat_t, dp], VolumeTone::Body),
        VolumePart::cuboid(
            [0.0, (seat_y + h) / 2.0, -dp / 2.0 + 0.05 * dp],
            [0.8 * w, h - seat_y, 0.1 * dp],
            VolumeTone::Detail,
        ),
    ];
    out.extend(legs(0.4 * w, 0.4 * dp, leg, seat_y - seat_t / 2.0));
    out
}

/// Top and four legs
pub fn table(d: &Dimensions) -> Vec<VolumePart> {
    let (w, dp, h) = (d.width, d.depth, d.height);
    let top_t = 0.05 * h;
    let leg = 0.05 * w.min(dp);
    let mut out = vec![VolumePart::cuboid(
        [0.0, h - top_t / 2.0, 0.0],
        [w, top_t, dp],
        VolumeTone::Body,
    )];
    out.extend(legs(0.4 * w, 0.4 * dp, leg, h - top_t));
    out
}

/// Base, back rest, two arms and short legs
pub fn sofa(d: &Dimensions) -> Vec<VolumePart> {
    let (w, dp, h) = (d.width, d.depth, d.height);
    let foot = 0.1 * h;
    let arm = 0.1 * w;
    let mut out = vec![
        VolumePart::cuboid([0.0, foot + 0.2 * h, 0.0], [w, 0.4 * h, dp], VolumeTone::Body),
        VolumePart::cuboid(
            [0.0, (foot + h) / 2.0, -dp / 2.0 + 0.125 * dp],
            [w, h - foot, 0.25 * dp],
            VolumeTone::Detail,
        ),
        VolumePart::cuboid([-w / 2.0 + arm / 2.0, foot + 0.3 * h, 0.0], [arm, 0.6 * h, dp], VolumeTone::Detail),
        VolumePart::cuboid([w / 2.0 - arm / 2.0, foot + 0.3 * h, 0.0], [arm, 0.6 * h, dp], VolumeTone::Detail),
    ];
    out.extend(legs(0.45 * w, 0.4 * dp, 0.05 * w.min(dp), foot));
    out
}

/// Cabinet with two shelf edges, split doors and a handle on the front
pub fn storage(d: &Dimensions) -> Vec<VolumePart> {
    let (w, dp, h) = (d.width, d.depth, d.height);
    let front = dp / 2.0 + 0.01;
    let mut out = vec![VolumePart::cuboid([0.0, h / 2.0, 0.0], [w, h, dp], VolumeTone::Body)];
    for frac in [1.0 / 3.0, 2.0 / 3.0] {
        out.push(VolumePart::cuboid([0.0, frac * h, front], [w * 0.96, 0.02, 0.02], VolumeTone::Detail));
    }
    out.push(VolumePart::cuboid([0.0, h / 2.0, front], [0.01, h * 0.96, 0.02], VolumeTone::Detail));
    out.push(VolumePart::cuboid([0.06 * w, h / 2.0, front + 0.01], [0.02, 0.12 * h, 0.02], VolumeTone::Leg));
    out
}

/// Round base, pole and cone shade
pub fn lamp(d: &Dimensions) -> Vec<VolumePart> {
    let (w, dp, h) = (d.width, d.depth, d.height);
    let m = w.min(dp);
    let base_h = 0.03 * h;
    let shade_h = 0.25 * h;
    let pole_h = h - base_h - shade_h * 0.5;
    vec![
        VolumePart::round(VolumeShape::Cylinder, [0.0, base_h / 2.0, 0.0], 0.6 * m, base_h, VolumeTone::Leg),
        VolumePart::round(
            VolumeShape::Cylinder,
            [0.0, base_h + pole_h / 2.0, 0.0],
            0.06 * m,
            pole_h,
            VolumeTone::Leg,
        ),
        VolumePart::round(VolumeShape::Cone, [0.0, h - shade_h / 2.0, 0.0], m, shade_h, VolumeTone::Shade),
    ]
}

/// Vase with foliage on top
pub fn decor(d: &Dimensions) -> Vec<VolumePart> {
    let (w, dp, h) = (d.width, d.depth, d.height);
    let m = w.min(dp);
    let vase_h = 0.45 * h;
    vec![
        VolumePart::round(VolumeShape::Cylinder, [0.0, vase_h / 2.0, 0.0], 0.6 * m, vase_h, VolumeTone::Body),
        VolumePart::round(
            VolumeShape::Cone,
            [0.0, vase_h + (h - vase_h) / 2.0, 0.0],
            m,
            h - vase_h,
            VolumeTone::Leaf,
        ),
    ]
}

/// Plain box
pub fn fallback(d: &Dimensions) -> Vec<VolumePart> {
    vec![VolumePart::cuboid(
        [0.0, d.height / 2.0, 0.0],
        [d.width, d.height, d.depth],
        VolumeTone::Body,
    )]
}
