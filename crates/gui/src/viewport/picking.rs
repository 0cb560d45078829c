use glam::{Mat4, Vec3};
use shared::FurnitureItem;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same ray expressed in the frame where `world_from_local` is identity
    pub fn to_local(&self, world_from_local: Mat4) -> Ray {
        let inv = world_from_local.inverse();
        Ray {
            origin: inv.transform_point3(self.origin),
            direction: inv.transform_vector3(self.direction),
        }
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Intersect the ray with the horizontal plane y = `height`.
/// None when the ray is parallel to the plane or points away from it.
pub fn ray_ground_plane(ray: &Ray, height: f32) -> Option<Vec3> {
    if ray.direction.y.abs() < 1e-6 {
        return None;
    }
    let t = (height - ray.origin.y) / ray.direction.y;
    (t >= 0.0).then(|| ray.at(t))
}

/// World transform of an item: translate to its position, then apply yaw so
/// that a local (lx, lz) lands at (lx·cos − lz·sin, lx·sin + lz·cos).
pub fn item_transform(item: &FurnitureItem) -> Mat4 {
    let p = item.position;
    Mat4::from_translation(Vec3::new(p.x as f32, p.y as f32, p.z as f32))
        * Mat4::from_rotation_y(-(item.yaw() as f32).to_radians())
}

/// Local bounds of an item's volume (footprint centred, base on the floor)
pub fn item_local_bounds(item: &FurnitureItem) -> Aabb {
    let d = item.dimensions;
    let hw = d.width as f32 / 2.0;
    let hd = d.depth as f32 / 2.0;
    Aabb {
        min: Vec3::new(-hw, 0.0, -hd),
        max: Vec3::new(hw, d.height as f32, hd),
    }
}

/// Nearest item whose oriented bounds the ray crosses, with its distance
pub fn pick_furniture<'a>(
    ray: &Ray,
    items: impl IntoIterator<Item = &'a FurnitureItem>,
) -> Option<(&'a FurnitureItem, f32)> {
    let mut best: Option<(&FurnitureItem, f32)> = None;
    for item in items {
        let local = ray.to_local(item_transform(item));
        // The local ray keeps the world parameterisation (rigid transform)
        if let Some(dist) = ray_aabb(&local, &item_local_bounds(item)) {
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((item, dist));
            }
        }
    }
    best
}
