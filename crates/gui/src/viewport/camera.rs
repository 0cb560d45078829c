use glam::{Mat4, Vec3, Vec4};
use shared::{PlanarPoint, ViewTransformPatch};

use super::picking::Ray;

/// Orbit camera for the 3D view
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl OrbitCamera {
    /// Looking at the room centre from (5, 5, 5)
    pub fn new(fov_degrees: f32) -> Self {
        let eye = Vec3::splat(5.0);
        let distance = eye.length();
        Self {
            yaw: eye.x.atan2(eye.z),
            pitch: (eye.y / distance).asin(),
            distance,
            target: Vec3::ZERO,
            fov: fov_degrees.to_radians(),
        }
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        // Stay above the floor
        self.pitch = (self.pitch + dy.to_radians()).clamp(0.05, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(1.0, 60.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        let offset = right * dx + up * dy;
        self.target += offset;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.05, 200.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Logical transform announced to the floor plan: horizontal eye
    /// position and yaw in degrees
    pub fn sync_patch(&self) -> ViewTransformPatch {
        let eye = self.eye_position();
        ViewTransformPatch {
            position: Some(PlanarPoint {
                x: eye.x as f64,
                y: eye.z as f64,
            }),
            scale: None,
            rotation: Some(self.yaw.to_degrees() as f64),
        }
    }

    /// Project a 3D point to 2D screen coords (for overlay text)
    pub fn project(&self, point: [f32; 3], rect: egui::Rect) -> Option<egui::Pos2> {
        let aspect = rect.width() / rect.height();
        let vp = self.view_projection(aspect);
        let p = vp * Vec4::new(point[0], point[1], point[2], 1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        let screen_x = rect.center().x + ndc.x * rect.width() * 0.5;
        let screen_y = rect.center().y - ndc.y * rect.height() * 0.5;
        Some(egui::pos2(screen_x, screen_y))
    }

    /// Cast a ray from a screen position into the 3D scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        // Screen → NDC
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let vp_inv = self.view_projection(aspect).inverse();

        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_initial_eye() {
        let cam = OrbitCamera::new(50.0);
        assert!((cam.eye_position() - Vec3::splat(5.0)).length() < 1e-4);
    }

    #[test]
    fn test_center_ray_hits_target() {
        let cam = OrbitCamera::default();
        let ray = cam.screen_ray(rect().center(), rect());
        let to_target = (cam.target - ray.origin).normalize();
        assert!(ray.direction.dot(to_target) > 0.9999);
    }

    #[test]
    fn test_project_inverts_ray() {
        let cam = OrbitCamera::default();
        let p = [1.0, 0.0, -0.5];
        let screen = cam.project(p, rect()).unwrap();
        let ray = cam.screen_ray(screen, rect());
        let to_p = (Vec3::from(p) - ray.origin).normalize();
        assert!(ray.direction.dot(to_p) > 0.9999);
    }

    #[test]
    fn test_pitch_clamped_above_floor() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, -500.0);
        assert!(cam.eye_position().y > 0.0);
    }

    #[test]
    fn test_sync_patch() {
        let cam = OrbitCamera::default();
        let patch = cam.sync_patch();
        let pos = patch.position.unwrap();
        assert!((pos.x - 5.0).abs() < 1e-4 && (pos.y - 5.0).abs() < 1e-4);
        assert!((patch.rotation.unwrap() - 45.0).abs() < 1e-4);
    }
}
