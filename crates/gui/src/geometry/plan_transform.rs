//! World ↔ screen mapping for the floor plan
//!
//! Screen coordinates are canvas-local points (origin at the canvas' top-left).

use kurbo::{Point, Size, Vec2};
use shared::RoomDimensions;

/// Scale reported to the view hub as 1.0
pub const BASE_SCALE: f64 = 50.0;

/// Pan/zoom state of the floor plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTransform {
    /// Pixels per meter
    pub scale: f64,
    /// Pan offset in pixels
    pub offset: Vec2,
    pub canvas: Size,
}

impl Default for PlanTransform {
    fn default() -> Self {
        Self {
            scale: BASE_SCALE,
            offset: Vec2::ZERO,
            canvas: Size::ZERO,
        }
    }
}

impl PlanTransform {
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            ..Default::default()
        }
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.canvas.width / 2.0, self.canvas.height / 2.0)
    }

    /// Horizontal world point (x, z) to canvas pixels
    pub fn world_to_screen(&self, world: Point) -> Point {
        (world.to_vec2() * self.scale + self.offset + self.center()).to_point()
    }

    /// Canvas pixels to horizontal world point (x, z)
    pub fn screen_to_world(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.offset - self.center()) / self.scale).to_point()
    }

    /// World length to pixels
    pub fn to_pixels(&self, meters: f64) -> f64 {
        meters * self.scale
    }

    /// Reset the pan and size the scale so the room's longer side fits the
    /// canvas minus `padding` on every side.
    pub fn fit_to_room(&mut self, room: &RoomDimensions, padding: f64) {
        let max_dim = room.max_horizontal();
        let fit = ((self.canvas.width - 2.0 * padding) / max_dim)
            .min((self.canvas.height - 2.0 * padding) / max_dim);
        if fit.is_finite() && fit > 0.0 {
            self.scale = fit;
        }
        self.offset = Vec2::ZERO;
    }

    /// Zoom by `factor` keeping the world point under `anchor` fixed.
    /// The result is clamped into `[min_scale, max_scale]`.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64, min_scale: f64, max_scale: f64) {
        let world = self.screen_to_world(anchor);
        self.scale = (self.scale * factor).clamp(min_scale, max_scale);
        // Solve world_to_screen(world) == anchor for the offset
        self.offset = anchor.to_vec2() - self.center() - world.to_vec2() * self.scale;
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom relative to the default scale, as shared with the other view
    pub fn relative_scale(&self) -> f64 {
        self.scale / BASE_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn transform() -> PlanTransform {
        PlanTransform::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn test_origin_maps_to_center() {
        let t = transform();
        assert_eq!(t.world_to_screen(Point::ZERO), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_formula() {
        let mut t = transform();
        t.scale = 40.0;
        t.offset = Vec2::new(10.0, -5.0);
        assert_eq!(t.world_to_screen(Point::new(1.0, 2.0)), Point::new(450.0, 375.0));
    }

    #[test]
    fn test_fit_uses_longer_side() {
        let mut t = transform();
        t.offset = Vec2::new(30.0, 30.0);
        t.fit_to_room(&RoomDimensions::new(6.0, 4.0, 2.7), 100.0);
        // min((800-200)/6, (600-200)/6)
        assert!((t.scale - 400.0 / 6.0).abs() < 1e-12);
        assert_eq!(t.offset, Vec2::ZERO);
    }

    #[test]
    fn test_fit_ignores_tiny_canvas() {
        let mut t = PlanTransform::new(Size::new(150.0, 150.0));
        t.fit_to_room(&RoomDimensions::default(), 100.0);
        assert_eq!(t.scale, BASE_SCALE);
    }

    #[test]
    fn test_zoom_keeps_anchor() {
        let mut t = transform();
        let anchor = Point::new(620.0, 140.0);
        let before = t.screen_to_world(anchor);
        t.zoom_at(anchor, 1.1, 5.0, 500.0);
        let after = t.screen_to_world(anchor);
        assert!((before - after).hypot() < 1e-9);
        assert!((t.scale - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut t = transform();
        t.zoom_at(Point::ZERO, 1000.0, 5.0, 500.0);
        assert_eq!(t.scale, 500.0);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            x in -100.0f64..100.0, z in -100.0f64..100.0,
            scale in 1.0f64..500.0, ox in -1000.0f64..1000.0, oy in -1000.0f64..1000.0,
            w in 1.0f64..4000.0, h in 1.0f64..4000.0,
        ) {
            let t = PlanTransform { scale, offset: Vec2::new(ox, oy), canvas: Size::new(w, h) };
            let p = Point::new(x, z);
            let back = t.screen_to_world(t.world_to_screen(p));
            prop_assert!((back - p).hypot() < 1e-9);
        }
    }
}
