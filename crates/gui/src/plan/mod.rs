//! Floor-plan view state shared by the painter and the headless harness.

pub mod interaction;

pub use interaction::{PlanGesture, PlanInteraction};

use kurbo::Size;
use shared::{PlanarPoint, RoomDimensions, ViewMode, ViewTransformPatch};

use crate::geometry::PlanTransform;
use crate::state::AppState;

/// Transform plus gesture state of the 2D view
#[derive(Debug, Clone, Default)]
pub struct PlanView {
    pub transform: PlanTransform,
    pub interaction: PlanInteraction,
    /// Room and canvas the current fit was computed for
    fitted: Option<(RoomDimensions, Size)>,
}

impl PlanView {
    /// Refit the room when its dimensions or the canvas size changed.
    /// Returns true when the transform was reset.
    pub fn prepare(&mut self, canvas: Size, room: &RoomDimensions, padding: f64) -> bool {
        self.transform.canvas = canvas;
        if self.fitted == Some((*room, canvas)) {
            return false;
        }
        self.transform.fit_to_room(room, padding);
        self.fitted = Some((*room, canvas));
        tracing::debug!(
            "Floor plan fitted at {:.1} px/m for {}×{}",
            self.transform.scale,
            room.length,
            room.width
        );
        true
    }

    /// Pan and zoom as announced to the view hub
    pub fn sync_patch(&self) -> ViewTransformPatch {
        ViewTransformPatch {
            position: Some(PlanarPoint {
                x: self.transform.offset.x,
                y: self.transform.offset.y,
            }),
            scale: Some(self.transform.relative_scale()),
            rotation: None,
        }
    }

    /// Push the transform to the hub while the floor plan is active
    pub fn push(&self, state: &mut AppState) -> bool {
        state.view.mode() == ViewMode::TwoD && state.view.sync_view_transform(self.sync_patch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppSettings;

    #[test]
    fn test_prepare_fits_once_per_room_and_canvas() {
        let mut view = PlanView::default();
        let room = RoomDimensions::new(6.0, 4.0, 2.8);
        let canvas = Size::new(800.0, 600.0);
        assert!(view.prepare(canvas, &room, 100.0));
        assert!((view.transform.scale - 400.0 / 6.0).abs() < 1e-9);
        view.transform.pan(kurbo::Vec2::new(10.0, 0.0));
        assert!(!view.prepare(canvas, &room, 100.0));
        assert_eq!(view.transform.offset.x, 10.0);

        assert!(view.prepare(canvas, &RoomDimensions::new(8.0, 4.0, 2.8), 100.0));
        assert_eq!(view.transform.offset.x, 0.0);
        assert!(view.prepare(Size::new(1000.0, 600.0), &RoomDimensions::new(8.0, 4.0, 2.8), 100.0));
    }

    #[test]
    fn test_push_only_in_plan_mode() {
        let mut state = AppState::with_settings(AppSettings::default());
        let mut view = PlanView::default();
        view.prepare(Size::new(800.0, 600.0), &state.scene.room(), 100.0);
        assert!(!view.push(&mut state));
        state.set_view_mode(ViewMode::TwoD);
        assert!(view.push(&mut state));
        assert!(!view.push(&mut state));
        assert!((state.view.transform().scale - view.transform.relative_scale()).abs() < 1e-12);
    }
}
