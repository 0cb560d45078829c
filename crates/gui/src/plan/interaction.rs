//! Pointer gestures of the floor plan.
//!
//! All positions are canvas-local screen points.

use kurbo::{Point, Rect, Vec2};
use shared::FurnitureId;

use crate::geometry::{angle_to_pointer, hit_test_plan, world_to_local, PlanTransform};
use crate::state::{AppState, EditorTool};

/// Pixels of vertical drag that double an item in one step
const SCALE_DRAG_PIXELS: f64 = 100.0;

/// Gesture in progress between pointer down and up
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlanGesture {
    #[default]
    Idle,
    MoveItem { id: FurnitureId, last: Point },
    ScaleItem { id: FurnitureId, last: Point },
    Pan { last: Point },
}

#[derive(Debug, Clone, Default)]
pub struct PlanInteraction {
    gesture: PlanGesture,
}

impl PlanInteraction {
    pub fn gesture(&self) -> &PlanGesture {
        &self.gesture
    }

    pub fn is_active(&self) -> bool {
        self.gesture != PlanGesture::Idle
    }

    pub fn pointer_down(&mut self, pos: Point, transform: &PlanTransform, state: &mut AppState) {
        let world = transform.screen_to_world(pos);
        let hit = hit_test_plan(state.scene.furniture(), world).map(|item| item.id.clone());

        self.gesture = match (state.tool, hit) {
            (EditorTool::Select, Some(id)) => {
                state.view.select(id.clone());
                PlanGesture::MoveItem { id, last: pos }
            }
            (EditorTool::Select, None) => PlanGesture::Pan { last: pos },
            (EditorTool::Rotate, Some(id)) if !state.view.is_selected(&id) => {
                state.view.select(id);
                PlanGesture::Idle
            }
            (EditorTool::Rotate, _) => {
                rotate_selected_toward(world, state);
                PlanGesture::Idle
            }
            (EditorTool::Scale, Some(id)) => {
                if state.view.is_selected(&id) {
                    PlanGesture::ScaleItem { id, last: pos }
                } else {
                    state.view.select(id);
                    PlanGesture::Idle
                }
            }
            (EditorTool::Scale, None) => {
                state.view.clear_selection();
                PlanGesture::Idle
            }
        };
    }

    /// Continue the current gesture. Returns true when the scene or the
    /// transform changed.
    pub fn pointer_move(
        &mut self,
        pos: Point,
        transform: &mut PlanTransform,
        state: &mut AppState,
    ) -> bool {
        match &mut self.gesture {
            PlanGesture::Idle => false,
            PlanGesture::Pan { last } => {
                transform.pan(pos - *last);
                *last = pos;
                true
            }
            PlanGesture::MoveItem { id, last } => {
                let Some(item) = state.scene.get_furniture_item(id) else {
                    tracing::debug!("Dragged item {} vanished, cancelling", id);
                    self.gesture = PlanGesture::Idle;
                    return false;
                };
                let screen_delta = pos - *last;
                let world_delta = Vec2::new(screen_delta.x, screen_delta.y) / transform.scale;
                let step = world_to_local(world_delta, item.yaw());
                let (x, z) = (item.position.x + step.x, item.position.z + step.y);
                *last = pos;
                let id = id.clone();
                state.scene.move_furniture_item(&id, x, z)
            }
            PlanGesture::ScaleItem { id, last } => {
                if state.scene.get_furniture_item(id).is_none() {
                    self.gesture = PlanGesture::Idle;
                    return false;
                }
                let factor = 1.0 + (pos.y - last.y) / SCALE_DRAG_PIXELS;
                *last = pos;
                let id = id.clone();
                state.scene.scale_furniture_item(&id, factor)
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.gesture = PlanGesture::Idle;
    }

    /// Leaving the canvas ends any gesture
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Pointer motion as the canvas reports it: a position outside the
    /// transform's canvas counts as leaving it.
    pub fn pointer_track(
        &mut self,
        pos: Point,
        transform: &mut PlanTransform,
        state: &mut AppState,
    ) -> bool {
        let bounds = Rect::from_origin_size(Point::ORIGIN, transform.canvas);
        if !bounds.contains(pos) {
            if self.is_active() {
                tracing::debug!("Pointer left the floor plan, ending gesture");
            }
            self.pointer_leave();
            return false;
        }
        self.pointer_move(pos, transform, state)
    }

    /// Zoom about `pos`; positive `notches` zoom in
    pub fn wheel(&mut self, pos: Point, notches: f64, transform: &mut PlanTransform, state: &AppState) {
        if notches == 0.0 {
            return;
        }
        let plan = &state.settings.plan;
        let factor = if notches > 0.0 {
            plan.zoom_factor
        } else {
            1.0 / plan.zoom_factor
        };
        transform.zoom_at(pos, factor, plan.min_scale, plan.max_scale);
    }
}

/// Turn the selected item so its local +x axis points at `world`
fn rotate_selected_toward(world: Point, state: &mut AppState) -> bool {
    let Some(item) = state.selected_item() else {
        return false;
    };
    let center = Point::new(item.position.x, item.position.z);
    if (world - center).hypot() < f64::EPSILON {
        return false;
    }
    let yaw = angle_to_pointer(center, world);
    let id = item.id.clone();
    state.scene.set_furniture_yaw(&id, yaw)
}
