//! Pointer input sampling.
//!
//! Mouse and touch events are folded into a single [`PointerInput`] resource
//! once per frame, so the detail camera and the overview drag logic consume
//! one device-independent description of the pointer.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::types::ViewSystemSet;

/// Wheel travel in pixels that counts as one line step.
const PIXELS_PER_LINE: f32 = 40.0;

/// Per-frame pointer snapshot in logical window pixels.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct PointerInput {
    /// Cursor or primary touch position, `None` when outside the window.
    pub position: Option<Vec2>,
    /// Button or single touch held down, and the press started in the scene.
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    /// Movement since last frame while pressed.
    pub motion: Vec2,
    /// Wheel steps this frame, positive away from the user.
    pub scroll: f32,
    /// Change in two-finger distance this frame, positive when spreading.
    pub pinch: f32,
}

impl PointerInput {
    /// Clear everything but keep `just_released` so ongoing drags still end.
    fn swallow(&mut self) {
        let released = self.just_released;
        *self = Self {
            position: self.position,
            just_released: released,
            ..Default::default()
        };
    }
}

/// Plugin sampling mouse and touch input.
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInput>()
            .add_systems(Update, gather_pointer_input.in_set(ViewSystemSet::Input));
    }
}

/// Build this frame's [`PointerInput`].
///
/// Presses that land on egui panels are swallowed. A drag that started in the
/// scene keeps receiving motion even when the pointer crosses a panel.
fn gather_pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    touches: Res<Touches>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    mut pointer: ResMut<PointerInput>,
) {
    let was_pressed = pointer.pressed;
    let cursor = window_query.single().ok().and_then(|w| w.cursor_position());

    let mut next = if touches.iter().next().is_some() || touches.any_just_released() {
        sample_touches(&touches, was_pressed)
    } else {
        sample_mouse(&mouse, &mouse_motion, &mouse_scroll, cursor, was_pressed)
    };

    if !was_pressed
        && let Ok(ctx) = contexts.ctx_mut()
        && (ctx.wants_pointer_input() || ctx.is_pointer_over_area())
    {
        next.swallow();
    }

    if *pointer != next {
        *pointer = next;
    }
}

fn sample_mouse(
    mouse: &ButtonInput<MouseButton>,
    motion: &AccumulatedMouseMotion,
    scroll: &AccumulatedMouseScroll,
    cursor: Option<Vec2>,
    was_pressed: bool,
) -> PointerInput {
    let held = mouse.pressed(MouseButton::Left) && cursor.is_some();
    let scroll_steps = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };

    PointerInput {
        position: cursor,
        pressed: held,
        just_pressed: held && !was_pressed,
        // Leaving the window ends a drag just like releasing the button.
        just_released: was_pressed && !held,
        motion: if held { motion.delta } else { Vec2::ZERO },
        scroll: scroll_steps,
        pinch: 0.0,
    }
}

fn sample_touches(touches: &Touches, was_pressed: bool) -> PointerInput {
    let active: Vec<_> = touches.iter().collect();

    match active.as_slice() {
        [touch] => PointerInput {
            position: Some(touch.position()),
            pressed: true,
            just_pressed: !was_pressed,
            just_released: false,
            motion: touch.delta(),
            scroll: 0.0,
            pinch: 0.0,
        },
        [a, b, ..] => {
            let now = a.position().distance(b.position());
            let before = a.previous_position().distance(b.previous_position());
            PointerInput {
                position: Some((a.position() + b.position()) / 2.0),
                pressed: false,
                just_pressed: false,
                just_released: was_pressed,
                motion: Vec2::ZERO,
                scroll: 0.0,
                pinch: now - before,
            }
        }
        [] => PointerInput {
            position: touches.iter_just_released().next().map(|t| t.position()),
            just_released: was_pressed,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swallow_keeps_release_and_position() {
        let mut input = PointerInput {
            position: Some(Vec2::new(10.0, 20.0)),
            pressed: true,
            just_pressed: true,
            just_released: true,
            motion: Vec2::ONE,
            scroll: 2.0,
            pinch: 1.0,
        };
        input.swallow();
        assert_eq!(input.position, Some(Vec2::new(10.0, 20.0)));
        assert!(input.just_released);
        assert!(!input.pressed);
        assert_eq!(input.scroll, 0.0);
        assert_eq!(input.motion, Vec2::ZERO);
    }
}
