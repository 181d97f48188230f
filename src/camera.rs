//! Camera control for both views.
//!
//! The detail view uses a perspective camera orbiting the planet at the
//! origin: drag rotates, wheel or pinch dollies, panning is not possible.
//! The overview uses an orthographic projection at one world unit per
//! logical pixel; its pan and zoom live on the overview content instead.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::input::PointerInput;
use crate::types::{ViewMode, ViewSystemSet};
use crate::view::{ViewState, in_detail};

/// Closest camera distance from the planet center.
pub const MIN_DISTANCE: f32 = 3.0;

/// Farthest camera distance from the planet center.
pub const MAX_DISTANCE: f32 = 10.0;

/// Starting camera distance.
pub const DEFAULT_DISTANCE: f32 = 5.0;

/// Vertical field of view of the detail camera.
pub const FOV_DEGREES: f32 = 45.0;

/// Fraction of a full turn per viewport height of drag.
pub const ROTATE_SPEED: f32 = 0.5;

/// Dolly speed multiplier per wheel step.
pub const ZOOM_SPEED: f32 = 0.1;

/// Dolly speed multiplier per pixel of pinch.
pub const PINCH_SPEED: f32 = 0.005;

/// Pitch limit, just short of the poles.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Height of the overview camera above the scene plane.
const OVERVIEW_CAMERA_HEIGHT: f32 = 500.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical coordinates of the detail camera around the origin.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Rotation around the vertical axis in radians.
    pub yaw: f32,
    /// Elevation above the equatorial plane in radians.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a pointer drag given in pixels.
    pub fn apply_drag(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let per_pixel = TAU * ROTATE_SPEED / viewport_height;
        self.yaw -= delta.x * per_pixel;
        self.pitch = (self.pitch + delta.y * per_pixel).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Dolly by wheel steps; positive steps move closer.
    pub fn apply_scroll(&mut self, steps: f32) {
        self.dolly(1.0 - steps * ZOOM_SPEED);
    }

    /// Dolly by a pinch distance change; spreading fingers moves closer.
    pub fn apply_pinch(&mut self, delta_px: f32) {
        self.dolly(1.0 - delta_px * PINCH_SPEED);
    }

    fn dolly(&mut self, factor: f32) {
        self.distance = (self.distance * factor.max(0.01)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Camera transform looking at the origin.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        let position = rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                configure_camera_for_view
                    .in_set(ViewSystemSet::Mount)
                    .run_if(resource_changed::<ViewState>),
            )
            .add_systems(
                Update,
                (orbit_camera_input, sync_orbit_camera)
                    .chain()
                    .in_set(ViewSystemSet::Animate)
                    .run_if(in_detail),
            );
    }
}

fn detail_projection() -> Projection {
    Projection::from(PerspectiveProjection {
        fov: FOV_DEGREES.to_radians(),
        ..default()
    })
}

fn overview_projection() -> Projection {
    // default_2d maps one world unit to one logical pixel.
    Projection::from(OrthographicProjection::default_2d())
}

/// Spawn the main camera in detail configuration.
fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((Camera3d::default(), detail_projection(), orbit.transform(), MainCamera));
}

/// Switch projection when the view mode changes, and reset the orbit when
/// the planet changes.
fn configure_camera_for_view(
    view: Res<ViewState>,
    mut last: Local<Option<ViewState>>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<(&mut Projection, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut projection, mut transform)) = camera_query.single_mut() else {
        return;
    };

    let mode_changed = last.as_ref().is_none_or(|prev| prev.view_mode != view.view_mode);
    let planet_changed = last
        .as_ref()
        .is_none_or(|prev| prev.selected_planet_id != view.selected_planet_id);

    if planet_changed || mode_changed {
        *orbit = OrbitCamera::default();
    }

    if mode_changed {
        match view.view_mode {
            ViewMode::Detail => {
                *projection = detail_projection();
                *transform = orbit.transform();
            }
            ViewMode::Overview => {
                *projection = overview_projection();
                *transform = Transform::from_xyz(0.0, 0.0, OVERVIEW_CAMERA_HEIGHT)
                    .looking_at(Vec3::ZERO, Vec3::Y);
            }
        }
    }

    *last = Some(view.clone());
}

/// Drag to orbit, wheel or pinch to dolly.
fn orbit_camera_input(
    pointer: Res<PointerInput>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let height = window_query.single().map(|w| w.height()).unwrap_or(0.0);

    if pointer.pressed && pointer.motion != Vec2::ZERO {
        orbit.apply_drag(pointer.motion, height);
    }
    if pointer.scroll != 0.0 {
        orbit.apply_scroll(pointer.scroll);
    }
    if pointer.pinch != 0.0 {
        orbit.apply_pinch(pointer.pinch);
    }
}

fn sync_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_sits_on_positive_z() {
        let t = OrbitCamera::default().transform();
        assert_relative_eq!(t.translation.z, DEFAULT_DISTANCE, epsilon = 1e-5);
        assert_relative_eq!(t.translation.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn scroll_is_clamped_to_distance_range() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.apply_scroll(1.0);
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);
        for _ in 0..100 {
            orbit.apply_scroll(-1.0);
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn drag_never_flips_over_the_pole() {
        let mut orbit = OrbitCamera::default();
        orbit.apply_drag(Vec2::new(0.0, 10_000.0), 600.0);
        assert!(orbit.pitch < FRAC_PI_2);
        orbit.apply_drag(Vec2::new(0.0, -20_000.0), 600.0);
        assert!(orbit.pitch > -FRAC_PI_2);
    }

    #[test]
    fn drag_keeps_distance() {
        let mut orbit = OrbitCamera::default();
        orbit.apply_drag(Vec2::new(150.0, 40.0), 600.0);
        let t = orbit.transform();
        assert_relative_eq!(t.translation.length(), DEFAULT_DISTANCE, epsilon = 1e-4);
    }

    #[test]
    fn full_viewport_drag_is_half_a_turn() {
        let mut orbit = OrbitCamera::default();
        orbit.apply_drag(Vec2::new(600.0, 0.0), 600.0);
        assert_relative_eq!(orbit.yaw.abs(), std::f32::consts::PI, epsilon = 1e-5);
    }
}
