//! Single-planet detail view.
//!
//! Mounts one [`DetailRoot`] for the active planet while the detail view is
//! shown. Textured planets start behind a spinning wireframe placeholder and
//! get their parts once every texture request has settled; untextured planets
//! get a flat sphere immediately.

use std::time::Duration;

use bevy::prelude::*;

use crate::catalog::{Catalog, Planet};
use crate::render::bodies::{DETAIL_GEOMETRY, PlanetLook, SpinRates, compose_detail, spawn_planet_parts};
use crate::render::orbits::wireframe_sphere_segments;
use crate::textures::{
    PendingTextures, Resolution, TextureLoader, moon_texture_requests, report_failures, resolve,
    texture_requests, texture_status,
};
use crate::types::ViewSystemSet;
use crate::view::ViewState;

/// Plugin providing the detail view scene.
pub struct DetailPlugin;

impl Plugin for DetailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DetailSettings>()
            .init_resource::<DragHint>()
            .init_resource::<TextureLoader>()
            .add_systems(
                Update,
                mount_detail_view
                    .in_set(ViewSystemSet::Mount)
                    .run_if(resource_changed::<ViewState>),
            )
            .add_systems(
                Update,
                (
                    resolve_detail_textures,
                    draw_loading_placeholder.run_if(any_with_component::<LoadingPlaceholder>),
                    tick_drag_hint,
                )
                    .in_set(ViewSystemSet::Animate),
            );
    }
}

/// Tunables of the detail view.
#[derive(Resource, Clone, Debug)]
pub struct DetailSettings {
    pub spin: SpinRates,
    /// Placeholder rotation in radians per second.
    pub placeholder_spin: f32,
    /// How long the drag hint stays up after a planet change.
    pub hint_duration: Duration,
}

impl Default for DetailSettings {
    fn default() -> Self {
        Self {
            spin: SpinRates {
                surface: 0.1,
                clouds: 0.12,
                moon: 0.6,
            },
            placeholder_spin: 0.2,
            hint_duration: Duration::from_secs(3),
        }
    }
}

/// Root of the mounted planet model.
#[derive(Component, Debug)]
pub struct DetailRoot {
    pub planet_id: &'static str,
}

/// Wireframe stand-in drawn while textures load.
#[derive(Component, Debug)]
pub struct LoadingPlaceholder {
    pub color: Color,
}

/// Transient "drag to rotate" hint.
#[derive(Resource, Debug)]
pub struct DragHint {
    timer: Timer,
    visible: bool,
}

impl Default for DragHint {
    fn default() -> Self {
        Self::new(DetailSettings::default().hint_duration)
    }
}

impl DragHint {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
            visible: false,
        }
    }

    /// Show the hint and restart its countdown.
    pub fn trigger(&mut self) {
        self.timer.reset();
        self.visible = true;
    }

    /// Hide the hint and drop any pending countdown.
    pub fn cancel(&mut self) {
        self.timer.reset();
        self.visible = false;
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.visible && self.timer.tick(delta).just_finished() {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Which planet the detail view should show, if it is shown at all.
pub fn mount_target(view: &ViewState, catalog: &Catalog) -> Option<&'static str> {
    if !view.is_detail() {
        return None;
    }
    view.active_planet(catalog).map(|planet| planet.id)
}

/// Rotation applied to the whole planet group.
pub fn tilt_rotation(planet: &Planet) -> Quat {
    Quat::from_rotation_x(planet.axial_tilt)
}

#[allow(clippy::too_many_arguments)]
fn mount_detail_view(
    mut commands: Commands,
    view: Res<ViewState>,
    catalog: Res<Catalog>,
    settings: Res<DetailSettings>,
    asset_server: Res<AssetServer>,
    mut loader: ResMut<TextureLoader>,
    mut hint: ResMut<DragHint>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<(Entity, &DetailRoot)>,
) {
    let target = mount_target(&view, &catalog);
    let mounted = existing.iter().next().map(|(_, root)| root.planet_id);
    if mounted == target {
        return;
    }

    for (entity, _) in existing.iter() {
        commands.entity(entity).despawn();
    }

    let Some(planet) = target.and_then(|id| catalog.find(id)) else {
        hint.cancel();
        return;
    };

    hint.trigger();
    info!("Showing '{}' in detail", planet.name);

    let root = commands
        .spawn((
            DetailRoot {
                planet_id: planet.id,
            },
            Transform::from_rotation(tilt_rotation(planet)),
            Visibility::default(),
        ))
        .id();

    let mut requests = texture_requests(planet);
    requests.extend(moon_texture_requests(planet));

    if requests.is_empty() {
        debug!("'{}' declares no textures, rendering flat", planet.id);
        spawn_planet_parts(
            &mut commands,
            root,
            &PlanetLook::flat(planet),
            &DETAIL_GEOMETRY,
            &settings.spin,
            &mut meshes,
            &mut materials,
        );
        return;
    }

    let pending = loader.request_all(&asset_server, &requests);
    commands.entity(root).insert((
        pending,
        LoadingPlaceholder {
            color: planet.color(),
        },
    ));
}

/// Swap the placeholder for the real model once every request has settled.
fn resolve_detail_textures(
    mut commands: Commands,
    catalog: Res<Catalog>,
    settings: Res<DetailSettings>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &DetailRoot, &PendingTextures)>,
) {
    for (entity, root, textures) in pending.iter() {
        let Resolution::Settled { textures: resolved, failed } =
            resolve(&textures.requests, |handle| texture_status(&asset_server, handle))
        else {
            continue;
        };

        let Some(planet) = catalog.find(root.planet_id) else {
            continue;
        };
        report_failures(planet.id, &failed);

        let look = compose_detail(planet, Some(&resolved));
        spawn_planet_parts(
            &mut commands,
            entity,
            &look,
            &DETAIL_GEOMETRY,
            &settings.spin,
            &mut meshes,
            &mut materials,
        );
        commands
            .entity(entity)
            .remove::<(PendingTextures, LoadingPlaceholder)>();
    }
}

fn draw_loading_placeholder(
    mut gizmos: Gizmos,
    time: Res<Time>,
    settings: Res<DetailSettings>,
    query: Query<(&LoadingPlaceholder, &GlobalTransform)>,
) {
    let spin = Quat::from_rotation_y(time.elapsed_secs() * settings.placeholder_spin);
    for (placeholder, transform) in query.iter() {
        let rotation = transform.rotation() * spin;
        for (a, b) in wireframe_sphere_segments(
            transform.translation(),
            DETAIL_GEOMETRY.body_radius,
            rotation,
            7,
            12,
            32,
        ) {
            gizmos.line(a, b, placeholder.color);
        }
    }
}

fn tick_drag_hint(time: Res<Time>, mut hint: ResMut<DragHint>) {
    if hint.is_visible() {
        hint.tick(time.delta());
    }
}
