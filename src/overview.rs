//! Whole-system overview: the sun and every planet on one horizontal strip.
//!
//! Layout is computed in content pixels (x to the right from the sun's left
//! edge, y up from the strip's center line). The orthographic camera maps one
//! world unit to one logical pixel, so the content root only needs the pan
//! offset and zoom of [`OverviewViewport`] to land on screen.

use std::f32::consts::PI;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::catalog::{Catalog, Planet};
use crate::input::PointerInput;
use crate::render::bodies::{
    PREVIEW_GEOMETRY, PlanetSurface, SpinRates, Surface, compose_preview, spawn_planet_parts,
    surface_material,
};
use crate::render::labels::SceneLabel;
use crate::render::orbits::{GuideLineSettings, dashed_segments};
use crate::textures::{
    PendingTextures, Resolution, TextureLoader, TextureRole, report_failures, resolve,
    texture_status,
};
use crate::types::ViewSystemSet;
use crate::view::{ViewState, in_overview};

/// Sun disc diameter.
pub const SUN_DIAMETER: f32 = 96.0;

/// Gap between the sun and the first planet.
pub const SUN_GAP: f32 = 48.0;

/// Distance from the window's left edge to the sun at zero pan.
pub const CONTENT_INSET: f32 = 128.0;

/// Cumulative left offsets of the first nine planets. Later planets use
/// `index * 100`.
const SPACING: [f32; 9] = [0.0, 80.0, 140.0, 200.0, 280.0, 400.0, 520.0, 640.0, 780.0];

pub const MIN_PREVIEW_DIAMETER: f32 = 20.0;
pub const PREVIEW_SIZE_FACTOR: f32 = 45.0;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;
pub const DEFAULT_SCALE: f32 = 1.0;
/// Zoom applied when a planet modal opens.
pub const MODAL_SCALE: f32 = 2.0;
pub const WHEEL_ZOOM_IN: f32 = 1.1;
pub const WHEEL_ZOOM_OUT: f32 = 0.9;
pub const BUTTON_ZOOM_STEP: f32 = 0.2;
/// Zoom change per pixel of pinch.
const PINCH_ZOOM: f32 = 0.005;

/// Pointer travel under which a press and release count as a click.
pub const CLICK_SLOP: f32 = 4.0;

pub const HOVER_SCALE: f32 = 1.1;
/// Preview enlargement while its modal is open.
pub const MODAL_PREVIEW_SCALE: f32 = 1.5;
/// Screen width on the right covered by the modal window and its margin.
pub const MODAL_PANEL_WIDTH: f32 = 460.0;

const PREVIEW_SPIN: f32 = 0.2;

/// Forward lean of the previews so ring planes are not seen edge-on.
const PREVIEW_VIEW_TILT: f32 = PI * 0.12;

/// Space between a disc and its label.
const LABEL_GAP: f32 = 8.0;

/// Plugin providing the overview scene and its viewport state.
pub struct OverviewPlugin;

impl Plugin for OverviewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverviewViewport>()
            .init_resource::<PreviewHover>()
            .init_resource::<TextureLoader>()
            .add_systems(
                Update,
                mount_overview
                    .in_set(ViewSystemSet::Mount)
                    .run_if(resource_changed::<ViewState>),
            )
            .add_systems(
                Update,
                (
                    overview_pointer_input,
                    (apply_viewport_transform, apply_preview_scale),
                    resolve_preview_textures,
                    draw_orbit_guides,
                )
                    .chain()
                    .in_set(ViewSystemSet::Animate)
                    .run_if(in_overview),
            );
    }
}

/// Cumulative left offset of the planet at `index`.
pub fn spacing(index: usize) -> f32 {
    SPACING
        .get(index)
        .copied()
        .unwrap_or(index as f32 * 100.0)
}

/// Empty space to the left of the planet at `index`.
pub fn left_margin(index: usize) -> f32 {
    if index == 0 {
        0.0
    } else {
        spacing(index) - spacing(index - 1)
    }
}

pub fn preview_diameter(size: f32) -> f32 {
    (size * PREVIEW_SIZE_FACTOR).max(MIN_PREVIEW_DIAMETER)
}

/// Placement of one planet preview on the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewSlot {
    pub planet_id: &'static str,
    pub index: usize,
    /// Left edge in content pixels.
    pub left: f32,
    pub diameter: f32,
}

impl PreviewSlot {
    pub fn center_x(&self) -> f32 {
        self.left + self.diameter / 2.0
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}

/// Lay planets out left to right after the sun.
pub fn layout(planets: &[Planet]) -> Vec<PreviewSlot> {
    let mut cursor = SUN_DIAMETER + SUN_GAP;
    planets
        .iter()
        .enumerate()
        .map(|(index, planet)| {
            cursor += left_margin(index);
            let slot = PreviewSlot {
                planet_id: planet.id,
                index,
                left: cursor,
                diameter: preview_diameter(planet.size),
            };
            cursor += slot.diameter;
            slot
        })
        .collect()
}

/// Pan, zoom, drag and modal state of the overview.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OverviewViewport {
    pub scale: f32,
    /// Pan offset in screen pixels.
    pub position: Vec2,
    pub is_dragging: bool,
    /// Pointer position minus pan offset at drag start.
    pub drag_origin: Vec2,
    /// Planet whose modal is open.
    pub modal: Option<&'static str>,
}

impl Default for OverviewViewport {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            position: Vec2::ZERO,
            is_dragging: false,
            drag_origin: Vec2::ZERO,
            modal: None,
        }
    }
}

impl OverviewViewport {
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// One wheel notch per call; positive steps zoom in.
    pub fn zoom_wheel(&mut self, steps: f32) {
        if steps > 0.0 {
            self.set_scale(self.scale * WHEEL_ZOOM_IN);
        } else if steps < 0.0 {
            self.set_scale(self.scale * WHEEL_ZOOM_OUT);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + BUTTON_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - BUTTON_ZOOM_STEP);
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.is_dragging = true;
        self.drag_origin = pointer - self.position;
    }

    pub fn drag_to(&mut self, pointer: Vec2) {
        if self.is_dragging {
            self.position = pointer - self.drag_origin;
        }
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Open the modal for `slot`, or close it if it is already open.
    ///
    /// Opening zooms in and pans so the enlarged preview sits at
    /// [`modal_anchor`], clear of the modal window.
    pub fn toggle_modal(&mut self, slot: &PreviewSlot, window_size: Vec2) {
        if self.modal == Some(slot.planet_id) {
            self.close_modal();
            return;
        }
        self.modal = Some(slot.planet_id);
        self.scale = MODAL_SCALE;
        let anchor = modal_anchor(window_size);
        self.position = Vec2::new(
            anchor.x - CONTENT_INSET - slot.center_x() * self.scale,
            anchor.y - window_size.y / 2.0,
        );
    }

    /// Close any open modal, restoring default zoom and pan.
    pub fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            self.scale = DEFAULT_SCALE;
            self.position = Vec2::ZERO;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Content point under a window pixel.
    pub fn screen_to_content(&self, pointer: Vec2, window_size: Vec2) -> Vec2 {
        Vec2::new(
            (pointer.x - CONTENT_INSET - self.position.x) / self.scale,
            (window_size.y / 2.0 + self.position.y - pointer.y) / self.scale,
        )
    }

    /// Window pixel of a content point.
    pub fn content_to_screen(&self, point: Vec2, window_size: Vec2) -> Vec2 {
        Vec2::new(
            CONTENT_INSET + self.position.x + point.x * self.scale,
            window_size.y / 2.0 + self.position.y - point.y * self.scale,
        )
    }

    /// World point of a content point.
    pub fn content_to_world(&self, point: Vec2, window_width: f32) -> Vec3 {
        let origin = self.root_translation(window_width);
        origin + (point * self.scale).extend(0.0)
    }

    fn root_translation(&self, window_width: f32) -> Vec3 {
        Vec3::new(
            -window_width / 2.0 + CONTENT_INSET + self.position.x,
            -self.position.y,
            0.0,
        )
    }

    /// Transform of the content root.
    pub fn root_transform(&self, window_width: f32) -> Transform {
        Transform::from_translation(self.root_translation(window_width))
            .with_scale(Vec3::splat(self.scale))
    }
}

/// Window point the open modal's preview is centered on: the middle of the
/// area left of the modal window.
pub fn modal_anchor(window_size: Vec2) -> Vec2 {
    let free_width = (window_size.x - MODAL_PANEL_WIDTH).max(window_size.x / 2.0);
    Vec2::new(free_width / 2.0, window_size.y / 2.0)
}

/// Planet currently under the pointer.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PreviewHover(pub Option<&'static str>);

/// Display scale of a preview relative to its layout diameter.
pub fn preview_scale(viewport: &OverviewViewport, hover: &PreviewHover, id: &str) -> f32 {
    if viewport.modal == Some(id) {
        MODAL_PREVIEW_SCALE
    } else if hover.0 == Some(id) {
        HOVER_SCALE
    } else {
        1.0
    }
}

/// Planet whose disc contains `point` (content pixels).
pub fn hit_test(
    slots: &[PreviewSlot],
    point: Vec2,
    viewport: &OverviewViewport,
    hover: &PreviewHover,
) -> Option<&'static str> {
    slots
        .iter()
        .find(|slot| {
            let radius = slot.radius() * preview_scale(viewport, hover, slot.planet_id);
            point.distance(Vec2::new(slot.center_x(), 0.0)) <= radius
        })
        .map(|slot| slot.planet_id)
}

/// Content root of the overview scene.
#[derive(Component)]
pub struct OverviewRoot;

/// Scaled, tilted planet model inside a slot.
#[derive(Component, Debug)]
pub struct PreviewModel {
    pub planet_id: &'static str,
    pub radius: f32,
}

#[derive(Component)]
pub struct SunDisc;

#[allow(clippy::too_many_arguments)]
fn mount_overview(
    mut commands: Commands,
    view: Res<ViewState>,
    catalog: Res<Catalog>,
    asset_server: Res<AssetServer>,
    mut loader: ResMut<TextureLoader>,
    mut viewport: ResMut<OverviewViewport>,
    mut hover: ResMut<PreviewHover>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<OverviewRoot>>,
) {
    let mounted = !existing.is_empty();
    if view.is_detail() {
        for entity in existing.iter() {
            commands.entity(entity).despawn();
        }
        return;
    }
    if mounted {
        return;
    }

    viewport.reset();
    hover.0 = None;

    let root = commands
        .spawn((OverviewRoot, Transform::default(), Visibility::default()))
        .id();

    let sun_radius = SUN_DIAMETER / 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(sun_radius).mesh().uv(48, 48))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.7, 0.2),
            emissive: LinearRgba::rgb(1.0, 0.55, 0.1) * 2.0,
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(sun_radius, 0.0, 0.0),
        SunDisc,
        ChildOf(root),
    ));
    commands.spawn((
        Transform::from_xyz(sun_radius, -(sun_radius + LABEL_GAP), 0.0),
        Visibility::default(),
        SceneLabel::new("Sun"),
        ChildOf(root),
    ));

    let rates = SpinRates {
        surface: PREVIEW_SPIN,
        clouds: PREVIEW_SPIN,
        moon: 0.0,
    };

    for (slot, planet) in layout(catalog.planets()).iter().zip(catalog.planets()) {
        let radius = slot.radius();
        let tilt = Quat::from_rotation_x(PREVIEW_VIEW_TILT) * Quat::from_rotation_x(planet.axial_tilt);

        let model = commands
            .spawn((
                PreviewModel {
                    planet_id: planet.id,
                    radius,
                },
                Transform::from_xyz(slot.center_x(), 0.0, 0.0)
                    .with_rotation(tilt)
                    .with_scale(Vec3::splat(radius)),
                Visibility::default(),
                ChildOf(root),
            ))
            .id();

        spawn_planet_parts(
            &mut commands,
            model,
            &compose_preview(planet, None),
            &PREVIEW_GEOMETRY,
            &rates,
            &mut meshes,
            &mut materials,
        );

        if let Some(path) = planet.textures.main {
            commands.entity(model).insert(PendingTextures {
                requests: vec![(TextureRole::Main, loader.request(&asset_server, path))],
            });
        }

        commands.spawn((
            Transform::from_xyz(slot.center_x(), -(radius + LABEL_GAP), 0.0),
            Visibility::default(),
            SceneLabel::new(planet.name),
            ChildOf(root),
        ));
    }

    info!("Overview mounted with {} planets", catalog.len());
}

/// Wheel and pinch zoom, drag to pan, click to toggle modals.
fn overview_pointer_input(
    pointer: Res<PointerInput>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    catalog: Res<Catalog>,
    mut viewport: ResMut<OverviewViewport>,
    mut hover: ResMut<PreviewHover>,
    mut press: Local<Option<Vec2>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let window_size = window.size();

    if pointer.scroll != 0.0 {
        viewport.zoom_wheel(pointer.scroll);
    }
    if pointer.pinch != 0.0 {
        let scale = viewport.scale * (1.0 + pointer.pinch * PINCH_ZOOM);
        viewport.set_scale(scale);
    }

    if pointer.just_pressed
        && let Some(position) = pointer.position
    {
        viewport.begin_drag(position);
        *press = Some(position);
    }

    if pointer.pressed
        && viewport.is_dragging
        && let Some(position) = pointer.position
    {
        viewport.drag_to(position);
    }

    let slots = layout(catalog.planets());

    if pointer.just_released {
        viewport.end_drag();
        if let (Some(start), Some(end)) = (press.take(), pointer.position)
            && start.distance(end) <= CLICK_SLOP
        {
            let point = viewport.screen_to_content(end, window_size);
            let hit = hit_test(&slots, point, &viewport, &hover)
                .and_then(|id| slots.iter().find(|slot| slot.planet_id == id));
            match hit {
                Some(slot) => viewport.toggle_modal(slot, window_size),
                None => viewport.close_modal(),
            }
        }
    }

    let hovered = match pointer.position {
        Some(position) if !pointer.pressed => {
            let point = viewport.screen_to_content(position, window_size);
            hit_test(&slots, point, &viewport, &PreviewHover::default())
        }
        _ => None,
    };
    if hover.0 != hovered {
        hover.0 = hovered;
    }
}

fn apply_viewport_transform(
    viewport: Res<OverviewViewport>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut root_query: Query<&mut Transform, With<OverviewRoot>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    for mut transform in root_query.iter_mut() {
        *transform = viewport.root_transform(window.width());
    }
}

fn apply_preview_scale(
    viewport: Res<OverviewViewport>,
    hover: Res<PreviewHover>,
    mut models: Query<(&PreviewModel, &mut Transform)>,
) {
    if !viewport.is_changed() && !hover.is_changed() {
        return;
    }
    for (model, mut transform) in models.iter_mut() {
        let scale = model.radius * preview_scale(&viewport, &hover, model.planet_id);
        transform.scale = Vec3::splat(scale);
    }
}

/// Swap each preview's flat surface for its main map once it loads.
fn resolve_preview_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    models: Query<(Entity, &PreviewModel, &PendingTextures)>,
    surfaces: Query<(Entity, &ChildOf), With<PlanetSurface>>,
) {
    for (entity, model, pending) in models.iter() {
        let Resolution::Settled { textures, failed } =
            resolve(&pending.requests, |handle| texture_status(&asset_server, handle))
        else {
            continue;
        };
        commands.entity(entity).remove::<PendingTextures>();
        report_failures(model.planet_id, &failed);

        let Some(map) = textures.main else {
            continue;
        };
        let material = materials.add(surface_material(&Surface::Textured {
            map,
            bump: None,
        }));
        for (surface, child_of) in surfaces.iter() {
            if child_of.parent() == entity {
                commands.entity(surface).insert(MeshMaterial3d(material.clone()));
            }
        }
    }
}

/// Thin lines through the gaps between neighbouring planets.
fn draw_orbit_guides(
    mut gizmos: Gizmos,
    settings: Res<GuideLineSettings>,
    catalog: Res<Catalog>,
    viewport: Res<OverviewViewport>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    if !settings.visible {
        return;
    }
    let Ok(window) = window_query.single() else {
        return;
    };
    let width = window.width();
    let color = settings.color();

    for slot in layout(catalog.planets()) {
        let margin = left_margin(slot.index);
        if margin <= 0.0 {
            continue;
        }
        let start = viewport.content_to_world(Vec2::new(slot.left - margin, 0.0), width);
        let end = viewport.content_to_world(Vec2::new(slot.left, 0.0), width);
        for (a, b) in dashed_segments(start, end, settings.dash_on, settings.dash_off) {
            gizmos.line(a, b, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn spacing_uses_table_then_linear_policy() {
        assert_eq!(spacing(0), 0.0);
        assert_eq!(spacing(8), 780.0);
        assert_eq!(spacing(9), 900.0);
        assert_eq!(spacing(12), 1200.0);
    }

    #[test]
    fn tiny_planets_get_minimum_diameter() {
        assert_eq!(preview_diameter(0.1), MIN_PREVIEW_DIAMETER);
        assert_relative_eq!(preview_diameter(2.5), 112.5);
    }

    #[test]
    fn layout_is_sun_gap_spacing_and_previous_widths() {
        let catalog = Catalog::default();
        let slots = layout(catalog.planets());
        assert_eq!(slots.len(), catalog.len());
        assert_eq!(slots[0].left, SUN_DIAMETER + SUN_GAP);

        let widths: f32 = slots[..3].iter().map(|s| s.diameter).sum();
        assert_relative_eq!(slots[3].left, SUN_DIAMETER + SUN_GAP + spacing(3) + widths);
    }

    #[test]
    fn drag_follows_pointer_without_snapping() {
        let mut vp = OverviewViewport::default();
        vp.begin_drag(Vec2::new(100.0, 100.0));
        vp.drag_to(Vec2::new(130.0, 90.0));
        assert_eq!(vp.position, Vec2::new(30.0, -10.0));
        vp.end_drag();
        vp.drag_to(Vec2::new(500.0, 500.0));
        assert_eq!(vp.position, Vec2::new(30.0, -10.0));

        // A second drag continues from the current offset.
        vp.begin_drag(Vec2::new(0.0, 0.0));
        vp.drag_to(Vec2::new(5.0, 5.0));
        assert_eq!(vp.position, Vec2::new(35.0, -5.0));
    }

    fn slot(id: &str) -> PreviewSlot {
        let catalog = Catalog::default();
        layout(catalog.planets())
            .into_iter()
            .find(|s| s.planet_id == id)
            .unwrap()
    }

    #[test]
    fn switching_modal_keeps_zoom_and_recenters() {
        let window = Vec2::new(1280.0, 720.0);
        let mut vp = OverviewViewport::default();
        vp.toggle_modal(&slot("mars"), window);
        vp.toggle_modal(&slot("neptune"), window);
        assert_eq!(vp.modal, Some("neptune"));
        assert_eq!(vp.scale, MODAL_SCALE);

        let neptune = slot("neptune");
        let center = vp.content_to_screen(Vec2::new(neptune.center_x(), 0.0), window);
        assert_relative_eq!(center.x, modal_anchor(window).x, epsilon = 1e-3);
        assert_relative_eq!(center.y, window.y / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn narrow_window_keeps_anchor_on_screen() {
        let anchor = modal_anchor(Vec2::new(600.0, 400.0));
        assert_eq!(anchor, Vec2::new(150.0, 200.0));
    }

    #[test]
    fn closing_without_modal_keeps_viewport() {
        let mut vp = OverviewViewport::default();
        vp.set_scale(1.7);
        vp.position = Vec2::new(12.0, 3.0);
        vp.close_modal();
        assert_eq!(vp.scale, 1.7);
        assert_eq!(vp.position, Vec2::new(12.0, 3.0));
    }

    #[test]
    fn screen_and_content_agree() {
        let vp = OverviewViewport {
            scale: 2.0,
            position: Vec2::new(40.0, -20.0),
            ..default()
        };
        let window = Vec2::new(1280.0, 720.0);
        let content = Vec2::new(200.0, 10.0);
        let world = vp.content_to_world(content, window.x);
        // Orthographic camera centered on the origin, y up.
        let screen = Vec2::new(world.x + window.x / 2.0, window.y / 2.0 - world.y);
        assert_relative_eq!(vp.content_to_screen(content, window).x, screen.x, epsilon = 1e-3);
        let back = vp.screen_to_content(screen, window);
        assert_relative_eq!(back.x, content.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, content.y, epsilon = 1e-3);
    }

    #[test]
    fn hit_test_finds_planet_under_pointer() {
        let catalog = Catalog::default();
        let slots = layout(catalog.planets());
        let vp = OverviewViewport::default();
        let hover = PreviewHover::default();
        let mars = slots.iter().find(|s| s.planet_id == "mars").unwrap();

        let center = Vec2::new(mars.center_x(), 0.0);
        assert_eq!(hit_test(&slots, center, &vp, &hover), Some("mars"));
        assert_eq!(hit_test(&slots, Vec2::new(SUN_DIAMETER / 2.0, 0.0), &vp, &hover), None);
        assert_eq!(hit_test(&slots, center + Vec2::new(0.0, 200.0), &vp, &hover), None);
    }

    #[test]
    fn open_modal_enlarges_its_preview() {
        let mut vp = OverviewViewport::default();
        vp.toggle_modal(&slot("earth"), Vec2::new(1280.0, 720.0));
        let hover = PreviewHover(Some("mars"));
        assert_eq!(preview_scale(&vp, &hover, "earth"), MODAL_PREVIEW_SCALE);
        assert_eq!(preview_scale(&vp, &hover, "mars"), HOVER_SCALE);
        assert_eq!(preview_scale(&vp, &hover, "venus"), 1.0);
    }
}
