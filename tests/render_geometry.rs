//! Geometry and composition tests for both scenes.

use approx::assert_relative_eq;
use bevy::prelude::*;
use planetview::catalog::Catalog;
use planetview::overview::{
    SUN_DIAMETER, SUN_GAP, hit_test, layout, left_margin, preview_diameter, spacing,
    OverviewViewport, PreviewHover,
};
use planetview::render::bodies::{Surface, compose_detail, compose_preview};
use planetview::render::orbits::wireframe_sphere_segments;
use planetview::textures::{ResolvedTextures, moon_texture_requests, texture_requests};

#[test]
fn test_spacing_endpoints() {
    assert_eq!(spacing(0), 0.0);
    assert_eq!(spacing(9), 900.0);
    assert_eq!(left_margin(0), 0.0);
    assert_eq!(left_margin(9), 120.0);
}

#[test]
fn test_layout_is_monotonic_and_non_overlapping() {
    let catalog = Catalog::default();
    let slots = layout(catalog.planets());
    assert_eq!(slots[0].left, SUN_DIAMETER + SUN_GAP);
    for pair in slots.windows(2) {
        assert!(pair[1].left >= pair[0].left + pair[0].diameter);
    }
}

#[test]
fn test_preview_diameters() {
    assert_relative_eq!(preview_diameter(1.0), 45.0);
    assert_eq!(preview_diameter(0.2), 20.0);
}

#[test]
fn test_pluto_is_flat_and_requests_nothing() {
    let catalog = Catalog::default();
    let pluto = catalog.find("pluto").unwrap();

    assert!(texture_requests(pluto).is_empty());
    assert!(moon_texture_requests(pluto).is_empty());
    assert_eq!(pluto.facts.len(), 3);
    assert!(pluto.moons.is_empty());

    let look = compose_detail::<Handle<Image>>(pluto, None);
    assert_eq!(look.surface, Surface::Flat(pluto.color()));
    assert!(look.moons.is_empty() && look.ring.is_none() && look.clouds.is_none());

    assert!(compose_preview::<Handle<Image>>(pluto, None).is_flat());
}

#[test]
fn test_clouds_need_main_texture() {
    let catalog = Catalog::default();
    let earth = catalog.find("earth").unwrap();
    let resolved = ResolvedTextures {
        main: None,
        clouds: Some(1u32),
        ..Default::default()
    };
    let look = compose_detail(earth, Some(&resolved));
    assert!(look.is_flat());
    assert!(look.clouds.is_none());
}

#[test]
fn test_hit_test_respects_pan_and_zoom() {
    let catalog = Catalog::default();
    let slots = layout(catalog.planets());
    let earth = slots.iter().find(|s| s.planet_id == "earth").unwrap();

    let vp = OverviewViewport {
        scale: 2.0,
        position: Vec2::new(-100.0, 30.0),
        ..Default::default()
    };
    let window = Vec2::new(1280.0, 720.0);
    let world = vp.content_to_world(Vec2::new(earth.center_x(), 0.0), window.x);
    let screen = Vec2::new(world.x + window.x / 2.0, window.y / 2.0 - world.y);

    let content = vp.screen_to_content(screen, window);
    assert_eq!(hit_test(&slots, content, &vp, &PreviewHover::default()), Some("earth"));
}

#[test]
fn test_placeholder_wireframe_radius() {
    let segs = wireframe_sphere_segments(Vec3::ZERO, 1.5, Quat::IDENTITY, 5, 6, 12);
    assert!(!segs.is_empty());
    assert!(segs.iter().all(|(a, _)| (a.length() - 1.5).abs() < 1e-4));
}
