//! UI logic tests for the overview viewport, the info panel helpers and
//! the modal.
//!
//! Tests pure logic that the egui systems delegate to.

use bevy::math::Vec2;
use planetview::catalog::Catalog;
use planetview::overview::{
    MAX_SCALE, MIN_SCALE, MODAL_PANEL_WIDTH, MODAL_PREVIEW_SCALE, MODAL_SCALE, OverviewViewport,
    PreviewSlot, layout,
};
use planetview::ui::{FactAccordion, modal_planet, size_bar, subtitle};
use planetview::types::ViewMode;
use proptest::prelude::*;

const WINDOW: Vec2 = Vec2::new(1280.0, 720.0);

fn slot(id: &str) -> PreviewSlot {
    layout(Catalog::default().planets())
        .into_iter()
        .find(|s| s.planet_id == id)
        .unwrap()
}

// ============================================================================
// OverviewViewport zoom
// ============================================================================

#[test]
fn test_fifty_wheel_ups_saturate_at_max() {
    let mut vp = OverviewViewport::default();
    for _ in 0..50 {
        vp.zoom_wheel(1.0);
    }
    assert_eq!(vp.scale, MAX_SCALE);
    assert_eq!(vp.zoom_percent(), 300);
}

#[test]
fn test_wheel_down_saturates_at_min() {
    let mut vp = OverviewViewport::default();
    for _ in 0..50 {
        vp.zoom_wheel(-1.0);
    }
    assert_eq!(vp.scale, MIN_SCALE);
}

#[test]
fn test_zoom_buttons_step_by_twenty_percent() {
    let mut vp = OverviewViewport::default();
    vp.zoom_in();
    assert_eq!(vp.zoom_percent(), 120);
    vp.zoom_out();
    vp.zoom_out();
    assert_eq!(vp.zoom_percent(), 80);
}

#[derive(Clone, Debug)]
enum ZoomOp {
    Wheel(f32),
    In,
    Out,
    Toggle(usize),
    Close,
}

fn zoom_op() -> impl Strategy<Value = ZoomOp> {
    prop_oneof![
        (-3.0f32..3.0).prop_map(ZoomOp::Wheel),
        Just(ZoomOp::In),
        Just(ZoomOp::Out),
        (0usize..10).prop_map(ZoomOp::Toggle),
        Just(ZoomOp::Close),
    ]
}

proptest! {
    #[test]
    fn test_scale_stays_clamped(ops in prop::collection::vec(zoom_op(), 0..64)) {
        let slots = layout(Catalog::default().planets());
        let mut vp = OverviewViewport::default();
        for op in ops {
            match op {
                ZoomOp::Wheel(steps) => vp.zoom_wheel(steps),
                ZoomOp::In => vp.zoom_in(),
                ZoomOp::Out => vp.zoom_out(),
                ZoomOp::Toggle(i) => vp.toggle_modal(&slots[i], WINDOW),
                ZoomOp::Close => vp.close_modal(),
            }
            prop_assert!((MIN_SCALE..=MAX_SCALE).contains(&vp.scale));
        }
    }

    #[test]
    fn test_drag_is_pointer_delta(
        start in (-500.0f32..500.0, -500.0f32..500.0),
        end in (-500.0f32..500.0, -500.0f32..500.0),
    ) {
        let mut vp = OverviewViewport::default();
        let start = Vec2::new(start.0, start.1);
        let end = Vec2::new(end.0, end.1);
        vp.begin_drag(start);
        vp.drag_to(end);
        prop_assert!((vp.position - (end - start)).length() < 1e-3);
    }
}

// ============================================================================
// Modal
// ============================================================================

#[test]
fn test_toggling_same_modal_twice_closes_it() {
    let mut vp = OverviewViewport::default();
    vp.toggle_modal(&slot("jupiter"), WINDOW);
    assert_eq!(vp.modal, Some("jupiter"));
    assert_eq!(vp.scale, MODAL_SCALE);

    vp.toggle_modal(&slot("jupiter"), WINDOW);
    assert_eq!(vp.modal, None);
    assert_eq!(vp.scale, 1.0);
    assert_eq!(vp.position, Vec2::ZERO);
}

#[test]
fn test_open_modal_keeps_enlarged_preview_beside_the_window() {
    for window in [WINDOW, Vec2::new(1920.0, 1080.0), Vec2::new(1024.0, 768.0)] {
        for slot in layout(Catalog::default().planets()) {
            let mut vp = OverviewViewport::default();
            vp.toggle_modal(&slot, window);

            let center = vp.content_to_screen(Vec2::new(slot.center_x(), 0.0), window);
            let radius = slot.radius() * MODAL_SCALE * MODAL_PREVIEW_SCALE;
            assert!(center.x - radius >= 0.0, "{} clipped left", slot.planet_id);
            assert!(
                center.x + radius <= window.x - MODAL_PANEL_WIDTH,
                "{} under the modal",
                slot.planet_id
            );
            assert!(center.y - radius >= 0.0 && center.y + radius <= window.y);
        }
    }
}

#[test]
fn test_reset_restores_everything_at_once() {
    let mut vp = OverviewViewport::default();
    vp.toggle_modal(&slot("mars"), WINDOW);
    vp.begin_drag(Vec2::new(10.0, 10.0));
    vp.drag_to(Vec2::new(60.0, -20.0));
    vp.reset();
    assert_eq!(vp, OverviewViewport::default());
}

#[test]
fn test_modal_planet_lookup() {
    let catalog = Catalog::default();
    let mut vp = OverviewViewport::default();
    assert!(modal_planet(&vp, &catalog).is_none());
    vp.toggle_modal(&slot("uranus"), WINDOW);
    assert_eq!(modal_planet(&vp, &catalog).map(|p| p.name), Some("Uranus"));
}

// ============================================================================
// Info panel
// ============================================================================

#[test]
fn test_mars_size_bar() {
    let catalog = Catalog::default();
    let mars = catalog.find("mars").unwrap();
    let (fraction, label) = size_bar(mars.size);
    assert!((fraction - 0.2).abs() < 1e-6);
    assert_eq!(label, "0.5×");
}

#[test]
fn test_only_one_fact_expanded() {
    let mut accordion = FactAccordion::default();
    accordion.toggle("earth", "distance");
    accordion.toggle("earth", "diameter");
    assert!(!accordion.is_expanded("earth", "distance"));
    assert!(accordion.is_expanded("earth", "diameter"));
}

#[test]
fn test_subtitles_differ_per_mode() {
    assert_ne!(subtitle(ViewMode::Detail), subtitle(ViewMode::Overview));
}
