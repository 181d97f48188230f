//! Phosphor icon definitions for the UI.
//!
//! Icons are glyphs of the Phosphor icon font, registered with egui once by
//! [`setup_fonts`].

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Register the Phosphor font with egui.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Run condition for systems that draw icons.
pub fn fonts_ready(initialized: Res<FontsInitialized>) -> bool {
    initialized.0
}

// Browse all icons at https://phosphoricons.com/

// View modes
pub const DETAIL_VIEW: &str = egui_phosphor::regular::ARROWS_OUT;
pub const OVERVIEW: &str = egui_phosphor::regular::SQUARES_FOUR;

// Fact icons
pub const DISTANCE: &str = egui_phosphor::regular::RULER;
pub const DIAMETER: &str = egui_phosphor::regular::CIRCLE_DASHED;
pub const HIGHLIGHT: &str = egui_phosphor::regular::SPARKLE;
/// Toggle for a fact explanation
pub const MORE_INFO: &str = egui_phosphor::regular::QUESTION;

// Celestial bodies
pub const MOON: &str = egui_phosphor::regular::MOON;

// Controls
pub const CLOSE: &str = egui_phosphor::regular::X;
pub const ZOOM_IN: &str = egui_phosphor::regular::PLUS;
pub const ZOOM_OUT: &str = egui_phosphor::regular::MINUS;
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
pub const MAGNIFY: &str = egui_phosphor::regular::MAGNIFYING_GLASS_PLUS;

// Hints
pub const DRAG: &str = egui_phosphor::regular::HAND_GRABBING;
pub const ROTATE: &str = egui_phosphor::regular::ARROWS_LEFT_RIGHT;
pub const SCROLL: &str = egui_phosphor::regular::MOUSE;
pub const CLICK: &str = egui_phosphor::regular::CURSOR_CLICK;
pub const TIP: &str = egui_phosphor::regular::LIGHTBULB;
