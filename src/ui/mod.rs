//! UI module providing the egui panels and overlays.
//!
//! Panels are drawn in a fixed order each frame: header on top, then the
//! selector bar and info panel of the detail view, then floating overlays.
//! Views never talk to each other; buttons write `SelectPlanet` and
//! `SetViewMode` messages.

mod detail_overlay;
mod header;
pub mod icons;
pub mod info_panel;
mod overview_panel;
mod selector_bar;

use bevy::prelude::*;
use bevy_egui::{EguiPrimaryContextPass, egui};

use crate::catalog::Planet;
use crate::types::ViewSystemSet;
use crate::view::{ViewState, in_detail, in_overview};

pub use header::subtitle;
pub use info_panel::{FactAccordion, fact_icon, size_bar};
pub use overview_panel::modal_planet;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<FactAccordion>()
            .add_systems(
                Update,
                info_panel::collapse_facts_on_selection
                    .in_set(ViewSystemSet::Mount)
                    .run_if(resource_changed::<ViewState>),
            )
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    header::header_system,
                    selector_bar::selector_bar_system.run_if(in_detail),
                    info_panel::info_panel_system.run_if(in_detail),
                    detail_overlay::detail_overlay_system.run_if(in_detail),
                    overview_panel::overview_controls_system.run_if(in_overview),
                    overview_panel::overview_modal_system.run_if(in_overview),
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(icons::fonts_ready),
            );
    }
}

/// Shared palette.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(17, 20, 38, 235);
    pub const CARD_BG: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 13);
    pub const CARD_BORDER: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
    pub const OVERLAY_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 102);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgba_premultiplied(51, 51, 51, 51);
    pub const BUTTON_IDLE: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 13);
    pub const TEXT: Color32 = Color32::from_rgb(235, 235, 240);
    pub const TEXT_DIM: Color32 = Color32::from_rgb(170, 170, 185);
    pub const TEXT_FAINT: Color32 = Color32::from_rgb(125, 125, 140);
}

/// Planet fill color for egui.
pub(crate) fn planet_color32(planet: &Planet) -> egui::Color32 {
    let [r, g, b] = planet.color;
    egui::Color32::from_rgb(r, g, b)
}

/// Translucent rounded card used for facts and floating panels.
pub(crate) fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(10))
}

/// Frame of the floating overlays.
pub(crate) fn overlay_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::OVERLAY_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
}

/// Small filled circle in the planet color.
pub(crate) fn color_dot(ui: &mut egui::Ui, color: egui::Color32, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), diameter / 2.0, color);
}
