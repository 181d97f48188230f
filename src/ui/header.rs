//! Title bar with the view mode toggles, and the detail footer tip.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons};
use crate::types::ViewMode;
use crate::view::{SetViewMode, ViewState};

/// Line under the title for each mode.
pub fn subtitle(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Detail => "Discover the planets of our solar system. Drag to rotate.",
        ViewMode::Overview => "Every planet on one strip. Click a planet to zoom in.",
    }
}

pub fn header_system(
    mut contexts: EguiContexts,
    view: Res<ViewState>,
    mut mode_requests: MessageWriter<SetViewMode>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(20, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("PlanetView").size(24.0).color(colors::TEXT));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    // Right to left: overview first so detail sits on the left.
                    for (mode, icon, tooltip) in [
                        (ViewMode::Overview, icons::OVERVIEW, "Overview"),
                        (ViewMode::Detail, icons::DETAIL_VIEW, "Detail view"),
                    ] {
                        if mode_button(ui, icon, tooltip, view.view_mode == mode) {
                            mode_requests.write(SetViewMode(mode));
                        }
                    }
                });
            });
            ui.label(egui::RichText::new(subtitle(view.view_mode)).color(colors::TEXT_DIM));
        });

    if view.is_detail() {
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::NONE
                    .fill(colors::PANEL_BG)
                    .inner_margin(egui::Margin::symmetric(20, 6)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} Tip: drag the planet to rotate it 360°",
                            icons::TIP
                        ))
                        .size(12.0)
                        .color(colors::TEXT_FAINT),
                    );
                });
            });
    }
}

/// Square icon button, highlighted when its mode is active. Returns clicked.
fn mode_button(ui: &mut egui::Ui, icon: &str, tooltip: &str, active: bool) -> bool {
    let (fill, text) = if active {
        (colors::BUTTON_ACTIVE, colors::TEXT)
    } else {
        (colors::BUTTON_IDLE, colors::TEXT_FAINT)
    };

    ui.add(
        egui::Button::new(egui::RichText::new(icon).size(20.0).color(text))
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8))
            .min_size(egui::vec2(36.0, 36.0)),
    )
    .on_hover_text(tooltip)
    .clicked()
}
