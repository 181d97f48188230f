//! Overview controls, instructions and the planet modal.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{card_frame, color_dot, colors, icons, overlay_frame, planet_color32};
use crate::catalog::{Catalog, Planet};
use crate::overview::{MODAL_PANEL_WIDTH, OverviewViewport};
use crate::types::SelectionOrigin;
use crate::view::SelectPlanet;

/// Planet whose modal is open, if it exists in the catalog.
pub fn modal_planet<'a>(viewport: &OverviewViewport, catalog: &'a Catalog) -> Option<&'a Planet> {
    viewport.modal.and_then(|id| catalog.find(id))
}

/// Zoom buttons, zoom percentage, reset, and the instructions card.
pub fn overview_controls_system(mut contexts: EguiContexts, mut viewport: ResMut<OverviewViewport>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("overview_controls"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .show(ctx, |ui| {
            overlay_frame().show(ui, |ui| {
                ui.label(egui::RichText::new("Zoom").size(13.0).color(colors::TEXT_DIM));
                ui.horizontal(|ui| {
                    if zoom_button(ui, icons::ZOOM_OUT).clicked() {
                        viewport.zoom_out();
                    }
                    ui.add_sized(
                        egui::vec2(48.0, 32.0),
                        egui::Label::new(
                            egui::RichText::new(format!("{}%", viewport.zoom_percent()))
                                .color(colors::TEXT),
                        ),
                    );
                    if zoom_button(ui, icons::ZOOM_IN).clicked() {
                        viewport.zoom_in();
                    }
                });
            });
            ui.add_space(8.0);
            if ui
                .add(
                    egui::Button::new(
                        egui::RichText::new(format!("{}  Reset view", icons::RESET))
                            .color(colors::TEXT),
                    )
                    .fill(colors::OVERLAY_BG)
                    .corner_radius(egui::CornerRadius::same(8)),
                )
                .clicked()
            {
                viewport.reset();
            }
        });

    egui::Area::new(egui::Id::new("overview_instructions"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .interactable(false)
        .show(ctx, |ui| {
            overlay_frame().show(ui, |ui| {
                for (icon, text) in [
                    (icons::DRAG, "Drag to move"),
                    (icons::SCROLL, "Scroll to zoom"),
                    (icons::CLICK, "Click a planet for details"),
                ] {
                    ui.label(
                        egui::RichText::new(format!("{icon}  {text}"))
                            .size(13.0)
                            .color(colors::TEXT_DIM),
                    );
                }
            });
        });
}

fn zoom_button(ui: &mut egui::Ui, icon: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(icon).size(16.0).color(colors::TEXT))
            .fill(colors::BUTTON_ACTIVE)
            .corner_radius(egui::CornerRadius::same(8))
            .min_size(egui::vec2(32.0, 32.0)),
    )
}

/// Modal with the full fact list of the zoomed planet.
pub fn overview_modal_system(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    mut viewport: ResMut<OverviewViewport>,
    mut select: MessageWriter<SelectPlanet>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(planet) = modal_planet(&viewport, &catalog) else {
        return;
    };

    let mut open = true;
    let mut view_in_detail = false;
    let mut close = false;

    egui::Window::new(planet.name)
        .id(egui::Id::new("planet_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        // Inner width; frame margins and the screen gap take the rest.
        .default_width(MODAL_PANEL_WIDTH - 80.0)
        .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-24.0, 0.0))
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors::PANEL_BG)
                .corner_radius(egui::CornerRadius::same(16))
                .inner_margin(egui::Margin::same(20)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                color_dot(ui, planet_color32(planet), 14.0);
                ui.label(egui::RichText::new(planet.description).size(13.0).color(colors::TEXT_DIM));
            });
            ui.add_space(12.0);

            for fact in planet.facts {
                card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(fact.title).size(12.0).color(colors::TEXT_FAINT));
                    ui.label(egui::RichText::new(fact.value).color(colors::TEXT));
                });
                ui.add_space(6.0);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new(format!("{}  View in detail", icons::MAGNIFY))
                                .color(colors::TEXT),
                        )
                        .fill(colors::BUTTON_ACTIVE)
                        .min_size(egui::vec2(220.0, 36.0)),
                    )
                    .clicked()
                {
                    view_in_detail = true;
                }
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new(format!("{}  Close", icons::CLOSE))
                                .color(colors::TEXT_DIM),
                        )
                        .fill(colors::BUTTON_IDLE)
                        .min_size(egui::vec2(96.0, 36.0)),
                    )
                    .clicked()
                {
                    close = true;
                }
            });
        });

    if view_in_detail {
        select.write(SelectPlanet {
            id: planet.id.to_string(),
            origin: SelectionOrigin::Overview,
        });
    }
    if view_in_detail || close || !open {
        viewport.close_modal();
    }
}
