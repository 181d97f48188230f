//! Floating hints and the moon legend over the detail scene.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons, overlay_frame};
use crate::catalog::Catalog;
use crate::detail::DragHint;
use crate::view::ViewState;

pub fn detail_overlay_system(
    mut contexts: EguiContexts,
    view: Res<ViewState>,
    catalog: Res<Catalog>,
    hint: Res<DragHint>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(planet) = view.active_planet(&catalog) else {
        return;
    };

    if hint.is_visible() {
        egui::Area::new(egui::Id::new("drag_hint"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
            .interactable(false)
            .show(ctx, |ui| {
                overlay_frame()
                    .corner_radius(egui::CornerRadius::same(16))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format!("{}  Drag to rotate", icons::DRAG))
                                .color(colors::TEXT),
                        );
                    });
            });
    }

    egui::Area::new(egui::Id::new("detail_footer"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -40.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}  Drag to rotate 360° • Scroll to zoom",
                        icons::ROTATE
                    ))
                    .size(12.0)
                    .color(colors::TEXT_FAINT),
                );

                if planet.moons.is_empty() {
                    return;
                }
                ui.add_space(6.0);
                overlay_frame().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{} Moons:", icons::MOON))
                                .size(12.0)
                                .color(colors::TEXT_DIM),
                        );
                        for moon in planet.moons {
                            egui::Frame::new()
                                .fill(colors::CARD_BG)
                                .corner_radius(egui::CornerRadius::same(4))
                                .inner_margin(egui::Margin::symmetric(6, 2))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(moon.name)
                                            .size(12.0)
                                            .color(colors::TEXT),
                                    );
                                });
                        }
                    });
                });
            });
        });
}
