//! Horizontally scrolling row of planet chips.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, planet_color32};
use crate::catalog::{Catalog, Planet};
use crate::types::SelectionOrigin;
use crate::view::{SelectPlanet, ViewState};

pub fn selector_bar_system(
    mut contexts: EguiContexts,
    view: Res<ViewState>,
    catalog: Res<Catalog>,
    mut select: MessageWriter<SelectPlanet>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let selected = view.active_planet(&catalog).map(|p| p.id);

    egui::TopBottomPanel::top("selector_bar")
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    for planet in catalog.planets() {
                        if planet_chip(ui, planet, selected == Some(planet.id)).clicked() {
                            select.write(SelectPlanet {
                                id: planet.id.to_string(),
                                origin: SelectionOrigin::SelectorBar,
                            });
                        }
                    }
                });
            });
        });
}

/// Pill button with a color dot and the planet name.
fn planet_chip(ui: &mut egui::Ui, planet: &Planet, selected: bool) -> egui::Response {
    let color = planet_color32(planet);
    let font = egui::FontId::proportional(15.0);

    let mut job = egui::text::LayoutJob::default();
    job.append(
        "●",
        0.0,
        egui::TextFormat {
            font_id: egui::FontId::proportional(18.0),
            color,
            valign: egui::Align::Center,
            ..Default::default()
        },
    );
    job.append(
        planet.name,
        6.0,
        egui::TextFormat {
            font_id: font,
            color: if selected { colors::TEXT } else { colors::TEXT_DIM },
            valign: egui::Align::Center,
            ..Default::default()
        },
    );

    let (fill, stroke) = if selected {
        (color.gamma_multiply(0.25), egui::Stroke::new(2.0, color))
    } else {
        (colors::BUTTON_IDLE, egui::Stroke::new(1.0, colors::CARD_BORDER))
    };

    ui.add(
        egui::Button::new(job)
            .fill(fill)
            .stroke(stroke)
            .corner_radius(egui::CornerRadius::same(18))
            .min_size(egui::vec2(0.0, 36.0)),
    )
}
