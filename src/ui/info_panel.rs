//! Info panel: name, description, key facts and relative size of the
//! selected planet.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{card_frame, colors, color_dot, icons, planet_color32};
use crate::catalog::{Catalog, Fact, Planet, data};
use crate::view::ViewState;

/// Expanded fact explanation, at most one at a time.
///
/// Keyed by planet and fact id so a stale entry can never open a fact on
/// another planet.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct FactAccordion {
    expanded: Option<(&'static str, &'static str)>,
}

impl FactAccordion {
    /// Expand `fact_id`, or collapse it if it is the expanded one.
    pub fn toggle(&mut self, planet_id: &'static str, fact_id: &'static str) {
        if self.is_expanded(planet_id, fact_id) {
            self.expanded = None;
        } else {
            self.expanded = Some((planet_id, fact_id));
        }
    }

    pub fn is_expanded(&self, planet_id: &str, fact_id: &str) -> bool {
        self.expanded == Some((planet_id, fact_id))
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

/// Fill fraction and label of the relative size bar.
pub fn size_bar(size: f32) -> (f32, String) {
    ((size * 0.4).min(1.0), format!("{size}×"))
}

/// Icon shown next to a fact.
pub fn fact_icon(fact_id: &str) -> &'static str {
    match fact_id {
        data::DISTANCE => icons::DISTANCE,
        data::DIAMETER => icons::DIAMETER,
        _ => icons::HIGHLIGHT,
    }
}

/// Any planet change collapses the accordion.
pub fn collapse_facts_on_selection(
    view: Res<ViewState>,
    catalog: Res<Catalog>,
    mut last: Local<Option<&'static str>>,
    mut accordion: ResMut<FactAccordion>,
) {
    let current = view.active_planet(&catalog).map(|p| p.id);
    if *last != current {
        accordion.collapse();
        *last = current;
    }
}

pub fn info_panel_system(
    mut contexts: EguiContexts,
    view: Res<ViewState>,
    catalog: Res<Catalog>,
    mut accordion: ResMut<FactAccordion>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(planet) = view.active_planet(&catalog) else {
        return;
    };

    let panel_frame = egui::Frame::NONE
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(16));

    egui::SidePanel::right("info_panel")
        .resizable(false)
        .default_width(340.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_title(ui, planet);
                ui.add_space(16.0);

                ui.label(egui::RichText::new("Key facts").strong().color(colors::TEXT));
                ui.add_space(4.0);
                for fact in planet.facts {
                    render_fact(ui, planet, fact, &mut accordion);
                    ui.add_space(6.0);
                }

                ui.add_space(8.0);
                render_size_bar(ui, planet);
            });
        });
}

fn render_title(ui: &mut egui::Ui, planet: &Planet) {
    ui.horizontal(|ui| {
        color_dot(ui, planet_color32(planet), 16.0);
        ui.heading(egui::RichText::new(planet.name).color(colors::TEXT));
    });
    ui.add_space(8.0);
    ui.label(egui::RichText::new(planet.description).color(colors::TEXT_DIM));
}

fn render_fact(ui: &mut egui::Ui, planet: &Planet, fact: &Fact, accordion: &mut FactAccordion) {
    let expanded = accordion.is_expanded(planet.id, fact.id);

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(fact.title)
                        .size(12.0)
                        .color(colors::TEXT_FAINT),
                );
                ui.label(egui::RichText::new(fact.value).color(colors::TEXT));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if fact.explanation.is_some() {
                    let glyph = egui::RichText::new(icons::MORE_INFO).size(14.0).color(
                        if expanded { colors::TEXT } else { colors::TEXT_DIM },
                    );
                    if ui
                        .add(
                            egui::Button::new(glyph)
                                .fill(colors::BUTTON_ACTIVE)
                                .corner_radius(egui::CornerRadius::same(14))
                                .min_size(egui::vec2(28.0, 28.0)),
                        )
                        .on_hover_text("More information")
                        .clicked()
                    {
                        accordion.toggle(planet.id, fact.id);
                    }
                }
                ui.label(
                    egui::RichText::new(fact_icon(fact.id))
                        .size(16.0)
                        .color(planet_color32(planet)),
                );
            });
        });

        if expanded && let Some(explanation) = fact.explanation {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(explanation)
                    .size(13.0)
                    .color(colors::TEXT_DIM),
            );
        }
    });
}

fn render_size_bar(ui: &mut egui::Ui, planet: &Planet) {
    let (fraction, label) = size_bar(planet.size);

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("Relative size")
                .size(11.0)
                .color(colors::TEXT_FAINT),
        );
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 48.0).max(40.0);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 6.0), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 3.0, colors::BUTTON_ACTIVE);
            let mut fill = rect;
            fill.set_width(rect.width() * fraction);
            painter.rect_filled(fill, 3.0, planet_color32(planet));

            ui.label(egui::RichText::new(label).size(11.0).color(colors::TEXT_DIM));
        });
    });
}
