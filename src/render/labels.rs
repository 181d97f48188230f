//! Text labels pinned to scene entities, drawn with egui.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::camera::MainCamera;

/// Plugin providing scene label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(EguiPrimaryContextPass, draw_scene_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    pub visible: bool,
    pub font_size: f32,
    /// Shadow offset in screen pixels.
    pub shadow: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 13.0,
            shadow: 1.0,
        }
    }
}

/// Text centered on the screen projection of this entity.
#[derive(Component, Clone, Debug)]
pub struct SceneLabel {
    pub text: String,
}

impl SceneLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

fn draw_scene_labels(
    mut contexts: EguiContexts,
    labels: Query<(&SceneLabel, &GlobalTransform, &InheritedVisibility)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible || labels.is_empty() {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("scene_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let font = egui::FontId::proportional(settings.font_size);

            for (label, transform, visibility) in labels.iter() {
                if !visibility.get() {
                    continue;
                }
                let Ok(screen) = camera.world_to_viewport(camera_transform, transform.translation())
                else {
                    continue;
                };
                let pos = egui::pos2(screen.x, screen.y);

                painter.text(
                    pos + egui::vec2(settings.shadow, settings.shadow),
                    egui::Align2::CENTER_TOP,
                    &label.text,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );
                painter.text(
                    pos,
                    egui::Align2::CENTER_TOP,
                    &label.text,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230),
                );
            }
        });
}
