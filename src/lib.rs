//! PlanetView - Interactive Solar System Viewer
//!
//! A library crate providing the planet catalog, the detail and overview
//! scenes, and their egui panels as Bevy plugins.

pub mod camera;
pub mod catalog;
pub mod detail;
pub mod input;
pub mod overview;
pub mod render;
pub mod textures;
pub mod types;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

/// Every plugin of the viewer. Expects `DefaultPlugins` and `EguiPlugin`.
pub struct PlanetViewPlugin;

impl Plugin for PlanetViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            view::ViewPlugin,
            input::PointerPlugin,
            camera::CameraPlugin,
            render::RenderPlugin,
            detail::DetailPlugin,
            overview::OverviewPlugin,
            ui::UiPlugin,
        ))
        .add_systems(Startup, catalog::log_catalog_validation);
    }
}
