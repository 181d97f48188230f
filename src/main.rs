//! PlanetView - Interactive Solar System Viewer
//!
//! A desktop application for exploring the planets of the solar system
//! as rotating textured spheres, one at a time or all side by side.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use planetview::PlanetViewPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "PlanetView".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.04, 0.05, 0.12)))
        .add_plugins(EguiPlugin::default())
        .add_plugins(PlanetViewPlugin)
        .run();
}
