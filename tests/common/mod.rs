//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use planetview::detail::DetailPlugin;
use planetview::types::{SelectionOrigin, ViewMode};
use planetview::view::{SelectPlanet, SetViewMode, ViewPlugin, ViewState};

/// Headless app with the root view state and its request messages.
pub fn view_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, ViewPlugin));
    app.update();
    app
}

/// Headless app with the detail view mounted on `planet`.
///
/// No renderer is present, so only the asset stores the mount writes to
/// are registered.
pub fn detail_app(planet: &str) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy::asset::AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<Image>()
        .insert_resource(ViewState {
            selected_planet_id: planet.to_string(),
            view_mode: ViewMode::Detail,
        })
        .add_plugins((ViewPlugin, DetailPlugin));
    app.update();
    app
}

/// Request a planet and run one frame.
pub fn select(app: &mut App, id: &str, origin: SelectionOrigin) {
    app.world_mut().write_message(SelectPlanet {
        id: id.to_string(),
        origin,
    });
    app.update();
}

/// Request a view mode and run one frame.
pub fn set_mode(app: &mut App, mode: ViewMode) {
    app.world_mut().write_message(SetViewMode(mode));
    app.update();
}

pub fn view_state(app: &App) -> ViewState {
    app.world().resource::<ViewState>().clone()
}
