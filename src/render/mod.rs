//! Rendering shared by both views.
//!
//! Planet model composition and spawning, the starfield and lights, scene
//! labels and gizmo line helpers. View-specific mounting lives in
//! `detail` and `overview`.

mod background;
pub mod bodies;
pub mod labels;
pub mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::{apply_moon_orbits, apply_spin};
use self::labels::LabelPlugin;
use crate::types::ViewSystemSet;

pub use self::background::{Starfield, sphere_direction};
pub use self::bodies::{MoonOrbit, PlanetLook, Spin};
pub use self::labels::{LabelSettings, SceneLabel};
pub use self::orbits::GuideLineSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, LabelPlugin))
            .init_resource::<GuideLineSettings>()
            .add_systems(
                Update,
                (apply_spin, apply_moon_orbits).in_set(ViewSystemSet::Animate),
            );
    }
}
