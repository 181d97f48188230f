//! Scene backdrop: a starfield shell around the detail view and the lights.

use bevy::prelude::*;
use rand::Rng;

use crate::view::ViewState;

/// Number of stars in the shell.
const STAR_COUNT: usize = 5000;

/// Inner and outer radius of the star shell, outside the camera range.
const STAR_SHELL: std::ops::Range<f32> = 100.0..150.0;

/// Plugin providing the starfield and lighting.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting))
            .add_systems(Update, toggle_starfield.run_if(resource_changed::<ViewState>));
    }
}

/// Parent of every star.
#[derive(Component)]
pub struct Starfield;

/// Uniform direction on the unit sphere from two uniform samples.
pub fn sphere_direction(u: f32, v: f32) -> Vec3 {
    let theta = std::f32::consts::TAU * u;
    let z = 2.0 * v - 1.0;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), z, r * theta.sin())
}

/// Spawn stars at random points in a spherical shell.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.08));

    let mut rng = rand::thread_rng();

    commands
        .spawn((Starfield, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            for _ in 0..STAR_COUNT {
                let direction = sphere_direction(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
                let radius = rng.gen_range(STAR_SHELL);
                let scale = rng.gen_range(0.5..1.5);

                parent.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(star_material.clone()),
                    Transform::from_translation(direction * radius).with_scale(Vec3::splat(scale)),
                ));
            }
        });

    info!("Spawned {STAR_COUNT} background stars");
}

/// Key light from the upper front plus a dim blue fill from behind.
fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(5.0, 3.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.27, 0.4, 1.0),
            illuminance: 1500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-5.0, -3.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}

/// Stars belong to the detail view only.
fn toggle_starfield(view: Res<ViewState>, mut query: Query<&mut Visibility, With<Starfield>>) {
    let visibility = if view.is_detail() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut v in query.iter_mut() {
        *v = visibility;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn star_directions_are_unit_length(u in 0.0f32..1.0, v in 0.0f32..1.0) {
            let d = sphere_direction(u, v);
            prop_assert!((d.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn poles_map_to_vertical_axis() {
        assert_relative_eq!(sphere_direction(0.3, 1.0).y, 1.0);
        assert_relative_eq!(sphere_direction(0.3, 0.0).y, -1.0);
    }
}
