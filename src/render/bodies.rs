//! Planet model composition and spawning.
//!
//! [`compose_detail`] and [`compose_preview`] decide what a planet looks like
//! from its catalog record and whichever textures resolved; [`spawn_planet_parts`]
//! turns that description into meshes under a root entity. Both views share
//! the same parts and the same [`Spin`] / [`MoonOrbit`] animation.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::catalog::Planet;
use crate::textures::ResolvedTextures;

/// Fallback fill for moons whose texture is unavailable.
const MOON_FALLBACK: Color = Color::srgb(0.7, 0.7, 0.7);

/// Half width of the moon orbit guide ring.
const ORBIT_GUIDE_HALF_WIDTH: f32 = 0.01;

/// Fraction of the moon's `size` used as its render radius.
const MOON_RADIUS_FACTOR: f32 = 0.3;

/// Mesh dimensions for one presentation of a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyGeometry {
    pub body_radius: f32,
    pub clouds_radius: f32,
    pub ring_inner: f32,
    pub ring_outer: f32,
    /// Sphere sectors and stacks.
    pub detail: u32,
}

/// Geometry of the single-planet view. The radius is the same for every
/// planet; apparent size comes from the camera distance.
pub const DETAIL_GEOMETRY: BodyGeometry = BodyGeometry {
    body_radius: 1.5,
    clouds_radius: 1.52,
    ring_inner: 1.8,
    ring_outer: 3.0,
    detail: 64,
};

/// Unit geometry of an overview preview, scaled by its root transform.
pub const PREVIEW_GEOMETRY: BodyGeometry = BodyGeometry {
    body_radius: 1.0,
    clouds_radius: 1.02,
    ring_inner: 1.3,
    ring_outer: 2.0,
    detail: 32,
};

/// Angular rates of the animated parts, in radians per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinRates {
    pub surface: f32,
    pub clouds: f32,
    pub moon: f32,
}

/// Surface material of the main body.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface<H> {
    Flat(Color),
    Textured {
        map: H,
        bump: Option<H>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingLook<H> {
    pub texture: Option<H>,
    pub color: Color,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MoonLook<H> {
    pub texture: Option<H>,
    pub radius: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
}

/// Everything needed to build a planet model.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetLook<H> {
    pub surface: Surface<H>,
    pub clouds: Option<H>,
    pub ring: Option<RingLook<H>>,
    pub moons: Vec<MoonLook<H>>,
    pub axial_tilt: f32,
}

impl<H> PlanetLook<H> {
    /// Plain sphere in the planet color.
    pub fn flat(planet: &Planet) -> Self {
        Self {
            surface: Surface::Flat(planet.color()),
            clouds: None,
            ring: None,
            moons: Vec::new(),
            axial_tilt: planet.axial_tilt,
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self.surface, Surface::Flat(_))
    }
}

/// Detail-view model.
///
/// Without a resolved main texture the planet is a flat sphere only. Clouds
/// need both the base map and the cloud map; rings follow the catalog flag.
pub fn compose_detail<H: Clone>(
    planet: &Planet,
    resolved: Option<&ResolvedTextures<H>>,
) -> PlanetLook<H> {
    let Some((textures, map)) = resolved.and_then(|t| t.main.clone().map(|m| (t, m))) else {
        return PlanetLook::flat(planet);
    };

    let ring = planet.rings.then(|| match &textures.ring {
        Some(texture) => RingLook {
            texture: Some(texture.clone()),
            color: Color::WHITE,
            opacity: 0.8,
        },
        None => RingLook {
            texture: None,
            color: planet.color(),
            opacity: 0.6,
        },
    });

    let moons = planet
        .moons
        .iter()
        .enumerate()
        .map(|(index, moon)| MoonLook {
            texture: textures.moons.get(&index).cloned(),
            radius: moon.size * MOON_RADIUS_FACTOR,
            orbit_radius: moon.orbit_radius,
            orbit_speed: moon.orbit_speed,
        })
        .collect();

    PlanetLook {
        surface: Surface::Textured {
            map,
            bump: textures.bump.clone(),
        },
        clouds: textures.clouds.clone(),
        ring,
        moons,
        axial_tilt: planet.axial_tilt,
    }
}

/// Overview preview model: main map only, flat ring, no clouds or moons.
pub fn compose_preview<H>(planet: &Planet, main: Option<H>) -> PlanetLook<H> {
    PlanetLook {
        surface: match main {
            Some(map) => Surface::Textured {
                map,
                bump: None,
            },
            None => Surface::Flat(planet.color()),
        },
        clouds: None,
        ring: planet.rings.then(|| RingLook {
            texture: None,
            color: planet.color(),
            opacity: 0.7,
        }),
        moons: Vec::new(),
        axial_tilt: planet.axial_tilt,
    }
}

/// Main sphere of a planet model.
#[derive(Component)]
pub struct PlanetSurface;

/// Translucent cloud shell.
#[derive(Component)]
pub struct CloudLayer;

/// Flat ring disc in the equatorial plane.
#[derive(Component)]
pub struct RingDisc;

/// Moon sphere, child of a [`MoonOrbit`] group.
#[derive(Component)]
pub struct MoonBody;

/// Continuous rotation around the local vertical axis.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    /// Radians per second.
    pub rate: f32,
}

/// Group whose rotation carries a moon around its parent.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoonOrbit {
    /// Radians per second.
    pub speed: f32,
}

/// Material for a flat or textured sphere surface.
pub fn surface_material(surface: &Surface<Handle<Image>>) -> StandardMaterial {
    match surface {
        Surface::Flat(color) => StandardMaterial {
            base_color: *color,
            metallic: 0.1,
            perceptual_roughness: 0.8,
            ..default()
        },
        Surface::Textured { map, bump } => StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(map.clone()),
            depth_map: bump.clone(),
            parallax_depth_scale: 0.02,
            metallic: 0.1,
            perceptual_roughness: 0.8,
            ..default()
        },
    }
}

fn sphere_mesh(radius: f32, detail: u32, tangents: bool) -> Mesh {
    let mut mesh = Sphere::new(radius).mesh().uv(detail, detail);
    if tangents && let Err(err) = mesh.generate_tangents() {
        warn!("Could not generate sphere tangents: {err}");
    }
    mesh
}

fn flat_ring_mesh(inner: f32, outer: f32) -> Mesh {
    Annulus::new(inner, outer).mesh().resolution(64).build()
}

/// Lay a ring mesh (built in the XY plane) into the equatorial XZ plane.
fn equatorial() -> Transform {
    Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2))
}

/// Spawn every part of `look` as children of `root`.
pub fn spawn_planet_parts(
    commands: &mut Commands,
    root: Entity,
    look: &PlanetLook<Handle<Image>>,
    geometry: &BodyGeometry,
    rates: &SpinRates,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let needs_tangents = matches!(look.surface, Surface::Textured { bump: Some(_), .. });
    let body_mesh = meshes.add(sphere_mesh(geometry.body_radius, geometry.detail, needs_tangents));
    let body_material = materials.add(surface_material(&look.surface));

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(body_mesh),
            MeshMaterial3d(body_material),
            Transform::default(),
            PlanetSurface,
            Spin { rate: rates.surface },
        ));

        if let Some(clouds) = &look.clouds {
            parent.spawn((
                Mesh3d(meshes.add(sphere_mesh(geometry.clouds_radius, geometry.detail, false))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(1.0, 1.0, 1.0, 0.4),
                    base_color_texture: Some(clouds.clone()),
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::default(),
                CloudLayer,
                Spin { rate: rates.clouds },
            ));
        }

        if let Some(ring) = &look.ring {
            parent.spawn((
                Mesh3d(meshes.add(flat_ring_mesh(geometry.ring_inner, geometry.ring_outer))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: ring.color.with_alpha(ring.opacity),
                    base_color_texture: ring.texture.clone(),
                    alpha_mode: AlphaMode::Blend,
                    double_sided: true,
                    cull_mode: None,
                    ..default()
                })),
                equatorial(),
                RingDisc,
            ));
        }

        for moon in &look.moons {
            let moon_surface = match &moon.texture {
                Some(map) => Surface::Textured {
                    map: map.clone(),
                    bump: None,
                },
                None => Surface::Flat(MOON_FALLBACK),
            };
            let moon_mesh = meshes.add(sphere_mesh(moon.radius, 32, false));
            let moon_material = materials.add(surface_material(&moon_surface));
            let guide_mesh = meshes.add(flat_ring_mesh(
                moon.orbit_radius - ORBIT_GUIDE_HALF_WIDTH,
                moon.orbit_radius + ORBIT_GUIDE_HALF_WIDTH,
            ));
            let guide_material = materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 1.0, 0.1),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            });

            parent
                .spawn((Transform::default(), Visibility::default(), MoonOrbit {
                    speed: moon.orbit_speed,
                }))
                .with_children(|orbit| {
                    orbit.spawn((
                        Mesh3d(moon_mesh),
                        MeshMaterial3d(moon_material),
                        Transform::from_xyz(moon.orbit_radius, 0.0, 0.0),
                        MoonBody,
                        Spin { rate: rates.moon },
                    ));
                    orbit.spawn((Mesh3d(guide_mesh), MeshMaterial3d(guide_material), equatorial()));
                });
        }
    });
}

/// Advance every spinning part by elapsed time.
pub fn apply_spin(time: Res<Time>, mut query: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in query.iter_mut() {
        transform.rotate_y(spin.rate * dt);
    }
}

/// Place moon orbit groups at `elapsed * speed`.
pub fn apply_moon_orbits(time: Res<Time>, mut query: Query<(&MoonOrbit, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (orbit, mut transform) in query.iter_mut() {
        transform.rotation = Quat::from_rotation_y(elapsed * orbit.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn planet(id: &str) -> Planet {
        *Catalog::default().find(id).unwrap()
    }

    fn all_ready(planet: &Planet) -> ResolvedTextures<&'static str> {
        let t = planet.textures;
        ResolvedTextures {
            main: t.main,
            bump: t.bump,
            clouds: t.clouds,
            ring: t.ring,
            moons: planet.moons.iter().enumerate().map(|(i, m)| (i, m.texture)).collect(),
        }
    }

    #[test]
    fn unresolved_planet_is_flat_body_only() {
        let earth = planet("earth");
        let look = compose_detail::<&str>(&earth, None);
        assert_eq!(look.surface, Surface::Flat(earth.color()));
        assert!(look.clouds.is_none());
        assert!(look.moons.is_empty());
    }

    #[test]
    fn failed_main_texture_falls_back_to_flat() {
        let earth = planet("earth");
        let mut resolved = all_ready(&earth);
        resolved.main = None;
        let look = compose_detail(&earth, Some(&resolved));
        assert!(look.is_flat());
        assert!(look.clouds.is_none());
    }

    #[test]
    fn earth_has_clouds_and_moon() {
        let earth = planet("earth");
        let look = compose_detail(&earth, Some(&all_ready(&earth)));
        assert_eq!(look.clouds, Some("textures/earth-clouds.jpg"));
        assert_eq!(look.moons.len(), 1);
        assert!((look.moons[0].radius - 0.27 * 0.3).abs() < 1e-6);
        assert!(look.ring.is_none());
    }

    #[test]
    fn saturn_ring_falls_back_to_planet_color() {
        let saturn = planet("saturn");
        let mut resolved = all_ready(&saturn);
        let look = compose_detail(&saturn, Some(&resolved));
        assert_eq!(look.ring.as_ref().and_then(|r| r.texture), Some("textures/saturn-ring.png"));

        resolved.ring = None;
        let ring = compose_detail(&saturn, Some(&resolved)).ring.unwrap();
        assert_eq!(ring.texture, None);
        assert_eq!(ring.color, saturn.color());
        assert_eq!(ring.opacity, 0.6);
    }

    #[test]
    fn missing_moon_texture_keeps_the_moon() {
        let jupiter = planet("jupiter");
        let mut resolved = all_ready(&jupiter);
        resolved.moons.remove(&1);
        let look = compose_detail(&jupiter, Some(&resolved));
        assert_eq!(look.moons.len(), 4);
        assert_eq!(look.moons[1].texture, None);
    }

    #[test]
    fn tilt_comes_from_catalog() {
        let uranus = planet("uranus");
        let look = compose_detail(&uranus, Some(&all_ready(&uranus)));
        assert_eq!(look.axial_tilt, uranus.axial_tilt);
        assert_eq!(compose_preview::<()>(&uranus, None).axial_tilt, uranus.axial_tilt);
    }

    #[test]
    fn preview_uses_flat_ring_and_no_moons() {
        let saturn = planet("saturn");
        let look = compose_preview(&saturn, Some("textures/saturn.jpg"));
        assert!(!look.is_flat());
        assert!(look.moons.is_empty());
        assert_eq!(look.ring.map(|r| (r.texture, r.opacity)), Some((None, 0.7)));
    }
}
