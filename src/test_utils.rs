//! Test utilities shared by unit tests.

/// Fixtures for building catalog entries.
pub mod fixtures {
    use crate::catalog::{Fact, Moon, Planet, TextureSet};

    static FACTS: &[Fact] = &[
        Fact {
            id: "distance",
            title: "Distance",
            value: "1 AU",
            explanation: Some("One astronomical unit."),
        },
        Fact {
            id: "diameter",
            title: "Diameter",
            value: "1,000 km",
            explanation: None,
        },
    ];

    static MOONS: &[Moon] = &[Moon {
        id: "tiny",
        name: "Tiny",
        texture: "textures/tiny.jpg",
        size: 0.2,
        orbit_radius: 2.5,
        orbit_speed: 0.4,
    }];

    /// A valid planet without textures, moons or rings.
    pub fn planet(id: &'static str) -> Planet {
        Planet {
            id,
            name: "Fixture",
            color: [120, 140, 160],
            size: 1.0,
            description: "A planet used in tests.",
            distance_from_sun: "1 AU",
            diameter: "1,000 km",
            day_length: "24 hours",
            facts: FACTS,
            textures: TextureSet::NONE,
            moons: &[],
            rings: false,
            axial_tilt: 0.0,
        }
    }

    /// A planet that declares every texture role, a ring and one moon.
    pub fn textured_planet(id: &'static str) -> Planet {
        Planet {
            textures: TextureSet {
                main: Some("textures/fixture.jpg"),
                bump: Some("textures/fixture-bump.jpg"),
                specular: Some("textures/fixture-specular.jpg"),
                clouds: Some("textures/fixture-clouds.jpg"),
                clouds_alpha: None,
                ring: Some("textures/fixture-ring.png"),
            },
            moons: MOONS,
            rings: true,
            ..planet(id)
        }
    }
}
