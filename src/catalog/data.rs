//! Built-in planet data.
//! Figures are rounded values for display only; nothing computes with them.

use std::f32::consts::PI;

use super::{Fact, Moon, Planet, TextureSet};

pub const DISTANCE: &str = "distance";
pub const DIAMETER: &str = "diameter";
pub const DAY_LENGTH: &str = "day-length";
pub const HIGHLIGHT: &str = "highlight";

/// Uranus spins on its side (about 97 degrees).
const URANUS_TILT: f32 = PI * 0.54;

/// All catalog entries in display order.
pub static PLANETS: &[Planet] = &[
    Planet {
        id: "mercury",
        name: "Mercury",
        color: [0x8C, 0x78, 0x53],
        size: 0.4,
        description: "The smallest planet and the closest to the Sun. \
            Scorching by day, freezing at night.",
        distance_from_sun: "57.9 million km",
        diameter: "4,879 km",
        day_length: "59 Earth days",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "57.9 million km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "4,879 km", explanation: None },
            Fact {
                id: DAY_LENGTH,
                title: "Day length",
                value: "59 Earth days",
                explanation: Some(
                    "A day on Mercury lasts almost 59 Earth days because the planet turns \
                     so slowly on its axis. Ironically, a year on Mercury (88 days) is \
                     shorter than its day!",
                ),
            },
        ],
        textures: TextureSet {
            main: Some("textures/mercury.jpg"),
            bump: Some("textures/mercury-bump.jpg"),
            ..TextureSet::NONE
        },
        moons: &[],
        rings: false,
        axial_tilt: 0.0,
    },
    Planet {
        id: "venus",
        name: "Venus",
        color: [0xFF, 0xC6, 0x49],
        size: 0.9,
        description: "The hottest planet thanks to a dense greenhouse atmosphere. \
            Also known as the morning or evening star.",
        distance_from_sun: "108.2 million km",
        diameter: "12,104 km",
        day_length: "243 Earth days",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "108.2 million km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "12,104 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Hottest planet (465°C)",
                explanation: Some(
                    "Venus is hotter than Mercury even though it is farther from the Sun. \
                     An extreme greenhouse effect is to blame: the thick carbon dioxide \
                     atmosphere traps the heat.",
                ),
            },
        ],
        textures: TextureSet {
            main: Some("textures/venus.jpg"),
            bump: Some("textures/venus-bump.jpg"),
            ..TextureSet::NONE
        },
        moons: &[],
        rings: false,
        axial_tilt: 0.0,
    },
    Planet {
        id: "earth",
        name: "Earth",
        color: [0x41, 0x69, 0xE1],
        size: 1.0,
        description: "Our home planet. The only known place in the universe with life.",
        distance_from_sun: "149.6 million km",
        diameter: "12,742 km",
        day_length: "24 hours",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "149.6 million km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "12,742 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Only planet with life",
                explanation: Some(
                    "Earth is the only planet known to host life. It has the right mix of \
                     liquid water, a protective atmosphere and a distance from the Sun \
                     that is neither too hot nor too cold.",
                ),
            },
        ],
        textures: TextureSet {
            main: Some("textures/earth.jpg"),
            bump: Some("textures/earth-bump.jpg"),
            specular: Some("textures/earth-specular.jpg"),
            clouds: Some("textures/earth-clouds.jpg"),
            clouds_alpha: Some("textures/earth-clouds-alpha.jpg"),
            ring: None,
        },
        moons: &[Moon {
            id: "moon",
            name: "Moon",
            texture: "textures/moon.jpg",
            size: 0.27,
            orbit_radius: 2.5,
            orbit_speed: 0.5,
        }],
        rings: false,
        axial_tilt: 0.0,
    },
    Planet {
        id: "mars",
        name: "Mars",
        color: [0xCD, 0x5C, 0x5C],
        size: 0.5,
        description: "Red because of iron oxide in its soil. \
            Home to the tallest mountain in the solar system.",
        distance_from_sun: "227.9 million km",
        diameter: "6,779 km",
        day_length: "24.6 hours",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "227.9 million km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "6,779 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "The red planet",
                explanation: Some(
                    "Mars owes its red color to iron oxide (rust) in the ground. It also \
                     has the tallest mountain in the solar system: Olympus Mons rises \
                     21 km, almost three times the height of Mount Everest.",
                ),
            },
        ],
        textures: TextureSet {
            main: Some("textures/mars.jpg"),
            bump: Some("textures/mars-bump.jpg"),
            ..TextureSet::NONE
        },
        moons: &[],
        rings: false,
        axial_tilt: 0.0,
    },
    Planet {
        id: "ceres",
        name: "Ceres",
        color: [0x9E, 0x9A, 0x91],
        size: 0.1,
        description: "A dwarf planet and the largest object in the asteroid belt \
            between Mars and Jupiter.",
        distance_from_sun: "413.7 million km",
        diameter: "939 km",
        day_length: "9 hours",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "413.7 million km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "939 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Largest body in the asteroid belt",
                explanation: Some(
                    "Ceres holds about a quarter of all the mass in the asteroid belt. \
                     Bright spots in Occator crater are salt deposits left behind by \
                     briny water that seeped up from below.",
                ),
            },
        ],
        textures: TextureSet::NONE,
        moons: &[],
        rings: false,
        axial_tilt: 0.0,
    },
    Planet {
        id: "jupiter",
        name: "Jupiter",
        color: [0xDA, 0xA5, 0x20],
        size: 2.5,
        description: "The largest planet in the solar system. \
            A gas giant with an iconic red spot.",
        distance_from_sun: "778.5 million km",
        diameter: "139,820 km",
        day_length: "10 hours",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "778.5 million km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "139,820 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Largest planet",
                explanation: Some(
                    "More than 1,300 Earths would fit inside Jupiter. The Great Red Spot \
                     is a storm that has raged for at least 400 years and is big enough \
                     to swallow two or three Earths.",
                ),
            },
        ],
        textures: TextureSet { main: Some("textures/jupiter.jpg"), ..TextureSet::NONE },
        moons: &[
            Moon {
                id: "io",
                name: "Io",
                texture: "textures/io.jpg",
                size: 0.28,
                orbit_radius: 2.8,
                orbit_speed: 0.8,
            },
            Moon {
                id: "europa",
                name: "Europa",
                texture: "textures/europa.jpg",
                size: 0.24,
                orbit_radius: 3.2,
                orbit_speed: 0.6,
            },
            Moon {
                id: "ganymede",
                name: "Ganymede",
                texture: "textures/ganymede.jpg",
                size: 0.41,
                orbit_radius: 3.8,
                orbit_speed: 0.4,
            },
            Moon {
                id: "callisto",
                name: "Callisto",
                texture: "textures/callisto.jpg",
                size: 0.38,
                orbit_radius: 4.4,
                orbit_speed: 0.3,
            },
        ],
        rings: false,
        axial_tilt: 0.0,
    },
    Planet {
        id: "saturn",
        name: "Saturn",
        color: [0xF4, 0xA4, 0x60],
        size: 2.2,
        description: "Famous for its ring system of ice and rock. \
            It would float in water.",
        distance_from_sun: "1.43 billion km",
        diameter: "116,460 km",
        day_length: "10.7 hours",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "1.43 billion km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "116,460 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Beautiful rings",
                explanation: Some(
                    "Saturn's rings are billions of chunks of ice and rock, from grains of \
                     sand to pieces the size of a house. They span 280,000 km yet are only \
                     about 10 meters thick. Saturn is so light it would float in water.",
                ),
            },
        ],
        textures: TextureSet {
            main: Some("textures/saturn.jpg"),
            ring: Some("textures/saturn-ring.png"),
            ..TextureSet::NONE
        },
        moons: &[Moon {
            id: "titan",
            name: "Titan",
            texture: "textures/titan.webp",
            size: 0.40,
            orbit_radius: 3.5,
            orbit_speed: 0.35,
        }],
        rings: true,
        axial_tilt: 0.0,
    },
    Planet {
        id: "uranus",
        name: "Uranus",
        color: [0x4F, 0xD0, 0xE0],
        size: 1.8,
        description: "An ice giant that rolls around the Sun on its side. \
            Methane gives it a blue tint.",
        distance_from_sun: "2.87 billion km",
        diameter: "50,724 km",
        day_length: "17 hours",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "2.87 billion km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "50,724 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Spins on its side",
                explanation: Some(
                    "Uranus was probably knocked over by a collision early in its history. \
                     Its poles now point at the Sun in turn, giving each pole 42 years of \
                     daylight followed by 42 years of darkness.",
                ),
            },
        ],
        textures: TextureSet { main: Some("textures/uranus.jpg"), ..TextureSet::NONE },
        moons: &[],
        rings: false,
        axial_tilt: URANUS_TILT,
    },
    Planet {
        id: "neptune",
        name: "Neptune",
        color: [0x41, 0x69, 0xE1],
        size: 1.7,
        description: "The most distant planet, with the fastest winds in the solar system \
            at up to 2,100 km/h.",
        distance_from_sun: "4.50 billion km",
        diameter: "49,244 km",
        day_length: "16 hours",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "4.50 billion km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "49,244 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Strongest winds",
                explanation: Some(
                    "Neptune's winds reach 2,100 km/h, faster than sound. That is puzzling \
                     for a planet so far from the Sun, and scientists still do not fully \
                     understand where the energy comes from.",
                ),
            },
        ],
        textures: TextureSet { main: Some("textures/neptune.jpg"), ..TextureSet::NONE },
        moons: &[Moon {
            id: "triton",
            name: "Triton",
            texture: "textures/triton.jpg",
            size: 0.21,
            orbit_radius: 2.8,
            orbit_speed: 0.45,
        }],
        rings: false,
        axial_tilt: 0.0,
    },
    Planet {
        id: "pluto",
        name: "Pluto",
        color: [0xA8, 0x90, 0x80],
        size: 0.2,
        description: "Once the ninth planet, now a dwarf planet. \
            Has a heart-shaped ice plain called Tombaugh Regio.",
        distance_from_sun: "5.91 billion km",
        diameter: "2,377 km",
        day_length: "6.4 Earth days",
        facts: &[
            Fact {
                id: DISTANCE,
                title: "Distance from the Sun",
                value: "5.91 billion km",
                explanation: None,
            },
            Fact { id: DIAMETER, title: "Diameter", value: "2,377 km", explanation: None },
            Fact {
                id: HIGHLIGHT,
                title: "Highlight",
                value: "Dwarf planet since 2006",
                explanation: Some(
                    "Pluto was reclassified as a dwarf planet in 2006 because it has not \
                     cleared its orbit of other debris. It has five moons; the largest, \
                     Charon, is so big that the two circle each other like a double system.",
                ),
            },
        ],
        textures: TextureSet::NONE,
        moons: &[],
        rings: false,
        axial_tilt: 0.0,
    },
];
