//! Static planet catalog.
//!
//! The catalog is built once at startup and never mutated. Every view reads
//! planets from the [`Catalog`] resource and addresses them by their `id`.

pub mod data;

use std::collections::HashSet;

use bevy::prelude::*;

pub use data::PLANETS;

/// Catalog index used when a lookup misses (Earth in the built-in data).
pub const DEFAULT_PLANET_INDEX: usize = 2;

/// A titled display value about a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fact {
    /// Stable slug, unique within the owning planet.
    pub id: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    /// Longer explanation. `None` disables the "more info" toggle.
    pub explanation: Option<&'static str>,
}

/// A moon circling its parent on a fixed circular path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moon {
    pub id: &'static str,
    pub name: &'static str,
    pub texture: &'static str,
    /// Relative size; the rendered radius is `size * 0.3`.
    pub size: f32,
    /// Distance from the planet center in scene units.
    pub orbit_radius: f32,
    /// Angular speed in radians per second.
    pub orbit_speed: f32,
}

/// Optional texture resources declared by a planet.
///
/// Paths are relative to the Bevy asset directory.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextureSet {
    pub main: Option<&'static str>,
    pub bump: Option<&'static str>,
    pub specular: Option<&'static str>,
    pub clouds: Option<&'static str>,
    pub clouds_alpha: Option<&'static str>,
    pub ring: Option<&'static str>,
}

impl TextureSet {
    /// A set that declares nothing; the planet renders in its flat color.
    pub const NONE: TextureSet = TextureSet {
        main: None,
        bump: None,
        specular: None,
        clouds: None,
        clouds_alpha: None,
        ring: None,
    };
}

/// Immutable planet record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planet {
    pub id: &'static str,
    pub name: &'static str,
    /// Fallback fill as sRGB bytes.
    pub color: [u8; 3],
    /// Relative size (Earth = 1.0).
    pub size: f32,
    pub description: &'static str,
    pub distance_from_sun: &'static str,
    pub diameter: &'static str,
    pub day_length: &'static str,
    pub facts: &'static [Fact],
    pub textures: TextureSet,
    pub moons: &'static [Moon],
    /// Whether a ring disc is drawn around the equator.
    pub rings: bool,
    /// Tilt of the rotation axis in radians, applied around the X axis.
    pub axial_tilt: f32,
}

impl Planet {
    /// Fallback color as a Bevy color.
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb_u8(r, g, b)
    }

    /// Whether any texture is declared for the planet surface.
    pub fn is_textured(&self) -> bool {
        self.textures.main.is_some()
    }
}

/// Violations of the catalog invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("planet at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate planet id '{0}'")]
    DuplicateId(String),

    #[error("planet '{id}' has non-positive size {size}")]
    InvalidSize { id: String, size: f32 },

    #[error("planet '{planet}' moon '{moon}' has invalid size or orbit radius")]
    InvalidMoon { planet: String, moon: String },

    #[error("planet '{0}' declares a cloud layer without a main texture")]
    CloudsWithoutTexture(String),

    #[error("planet '{planet}' has duplicate fact id '{fact}'")]
    DuplicateFact { planet: String, fact: String },
}

/// Ordered list of planets, injected as a resource at startup.
#[derive(Resource, Clone, Debug)]
pub struct Catalog {
    planets: Vec<Planet>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(PLANETS.to_vec())
    }
}

impl Catalog {
    pub fn new(planets: Vec<Planet>) -> Self {
        Self { planets }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Linear lookup by id.
    pub fn find(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Look up a planet, falling back to the default entry on a miss.
    ///
    /// Returns `None` only for an empty catalog.
    pub fn resolve(&self, id: &str) -> Option<&Planet> {
        self.find(id).or_else(|| {
            self.planets
                .get(DEFAULT_PLANET_INDEX)
                .or_else(|| self.planets.first())
        })
    }

    /// Check every invariant, collecting all violations.
    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        let errors = validate(&self.planets);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Collect every invariant violation in a list of planets.
pub fn validate(planets: &[Planet]) -> Vec<CatalogError> {
    let mut errors = Vec::new();

    if planets.is_empty() {
        errors.push(CatalogError::Empty);
        return errors;
    }

    let mut seen = HashSet::new();
    for (index, planet) in planets.iter().enumerate() {
        if planet.id.is_empty() {
            errors.push(CatalogError::EmptyId { index });
        } else if !seen.insert(planet.id) {
            errors.push(CatalogError::DuplicateId(planet.id.to_string()));
        }

        if planet.size.is_nan() || planet.size <= 0.0 {
            errors.push(CatalogError::InvalidSize {
                id: planet.id.to_string(),
                size: planet.size,
            });
        }

        if planet.textures.clouds.is_some() && planet.textures.main.is_none() {
            errors.push(CatalogError::CloudsWithoutTexture(planet.id.to_string()));
        }

        for moon in planet.moons {
            if !(moon.size > 0.0 && moon.orbit_radius > 0.0) {
                errors.push(CatalogError::InvalidMoon {
                    planet: planet.id.to_string(),
                    moon: moon.id.to_string(),
                });
            }
        }

        let mut fact_ids = HashSet::new();
        for fact in planet.facts {
            if !fact_ids.insert(fact.id) {
                errors.push(CatalogError::DuplicateFact {
                    planet: planet.id.to_string(),
                    fact: fact.id.to_string(),
                });
            }
        }
    }

    errors
}

/// Startup system that logs the catalog validation outcome.
///
/// Violations are reported but never abort the viewer.
pub fn log_catalog_validation(catalog: Res<Catalog>) {
    match catalog.validate() {
        Ok(()) => info!("Planet catalog loaded with {} entries", catalog.len()),
        Err(errors) => {
            for err in errors {
                error!("Planet catalog: {err}");
            }
        }
    }
}
