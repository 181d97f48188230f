//! Texture requests and resolution.
//!
//! A planet declares up to five surface resources (main, bump, specular,
//! clouds, ring) plus one texture per moon. Views turn those declarations into
//! [`TextureRequest`]s, ask the [`TextureLoader`] for handles, and poll until
//! every request has either loaded or failed. A failed resource is treated
//! exactly like one that was never declared.

use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::catalog::Planet;

/// What a texture is used for on the planet model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureRole {
    Main,
    Bump,
    Specular,
    Clouds,
    Ring,
    /// Surface of the moon at this index in `Planet::moons`.
    Moon(usize),
}

/// One resource to fetch for a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureRequest {
    pub role: TextureRole,
    pub path: &'static str,
}

/// Load status reported by the loader for a single resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStatus {
    Loading,
    Ready,
    Failed,
}

/// Surface resources for a planet in fixed role order.
///
/// Empty when the planet has no main texture: such planets render flat and
/// must not touch the loader at all.
pub fn texture_requests(planet: &Planet) -> Vec<TextureRequest> {
    let Some(main) = planet.textures.main else {
        return Vec::new();
    };

    let t = &planet.textures;
    [
        (TextureRole::Main, Some(main)),
        (TextureRole::Bump, t.bump),
        (TextureRole::Specular, t.specular),
        (TextureRole::Clouds, t.clouds),
        (TextureRole::Ring, t.ring),
    ]
    .into_iter()
    .filter_map(|(role, path)| path.map(|path| TextureRequest { role, path }))
    .collect()
}

/// Moon surface resources, only for planets that render textured.
pub fn moon_texture_requests(planet: &Planet) -> Vec<TextureRequest> {
    if !planet.is_textured() {
        return Vec::new();
    }
    planet
        .moons
        .iter()
        .enumerate()
        .map(|(index, moon)| TextureRequest {
            role: TextureRole::Moon(index),
            path: moon.texture,
        })
        .collect()
}

/// Resources that finished loading, keyed by role.
///
/// Generic over the handle type so resolution can be exercised without an
/// asset server.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTextures<H> {
    pub main: Option<H>,
    pub bump: Option<H>,
    pub clouds: Option<H>,
    pub ring: Option<H>,
    pub moons: HashMap<usize, H>,
}

impl<H> Default for ResolvedTextures<H> {
    fn default() -> Self {
        Self {
            main: None,
            bump: None,
            clouds: None,
            ring: None,
            moons: HashMap::new(),
        }
    }
}

impl<H> ResolvedTextures<H> {
    fn insert(&mut self, role: TextureRole, handle: H) {
        match role {
            TextureRole::Main => self.main = Some(handle),
            TextureRole::Bump => self.bump = Some(handle),
            // Fetched with the rest of the set but not used by the material.
            TextureRole::Specular => {}
            TextureRole::Clouds => self.clouds = Some(handle),
            TextureRole::Ring => self.ring = Some(handle),
            TextureRole::Moon(index) => {
                self.moons.insert(index, handle);
            }
        }
    }
}

/// Outcome of polling a set of pending requests.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<H> {
    /// At least one request is still loading.
    Pending,
    /// Every request settled. Failed roles are absent from `textures`.
    Settled {
        textures: ResolvedTextures<H>,
        failed: Vec<TextureRole>,
    },
}

/// Poll pending requests. Nothing is resolved until all of them settle.
pub fn resolve<H: Clone>(
    pending: &[(TextureRole, H)],
    mut status: impl FnMut(&H) -> TextureStatus,
) -> Resolution<H> {
    let mut textures = ResolvedTextures::default();
    let mut failed = Vec::new();

    for (role, handle) in pending {
        match status(handle) {
            TextureStatus::Loading => return Resolution::Pending,
            TextureStatus::Ready => textures.insert(*role, handle.clone()),
            TextureStatus::Failed => failed.push(*role),
        }
    }

    Resolution::Settled { textures, failed }
}

/// Handles a view is waiting on. Dropping the component drops the interest.
#[derive(Component, Clone, Debug, Default)]
pub struct PendingTextures {
    pub requests: Vec<(TextureRole, Handle<Image>)>,
}

/// Asset-server backed texture collaborator.
///
/// Caches one handle per path so revisiting a planet reuses the image the
/// asset server already holds.
#[derive(Resource, Default)]
pub struct TextureLoader {
    cache: HashMap<&'static str, Handle<Image>>,
}

impl TextureLoader {
    /// Request every resource and return the pending set.
    pub fn request_all(
        &mut self,
        asset_server: &AssetServer,
        requests: &[TextureRequest],
    ) -> PendingTextures {
        PendingTextures {
            requests: requests
                .iter()
                .map(|req| (req.role, self.request(asset_server, req.path)))
                .collect(),
        }
    }

    pub fn request(&mut self, asset_server: &AssetServer, path: &'static str) -> Handle<Image> {
        self.cache
            .entry(path)
            .or_insert_with(|| {
                debug!("Loading texture {path}");
                asset_server.load(path)
            })
            .clone()
    }
}

/// Map the asset server's load state onto [`TextureStatus`].
pub fn texture_status(asset_server: &AssetServer, handle: &Handle<Image>) -> TextureStatus {
    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => TextureStatus::Ready,
        Some(LoadState::Failed(_)) | None => TextureStatus::Failed,
        Some(_) => TextureStatus::Loading,
    }
}

/// Log every role that failed to load.
pub fn report_failures(owner: &str, failed: &[TextureRole]) {
    for role in failed {
        warn!("Texture {:?} for '{}' failed to load, using flat fallback", role, owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn planet(id: &str) -> Planet {
        *Catalog::default().find(id).unwrap()
    }

    #[test]
    fn requests_follow_role_order() {
        let roles: Vec<_> = texture_requests(&planet("earth")).iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            [
                TextureRole::Main,
                TextureRole::Bump,
                TextureRole::Specular,
                TextureRole::Clouds
            ]
        );

        let roles: Vec<_> = texture_requests(&planet("saturn")).iter().map(|r| r.role).collect();
        assert_eq!(roles, [TextureRole::Main, TextureRole::Ring]);
    }

    #[test]
    fn full_texture_set_requests_every_role() {
        let planet = crate::test_utils::fixtures::textured_planet("full");
        let roles: Vec<_> = texture_requests(&planet).iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            [
                TextureRole::Main,
                TextureRole::Bump,
                TextureRole::Specular,
                TextureRole::Clouds,
                TextureRole::Ring
            ]
        );
        assert_eq!(moon_texture_requests(&planet).len(), 1);
    }

    #[test]
    fn untextured_planet_requests_nothing() {
        let pluto = planet("pluto");
        assert!(texture_requests(&pluto).is_empty());
        assert!(moon_texture_requests(&pluto).is_empty());
    }

    #[test]
    fn moon_requests_are_indexed() {
        let requests = moon_texture_requests(&planet("jupiter"));
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[2].role, TextureRole::Moon(2));
        assert_eq!(requests[2].path, "textures/ganymede.jpg");
    }

    #[test]
    fn resolve_waits_for_every_request() {
        let pending = [(TextureRole::Main, "a"), (TextureRole::Bump, "b")];
        let result = resolve(&pending, |h| {
            if *h == "a" { TextureStatus::Ready } else { TextureStatus::Loading }
        });
        assert_eq!(result, Resolution::Pending);
    }

    #[test]
    fn failed_roles_are_dropped() {
        let pending = [
            (TextureRole::Main, "a"),
            (TextureRole::Clouds, "c"),
            (TextureRole::Moon(0), "m"),
        ];
        let Resolution::Settled { textures, failed } = resolve(&pending, |h| {
            if *h == "c" { TextureStatus::Failed } else { TextureStatus::Ready }
        }) else {
            panic!("expected settled resolution");
        };
        assert_eq!(textures.main, Some("a"));
        assert_eq!(textures.clouds, None);
        assert_eq!(textures.moons.get(&0), Some(&"m"));
        assert_eq!(failed, vec![TextureRole::Clouds]);
    }

    #[test]
    fn loaded_specular_map_is_not_surfaced() {
        let pending = [(TextureRole::Main, "a"), (TextureRole::Specular, "s")];
        let result = resolve(&pending, |_| TextureStatus::Ready);
        assert_eq!(
            result,
            Resolution::Settled {
                textures: ResolvedTextures { main: Some("a"), ..Default::default() },
                failed: vec![],
            }
        );
    }

    #[test]
    fn empty_request_set_settles_immediately() {
        let pending: [(TextureRole, u32); 0] = [];
        assert_eq!(
            resolve(&pending, |_| TextureStatus::Loading),
            Resolution::Settled { textures: ResolvedTextures::default(), failed: vec![] }
        );
    }
}
