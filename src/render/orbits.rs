//! Gizmo line work: dashed guide lines and wireframe spheres.
//!
//! Everything here is a pure segment generator; systems in the views feed
//! the segments to `Gizmos::line`.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

/// Settings for the overview guide lines.
#[derive(Resource)]
pub struct GuideLineSettings {
    pub visible: bool,
    pub alpha: f32,
    /// Dash pattern in world units: draw `dash_on`, skip `dash_off`.
    pub dash_on: f32,
    pub dash_off: f32,
}

impl Default for GuideLineSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 0.1,
            dash_on: 6.0,
            dash_off: 0.0,
        }
    }
}

impl GuideLineSettings {
    pub fn color(&self) -> Color {
        Color::srgba(1.0, 1.0, 1.0, self.alpha)
    }
}

/// Split `start..end` into dashes. A non-positive gap yields one solid line.
pub fn dashed_segments(start: Vec3, end: Vec3, dash_on: f32, dash_off: f32) -> Vec<(Vec3, Vec3)> {
    let length = start.distance(end);
    if length <= f32::EPSILON {
        return Vec::new();
    }
    if dash_off <= 0.0 || dash_on <= 0.0 {
        return vec![(start, end)];
    }

    let direction = (end - start) / length;
    let mut segments = Vec::new();
    let mut t = 0.0;
    while t < length {
        let stop = (t + dash_on).min(length);
        segments.push((start + direction * t, start + direction * stop));
        t += dash_on + dash_off;
    }
    segments
}

/// Latitude rings and longitude meridians of a sphere, rotated by `rotation`.
///
/// `rings` counts latitude circles (poles excluded), `meridians` counts
/// half great circles. Each circle uses `resolution` segments.
pub fn wireframe_sphere_segments(
    center: Vec3,
    radius: f32,
    rotation: Quat,
    rings: u32,
    meridians: u32,
    resolution: u32,
) -> Vec<(Vec3, Vec3)> {
    let resolution = resolution.max(3);
    let point = |polar: f32, azimuth: f32| {
        let local = Vec3::new(
            polar.sin() * azimuth.cos(),
            polar.cos(),
            polar.sin() * azimuth.sin(),
        ) * radius;
        center + rotation * local
    };

    let mut segments = Vec::with_capacity(((rings + meridians) * resolution) as usize);

    for ring in 1..=rings {
        let polar = PI * ring as f32 / (rings + 1) as f32;
        for step in 0..resolution {
            let a = TAU * step as f32 / resolution as f32;
            let b = TAU * (step + 1) as f32 / resolution as f32;
            segments.push((point(polar, a), point(polar, b)));
        }
    }

    for meridian in 0..meridians {
        let azimuth = TAU * meridian as f32 / meridians.max(1) as f32;
        for step in 0..resolution {
            let a = PI * step as f32 / resolution as f32;
            let b = PI * (step + 1) as f32 / resolution as f32;
            segments.push((point(a, azimuth), point(b, azimuth)));
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dashes_cover_the_line_with_gaps() {
        let segs = dashed_segments(Vec3::ZERO, Vec3::new(25.0, 0.0, 0.0), 6.0, 4.0);
        assert_eq!(segs.len(), 3);
        assert_relative_eq!(segs[1].0.x, 10.0);
        assert_relative_eq!(segs[2].1.x, 25.0);
    }

    #[test]
    fn zero_gap_is_solid() {
        let segs = dashed_segments(Vec3::ZERO, Vec3::X, 1.0, 0.0);
        assert_eq!(segs, vec![(Vec3::ZERO, Vec3::X)]);
    }

    #[test]
    fn degenerate_line_draws_nothing() {
        assert!(dashed_segments(Vec3::ONE, Vec3::ONE, 1.0, 1.0).is_empty());
    }

    #[test]
    fn wireframe_points_lie_on_sphere() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let segs = wireframe_sphere_segments(center, 1.5, Quat::from_rotation_y(0.7), 6, 8, 16);
        assert_eq!(segs.len(), (6 + 8) * 16);
        for (a, b) in segs {
            assert_relative_eq!(a.distance(center), 1.5, epsilon = 1e-4);
            assert_relative_eq!(b.distance(center), 1.5, epsilon = 1e-4);
        }
    }
}
