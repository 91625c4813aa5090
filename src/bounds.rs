//! Scene bounds estimation over the current vector set.
//!
//! Bounds are recomputed fresh from a snapshot on every throttled tick and
//! never cached across unrelated sets. The origin always counts as content,
//! so a single vector still frames sensibly.

use crate::constants::{
    BOUNDS_AVG_MAGNITUDE_FLOOR, BOUNDS_DEFAULT_RADIUS, BOUNDS_DEGENERATE_RADIUS_FACTOR,
    BOUNDS_SPHERE_PADDING,
};
use glam::Vec3;

/// Spatial extent of the displayed vector set, plus the magnitude statistics
/// the grid resolver feeds on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
    pub center: Vec3,
    pub sphere_center: Vec3,
    pub sphere_radius: f32,
    pub max_magnitude: f32,
    pub avg_magnitude: f32,
    pub magnitude_range: f32,
}

impl Default for SceneBounds {
    /// Bounds used when no (finite) vectors exist: a unit-ish box around the
    /// origin so nothing downstream ever sees an empty or NaN extent.
    fn default() -> Self {
        Self {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
            center: Vec3::ZERO,
            sphere_center: Vec3::ZERO,
            sphere_radius: BOUNDS_DEFAULT_RADIUS,
            max_magnitude: 1.0,
            avg_magnitude: 1.0,
            magnitude_range: 0.0,
        }
    }
}

impl SceneBounds {
    /// Largest axis-aligned size of the content, read as the sphere diameter.
    #[inline]
    pub fn content_extent(&self) -> f32 {
        self.sphere_radius * 2.0
    }
}

/// Reduce a vector-tip snapshot to padded scene bounds.
///
/// Non-finite points are discarded before estimation; an effectively empty
/// set yields [`SceneBounds::default`]. The natural sphere radius is half the
/// box diagonal; sub-unit spheres are replaced by a floor of
/// `max(1.2 * max_magnitude, 2)` and everything else is padded by 1.3, which
/// keeps near-zero or origin-collinear sets from collapsing the framing.
pub fn estimate_bounds(points: &[Vec3]) -> SceneBounds {
    let mut min = Vec3::ZERO;
    let mut max = Vec3::ZERO;
    let mut max_mag = 0.0_f32;
    let mut min_mag = f32::INFINITY;
    let mut mag_sum = 0.0_f32;
    let mut counted = 0usize;
    for p in points {
        if !p.is_finite() {
            continue;
        }
        min = min.min(*p);
        max = max.max(*p);
        let mag = p.length();
        max_mag = max_mag.max(mag);
        min_mag = min_mag.min(mag);
        mag_sum += mag;
        counted += 1;
    }
    if counted == 0 {
        return SceneBounds::default();
    }

    let center = (min + max) * 0.5;
    let natural_radius = (max - min).length() * 0.5;
    let sphere_radius = if natural_radius < 1.0 {
        (max_mag * BOUNDS_DEGENERATE_RADIUS_FACTOR).max(BOUNDS_DEFAULT_RADIUS)
    } else {
        natural_radius * BOUNDS_SPHERE_PADDING
    };

    let avg_magnitude = (mag_sum / counted as f32).max(BOUNDS_AVG_MAGNITUDE_FLOOR);
    SceneBounds {
        min,
        max,
        center,
        sphere_center: center,
        sphere_radius,
        max_magnitude: max_mag,
        avg_magnitude,
        magnitude_range: (max_mag - min_mag).max(0.0),
    }
}
