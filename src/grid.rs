//! Grid spacing resolution.
//!
//! Two strategies coexist: the adaptive resolver (default), which derives
//! spacing from content statistics and/or camera distance through the nice
//! stepper, and the legacy fixed-band grid kept for smaller canvases and for
//! compatibility with existing saved configurations.

use crate::bounds::SceneBounds;
use crate::constants::{
    GRID_CAMERA_DIVISOR, GRID_CONTENT_DIVISOR, GRID_EXTENT_CELLS_MIN, GRID_EXTENT_CONTENT_FACTOR,
    GRID_EXTENT_FLOOR, GRID_HYBRID_RANGE_DIVISOR, GRID_OPACITY_BASE, GRID_OPACITY_DISTANCE_GAIN,
    GRID_OPACITY_DISTANCE_GAIN_MAX, GRID_OPACITY_MAX, GRID_OPACITY_MIN,
    GRID_OPACITY_SPACING_ATTEN, GRID_SECONDARY_DIVISIONS, GRID_SECONDARY_OPACITY_RATIO,
    GRID_SPACING_MAX, GRID_SPACING_MIN,
};
use crate::step::nice_step;

/// Spacing strategy for [`resolve_grid_spacing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridMode {
    /// Spacing follows the average content magnitude.
    Content,
    /// Spacing follows the camera distance.
    Camera,
    /// Blend of both, weighted by how much scale diversity the set has.
    #[default]
    Hybrid,
}

/// Clamp range for the adaptive resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub min_spacing: f32,
    pub max_spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_spacing: GRID_SPACING_MIN,
            max_spacing: GRID_SPACING_MAX,
        }
    }
}

/// Grid cell sizes, extent and opacities for one axis-aligned plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpacingPlan {
    pub primary_spacing: f32,
    pub secondary_spacing: f32,
    pub grid_extent: f32,
    pub primary_opacity: f32,
    pub secondary_opacity: f32,
}

/// Derive grid spacing from scene bounds and camera distance.
///
/// All inputs are floored before reaching the stepper, so the stepper's
/// positive-interval contract holds; a non-finite camera distance is treated
/// as absent (content statistics alone decide).
pub fn resolve_grid_spacing(
    bounds: &SceneBounds,
    camera_distance: f32,
    mode: GridMode,
    config: &GridConfig,
) -> GridSpacingPlan {
    let camera_distance = if camera_distance.is_finite() && camera_distance > 0.0 {
        camera_distance
    } else {
        bounds.sphere_radius * 2.0
    };

    let content_raw = (bounds.avg_magnitude / GRID_CONTENT_DIVISOR).max(config.min_spacing);
    let camera_raw = (camera_distance / GRID_CAMERA_DIVISOR).max(config.min_spacing);
    let content_spacing = nice_step(content_raw, true).unwrap_or(config.min_spacing);
    let camera_spacing = nice_step(camera_raw, true).unwrap_or(config.min_spacing);

    let chosen = match mode {
        GridMode::Content => content_spacing,
        GridMode::Camera => camera_spacing,
        GridMode::Hybrid => {
            let content_weight = (bounds.magnitude_range / GRID_HYBRID_RANGE_DIVISOR).min(1.0);
            let blended =
                content_spacing * content_weight + camera_spacing * (1.0 - content_weight);
            // re-snap: the blend of two nice values is rarely nice itself
            nice_step(blended.max(config.min_spacing), true).unwrap_or(camera_spacing)
        }
    };

    // The lower clamp leaves room for the /5 subdivision so the secondary
    // spacing also stays within the configured range.
    let lower = config.min_spacing * GRID_SECONDARY_DIVISIONS;
    let primary = chosen.clamp(lower, config.max_spacing.max(lower));
    let secondary = primary / GRID_SECONDARY_DIVISIONS;

    let extent_raw = (bounds.content_extent() * GRID_EXTENT_CONTENT_FACTOR)
        .max(primary * GRID_EXTENT_CELLS_MIN)
        .max(GRID_EXTENT_FLOOR);
    // whole number of primary cells
    let grid_extent = (extent_raw / primary).ceil() * primary;

    let decades_up = (primary.log10() + 3.0).max(0.0); // 0 at the finest spacing
    let spacing_atten = 1.0 / (1.0 + decades_up * GRID_OPACITY_SPACING_ATTEN);
    let distance_gain = 1.0
        + (camera_distance * GRID_OPACITY_DISTANCE_GAIN).min(GRID_OPACITY_DISTANCE_GAIN_MAX);
    let primary_opacity =
        (GRID_OPACITY_BASE * spacing_atten * distance_gain).clamp(GRID_OPACITY_MIN, GRID_OPACITY_MAX);

    GridSpacingPlan {
        primary_spacing: primary,
        secondary_spacing: secondary,
        grid_extent,
        primary_opacity,
        secondary_opacity: (primary_opacity * GRID_SECONDARY_OPACITY_RATIO)
            .clamp(GRID_OPACITY_MIN, GRID_OPACITY_MAX),
    }
}

/// One row of the legacy fixed-band grid table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedGridBand {
    /// Exclusive upper camera distance for this band.
    pub max_distance: f32,
    pub cell_size: f32,
    pub section_size: f32,
    pub grid_size: f32,
    pub cell_thickness: f32,
    pub section_thickness: f32,
}

/// Hand-tuned band table for the non-adaptive grid. Band boundaries and
/// values are load-bearing for existing saved configurations; do not retune.
pub const FIXED_GRID_BANDS: [FixedGridBand; 7] = [
    FixedGridBand {
        max_distance: 0.1,
        cell_size: 0.01,
        section_size: 0.05,
        grid_size: 2.0,
        cell_thickness: 0.5,
        section_thickness: 1.0,
    },
    FixedGridBand {
        max_distance: 0.5,
        cell_size: 0.05,
        section_size: 0.25,
        grid_size: 5.0,
        cell_thickness: 0.5,
        section_thickness: 1.0,
    },
    FixedGridBand {
        max_distance: 2.0,
        cell_size: 0.1,
        section_size: 0.5,
        grid_size: 10.0,
        cell_thickness: 0.5,
        section_thickness: 1.0,
    },
    FixedGridBand {
        max_distance: 10.0,
        cell_size: 0.5,
        section_size: 2.5,
        grid_size: 40.0,
        cell_thickness: 0.6,
        section_thickness: 1.2,
    },
    FixedGridBand {
        max_distance: 50.0,
        cell_size: 1.0,
        section_size: 5.0,
        grid_size: 100.0,
        cell_thickness: 0.6,
        section_thickness: 1.2,
    },
    FixedGridBand {
        max_distance: 200.0,
        cell_size: 5.0,
        section_size: 25.0,
        grid_size: 400.0,
        cell_thickness: 0.7,
        section_thickness: 1.4,
    },
    FixedGridBand {
        max_distance: f32::INFINITY,
        cell_size: 10.0,
        section_size: 50.0,
        grid_size: 1000.0,
        cell_thickness: 0.7,
        section_thickness: 1.4,
    },
];

/// Legacy non-adaptive grid lookup by camera distance.
pub fn fixed_grid_for_distance(camera_distance: f32) -> &'static FixedGridBand {
    // NaN reads as "right on top of the grid"; +inf falls through to the
    // coarsest band
    let camera_distance = if camera_distance.is_nan() {
        0.0
    } else {
        camera_distance.max(0.0)
    };
    for band in &FIXED_GRID_BANDS {
        if camera_distance < band.max_distance {
            return band;
        }
    }
    &FIXED_GRID_BANDS[FIXED_GRID_BANDS.len() - 1]
}
