//! Per-vector level of detail.
//!
//! Everything here is a pure function of the inputs; the idle wiggle takes
//! the shared elapsed time as a parameter instead of owning a timer, so
//! renders are reproducible under test.

use crate::constants::{
    LABEL_BASE_OFFSET, LABEL_FAN_RADIUS, LABEL_FAN_STEP_RAD, LABEL_SCALE_BASE, LABEL_SCALE_MAX,
    LABEL_SCALE_MIN, LABEL_TIP_OVERSHOOT, LOD_ACTIVE_BOOST, LOD_ANNOTATION_MAGNITUDE,
    LOD_BASE_SEGMENTS, LOD_BASE_THICKNESS, LOD_DISTANCE_DIVISOR, LOD_DISTANCE_FACTOR_MAX,
    LOD_DISTANCE_FACTOR_MIN, LOD_EMPHASIS_BOOST, LOD_MAGNITUDE_FACTOR_MAX, LOD_MAGNITUDE_GAIN,
    LOD_OUTLINE_MAGNITUDE, LOD_THICKNESS_FLOOR, WIGGLE_AMPLITUDE, WIGGLE_FREQUENCY_HZ,
    WIGGLE_INDEX_PHASE_RAD,
};
use glam::Vec3;
use std::f32::consts::TAU;

/// Render state flags for one displayed vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LodFlags {
    pub is_active: bool,
    pub is_emphasized: bool,
}

/// Geometry bases for the arrow meshes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LodConfig {
    pub base_thickness: f32,
    pub base_segments: u32,
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            base_thickness: LOD_BASE_THICKNESS,
            base_segments: LOD_BASE_SEGMENTS,
        }
    }
}

/// Render parameters for one displayed vector at the current distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LodPlan {
    pub thickness: f32,
    pub segment_count: u32,
    pub opacity: f32,
    pub label_offset: Vec3,
    pub label_scale: f32,
    pub intensity_scale: f32,
    /// Outline glow, only past magnitude 3.
    pub outline_glow: bool,
    /// Secondary magnitude readout next to the label, only past magnitude 7.
    pub magnitude_annotation: bool,
}

/// Resolve render thickness, tessellation, label placement and intensity for
/// one vector.
///
/// `index`/`total` position the label in a small angular fan so colocated
/// vectors' labels do not overlap.
pub fn resolve_lod(
    vector: Vec3,
    camera_distance_to_tip: f32,
    flags: LodFlags,
    index: usize,
    total: usize,
    config: &LodConfig,
) -> LodPlan {
    let magnitude = if vector.is_finite() { vector.length() } else { 0.0 };
    let distance = if camera_distance_to_tip.is_finite() {
        camera_distance_to_tip.max(0.0)
    } else {
        LOD_DISTANCE_DIVISOR
    };

    let magnitude_factor =
        (1.0 + magnitude.max(0.1).log10() * LOD_MAGNITUDE_GAIN).min(LOD_MAGNITUDE_FACTOR_MAX);
    let distance_factor = (distance / LOD_DISTANCE_DIVISOR)
        .clamp(LOD_DISTANCE_FACTOR_MIN, LOD_DISTANCE_FACTOR_MAX);
    let mut thickness = config.base_thickness * magnitude_factor * distance_factor;
    if flags.is_active {
        thickness *= LOD_ACTIVE_BOOST;
    }
    if flags.is_emphasized {
        thickness *= LOD_EMPHASIS_BOOST;
    }
    let thickness = thickness.max(LOD_THICKNESS_FLOOR);

    let base = config.base_segments;
    let segment_count = if distance < 5.0 {
        base.max(16)
    } else if distance < 15.0 {
        base
    } else if distance < 30.0 {
        ((base as f32 * 0.75) as u32).max(8)
    } else {
        (base / 2).max(6)
    };

    let direction = if magnitude < 1e-6 {
        Vec3::Y
    } else {
        vector / magnitude
    };
    let mut perp = direction.cross(Vec3::Y);
    if perp.length_squared() < 1e-6 {
        perp = direction.cross(Vec3::X);
    }
    let perp = perp.normalize();
    let bitangent = direction.cross(perp);
    // fan out around the tip, centered on the vector direction
    let fan = LABEL_FAN_STEP_RAD * (index as f32 - (total.saturating_sub(1)) as f32 * 0.5);
    let label_scale =
        (distance / LOD_DISTANCE_DIVISOR).clamp(LABEL_SCALE_MIN, LABEL_SCALE_MAX) * LABEL_SCALE_BASE;
    let label_offset = direction * (magnitude * LABEL_TIP_OVERSHOOT + LABEL_BASE_OFFSET)
        + (perp * fan.cos() + bitangent * fan.sin()) * LABEL_FAN_RADIUS * label_scale;

    let mut intensity: f32 = 1.0;
    if flags.is_active {
        intensity *= 1.25;
    }
    if flags.is_emphasized {
        intensity *= 1.15;
    }
    if magnitude > LOD_OUTLINE_MAGNITUDE {
        intensity *= 1.1;
    }
    let opacity = if flags.is_active { 1.0 } else { 0.9 };

    LodPlan {
        thickness,
        segment_count,
        opacity,
        label_offset,
        label_scale,
        intensity_scale: intensity.min(1.8),
        outline_glow: magnitude > LOD_OUTLINE_MAGNITUDE,
        magnitude_annotation: magnitude > LOD_ANNOTATION_MAGNITUDE,
    }
}

/// Idle wiggle displacement for a vector tip, a pure function of the shared
/// elapsed time and the vector's index (per-index phase keeps neighbors out
/// of sync).
pub fn wiggle_offset(elapsed_sec: f32, index: usize) -> Vec3 {
    let phase = index as f32 * WIGGLE_INDEX_PHASE_RAD;
    let t = elapsed_sec * WIGGLE_FREQUENCY_HZ * TAU + phase;
    Vec3::new(t.sin(), (t * 1.3).cos(), (t * 0.7).sin()) * WIGGLE_AMPLITUDE
}
