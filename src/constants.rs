/// Viewport tuning constants.
///
/// These constants express intended behavior (fill factors, clamp limits,
/// band tables) and keep magic numbers out of the resolvers, improving
/// readability.
// Camera framing
pub const FRAME_FILL_FACTOR: f32 = 2.2; // sphere radii of slack inside the frustum
pub const FRAME_ELEVATION_DEG: f32 = 30.0; // default viewing elevation
pub const FRAME_AZIMUTH_DEG: f32 = 45.0; // default viewing azimuth
pub const FRAME_DISTANCE_MIN: f32 = 3.0;
pub const FRAME_MAGNITUDE_DISTANCE_FACTOR: f32 = 1.5; // never closer than 1.5x the largest vector
pub const ZOOM_MIN_MAGNITUDE_FACTOR: f32 = 0.01;
pub const ZOOM_MIN_FLOOR: f32 = 0.01;
pub const ZOOM_MAX_OPTIMAL_FACTOR: f32 = 20.0;
pub const ZOOM_MAX_MAGNITUDE_FACTOR: f32 = 50.0;
pub const ZOOM_MAX_FLOOR: f32 = 100.0;

// Transition durations (milliseconds)
pub const AUTO_FRAME_DURATION_MS: f64 = 1000.0;
pub const FOCUS_DURATION_MS: f64 = 800.0;
pub const RESET_DURATION_MS: f64 = 600.0;

// Focus framing
pub const FOCUS_DISTANCE_FACTOR: f32 = 2.5; // default focus distance per unit magnitude
pub const FOCUS_DISTANCE_MIN: f32 = 4.0;

// Scene bounds
pub const BOUNDS_DEFAULT_RADIUS: f32 = 2.0;
pub const BOUNDS_SPHERE_PADDING: f32 = 1.3;
pub const BOUNDS_DEGENERATE_RADIUS_FACTOR: f32 = 1.2; // replaces sub-unit spheres
pub const BOUNDS_AVG_MAGNITUDE_FLOOR: f32 = 0.1;

// Grid spacing
pub const GRID_SPACING_MIN: f32 = 0.001;
pub const GRID_SPACING_MAX: f32 = 1000.0;
pub const GRID_SECONDARY_DIVISIONS: f32 = 5.0; // secondary cells per primary cell
pub const GRID_CONTENT_DIVISOR: f32 = 4.0; // primary ~= avg magnitude / 4
pub const GRID_CAMERA_DIVISOR: f32 = 10.0; // primary ~= camera distance / 10
pub const GRID_HYBRID_RANGE_DIVISOR: f32 = 10.0; // content weight = range / 10, capped at 1
pub const GRID_EXTENT_CONTENT_FACTOR: f32 = 2.0;
pub const GRID_EXTENT_CELLS_MIN: f32 = 20.0;
pub const GRID_EXTENT_FLOOR: f32 = 10.0;

// Grid opacity mapping
pub const GRID_OPACITY_BASE: f32 = 0.35;
pub const GRID_OPACITY_SPACING_ATTEN: f32 = 0.12; // fade per decade of spacing
pub const GRID_OPACITY_DISTANCE_GAIN: f32 = 0.005; // boost per unit camera distance
pub const GRID_OPACITY_DISTANCE_GAIN_MAX: f32 = 0.5;
pub const GRID_OPACITY_MIN: f32 = 0.05;
pub const GRID_OPACITY_MAX: f32 = 0.9;
pub const GRID_SECONDARY_OPACITY_RATIO: f32 = 0.4;

// Level of detail
pub const LOD_BASE_THICKNESS: f32 = 0.02;
pub const LOD_BASE_SEGMENTS: u32 = 12;
pub const LOD_THICKNESS_FLOOR: f32 = 0.005;
pub const LOD_MAGNITUDE_GAIN: f32 = 0.3; // thickness gain per decade of magnitude
pub const LOD_MAGNITUDE_FACTOR_MAX: f32 = 2.5;
pub const LOD_DISTANCE_DIVISOR: f32 = 10.0;
pub const LOD_DISTANCE_FACTOR_MIN: f32 = 0.5;
pub const LOD_DISTANCE_FACTOR_MAX: f32 = 3.0;
pub const LOD_ACTIVE_BOOST: f32 = 1.5;
pub const LOD_EMPHASIS_BOOST: f32 = 1.2;
pub const LOD_OUTLINE_MAGNITUDE: f32 = 3.0; // outline glow threshold
pub const LOD_ANNOTATION_MAGNITUDE: f32 = 7.0; // secondary magnitude readout threshold

// Label placement
pub const LABEL_TIP_OVERSHOOT: f32 = 1.05; // labels sit just past the tip
pub const LABEL_BASE_OFFSET: f32 = 0.2;
pub const LABEL_FAN_STEP_RAD: f32 = 0.35; // per-index angular separation
pub const LABEL_FAN_RADIUS: f32 = 0.12;
pub const LABEL_SCALE_BASE: f32 = 1.0;
pub const LABEL_SCALE_MIN: f32 = 0.5;
pub const LABEL_SCALE_MAX: f32 = 2.5;

// Idle wiggle, a pure function of shared elapsed time and vector index
pub const WIGGLE_AMPLITUDE: f32 = 0.02;
pub const WIGGLE_FREQUENCY_HZ: f32 = 0.6;
pub const WIGGLE_INDEX_PHASE_RAD: f32 = 1.7;

// Recompute rates (Hz); display refresh stays decoupled
pub const GRID_RECOMPUTE_HZ: f32 = 10.0;
pub const SPAN_RECOMPUTE_HZ: f32 = 15.0;

// Default palette for displayed vectors, cycled by index
pub const DEFAULT_VECTOR_COLORS: [[f32; 3]; 6] = [
    [0.90, 0.35, 0.30], // red-ish
    [0.30, 0.75, 0.40], // green-ish
    [0.30, 0.50, 0.90], // blue-ish
    [0.90, 0.75, 0.25], // amber
    [0.70, 0.40, 0.85], // violet
    [0.30, 0.80, 0.80], // teal
];

// Accent palette for highlighted/derived vectors (eigenvectors, sums)
pub const ACCENT_COLORS: [[f32; 3]; 3] = [
    [1.00, 0.55, 0.20], // orange
    [0.95, 0.30, 0.60], // magenta
    [0.55, 0.90, 0.30], // lime
];

/// Color for a displayed vector by index, cycling through the palette.
#[inline]
pub fn vector_color(index: usize) -> [f32; 3] {
    DEFAULT_VECTOR_COLORS[index % DEFAULT_VECTOR_COLORS.len()]
}
