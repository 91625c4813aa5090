//! Engine facade: one struct the display loop feeds each frame.
//!
//! Per tick, the current vector snapshot and camera state flow in; bounds
//! and grid recomputation run behind their throttles, the framing controller
//! advances, and the resulting plans are read back by the renderer on the
//! next paint. The engine never mutates the caller's vector set.

use crate::bounds::{estimate_bounds, SceneBounds};
use crate::camera::{CameraPlan, FramingController, FramingEvent};
use crate::constants::{GRID_RECOMPUTE_HZ, SPAN_RECOMPUTE_HZ};
use crate::grid::{resolve_grid_spacing, GridConfig, GridMode, GridSpacingPlan};
use crate::lod::{resolve_lod, LodConfig, LodFlags, LodPlan};
use crate::throttle::FrameThrottle;
use glam::Vec3;
use instant::Instant;
use smallvec::SmallVec;

/// Display toggles consumed from the settings panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewToggles {
    pub show_grid: bool,
    pub show_axes: bool,
    pub show_labels: bool,
}

impl Default for ViewToggles {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
            show_labels: true,
        }
    }
}

/// Injected configuration for the whole engine.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    pub fov_degrees: f32,
    pub grid_mode: GridMode,
    pub grid: GridConfig,
    pub lod: LodConfig,
    pub toggles: ViewToggles,
    /// Accessibility preference: collapse transition durations toward zero.
    pub reduced_motion: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            grid_mode: GridMode::default(),
            grid: GridConfig::default(),
            lod: LodConfig::default(),
            toggles: ViewToggles::default(),
            reduced_motion: false,
        }
    }
}

impl EngineConfig {
    pub fn with_fov(fov_degrees: f32) -> Self {
        Self {
            fov_degrees,
            ..Self::default()
        }
    }
}

/// Viewport adaptation engine. See module docs for the data flow.
#[derive(Debug)]
pub struct ViewportEngine {
    config: EngineConfig,
    framing: FramingController,
    grid_throttle: FrameThrottle,
    span_throttle: FrameThrottle,
    vectors: Vec<Vec3>,
    bounds: SceneBounds,
    grid_plan: GridSpacingPlan,
}

impl ViewportEngine {
    pub fn new(mut config: EngineConfig) -> Self {
        if !(config.fov_degrees.is_finite() && config.fov_degrees > 0.0) {
            config.fov_degrees = 50.0;
        }
        let bounds = SceneBounds::default();
        let mut framing = FramingController::new(config.fov_degrees);
        framing.set_reduced_motion(config.reduced_motion);
        let grid_plan = resolve_grid_spacing(
            &bounds,
            bounds.sphere_radius * 2.0,
            config.grid_mode,
            &config.grid,
        );
        Self {
            config,
            framing,
            grid_throttle: FrameThrottle::from_hz(GRID_RECOMPUTE_HZ),
            span_throttle: FrameThrottle::from_hz(SPAN_RECOMPUTE_HZ),
            vectors: Vec::new(),
            bounds,
            grid_plan,
        }
    }

    /// Advance one display frame.
    ///
    /// `vectors` is an immutable snapshot of the edited set; `camera_position`
    /// is the live camera eye (which the user may have orbited away from the
    /// planned pose). Returns a framing event when a transition completes.
    pub fn update(
        &mut self,
        vectors: &[Vec3],
        camera_position: Vec3,
        now: Instant,
    ) -> Option<FramingEvent> {
        if !same_snapshot(vectors, &self.vectors) {
            self.vectors.clear();
            self.vectors.extend_from_slice(vectors);
            self.bounds = estimate_bounds(vectors);
            log::debug!(
                "vector set changed ({} vectors, sphere radius {:.3})",
                vectors.len(),
                self.bounds.sphere_radius
            );
            self.framing.content_changed(&self.bounds, now);
            // stale spacing is worse than an early recompute
            self.grid_throttle.reset();
        }

        if self.config.toggles.show_grid && self.grid_throttle.ready(now) {
            let camera_distance = (camera_position - self.framing.current_plan().target).length();
            self.grid_plan = resolve_grid_spacing(
                &self.bounds,
                camera_distance,
                self.config.grid_mode,
                &self.config.grid,
            );
        }

        self.framing.tick(&self.bounds, now)
    }

    /// Whether plane-span meshes may recompute this frame (15 Hz cap).
    pub fn span_ready(&mut self, now: Instant) -> bool {
        self.span_throttle.ready(now)
    }

    /// Per-vector LOD plans for the current snapshot. `flags` pairs with the
    /// snapshot by index; missing entries read as defaults.
    pub fn lod_plans(
        &self,
        camera_position: Vec3,
        flags: &[LodFlags],
    ) -> SmallVec<[LodPlan; 8]> {
        let total = self.vectors.len();
        self.vectors
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let distance = (camera_position - *v).length();
                let f = flags.get(i).copied().unwrap_or_default();
                resolve_lod(*v, distance, f, i, total, &self.config.lod)
            })
            .collect()
    }

    // Imperative actions exposed to the UI layer.

    pub fn auto_frame(&mut self, now: Instant) {
        self.framing.auto_frame(now);
    }

    pub fn focus_on_vector(&mut self, vector: Vec3, distance: Option<f32>, now: Instant) {
        self.framing.focus_on(vector, distance, now);
    }

    pub fn reset_view(&mut self, now: Instant) {
        self.framing.reset_view(now);
    }

    /// Forwarded from the input layer whenever the user pans/rotates/zooms.
    pub fn notify_user_interaction(&mut self) {
        self.framing.notify_user_interaction();
    }

    // Read-back surface for the renderer.

    pub fn camera_plan(&self) -> CameraPlan {
        self.framing.current_plan()
    }

    pub fn grid_plan(&self) -> GridSpacingPlan {
        self.grid_plan
    }

    pub fn bounds(&self) -> &SceneBounds {
        &self.bounds
    }

    pub fn is_transitioning(&self) -> bool {
        self.framing.is_transitioning()
    }

    pub fn user_override(&self) -> bool {
        self.framing.user_override()
    }

    pub fn set_toggles(&mut self, toggles: ViewToggles) {
        self.config.toggles = toggles;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.config.reduced_motion = reduced;
        self.framing.set_reduced_motion(reduced);
    }
}

// Bitwise comparison so a NaN component (which never equals itself) cannot
// make an unchanged snapshot look perpetually new.
fn same_snapshot(a: &[Vec3], b: &[Vec3]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.x.to_bits() == y.x.to_bits()
                && x.y.to_bits() == y.y.to_bits()
                && x.z.to_bits() == y.z.to_bits()
        })
}
