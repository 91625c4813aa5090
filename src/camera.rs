//! Camera framing: optimal pose derivation and the Idle/Transitioning state
//! machine that eases the camera toward it.
//!
//! The controller never reads a hidden clock; callers pass `now` explicitly
//! (same pattern as the engine tick), which keeps transitions deterministic
//! under test. User interaction arrives as an explicit event rather than an
//! orbit-library callback, so any input layer can drive it.

use crate::bounds::SceneBounds;
use crate::constants::{
    AUTO_FRAME_DURATION_MS, FOCUS_DISTANCE_FACTOR, FOCUS_DISTANCE_MIN, FOCUS_DURATION_MS,
    FRAME_AZIMUTH_DEG, FRAME_DISTANCE_MIN, FRAME_ELEVATION_DEG, FRAME_FILL_FACTOR,
    FRAME_MAGNITUDE_DISTANCE_FACTOR, RESET_DURATION_MS, ZOOM_MAX_FLOOR, ZOOM_MAX_MAGNITUDE_FACTOR,
    ZOOM_MAX_OPTIMAL_FACTOR, ZOOM_MIN_FLOOR, ZOOM_MIN_MAGNITUDE_FACTOR,
};
use glam::Vec3;
use instant::Instant;

/// Camera pose and orbit zoom limits handed to the rendering front end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPlan {
    pub position: Vec3,
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
}

/// Notification emitted by [`FramingController::tick`] to collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramingEvent {
    TransitionComplete,
}

/// Compute the optimal framing for the given bounds and a vertical
/// field-of-view in degrees.
///
/// The viewing direction is a fixed 30 degree elevation at 45 degree azimuth
/// around the scene center, so reframing the same content always lands on
/// the same pose.
pub fn compute_camera_plan(bounds: &SceneBounds, fov_degrees: f32) -> CameraPlan {
    let fov = fov_degrees.clamp(1.0, 179.0).to_radians();
    let fit_distance = (bounds.sphere_radius * FRAME_FILL_FACTOR) / (fov * 0.5).tan();
    let optimal = fit_distance
        .max(bounds.max_magnitude * FRAME_MAGNITUDE_DISTANCE_FACTOR)
        .max(FRAME_DISTANCE_MIN);
    let min_distance = (bounds.max_magnitude * ZOOM_MIN_MAGNITUDE_FACTOR).max(ZOOM_MIN_FLOOR);
    let max_distance = (optimal * ZOOM_MAX_OPTIMAL_FACTOR)
        .max(bounds.max_magnitude * ZOOM_MAX_MAGNITUDE_FACTOR)
        .max(ZOOM_MAX_FLOOR);

    let elevation = FRAME_ELEVATION_DEG.to_radians();
    let azimuth = FRAME_AZIMUTH_DEG.to_radians();
    let direction = Vec3::new(
        elevation.cos() * azimuth.sin(),
        elevation.sin(),
        elevation.cos() * azimuth.cos(),
    );
    CameraPlan {
        position: bounds.sphere_center + direction * optimal,
        target: bounds.sphere_center,
        min_distance,
        max_distance,
    }
}

/// Framing for a single vector tip viewed from `distance` away.
///
/// A zero-length vector falls back to the Y axis as the perpendicular
/// reference so the cross product never degenerates.
pub fn compute_focus_plan(vector: Vec3, distance: Option<f32>, _fov_degrees: f32) -> CameraPlan {
    let magnitude = vector.length();
    let direction = if magnitude < 1e-6 {
        Vec3::Y
    } else {
        vector / magnitude
    };
    let mut side = direction.cross(Vec3::Y);
    if side.length_squared() < 1e-6 {
        // vector is (anti)parallel to Y
        side = direction.cross(Vec3::X);
    }
    let side = side.normalize();
    let offset = (side * 0.6 + Vec3::Y * 0.5 + direction * 0.45).normalize();

    let min_distance = (magnitude * ZOOM_MIN_MAGNITUDE_FACTOR).max(ZOOM_MIN_FLOOR);
    let wanted =
        distance.unwrap_or((magnitude * FOCUS_DISTANCE_FACTOR).max(FOCUS_DISTANCE_MIN));
    let wanted = wanted.max(min_distance);
    let max_distance = (wanted * ZOOM_MAX_OPTIMAL_FACTOR)
        .max(magnitude * ZOOM_MAX_MAGNITUDE_FACTOR)
        .max(ZOOM_MAX_FLOOR);
    CameraPlan {
        position: vector + offset * wanted,
        target: vector,
        min_distance,
        max_distance,
    }
}

/// Cubic ease-out, `1 - (1 - t)^3`.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Clone, Copy, Debug)]
enum Destination {
    FrameContent,
    Focus { vector: Vec3, distance: Option<f32> },
    DefaultView,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    start_position: Vec3,
    start_target: Vec3,
    started: Instant,
    duration_ms: f64,
    destination: Destination,
}

/// Idle/Transitioning camera state machine.
///
/// Automatic reframes (on content change) are suppressed while the user
/// override flag is set; explicit actions always run. A new transition
/// replaces any in-flight one, never queues behind it.
#[derive(Debug)]
pub struct FramingController {
    fov_degrees: f32,
    reduced_motion: bool,
    position: Vec3,
    target: Vec3,
    min_distance: f32,
    max_distance: f32,
    user_override: bool,
    framed_once: bool,
    transition: Option<Transition>,
}

impl FramingController {
    pub fn new(fov_degrees: f32) -> Self {
        let plan = compute_camera_plan(&SceneBounds::default(), fov_degrees);
        Self {
            fov_degrees,
            reduced_motion: false,
            position: plan.position,
            target: plan.target,
            min_distance: plan.min_distance,
            max_distance: plan.max_distance,
            user_override: false,
            framed_once: false,
            transition: None,
        }
    }

    /// When set, transitions collapse to zero duration but still run to
    /// completion, so the final pose and the completion event are preserved.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// The pose and zoom limits currently presented to the renderer.
    pub fn current_plan(&self) -> CameraPlan {
        CameraPlan {
            position: self.position,
            target: self.target,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn user_override(&self) -> bool {
        self.user_override
    }

    /// The user grabbed the camera (pan/rotate/zoom). Does not interrupt a
    /// running transition, but suppresses new automatic ones until an
    /// explicit auto-frame or reset clears the flag.
    pub fn notify_user_interaction(&mut self) {
        if !self.user_override {
            log::debug!("user override engaged; automatic reframing suppressed");
        }
        self.user_override = true;
    }

    /// The vector set changed. First framing applies instantly; later ones
    /// ease over the auto-frame duration unless the user holds the camera.
    pub fn content_changed(&mut self, bounds: &SceneBounds, now: Instant) {
        if self.user_override {
            return;
        }
        if !self.framed_once {
            let plan = compute_camera_plan(bounds, self.fov_degrees);
            self.apply(plan);
            self.framed_once = true;
            return;
        }
        self.begin(Destination::FrameContent, AUTO_FRAME_DURATION_MS, now);
    }

    /// Explicit auto-frame request; clears the user override.
    pub fn auto_frame(&mut self, now: Instant) {
        self.user_override = false;
        self.framed_once = true;
        self.begin(Destination::FrameContent, AUTO_FRAME_DURATION_MS, now);
    }

    /// Ease toward a single vector tip. Runs regardless of the override
    /// (explicit action), but leaves the flag as-is.
    pub fn focus_on(&mut self, vector: Vec3, distance: Option<f32>, now: Instant) {
        let vector = if vector.is_finite() { vector } else { Vec3::ZERO };
        self.framed_once = true;
        self.begin(Destination::Focus { vector, distance }, FOCUS_DURATION_MS, now);
    }

    /// Return to the default view; clears the user override.
    pub fn reset_view(&mut self, now: Instant) {
        self.user_override = false;
        self.framed_once = true;
        self.begin(Destination::DefaultView, RESET_DURATION_MS, now);
    }

    /// Advance the transition, if any. The destination plan is recomputed
    /// from the live bounds every tick so zoom limits keep tracking content
    /// even mid-flight.
    pub fn tick(&mut self, bounds: &SceneBounds, now: Instant) -> Option<FramingEvent> {
        let tr = self.transition?;
        let plan = match tr.destination {
            Destination::FrameContent => compute_camera_plan(bounds, self.fov_degrees),
            Destination::Focus { vector, distance } => {
                compute_focus_plan(vector, distance, self.fov_degrees)
            }
            Destination::DefaultView => {
                compute_camera_plan(&SceneBounds::default(), self.fov_degrees)
            }
        };
        self.min_distance = plan.min_distance;
        self.max_distance = plan.max_distance;

        let elapsed_ms = now.saturating_duration_since(tr.started).as_secs_f64() * 1000.0;
        let progress = if tr.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / tr.duration_ms).min(1.0)
        };
        let eased = ease_out_cubic(progress as f32);
        self.position = tr.start_position.lerp(plan.position, eased);
        self.target = tr.start_target.lerp(plan.target, eased);

        if progress >= 1.0 {
            self.transition = None;
            log::debug!("camera transition complete at {:?}", self.position);
            return Some(FramingEvent::TransitionComplete);
        }
        None
    }

    fn begin(&mut self, destination: Destination, duration_ms: f64, now: Instant) {
        let duration_ms = if self.reduced_motion { 0.0 } else { duration_ms };
        self.transition = Some(Transition {
            start_position: self.position,
            start_target: self.target,
            started: now,
            duration_ms,
            destination,
        });
    }

    fn apply(&mut self, plan: CameraPlan) {
        self.position = plan.position;
        self.target = plan.target;
        self.min_distance = plan.min_distance;
        self.max_distance = plan.max_distance;
        self.transition = None;
    }
}
