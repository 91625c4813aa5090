//! Viewport adaptation engine for an educational 3D linear-algebra
//! visualizer.
//!
//! Given a live snapshot of user-edited vectors and the current camera
//! state, the engine estimates scene bounds, derives a camera pose with zoom
//! limits that keeps the content framed, resolves grid line spacing that
//! stays legible across orders of magnitude, and computes per-vector
//! level-of-detail parameters. All resolvers are pure functions of their
//! inputs; a reusable throttle bounds how often they re-run.

pub mod bounds;
pub mod camera;
pub mod constants;
pub mod engine;
pub mod grid;
pub mod lod;
pub mod step;
pub mod throttle;

pub use bounds::*;
pub use camera::*;
pub use engine::*;
pub use grid::*;
pub use lod::*;
pub use step::*;
pub use throttle::*;
