//! Thresholds shared by the fling controller and its drivers.
//!
//! Values are in pixels and pixels per second.

/// Releases slower than this are treated as having no velocity. Such a
/// release settles on the nearest item without a decay phase.
pub const MIN_DECAY_VELOCITY: f32 = 0.5;

/// Largest gap tolerated between a requested scroll delta and what the list
/// consumed. A larger gap means the list hit its edge.
pub const BOUNDARY_EPSILON: f32 = 0.5;

/// Maximum fling velocity in pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// One frame at 60Hz.
pub const DEFAULT_FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Upper bound on frames a synchronous fling may run.
pub const MAX_FLING_FRAMES: u32 = 10_000;
