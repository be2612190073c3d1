//! Animation physics used by snapping flings.
//!
//! Two families of one-dimensional motion live here:
//!
//! * decays ([`SplineBasedDecaySpec`], [`ExponentialDecaySpec`]) that start
//!   with a velocity and coast to rest at a position determined by that
//!   velocity alone;
//! * springs ([`SpringSpec`]) that pull a value towards a fixed target.
//!
//! [`DecayAnimation`] and [`SpringAnimation`] bind a spec to initial
//! conditions and are sampled by play time. [`AnimationState`] turns frame
//! timestamps into play time for them.

pub mod animation;
pub mod decay;
pub mod spring;

pub use animation::{Animation, AnimationState, DecayAnimation, SpringAnimation};
pub use decay::{
    ExponentialDecaySpec, FlingCalculator, FlingInfo, FlingSpline, FloatDecayAnimationSpec,
    SplineBasedDecaySpec, SplineSample,
};
pub use spring::{Motion, SpringSimulation, SpringSpec};

pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
