//! Animations bound to their initial conditions, sampled by play time.

use std::fmt;
use std::rc::Rc;

use crate::decay::FloatDecayAnimationSpec;
use crate::spring::{Motion, SpringSimulation, SpringSpec};
use crate::NANOS_PER_MILLI;

/// Springs that never settle are cut off after this long.
const MAX_SPRING_DURATION_MILLIS: i64 = 60_000;

/// A one-dimensional animation with a known end.
pub trait Animation {
    fn value_from_nanos(&self, play_time_nanos: i64) -> f32;

    fn velocity_from_nanos(&self, play_time_nanos: i64) -> f32;

    fn duration_nanos(&self) -> i64;

    fn target_value(&self) -> f32;

    fn is_finished_from_nanos(&self, play_time_nanos: i64) -> bool {
        play_time_nanos >= self.duration_nanos()
    }
}

/// A decay started from a given value and velocity.
#[derive(Clone)]
pub struct DecayAnimation {
    spec: Rc<dyn FloatDecayAnimationSpec>,
    initial_value: f32,
    initial_velocity: f32,
    duration_nanos: i64,
    target_value: f32,
}

impl DecayAnimation {
    pub fn new(
        spec: Rc<dyn FloatDecayAnimationSpec>,
        initial_value: f32,
        initial_velocity: f32,
    ) -> Self {
        let duration_nanos = spec.duration_nanos(initial_value, initial_velocity).max(0);
        let target_value = spec.target_value(initial_value, initial_velocity);
        Self {
            spec,
            initial_value,
            initial_velocity,
            duration_nanos,
            target_value,
        }
    }

    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity
    }
}

impl Animation for DecayAnimation {
    fn value_from_nanos(&self, play_time_nanos: i64) -> f32 {
        if self.is_finished_from_nanos(play_time_nanos) {
            return self.target_value;
        }
        self.spec
            .value_from_nanos(play_time_nanos, self.initial_value, self.initial_velocity)
    }

    fn velocity_from_nanos(&self, play_time_nanos: i64) -> f32 {
        if self.is_finished_from_nanos(play_time_nanos) {
            return 0.0;
        }
        self.spec
            .velocity_from_nanos(play_time_nanos, self.initial_value, self.initial_velocity)
    }

    fn duration_nanos(&self) -> i64 {
        self.duration_nanos
    }

    fn target_value(&self) -> f32 {
        self.target_value
    }
}

impl fmt::Debug for DecayAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecayAnimation")
            .field("initial_value", &self.initial_value)
            .field("initial_velocity", &self.initial_velocity)
            .field("duration_nanos", &self.duration_nanos)
            .field("target_value", &self.target_value)
            .finish()
    }
}

/// A spring from `initial_value` to `target_value`.
///
/// At and after its duration the animation reports exactly the target with
/// zero velocity, so a settled spring never leaves a fractional remainder.
#[derive(Debug, Clone, Copy)]
pub struct SpringAnimation {
    spec: SpringSpec,
    simulation: SpringSimulation,
    initial_value: f32,
    initial_velocity: f32,
    duration_nanos: i64,
}

impl SpringAnimation {
    pub fn new(
        spec: SpringSpec,
        initial_value: f32,
        target_value: f32,
        initial_velocity: f32,
    ) -> Self {
        let simulation = spec.simulation(target_value);
        let duration_millis = settle_duration_millis(
            &simulation,
            initial_value,
            initial_velocity,
            spec.visibility_threshold,
        );
        Self {
            spec,
            simulation,
            initial_value,
            initial_velocity,
            duration_nanos: duration_millis * NANOS_PER_MILLI,
        }
    }

    pub fn spec(&self) -> &SpringSpec {
        &self.spec
    }

    fn motion_at(&self, play_time_nanos: i64) -> Motion {
        self.simulation.motion_at(
            self.initial_value,
            self.initial_velocity,
            play_time_nanos as f64 / NANOS_PER_MILLI as f64,
        )
    }
}

/// First whole millisecond at which the spring is at rest.
fn settle_duration_millis(
    simulation: &SpringSimulation,
    initial_value: f32,
    initial_velocity: f32,
    threshold: f32,
) -> i64 {
    let mut millis = 0;
    while millis < MAX_SPRING_DURATION_MILLIS {
        let motion = simulation.motion_at(initial_value, initial_velocity, millis as f64);
        if simulation.is_at_rest(motion, threshold) {
            return millis;
        }
        millis += 1;
    }
    log::warn!(
        "spring towards {} did not settle within {}ms",
        simulation.final_position(),
        MAX_SPRING_DURATION_MILLIS
    );
    MAX_SPRING_DURATION_MILLIS
}

impl Animation for SpringAnimation {
    fn value_from_nanos(&self, play_time_nanos: i64) -> f32 {
        if self.is_finished_from_nanos(play_time_nanos) {
            return self.simulation.final_position();
        }
        self.motion_at(play_time_nanos).value
    }

    fn velocity_from_nanos(&self, play_time_nanos: i64) -> f32 {
        if self.is_finished_from_nanos(play_time_nanos) {
            return 0.0;
        }
        self.motion_at(play_time_nanos).velocity
    }

    fn duration_nanos(&self) -> i64 {
        self.duration_nanos
    }

    fn target_value(&self) -> f32 {
        self.simulation.final_position()
    }
}

/// Tracks a running animation across frames.
///
/// The first frame seen becomes play time zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    pub value: f32,
    pub velocity: f32,
    start_time_nanos: Option<u64>,
    last_frame_time_nanos: Option<u64>,
    finished: bool,
}

impl AnimationState {
    pub fn new(value: f32, velocity: f32) -> Self {
        Self {
            value,
            velocity,
            ..Self::default()
        }
    }

    /// Samples `animation` at `frame_time_nanos`. Returns true once finished.
    pub fn advance<A: Animation + ?Sized>(&mut self, animation: &A, frame_time_nanos: u64) -> bool {
        let start = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let play_time = frame_time_nanos.saturating_sub(start) as i64;
        self.last_frame_time_nanos = Some(frame_time_nanos);
        self.value = animation.value_from_nanos(play_time);
        self.velocity = animation.velocity_from_nanos(play_time);
        self.finished = animation.is_finished_from_nanos(play_time);
        self.finished
    }

    pub fn is_running(&self) -> bool {
        self.start_time_nanos.is_some() && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_frame_time_nanos(&self) -> Option<u64> {
        self.last_frame_time_nanos
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
