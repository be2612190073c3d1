//! Decay specs: motion that starts with a velocity and coasts to rest.
//!
//! [`SplineBasedDecaySpec`] reproduces the Android scroller spline that
//! platform lists fling with. [`ExponentialDecaySpec`] is a simple friction
//! decay whose resting position is easy to predict, which makes it the
//! natural choice when tests need exact fling distances.

use std::sync::LazyLock;

use crate::NANOS_PER_MILLI;

const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

const SAMPLE_COUNT: usize = 100;

/// Normalised distance travelled at each of the evenly spaced spline times.
static SPLINE_POSITIONS: LazyLock<[f32; SAMPLE_COUNT + 1]> = LazyLock::new(|| {
    let mut positions = [0.0f32; SAMPLE_COUNT + 1];
    let mut x_min = 0.0f32;

    for (i, slot) in positions.iter_mut().take(SAMPLE_COUNT).enumerate() {
        let alpha = i as f32 / SAMPLE_COUNT as f32;

        // Bisect for the bezier parameter whose time component equals alpha.
        let mut x_max = 1.0f32;
        let (x, coef) = loop {
            let x_mid = x_min + (x_max - x_min) / 2.0;
            let c = 3.0 * x_mid * (1.0 - x_mid);
            let tx = c * ((1.0 - x_mid) * P1 + x_mid * P2) + x_mid * x_mid * x_mid;
            if (tx - alpha).abs() < 1e-5 {
                break (x_mid, c);
            }
            if tx > alpha {
                x_max = x_mid;
            } else {
                x_min = x_mid;
            }
        };
        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }
    positions[SAMPLE_COUNT] = 1.0;
    positions
});

/// A point on the fling spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    /// Fraction of the total fling distance covered, in `0.0..=1.0`.
    pub distance: f32,
    /// Slope of the distance curve at this point.
    pub velocity: f32,
}

/// The Android scroller fling curve.
pub struct FlingSpline;

impl FlingSpline {
    /// Samples the curve at `time`, a fraction of the fling duration.
    pub fn sample(time: f32) -> SplineSample {
        let time = time.clamp(0.0, 1.0);
        let index = (SAMPLE_COUNT as f32 * time) as usize;
        if index >= SAMPLE_COUNT {
            return SplineSample {
                distance: 1.0,
                velocity: 0.0,
            };
        }

        let t_inf = index as f32 / SAMPLE_COUNT as f32;
        let t_sup = (index + 1) as f32 / SAMPLE_COUNT as f32;
        let d_inf = SPLINE_POSITIONS[index];
        let d_sup = SPLINE_POSITIONS[index + 1];
        let velocity = (d_sup - d_inf) / (t_sup - t_inf);
        SplineSample {
            distance: d_inf + (time - t_inf) * velocity,
            velocity,
        }
    }

    /// Natural log of the deceleration for `velocity` under `friction`.
    pub fn deceleration(velocity: f32, friction: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64 / friction as f64).ln()
    }
}

const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// `ln(0.78) / ln(0.9)`
const DECELERATION_RATE: f64 = 2.358_201_6;

fn physical_coefficient(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Distance and duration of a single spline fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingInfo {
    pub initial_velocity: f32,
    /// Unsigned distance in pixels.
    pub distance: f32,
    pub duration_millis: i64,
}

impl FlingInfo {
    fn progress(&self, time_millis: i64) -> f32 {
        if self.duration_millis > 0 {
            time_millis as f32 / self.duration_millis as f32
        } else {
            1.0
        }
    }

    /// Signed offset from the start after `time_millis`.
    pub fn position(&self, time_millis: i64) -> f32 {
        self.distance
            * self.initial_velocity.signum()
            * FlingSpline::sample(self.progress(time_millis)).distance
    }

    /// Velocity in px/s after `time_millis`.
    pub fn velocity(&self, time_millis: i64) -> f32 {
        if self.duration_millis <= 0 {
            return 0.0;
        }
        FlingSpline::sample(self.progress(time_millis)).velocity
            * self.initial_velocity.signum()
            * self.distance
            / self.duration_millis as f32
            * 1000.0
    }

    pub fn is_finished(&self, time_millis: i64) -> bool {
        time_millis >= self.duration_millis
    }
}

/// Density-aware fling physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// `density` is the display density scale, 1.0 for mdpi.
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: physical_coefficient(0.84, density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        FlingSpline::deceleration(velocity, self.friction * self.physical_coefficient)
    }

    pub fn fling_duration_millis(&self, velocity: f32) -> i64 {
        if velocity == 0.0 {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as i64
    }

    /// Unsigned distance a fling at `velocity` travels before resting.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        self.friction
            * self.physical_coefficient
            * (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp() as f32
    }

    pub fn fling_info(&self, velocity: f32) -> FlingInfo {
        FlingInfo {
            initial_velocity: velocity,
            distance: self.fling_distance(velocity),
            duration_millis: self.fling_duration_millis(velocity),
        }
    }
}

/// A decay curve, sampled by play time.
///
/// Implementations must be pure: the same inputs always give the same
/// outputs, so a decay can be resampled at any frame time.
pub trait FloatDecayAnimationSpec {
    /// Speed below which the motion counts as stopped.
    fn abs_velocity_threshold(&self) -> f32;

    fn value_from_nanos(&self, play_time_nanos: i64, initial_value: f32, initial_velocity: f32)
        -> f32;

    fn velocity_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32;

    fn duration_nanos(&self, initial_value: f32, initial_velocity: f32) -> i64;

    /// Resting position of a decay started at `initial_value`.
    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32;
}

/// Android scroller decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineBasedDecaySpec {
    calculator: FlingCalculator,
}

impl SplineBasedDecaySpec {
    pub fn new(density: f32) -> Self {
        Self {
            calculator: FlingCalculator::with_density(density),
        }
    }

    pub fn with_calculator(calculator: FlingCalculator) -> Self {
        Self { calculator }
    }
}

impl Default for SplineBasedDecaySpec {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FloatDecayAnimationSpec for SplineBasedDecaySpec {
    fn abs_velocity_threshold(&self) -> f32 {
        0.0
    }

    fn value_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let info = self.calculator.fling_info(initial_velocity);
        initial_value + info.position(play_time_nanos / NANOS_PER_MILLI)
    }

    fn velocity_from_nanos(
        &self,
        play_time_nanos: i64,
        _initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let info = self.calculator.fling_info(initial_velocity);
        info.velocity(play_time_nanos / NANOS_PER_MILLI)
    }

    fn duration_nanos(&self, _initial_value: f32, initial_velocity: f32) -> i64 {
        self.calculator.fling_duration_millis(initial_velocity) * NANOS_PER_MILLI
    }

    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        initial_value + self.calculator.fling_distance(initial_velocity) * initial_velocity.signum()
    }
}

/// Friction decay: velocity falls off as `v * e^(friction * t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecaySpec {
    friction: f32,
    abs_velocity_threshold: f32,
}

impl ExponentialDecaySpec {
    const BASE_FRICTION: f32 = -4.2;
    pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 0.1;

    /// Larger multipliers stop the decay sooner.
    pub fn new(friction_multiplier: f32, abs_velocity_threshold: f32) -> Self {
        Self {
            friction: Self::BASE_FRICTION * friction_multiplier.max(0.0001),
            abs_velocity_threshold: abs_velocity_threshold.max(0.0001),
        }
    }

    fn play_time_seconds(play_time_nanos: i64) -> f32 {
        play_time_nanos as f32 / 1_000_000_000.0
    }

    fn duration_seconds(&self, initial_velocity: f32) -> f32 {
        (self.abs_velocity_threshold / initial_velocity.abs()).ln() / self.friction
    }
}

impl Default for ExponentialDecaySpec {
    fn default() -> Self {
        Self::new(1.0, Self::DEFAULT_VELOCITY_THRESHOLD)
    }
}

impl FloatDecayAnimationSpec for ExponentialDecaySpec {
    fn abs_velocity_threshold(&self) -> f32 {
        self.abs_velocity_threshold
    }

    fn value_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let seconds = Self::play_time_seconds(play_time_nanos);
        let coast = initial_velocity / self.friction;
        initial_value - coast + coast * (self.friction * seconds).exp()
    }

    fn velocity_from_nanos(
        &self,
        play_time_nanos: i64,
        _initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        initial_velocity * (self.friction * Self::play_time_seconds(play_time_nanos)).exp()
    }

    fn duration_nanos(&self, _initial_value: f32, initial_velocity: f32) -> i64 {
        if initial_velocity.abs() <= self.abs_velocity_threshold {
            return 0;
        }
        (self.duration_seconds(initial_velocity) as f64 * 1_000_000_000.0) as i64
    }

    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        if initial_velocity.abs() <= self.abs_velocity_threshold {
            return initial_value;
        }
        let coast = initial_velocity / self.friction;
        let seconds = self.duration_seconds(initial_velocity);
        initial_value - coast + coast * (self.friction * seconds).exp()
    }
}

#[cfg(test)]
#[path = "tests/decay_tests.rs"]
mod tests;
