//! Damped harmonic spring, solved in closed form.

/// Parameters of a spring animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 is critically damped. Lower values bounce.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Displacement below which the spring counts as arrived.
    pub visibility_threshold: f32,
}

impl SpringSpec {
    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.01;

    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: Self::DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    pub fn bouncy() -> Self {
        Self::new(Self::DAMPING_RATIO_MEDIUM_BOUNCY, Self::STIFFNESS_MEDIUM)
    }

    pub fn stiff() -> Self {
        Self::new(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_HIGH)
    }

    /// The settle spring snapping lists use: no bounce, medium-low stiffness.
    pub fn snap() -> Self {
        Self::new(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_MEDIUM_LOW)
    }

    pub fn simulation(&self, final_position: f32) -> SpringSimulation {
        SpringSimulation::new(final_position, self.damping_ratio, self.stiffness)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_MEDIUM)
    }
}

/// Position and velocity of a spring at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub value: f32,
    pub velocity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSimulation {
    final_position: f32,
    damping_ratio: f64,
    natural_freq: f64,
}

impl SpringSimulation {
    pub fn new(final_position: f32, damping_ratio: f32, stiffness: f32) -> Self {
        if stiffness <= 0.0 {
            log::warn!("spring stiffness {} is not positive, clamping", stiffness);
        }
        Self {
            final_position,
            damping_ratio: damping_ratio.max(0.0) as f64,
            natural_freq: (stiffness.max(0.0001) as f64).sqrt(),
        }
    }

    pub fn final_position(&self) -> f32 {
        self.final_position
    }

    /// Motion `elapsed_millis` after leaving `start` with `start_velocity`.
    pub fn motion_at(&self, start: f32, start_velocity: f32, elapsed_millis: f64) -> Motion {
        let displacement = (start - self.final_position) as f64;
        let velocity = start_velocity as f64;
        let t = elapsed_millis / 1000.0;
        let omega = self.natural_freq;
        let zeta = self.damping_ratio;
        let r = -zeta * omega;

        let (x, v) = if zeta > 1.0 {
            let s = omega * (zeta * zeta - 1.0).sqrt();
            let gamma_plus = r + s;
            let gamma_minus = r - s;
            let coeff_b = (gamma_minus * displacement - velocity) / (gamma_minus - gamma_plus);
            let coeff_a = displacement - coeff_b;
            let e_minus = (gamma_minus * t).exp();
            let e_plus = (gamma_plus * t).exp();
            (
                coeff_a * e_minus + coeff_b * e_plus,
                coeff_a * gamma_minus * e_minus + coeff_b * gamma_plus * e_plus,
            )
        } else if zeta == 1.0 {
            let coeff_a = displacement;
            let coeff_b = velocity + omega * displacement;
            let decay = (-omega * t).exp();
            let x = (coeff_a + coeff_b * t) * decay;
            (x, x * -omega + coeff_b * decay)
        } else {
            let damped_freq = omega * (1.0 - zeta * zeta).sqrt();
            let cos_coeff = displacement;
            let sin_coeff = (-r * displacement + velocity) / damped_freq;
            let angle = damped_freq * t;
            let envelope = (r * t).exp();
            let x = envelope * (cos_coeff * angle.cos() + sin_coeff * angle.sin());
            let v = x * r
                + envelope
                    * (-damped_freq * cos_coeff * angle.sin()
                        + damped_freq * sin_coeff * angle.cos());
            (x, v)
        };

        Motion {
            value: (x + self.final_position as f64) as f32,
            velocity: v as f32,
        }
    }

    /// Whether a spring in `motion` has run out of energy to leave the
    /// threshold band around its target.
    ///
    /// Damped springs lose energy monotonically, so once this holds it holds
    /// for every later instant.
    pub fn is_at_rest(&self, motion: Motion, threshold: f32) -> bool {
        let stiffness = self.natural_freq * self.natural_freq;
        let x = (motion.value - self.final_position) as f64;
        let v = motion.velocity as f64;
        let threshold = threshold as f64;
        stiffness * x * x + v * v <= stiffness * threshold * threshold
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
