//! Damped spring integrator
//!
//! Same model as the usual UI spring: tension pulls toward the target,
//! friction damps velocity, integrated in fixed 1 ms sub-steps so the
//! motion does not depend on the frame rate.

use shared::SpringSection;

const STEP_MS: f64 = 1.0;
// A backgrounded tab can deliver one very late frame
const MAX_FRAME_MS: f64 = 64.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
    pub precision: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from(SpringSection::default())
    }
}

impl From<SpringSection> for SpringConfig {
    fn from(section: SpringSection) -> Self {
        Self {
            tension: section.tension,
            friction: section.friction,
            mass: section.mass,
            precision: section.precision,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringTarget {
    pub value: f64,
    /// Jump straight to `value`
    pub immediate: bool,
}

impl SpringTarget {
    pub fn animated(value: f64) -> Self {
        Self { value, immediate: false }
    }

    pub fn immediate(value: f64) -> Self {
        Self { value, immediate: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest on `value`.
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            config,
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    pub fn set_target(&mut self, target: SpringTarget) {
        self.target = target.value;
        if target.immediate {
            self.position = target.value;
            self.velocity = 0.0;
        }
    }

    /// Advance by `elapsed_ms`; returns the new position.
    pub fn advance(&mut self, elapsed_ms: f64) -> f64 {
        if self.is_settled() {
            return self.position;
        }
        let steps = (elapsed_ms.clamp(0.0, MAX_FRAME_MS) / STEP_MS).ceil() as u32;
        let dt = STEP_MS / 1000.0;
        let SpringConfig {
            tension,
            friction,
            mass,
            precision,
        } = self.config;

        for _ in 0..steps {
            let spring_force = -tension * (self.position - self.target);
            let damping_force = -friction * self.velocity;
            let acceleration = (spring_force + damping_force) / mass;
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;

            if (self.position - self.target).abs() < precision && self.velocity.abs() < precision {
                self.position = self.target;
                self.velocity = 0.0;
                break;
            }
        }
        self.position
    }
}
