use crate::*;

/// Amount of samples averaged for the gravity direction estimate.
pub const DEFAULT_GRAVITY_RING_CAPACITY: usize = 50;

/// Amount of vertical residuals summed into the velocity estimate.
pub const DEFAULT_VELOCITY_RING_CAPACITY: usize = 10;

/// Velocity estimate that has to be crossed (upwards) for a step to count.
pub const DEFAULT_STEP_THRESHOLD: f32 = 4.0;

/// In nanoseconds; minimum time between two reported steps.
pub const DEFAULT_STEP_DELAY_NS: i64 = 250_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDetectorConfig
{
    pub gravity_ring_capacity: usize,

    pub velocity_ring_capacity: usize,

    /// Same unit as the incoming acceleration.
    pub step_threshold: f32,

    pub step_delay_ns: i64,

    /// Below this gravity magnitude the checked update path skips normalization. The regular
    /// `update_accel` path ignores it.
    pub min_gravity_magnitude: f32,
}

impl Default for StepDetectorConfig {
    fn default() -> Self {
        StepDetectorConfig {
            gravity_ring_capacity: DEFAULT_GRAVITY_RING_CAPACITY,
            velocity_ring_capacity: DEFAULT_VELOCITY_RING_CAPACITY,
            step_threshold: DEFAULT_STEP_THRESHOLD,
            step_delay_ns: DEFAULT_STEP_DELAY_NS,
            min_gravity_magnitude: f32::EPSILON,
        }
    }
}

impl StepDetectorConfig {

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity_ring_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { ring: "gravity" });
        }
        if self.velocity_ring_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { ring: "velocity" });
        }
        if !self.step_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.step_threshold));
        }
        if !(self.min_gravity_magnitude >= 0.0) || self.min_gravity_magnitude.is_infinite() {
            return Err(ConfigError::InvalidGravityTolerance(self.min_gravity_magnitude));
        }
        if self.step_delay_ns < 0 {
            return Err(ConfigError::NegativeDelay(self.step_delay_ns));
        }
        Ok(())
    }
}
