use alloc::boxed::Box;
use cfg_if::cfg_if;
use math::array_ops;
use ring::RingBuffer;
use crate::*;

/// Receives a callback for every detected step.
///
pub trait StepListener {
    fn step(&mut self, timestamp_ns: i64);
}

impl<F: FnMut(i64)> StepListener for F {
    fn step(&mut self, timestamp_ns: i64) {
        self(timestamp_ns)
    }
}

/// A single detected step.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent
{
    /// In nanoseconds; timestamp of the sample that triggered the step.
    pub timestamp_ns: i64,
}

/// Everything the detector remembers between two samples.
///
#[derive(Debug)]
pub struct DetectorState
{
    pub(crate) accel_x: RingBuffer<f32>,
    pub(crate) accel_y: RingBuffer<f32>,
    pub(crate) accel_z: RingBuffer<f32>,

    /// Recent vertical residuals, their sum is the velocity estimate.
    pub(crate) velocity: RingBuffer<f32>,

    /// In nanoseconds; timestamp of the last reported step.
    pub(crate) last_step_time_ns: i64,

    /// Velocity estimate of the previous sample.
    pub(crate) old_velocity_estimate: f32,

    /// In nanoseconds; timestamp of the previously processed sample.
    pub(crate) last_sample_time_ns: Option<i64>,
}

impl DetectorState {
    /// Expects a validated config, a zero capacity panics.
    pub(crate) fn new(config: &StepDetectorConfig) -> Self {
        DetectorState {
            accel_x: RingBuffer::new(config.gravity_ring_capacity),
            accel_y: RingBuffer::new(config.gravity_ring_capacity),
            accel_z: RingBuffer::new(config.gravity_ring_capacity),
            velocity: RingBuffer::new(config.velocity_ring_capacity),
            last_step_time_ns: 0,
            old_velocity_estimate: 0.0,
            last_sample_time_ns: None,
        }
    }
}

pub struct StepDetector
{
    config: StepDetectorConfig,

    pub(crate) state: DetectorState,

    listener: Option<Box<dyn StepListener>>,

    /// Normalized gravity direction computed for the last sample.
    #[cfg(feature = "debug")]
    pub world_z: Vector,

    /// Vertical acceleration residual computed for the last sample.
    #[cfg(feature = "debug")]
    pub vertical_residual: f32,
}

impl StepDetector
{
    #[inline]
    pub fn new() -> Self {
        Self::build(StepDetectorConfig::default())
    }

    pub fn with_config(config: StepDetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: StepDetectorConfig) -> Self {
        StepDetector {
            state: DetectorState::new(&config),
            config,
            listener: None,
            #[cfg(feature = "debug")]
            world_z: Vector::zero(),
            #[cfg(feature = "debug")]
            vertical_residual: 0.0,
        }
    }

    /// Installs the listener that gets told about steps, replacing any previous one.
    ///
    pub fn register_listener<L: StepListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    #[inline]
    pub fn config(&self) -> &StepDetectorConfig {
        &self.config
    }

    /// Velocity estimate computed for the most recent sample.
    ///
    #[inline]
    pub fn velocity_estimate(&self) -> f32 {
        self.state.old_velocity_estimate
    }

    /// In nanoseconds; timestamp of the last reported step, 0 if there was none yet.
    ///
    #[inline]
    pub fn last_step_time_ns(&self) -> i64 {
        self.state.last_step_time_ns
    }

    /// Feed one accelerometer sample to the detector. Samples must arrive in timestamp order.
    ///
    /// No validation is done here: a zero gravity estimate (e.g. an all zero first reading)
    /// turns the velocity estimate into NaN until enough finite samples have pushed it out of
    /// the ring buffers. No steps are reported in the meantime.
    ///
    pub fn update_accel(&mut self, timestamp_ns: i64, x: f32, y: f32, z: f32) -> Option<StepEvent> {
        self.process(timestamp_ns, Vector::new(x, y, z), None)
    }

    /// Same as `update_accel` but refuses non-finite or out of order samples, and leaves the
    /// gravity estimate unnormalized when its magnitude is below
    /// `config.min_gravity_magnitude` so no NaN's can enter the state.
    ///
    pub fn update_accel_checked(
        &mut self,
        timestamp_ns: i64,
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<Option<StepEvent>, SampleError> {
        let accel = Vector::new(x, y, z);

        if !accel.is_finite() {
            log::warn!("Dropping non-finite sample at {} ns: {:?}", timestamp_ns, accel);
            return Err(SampleError::NonFinite { timestamp_ns });
        }

        if let Some(previous_ns) = self.state.last_sample_time_ns {
            if timestamp_ns < previous_ns {
                log::warn!("Dropping sample at {} ns, previous was at {} ns", timestamp_ns, previous_ns);
                return Err(SampleError::OutOfOrder { previous_ns, timestamp_ns });
            }
        }

        Ok(self.process(timestamp_ns, accel, Some(self.config.min_gravity_magnitude)))
    }

    fn process(&mut self, timestamp_ns: i64, accel: Vector, min_gravity: Option<f32>) -> Option<StepEvent> {
        let state = &mut self.state;
        state.last_sample_time_ns = Some(timestamp_ns);

        // Update our guess of where the world z axis (i.e. gravity) is.
        state.accel_x.push(accel.x);
        state.accel_y.push(accel.y);
        state.accel_z.push(accel.z);

        let mut world_z = gravity_estimate(&state.accel_x, &state.accel_y, &state.accel_z);
        let magnitude = world_z.magnitude();
        match min_gravity {
            None => world_z /= magnitude,
            Some(min) => {
                if let Some(unit) = world_z.try_normalize(min) {
                    world_z = unit;
                }
            }
        }

        // Acceleration along world z with gravity's contribution removed.
        let residual = vertical_residual(&world_z, &accel, magnitude);
        state.velocity.push(residual);

        let velocity_estimate = array_ops::sum(state.velocity.as_slice());

        cfg_if! { if #[cfg(feature = "debug")] {
            self.world_z = world_z;
            self.vertical_residual = residual;
        }}

        let threshold = self.config.step_threshold;
        let mut event = None;

        if velocity_estimate > threshold && state.old_velocity_estimate <= threshold {
            let elapsed = timestamp_ns.saturating_sub(state.last_step_time_ns);
            if elapsed > self.config.step_delay_ns {
                state.last_step_time_ns = timestamp_ns;
                event = Some(StepEvent { timestamp_ns });

                log::debug!("Step at {} ns, velocity estimate {}", timestamp_ns, velocity_estimate);
                if let Some(listener) = self.listener.as_mut() {
                    listener.step(timestamp_ns);
                }
            } else {
                log::trace!("Ignoring crossing at {} ns, only {} ns since last step", timestamp_ns, elapsed);
            }
        }

        state.old_velocity_estimate = velocity_estimate;
        event
    }
}

impl Default for StepDetector {
    fn default() -> Self {
        Self::new()
    }
}
