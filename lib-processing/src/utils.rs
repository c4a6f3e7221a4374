use math::array_ops;
use ring::RingBuffer;
use crate::*;

/// Mean of the filled part of a ring buffer: every slot is summed but the sum is only divided by
/// `min(counter, capacity)`, unwritten slots are zero so they don't contribute.
/// 
#[inline]
pub fn ring_mean(ring: &RingBuffer<f32>) -> f32 {
    array_ops::sum(ring.as_slice()) / ring.len() as f32
}

/// Estimates the (not yet normalized) direction of gravity in device space as the per-axis mean
/// of the recent accelerometer samples.
/// 
pub fn gravity_estimate(x: &RingBuffer<f32>, y: &RingBuffer<f32>, z: &RingBuffer<f32>) -> Vector {
    Vector::new(ring_mean(x), ring_mean(y), ring_mean(z))
}

/// Component of `accel` along the gravity direction `world_z` with the gravity magnitude itself
/// subtracted, leaving only the acceleration caused by movement.
/// 
#[inline]
pub fn vertical_residual(world_z: &Vector, accel: &Vector, magnitude: f32) -> f32 {
    world_z.dot(accel) - magnitude
}
