#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod array_ops;

pub mod vector;
pub use vector::*;


/// Standard gravity, used to convert readings reported in g to m/s².
pub const G_TO_MS2: f32 = 9.80665;
