#![cfg_attr(not(test), no_std)]

extern crate alloc;

use math::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod utils;
pub use utils::*;

pub mod step_detection;
pub use step_detection::*;

pub mod counter;
pub use counter::*;
