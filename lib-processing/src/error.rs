use core::{error::Error, fmt};

/// Returned when a `StepDetectorConfig` can not be used to build a detector.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError
{
    ZeroCapacity { ring: &'static str },
    InvalidThreshold(f32),
    InvalidGravityTolerance(f32),
    NegativeDelay(i64),
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroCapacity { ring } => write!(f, "The {} ring buffer needs a capacity of at least 1", ring),
            Self::InvalidThreshold(value) => write!(f, "Step threshold must be finite, got {}", value),
            Self::InvalidGravityTolerance(value) => write!(f, "Minimum gravity magnitude must be finite and >= 0, got {}", value),
            Self::NegativeDelay(value) => write!(f, "Step delay can not be negative, got {} ns", value),
        }
    }
}

/// Reasons `StepDetector::update_accel_checked` refuses a sample. A refused sample never touches
/// the detector state.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError
{
    NonFinite { timestamp_ns: i64 },
    OutOfOrder { previous_ns: i64, timestamp_ns: i64 },
}

impl Error for SampleError {}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonFinite { timestamp_ns } => write!(f, "Sample at {} ns has a non-finite component", timestamp_ns),
            Self::OutOfOrder { previous_ns, timestamp_ns } => write!(
                f, "Sample at {} ns arrived after a sample at {} ns", timestamp_ns, previous_ns
            ),
        }
    }
}
