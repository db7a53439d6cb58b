//! Simulation error type
//!
//! Operations that take host input (config, frame time, gravity, pointer,
//! handles, spawn parameters) return `Result<T, SimError>`. Degenerate geometry
//! inside the solver is never an error; it is compensated in place.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// A configuration value is out of range.
    InvalidConfig { reason: &'static str },
    /// Config JSON could not be parsed.
    ConfigParse { message: String },
    /// Frame time is negative or not finite.
    InvalidTimeStep { dt: f32 },
    /// Gravity has a non-finite component.
    InvalidGravity,
    /// Pointer position has a non-finite component.
    InvalidPointer,
    /// Body handle does not refer to a live body.
    InvalidBodyHandle { index: u32, count: usize },
    /// Spawn radius is zero, negative or not finite.
    InvalidRadius { radius: f32 },
    /// Spawn position has a non-finite component.
    InvalidPosition,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::ConfigParse { message } => write!(f, "config parse error: {message}"),
            Self::InvalidTimeStep { dt } => write!(f, "invalid frame time {dt}"),
            Self::InvalidGravity => write!(f, "gravity must be finite"),
            Self::InvalidPointer => write!(f, "pointer position must be finite"),
            Self::InvalidBodyHandle { index, count } => {
                write!(f, "body handle {index} out of range (count={count})")
            }
            Self::InvalidRadius { radius } => write!(f, "invalid body radius {radius}"),
            Self::InvalidPosition => write!(f, "body position must be finite"),
        }
    }
}

impl std::error::Error for SimError {}
