use super::Coordinate;
use thiserror::Error;

/// Errors caused by caller input when building or editing a world.
/// Misuse of the tick protocol is not reported here; it panics.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WorldError {
    /// Width and height must both be positive.
    #[error("world dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },
    /// The coordinate has no cell in this world.
    #[error("coordinate {0} is outside the world")]
    OutOfBounds(Coordinate),
    /// Seeding density must be a probability.
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    /// Simulation speed is outside the supported range.
    #[error("updates per second must be within [1, 60], got {0}")]
    InvalidSpeed(f32),
    /// No preset pattern has this name.
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}
