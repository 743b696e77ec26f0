//! Error types for resolution matching.

use thiserror::Error;

use crate::geometry::Size2D;

/// Result type for resize operations.
pub type Result<T> = std::result::Result<T, ResizeError>;

/// Which input a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionRole {
    Standard,
    Minimum,
    Maximum,
    Screen,
}

impl std::fmt::Display for ResolutionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Standard => "standard",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Screen => "screen",
        };
        f.write_str(name)
    }
}

/// A single axis of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// `minimum <= standard <= maximum` does not hold on `dimension`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsViolation {
    pub dimension: Dimension,
    pub minimum: f32,
    pub standard: f32,
    pub maximum: f32,
}

impl std::fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} bounds out of order: minimum {} / standard {} / maximum {}",
            self.dimension, self.minimum, self.standard, self.maximum
        )
    }
}

/// Errors that can occur while matching a canvas to a screen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResizeError {
    /// A resolution has a zero, negative or non-finite component.
    #[error("invalid {role} resolution {size}: components must be positive and finite")]
    InvalidResolution { role: ResolutionRole, size: Size2D },

    /// The configured bounds are not ordered around the standard resolution.
    #[error("inconsistent bounds: {0}")]
    InconsistentBounds(BoundsViolation),
}
