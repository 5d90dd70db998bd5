//! Astrowheel: angular assignment and radial projection for natal charts
//!
//! This crate takes already-computed ecliptic longitudes (celestial bodies,
//! house cusps, ascendant) and answers the two geometric questions a chart
//! page needs: which of the twelve houses each body falls in, and where
//! everything lands on a 2D polar wheel.
//!
//! Ephemeris math, geocoding, interpretation text authoring and rendering
//! are all external collaborators; this library only consumes their output
//! values and produces house indices, display strings and polar coordinates.

use thiserror::Error;

pub mod angles;
pub mod celestial;
pub mod chart;
pub mod constants;
pub mod houses;
pub mod interp;
pub mod projection;

// Re-export commonly used types
pub use angles::{display_degree, normalize, Longitude};
pub use celestial::{Body, BodyPosition, Sign};
pub use chart::{Chart, Placement};
pub use houses::HouseCusps;
pub use interp::InterpretationTable;
pub use projection::{PolarPoint, WheelProjection};

/// Main error type for the astrowheel library
#[derive(Debug, Error)]
pub enum AstrowheelError {
    /// A non-finite value (NaN or infinity) was given where a degree
    /// longitude was expected.
    #[error("Invalid angle: {0} is not a finite degree value")]
    InvalidAngle(f64),

    /// The cusp data does not form a valid 12-arc cyclic cover of the
    /// circle. Surfaced instead of silently defaulting to house 1.
    #[error("Degenerate house partition: {0}")]
    DegenerateHousePartition(String),
}

/// Result type for astrowheel operations
pub type Result<T> = std::result::Result<T, AstrowheelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AstrowheelError::InvalidAngle(f64::NAN);
        assert!(err.to_string().contains("Invalid angle"));

        let err = AstrowheelError::DegenerateHousePartition("duplicate cusp".to_string());
        assert!(err.to_string().contains("duplicate cusp"));
    }
}
