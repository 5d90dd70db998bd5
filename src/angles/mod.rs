//! Angle normalization and degree display
//!
//! Raw longitudes arrive from the ephemeris oracle as arbitrary finite
//! floats. Everything downstream (house assignment, projection) compares
//! angles, so all of them are first reduced to the canonical [0, 360)
//! domain here. [`Longitude`] is the proof-carrying wrapper: one can only
//! be constructed through normalization.

use crate::constants::{DEG2RAD, FULL_CIRCLE_DEG, SIGN_WIDTH_DEG};
use crate::{AstrowheelError, Result};
use serde::{Deserialize, Serialize};

/// Reduce any finite degree value to the canonical [0, 360) range.
///
/// Negative inputs map up into range (`normalize(-10) == 350`). Non-finite
/// input (NaN or infinity) fails with [`AstrowheelError::InvalidAngle`].
///
/// # Examples
///
/// ```rust
/// use astrowheel::normalize;
///
/// assert_eq!(normalize(370.0).unwrap(), 10.0);
/// assert_eq!(normalize(-10.0).unwrap(), 350.0);
/// ```
pub fn normalize(degrees: f64) -> Result<f64> {
    if !degrees.is_finite() {
        return Err(AstrowheelError::InvalidAngle(degrees));
    }
    let reduced = degrees.rem_euclid(FULL_CIRCLE_DEG);
    // rem_euclid of a tiny negative value can round to exactly 360.0
    if reduced >= FULL_CIRCLE_DEG {
        Ok(0.0)
    } else {
        Ok(reduced)
    }
}

/// Format a degree-within-sign value for display.
///
/// The value is rounded **up** to the next whole degree and suffixed with a
/// degree symbol: `14.2` displays as `"15°"`. The ceiling is a deliberate
/// display convention carried over from the chart page; round-to-nearest is
/// not equivalent and must not be substituted.
pub fn display_degree(sign_longitude: f64) -> String {
    format!("{}°", sign_longitude.ceil() as i64)
}

/// An ecliptic longitude, always in [0, 360) degrees.
///
/// Constructed only through [`Longitude::new`], which normalizes, so any
/// two `Longitude` values compare on equal footing.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Longitude(f64);

impl Longitude {
    /// Create a longitude from a raw degree value, normalizing into
    /// [0, 360). Fails with [`AstrowheelError::InvalidAngle`] on non-finite
    /// input.
    pub fn new(degrees: f64) -> Result<Self> {
        Ok(Longitude(normalize(degrees)?))
    }

    /// The longitude in degrees, in [0, 360)
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// The longitude in radians, in [0, 2π)
    pub fn radians(&self) -> f64 {
        self.0 * DEG2RAD
    }

    /// Degree offset within the longitude's 30° sign sector, in [0, 30)
    pub fn sign_longitude(&self) -> f64 {
        self.0 % SIGN_WIDTH_DEG
    }
}

impl std::fmt::Display for Longitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize(0.0).unwrap(), 0.0);
        assert_eq!(normalize(359.9).unwrap(), 359.9);
        assert_eq!(normalize(360.0).unwrap(), 0.0);
        assert_eq!(normalize(370.0).unwrap(), normalize(10.0).unwrap());
        assert_eq!(normalize(-10.0).unwrap(), 350.0);
        assert_eq!(normalize(720.0).unwrap(), 0.0);
        assert_eq!(normalize(-360.0).unwrap(), 0.0);
    }

    #[test]
    fn test_normalize_idempotent() {
        for &x in &[0.0, 10.5, 123.456, -77.7, 359.999, 1234.5, -1000.25] {
            let once = normalize(x).unwrap();
            let twice = normalize(once).unwrap();
            assert_eq!(once, twice, "normalize not idempotent for {}", x);
            assert!((0.0..360.0).contains(&once));
        }
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        assert!(matches!(
            normalize(f64::NAN),
            Err(AstrowheelError::InvalidAngle(_))
        ));
        assert!(matches!(
            normalize(f64::INFINITY),
            Err(AstrowheelError::InvalidAngle(_))
        ));
        assert!(matches!(
            normalize(f64::NEG_INFINITY),
            Err(AstrowheelError::InvalidAngle(_))
        ));
    }

    #[test]
    fn test_normalize_tiny_negative_stays_in_range() {
        // rem_euclid(-1e-18, 360) rounds to exactly 360.0
        let result = normalize(-1e-18).unwrap();
        assert!((0.0..360.0).contains(&result));
    }

    #[test]
    fn test_display_degree_rounds_up() {
        assert_eq!(display_degree(14.01), "15°");
        assert_eq!(display_degree(14.2), "15°");
        assert_eq!(display_degree(0.0), "0°");
        assert_eq!(display_degree(29.999), "30°");
        assert_eq!(display_degree(15.0), "15°");
    }

    #[test]
    fn test_longitude_accessors() {
        let lon = Longitude::new(450.0).unwrap();
        assert_eq!(lon.degrees(), 90.0);
        assert!((lon.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(lon.sign_longitude(), 0.0);

        let lon = Longitude::new(95.5).unwrap();
        assert!((lon.sign_longitude() - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_longitude_rejects_nan() {
        assert!(Longitude::new(f64::NAN).is_err());
    }
}
