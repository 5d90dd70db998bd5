//! Constants for chart geometry

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Degrees in a full circle
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// Chart partitions
/// Number of houses in a chart
pub const HOUSE_COUNT: usize = 12;
/// Number of zodiac signs
pub const SIGN_COUNT: usize = 12;
/// Angular width of one zodiac sign in degrees (always equal-width,
/// independent of house cusps)
pub const SIGN_WIDTH_DEG: f64 = FULL_CIRCLE_DEG / SIGN_COUNT as f64;

// Wheel radius bands (unit circle, renderer scales as needed)
/// Inner radius of the zodiac ring band
pub const RING_INNER_RADIUS: f64 = 0.9;
/// Outer radius of the zodiac ring band
pub const RING_OUTER_RADIUS: f64 = 1.0;
/// Radius of the sign glyph labels, just outside the ring
pub const SIGN_LABEL_RADIUS: f64 = 1.05;
/// Cusp lines run from the wheel center out to the ring
pub const CUSP_LINE_INNER_RADIUS: f64 = 0.0;
/// Outer end of a cusp line (meets the ring's inner edge)
pub const CUSP_LINE_OUTER_RADIUS: f64 = RING_INNER_RADIUS;
/// Radius of the house number labels
pub const HOUSE_LABEL_RADIUS: f64 = 0.4;
/// Radius of the body markers
pub const BODY_MARKER_RADIUS: f64 = 0.75;
/// Radius of the body glyph labels, offset outward from the markers
pub const BODY_LABEL_RADIUS: f64 = 0.82;
