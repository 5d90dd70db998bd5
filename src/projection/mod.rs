//! Radial projection of a chart onto a polar wheel
//!
//! The projector turns a [`Chart`] into three families of polar primitives
//! for a generic 2D polar renderer: the zodiac ring (twelve fixed 30°
//! sectors, always equal-width regardless of house cusps), the house cusp
//! lines, and the body markers. Radii are on the unit circle; the renderer
//! scales to its canvas. Degree-to-radian conversion is the direct linear
//! map, so zodiac order, cusp lines and body markers all increase in the
//! same angular direction.

use crate::celestial::{Body, Sign};
use crate::chart::Chart;
use crate::constants::{
    BODY_LABEL_RADIUS, BODY_MARKER_RADIUS, CUSP_LINE_INNER_RADIUS, CUSP_LINE_OUTER_RADIUS,
    DEG2RAD, HOUSE_LABEL_RADIUS, RING_INNER_RADIUS, RING_OUTER_RADIUS, SIGN_LABEL_RADIUS,
    SIGN_WIDTH_DEG,
};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A point in polar coordinates: angle in radians, radius on the unit
/// circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    /// Angle in radians
    pub angle: f64,
    /// Radius (unit circle; the renderer scales)
    pub radius: f64,
}

impl PolarPoint {
    /// Create a polar point
    pub fn new(angle: f64, radius: f64) -> Self {
        Self { angle, radius }
    }

    /// Convert to cartesian grid coordinates around the given center,
    /// scaling the unit radius by `scale`
    pub fn to_cartesian(&self, center: Point2<f64>, scale: f64) -> Point2<f64> {
        Point2::new(
            center.x + self.angle.cos() * self.radius * scale,
            center.y + self.angle.sin() * self.radius * scale,
        )
    }
}

/// Draw order for the wheel's layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    /// The zodiac ring band and sign glyphs
    ZodiacRing,
    /// The twelve radial cusp lines and house numbers
    CuspLines,
    /// Body markers and glyphs, drawn on top
    BodyMarkers,
}

/// One fixed 30° sector of the zodiac ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSector {
    /// The sign occupying this sector
    pub sign: Sign,
    /// The sign's glyph, ready for the label
    pub glyph: char,
    /// Sector start angle in radians
    pub start_angle: f64,
    /// Sector end angle in radians
    pub end_angle: f64,
    /// Inner radius of the ring band
    pub inner_radius: f64,
    /// Outer radius of the ring band
    pub outer_radius: f64,
    /// Where to draw the sign glyph (sector midpoint, outside the band)
    pub label: PolarPoint,
}

/// A radial house cusp line with its house-number label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuspLine {
    /// The house this cusp starts, 1..=12
    pub house: usize,
    /// Inner end of the line (wheel center)
    pub from: PolarPoint,
    /// Outer end of the line (ring's inner edge)
    pub to: PolarPoint,
    /// Where to draw the house number
    pub label: PolarPoint,
}

/// A body marker with its glyph label offset outward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMarker {
    /// The marked body
    pub body: Body,
    /// The body's glyph, ready for the label
    pub glyph: char,
    /// Marker position
    pub position: PolarPoint,
    /// Glyph label position, offset outward from the marker
    pub label: PolarPoint,
}

/// The full projected wheel, ready for a polar renderer with no domain
/// knowledge of houses or signs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelProjection {
    /// Twelve equal ring sectors, Aries first
    pub zodiac_ring: Vec<RingSector>,
    /// Twelve cusp lines in house order
    pub cusp_lines: Vec<CuspLine>,
    /// Body markers in the chart's insertion order
    pub body_markers: Vec<BodyMarker>,
}

impl WheelProjection {
    /// Project a chart onto the wheel.
    ///
    /// Assumes normalized inputs and a validated cusp partition (both
    /// enforced by [`Chart`] construction), so this is total.
    pub fn project(chart: &Chart) -> Self {
        let sector_width = SIGN_WIDTH_DEG * DEG2RAD;

        // The ring is sign-based: always twelve equal sectors from 0°
        // Aries, independent of the house cusps
        let zodiac_ring = Sign::ALL
            .iter()
            .enumerate()
            .map(|(i, &sign)| {
                let start_angle = i as f64 * sector_width;
                let end_angle = (i + 1) as f64 * sector_width;
                RingSector {
                    sign,
                    glyph: sign.glyph(),
                    start_angle,
                    end_angle,
                    inner_radius: RING_INNER_RADIUS,
                    outer_radius: RING_OUTER_RADIUS,
                    label: PolarPoint::new((start_angle + end_angle) / 2.0, SIGN_LABEL_RADIUS),
                }
            })
            .collect();

        let cusp_lines = chart
            .cusps()
            .all()
            .iter()
            .enumerate()
            .map(|(i, cusp)| {
                let angle = cusp.radians();
                CuspLine {
                    house: i + 1,
                    from: PolarPoint::new(angle, CUSP_LINE_INNER_RADIUS),
                    to: PolarPoint::new(angle, CUSP_LINE_OUTER_RADIUS),
                    label: PolarPoint::new(angle, HOUSE_LABEL_RADIUS),
                }
            })
            .collect();

        let body_markers = chart
            .positions()
            .iter()
            .map(|pos| {
                let angle = pos.longitude.radians();
                BodyMarker {
                    body: pos.body,
                    glyph: pos.body.glyph(),
                    position: PolarPoint::new(angle, BODY_MARKER_RADIUS),
                    label: PolarPoint::new(angle, BODY_LABEL_RADIUS),
                }
            })
            .collect();

        Self {
            zodiac_ring,
            cusp_lines,
            body_markers,
        }
    }

    /// Layers in back-to-front draw order
    pub fn draw_order() -> [Layer; 3] {
        [Layer::ZodiacRing, Layer::CuspLines, Layer::BodyMarkers]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celestial::Body;
    use crate::chart::Chart;
    use crate::constants::{HOUSE_COUNT, SIGN_COUNT};
    use std::f64::consts::PI;

    fn skewed_chart() -> Chart {
        // All cusps clustered into one quadrant plus the wrap arc
        Chart::from_raw(
            &[(Body::Sun, 45.0), (Body::Moon, 300.0)],
            [
                10.0, 15.0, 22.0, 31.0, 40.0, 48.0, 55.0, 61.0, 70.0, 78.0, 85.0, 89.0,
            ],
            12.0,
        )
        .unwrap()
    }

    #[test]
    fn test_ring_sectors_always_equal_width() {
        let projection = WheelProjection::project(&skewed_chart());
        assert_eq!(projection.zodiac_ring.len(), SIGN_COUNT);
        let expected = PI / 6.0; // 30° in radians
        for sector in &projection.zodiac_ring {
            let width = sector.end_angle - sector.start_angle;
            assert!(
                (width - expected).abs() < 1e-12,
                "sector for {} is {} rad wide",
                sector.sign,
                width
            );
        }
        // Ring starts at 0° Aries
        assert_eq!(projection.zodiac_ring[0].sign, Sign::Aries);
        assert_eq!(projection.zodiac_ring[0].start_angle, 0.0);
    }

    #[test]
    fn test_cusp_lines_follow_cusps() {
        let chart = skewed_chart();
        let projection = WheelProjection::project(&chart);
        assert_eq!(projection.cusp_lines.len(), HOUSE_COUNT);
        for (i, line) in projection.cusp_lines.iter().enumerate() {
            assert_eq!(line.house, i + 1);
            let expected = chart.cusps().cusp(i + 1).radians();
            assert_eq!(line.from.angle, expected);
            assert_eq!(line.to.angle, expected);
            assert_eq!(line.from.radius, CUSP_LINE_INNER_RADIUS);
            assert_eq!(line.to.radius, CUSP_LINE_OUTER_RADIUS);
            assert_eq!(line.label.radius, HOUSE_LABEL_RADIUS);
        }
    }

    #[test]
    fn test_body_markers_preserve_order_and_angle() {
        let projection = WheelProjection::project(&skewed_chart());
        assert_eq!(projection.body_markers.len(), 2);
        assert_eq!(projection.body_markers[0].body, Body::Sun);
        assert_eq!(projection.body_markers[1].body, Body::Moon);

        let sun = &projection.body_markers[0];
        assert!((sun.position.angle - 45.0 * DEG2RAD).abs() < 1e-15);
        assert_eq!(sun.position.radius, BODY_MARKER_RADIUS);
        assert_eq!(sun.label.radius, BODY_LABEL_RADIUS);
        assert_eq!(sun.label.angle, sun.position.angle);
    }

    #[test]
    fn test_draw_order_back_to_front() {
        let order = WheelProjection::draw_order();
        assert!(order[0] < order[1] && order[1] < order[2]);
        assert_eq!(order[2], Layer::BodyMarkers);
    }

    #[test]
    fn test_polar_to_cartesian() {
        use approx::assert_relative_eq;
        use nalgebra::Point2;

        let center = Point2::new(10.0, 10.0);
        let east = PolarPoint::new(0.0, 1.0).to_cartesian(center, 5.0);
        assert_relative_eq!(east.x, 15.0, epsilon = 1e-12);
        assert_relative_eq!(east.y, 10.0, epsilon = 1e-12);

        let north = PolarPoint::new(PI / 2.0, 0.5).to_cartesian(center, 5.0);
        assert_relative_eq!(north.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(north.y, 12.5, epsilon = 1e-12);
    }
}
