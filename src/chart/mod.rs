//! Immutable chart snapshots and per-body placements
//!
//! A [`Chart`] is built once per request from the ephemeris oracle's raw
//! output and never mutated; it lives for one rendering/lookup cycle. The
//! oracle boundary is [`Chart::from_raw`], which is where normalization and
//! cusp validation happen.

use crate::angles::{display_degree, Longitude};
use crate::celestial::{Body, BodyPosition, Sign};
use crate::houses::HouseCusps;
use crate::Result;
use serde::{Deserialize, Serialize};

/// An immutable snapshot of one chart: body positions in insertion order,
/// the validated house cusps, and the ascendant longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    positions: Vec<BodyPosition>,
    cusps: HouseCusps,
    ascendant: Longitude,
}

impl Chart {
    /// Assemble a chart from already-normalized parts
    pub fn new(positions: Vec<BodyPosition>, cusps: HouseCusps, ascendant: Longitude) -> Self {
        Self {
            positions,
            cusps,
            ascendant,
        }
    }

    /// Assemble a chart from the oracle's raw degree output: body
    /// longitudes, twelve cusp longitudes in house order, and the
    /// ascendant. All values are normalized here; cusp validation failures
    /// surface as [`crate::AstrowheelError::DegenerateHousePartition`].
    pub fn from_raw(
        bodies: &[(Body, f64)],
        cusp_degrees: [f64; 12],
        ascendant_degrees: f64,
    ) -> Result<Self> {
        let mut positions = Vec::with_capacity(bodies.len());
        for &(body, degrees) in bodies {
            positions.push(BodyPosition::new(body, Longitude::new(degrees)?));
        }
        let cusps = HouseCusps::new(cusp_degrees)?;
        let ascendant = Longitude::new(ascendant_degrees)?;
        log::debug!(
            "constructed chart with {} bodies, ascendant {}",
            positions.len(),
            ascendant
        );
        Ok(Self::new(positions, cusps, ascendant))
    }

    /// Body positions in insertion order
    pub fn positions(&self) -> &[BodyPosition] {
        &self.positions
    }

    /// The house cusp partition
    pub fn cusps(&self) -> &HouseCusps {
        &self.cusps
    }

    /// The ascendant longitude
    pub fn ascendant(&self) -> Longitude {
        self.ascendant
    }

    /// The rising sign (sign containing the ascendant)
    pub fn rising_sign(&self) -> Sign {
        Sign::from_longitude(self.ascendant)
    }

    /// Display string for the ascendant's degree within its sign,
    /// e.g. `"18°"`
    pub fn ascendant_display_degree(&self) -> String {
        display_degree(self.ascendant.sign_longitude())
    }

    /// Resolve every body to its placement (sign and house), preserving
    /// insertion order
    pub fn placements(&self) -> Result<Vec<Placement>> {
        self.positions
            .iter()
            .map(|pos| {
                let house = self.cusps.assign_house(pos.longitude)?;
                Ok(Placement {
                    body: pos.body,
                    longitude: pos.longitude,
                    sign: Sign::from_longitude(pos.longitude),
                    house,
                })
            })
            .collect()
    }
}

/// One body resolved against a chart: its sign and house
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed body
    pub body: Body,
    /// Its normalized ecliptic longitude
    pub longitude: Longitude,
    /// Sign containing the longitude
    pub sign: Sign,
    /// House containing the longitude, 1..=12
    pub house: usize,
}

impl Placement {
    /// Display string for the degree within the sign, rounded up,
    /// e.g. `"19°"`
    pub fn display_degree(&self) -> String {
        display_degree(self.longitude.sign_longitude())
    }

    /// One-line summary for the chart page,
    /// e.g. `"Sun in Pisces (House 5)  |  19°"`
    pub fn headline(&self) -> String {
        format!(
            "{} in {} (House {})  |  {}",
            self.body,
            self.sign,
            self.house,
            self.display_degree()
        )
    }
}
