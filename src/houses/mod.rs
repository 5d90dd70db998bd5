//! House cusp partitions and sector assignment
//!
//! A chart divides the ecliptic circle into twelve houses. Cusp *i* is the
//! starting boundary of house *i*; arcs may be unequal (Placidus-style
//! systems need no equal-spacing assumption). Exactly one of the twelve
//! arcs wraps past the 0°/360° seam.

use crate::angles::Longitude;
use crate::constants::HOUSE_COUNT;
use crate::{AstrowheelError, Result};
use serde::{Deserialize, Serialize};

/// A validated 12-cusp partition of the ecliptic circle.
///
/// Construction normalizes the raw degrees and rejects data that cannot
/// form a valid cyclic cover: duplicate cusps, or cusps out of zodiacal
/// order. Downstream code can therefore rely on every normalized longitude
/// matching exactly one house arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    cusps: [Longitude; HOUSE_COUNT],
}

impl HouseCusps {
    /// Build a partition from raw cusp degrees, in house order (index 0 is
    /// the cusp of house 1).
    ///
    /// Fails with [`AstrowheelError::InvalidAngle`] on non-finite input and
    /// [`AstrowheelError::DegenerateHousePartition`] when the cusps do not
    /// partition the circle.
    pub fn new(raw_degrees: [f64; HOUSE_COUNT]) -> Result<Self> {
        let mut cusps = [Longitude::new(0.0)?; HOUSE_COUNT];
        for (slot, &deg) in cusps.iter_mut().zip(raw_degrees.iter()) {
            *slot = Longitude::new(deg)?;
        }

        for i in 0..HOUSE_COUNT {
            for j in (i + 1)..HOUSE_COUNT {
                if cusps[i] == cusps[j] {
                    return Err(AstrowheelError::DegenerateHousePartition(format!(
                        "duplicate cusp longitude {} at houses {} and {}",
                        cusps[i],
                        i + 1,
                        j + 1
                    )));
                }
            }
        }

        // Read cyclically, 12 distinct cusps in zodiacal order descend past
        // the 0°/360° seam exactly once
        let descents = (0..HOUSE_COUNT)
            .filter(|&i| cusps[(i + 1) % HOUSE_COUNT].degrees() < cusps[i].degrees())
            .count();
        if descents != 1 {
            return Err(AstrowheelError::DegenerateHousePartition(format!(
                "cusps are not in cyclic zodiacal order ({} wraps)",
                descents
            )));
        }

        Ok(Self { cusps })
    }

    /// The cusp starting the given house (1-based index)
    ///
    /// # Panics
    ///
    /// Panics if `house` is outside 1..=12.
    pub fn cusp(&self, house: usize) -> Longitude {
        assert!((1..=HOUSE_COUNT).contains(&house), "house index out of range");
        self.cusps[house - 1]
    }

    /// All twelve cusps in house order
    pub fn all(&self) -> &[Longitude; HOUSE_COUNT] {
        &self.cusps
    }

    /// Determine which house contains the given longitude.
    ///
    /// For each house *i*, the arc runs from `cusps[i]` (inclusive) to the
    /// cyclic successor cusp (exclusive). The arc crossing the 0°/360° seam
    /// is the `end < start` case. Exactly one arc matches any normalized
    /// longitude for a valid partition; no match means the partition is
    /// degenerate and is surfaced as an error, never silently mapped to
    /// house 1.
    pub fn assign_house(&self, lon: Longitude) -> Result<usize> {
        let value = lon.degrees();
        for i in 0..HOUSE_COUNT {
            let start = self.cusps[i].degrees();
            let end = self.cusps[(i + 1) % HOUSE_COUNT].degrees();
            let matched = if end < start {
                // Arc wraps past the seam
                value >= start || value < end
            } else {
                start <= value && value < end
            };
            if matched {
                return Ok(i + 1);
            }
        }
        Err(AstrowheelError::DegenerateHousePartition(format!(
            "no house arc contains longitude {}",
            lon
        )))
    }
}
