//! Celestial body and zodiac sign definitions
//!
//! Both enumerations are exhaustive tagged mappings: glyphs, display names
//! and spreadsheet column names are enum methods, so an unmapped identifier
//! is a compile-time error rather than a silent fallback glyph.

use crate::angles::Longitude;
use crate::constants::SIGN_WIDTH_DEG;
use serde::{Deserialize, Serialize};

/// The celestial bodies tracked on a chart, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
}

impl Body {
    /// All bodies in conventional chart order
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
    ];

    /// Astrological glyph for the body
    pub fn glyph(&self) -> char {
        match self {
            Body::Sun => '☉',
            Body::Moon => '☽',
            Body::Mercury => '☿',
            Body::Venus => '♀',
            Body::Mars => '♂',
            Body::Jupiter => '♃',
            Body::Saturn => '♄',
            Body::Uranus => '♅',
            Body::Neptune => '♆',
            Body::Pluto => '♇',
            Body::NorthNode => '☊',
        }
    }

    /// Column name in the external interpretation spreadsheet.
    ///
    /// These strings are a data contract with the spreadsheet, quirks
    /// included ("Sun / Earth", lowercase "jupiter").
    pub fn column(&self) -> &'static str {
        match self {
            Body::Sun => "Sun / Earth",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::NorthNode => "North Node",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::NorthNode => "North Node",
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve zodiac signs: fixed, equal 30° sectors starting at 0° Aries,
/// independent of house cusps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All signs in zodiacal order
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// The sign containing the given longitude
    pub fn from_longitude(lon: Longitude) -> Sign {
        let index = (lon.degrees() / SIGN_WIDTH_DEG) as usize;
        // degrees() < 360 guarantees index < 12
        Sign::ALL[index]
    }

    /// Zero-based position in zodiacal order (Aries = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Astrological glyph for the sign
    pub fn glyph(&self) -> char {
        match self {
            Sign::Aries => '♈',
            Sign::Taurus => '♉',
            Sign::Gemini => '♊',
            Sign::Cancer => '♋',
            Sign::Leo => '♌',
            Sign::Virgo => '♍',
            Sign::Libra => '♎',
            Sign::Scorpio => '♏',
            Sign::Sagittarius => '♐',
            Sign::Capricorn => '♑',
            Sign::Aquarius => '♒',
            Sign::Pisces => '♓',
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A celestial body paired with its normalized ecliptic longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Which body this is
    pub body: Body,
    /// Its normalized ecliptic longitude
    pub longitude: Longitude,
}

impl BodyPosition {
    /// Pair a body with an already-normalized longitude
    pub fn new(body: Body, longitude: Longitude) -> Self {
        Self { body, longitude }
    }
}
