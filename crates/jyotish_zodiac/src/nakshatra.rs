//! `Nakshatra`: the 27 lunar mansions, each 13°20′ (800′ = 48 000″) wide,
//! each ruled by a body that seeds the Vimshottari cycle.

use crate::body::Body;
use crate::util::normalize_360;

/// Width of one nakshatra, in degrees: 360/27.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Width of one nakshatra, in arcseconds: 13°20′ = 48 000″.
pub const NAKSHATRA_SPAN_ARCSEC: f64 = 48_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Ruling body per nakshatra, in order — this is also the Vimshottari
/// starting-planet table: `ruler(nakshatra_index) = cycle[index % 9]`.
const VIMSHOTTARI_CYCLE: [Body; 9] = [
    Body::SouthNode,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::NorthNode,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    pub fn index(self) -> u8 {
        ALL_NAKSHATRAS.iter().position(|&n| n == self).unwrap() as u8
    }

    pub fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS[(index % 27) as usize]
    }

    /// The body whose Vimshottari period starts when this nakshatra is the
    /// birth marker.
    pub fn ruling_body(self) -> Body {
        VIMSHOTTARI_CYCLE[(self.index() % 9) as usize]
    }

    /// Locate a sidereal longitude within the 27-fold scheme: the nakshatra
    /// it falls in plus its offset expressed as (degrees, minutes, seconds)
    /// of arc into that nakshatra.
    pub fn locate(longitude_deg: f64) -> (Nakshatra, f64, f64, f64) {
        let lon = normalize_360(longitude_deg);
        let idx = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(26);
        let nakshatra = Nakshatra::from_index(idx);
        let position_in_nak = lon - idx as f64 * NAKSHATRA_SPAN_DEG;
        let total_arcsec = position_in_nak * 3_600.0;
        let deg = (total_arcsec / 3_600.0).floor();
        let min = ((total_arcsec - deg * 3_600.0) / 60.0).floor();
        let sec = total_arcsec - deg * 3_600.0 - min * 60.0;
        (nakshatra, deg, min, sec)
    }
}

/// The fixed Vimshottari cycle, Ketu-first, as named in the design notes.
pub fn vimshottari_cycle() -> [Body; 9] {
    VIMSHOTTARI_CYCLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_index(i as u8), *n);
        }
    }

    #[test]
    fn locate_shatabhisha_range() {
        // Shatabhisha is index 23: [306.666..., 320.0) degrees
        let (nak, _, _, _) = Nakshatra::locate(319.27);
        assert_eq!(nak, Nakshatra::Shatabhisha);
    }

    #[test]
    fn ruling_body_cycles_every_nine() {
        assert_eq!(Nakshatra::Ashwini.ruling_body(), Body::SouthNode);
        assert_eq!(Nakshatra::Bharani.ruling_body(), Body::Venus);
        // Magha is index 9, same ruler as Ashwini (index 0): 9 % 9 == 0
        assert_eq!(Nakshatra::Magha.ruling_body(), Body::SouthNode);
    }
}
