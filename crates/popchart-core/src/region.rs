// File: crates/popchart-core/src/region.rs
// Summary: The six filterable regions, their display order and the region -> bar color table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Africa,
    Oceania,
}

/// Fill for bars whose region is not one of the six above.
pub const UNKNOWN_REGION_COLOR: Rgba = Rgba::new(0, 0, 0, 0.1);

/// Alpha applied to bar fills; borders use the same channels fully opaque.
const FILL_ALPHA: f32 = 0.6;

impl Region {
    /// Display order of the toggle buttons.
    pub const ALL: [Region; 6] = [
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Africa,
        Region::Oceania,
    ];

    /// Name as used by the API, both in records and in `disabled_regions`.
    pub const fn name(self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
        }
    }

    const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Region::Asia => (54, 162, 235),
            Region::Europe => (75, 192, 192),
            Region::NorthAmerica => (255, 206, 86),
            Region::SouthAmerica => (153, 102, 255),
            Region::Africa => (255, 99, 132),
            Region::Oceania => (255, 159, 64),
        }
    }

    pub const fn fill_color(self) -> Rgba {
        let (r, g, b) = self.rgb();
        Rgba::new(r, g, b, FILL_ALPHA)
    }

    pub const fn border_color(self) -> Rgba {
        self.fill_color().with_alpha(1.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region '{0}' (expected one of: Asia, Europe, North America, South America, Africa, Oceania)")]
pub struct RegionParseError(pub String);

impl FromStr for Region {
    type Err = RegionParseError;

    /// Case-insensitive; also accepts kebab/snake forms (`north-america`) for CLI use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Region::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| RegionParseError(s.to_string()))
    }
}

/// Fill and border for a record's raw region text; unrecognized text gets the neutral color
/// for both.
pub fn colors_for(region: &str) -> (Rgba, Rgba) {
    match Region::ALL.into_iter().find(|r| r.name() == region) {
        Some(r) => (r.fill_color(), r.border_color()),
        None => (UNKNOWN_REGION_COLOR, UNKNOWN_REGION_COLOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for r in Region::ALL {
            assert_eq!(r.name().parse::<Region>().unwrap(), r);
        }
        assert_eq!("north-america".parse::<Region>().unwrap(), Region::NorthAmerica);
        assert_eq!("SOUTH_AMERICA".parse::<Region>().unwrap(), Region::SouthAmerica);
        assert!("Antarctica".parse::<Region>().is_err());
    }

    #[test]
    fn known_region_colors() {
        let (fill, border) = colors_for("Asia");
        assert_eq!(fill.to_string(), "rgba(54, 162, 235, 0.6)");
        assert_eq!(border.to_string(), "rgba(54, 162, 235, 1)");
        let (fill, _) = colors_for("Oceania");
        assert_eq!(fill.to_string(), "rgba(255, 159, 64, 0.6)");
    }

    #[test]
    fn unknown_region_is_neutral() {
        let (fill, border) = colors_for("Atlantis");
        assert_eq!(fill, UNKNOWN_REGION_COLOR);
        assert_eq!(border, UNKNOWN_REGION_COLOR);
        // Exact match only, like the API's own labels.
        assert_eq!(colors_for("asia").0, UNKNOWN_REGION_COLOR);
    }

    #[test]
    fn serde_uses_api_names() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        assert_eq!(json, "\"North America\"");
    }
}
