use crate::error::{Error, Result};
use std::str::FromStr;

/// Textual layout of a degrees/minutes/seconds rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DmsFormat {
    /// Decimal degrees: `DDD.dddd°`
    D,
    /// Degrees and decimal minutes: `DDD°MM.mm′`
    Dm,
    /// Degrees, minutes and seconds: `DDD°MM′SS″`
    #[default]
    Dms,
}

impl DmsFormat {
    /// Decimal places used when the caller does not ask for a specific count
    pub fn default_decimal_places(self) -> usize {
        match self {
            DmsFormat::D => 4,
            DmsFormat::Dm => 2,
            DmsFormat::Dms => 0,
        }
    }

    /// Short tag as accepted by [`DmsFormat::from_str`]
    pub fn tag(self) -> &'static str {
        match self {
            DmsFormat::D => "d",
            DmsFormat::Dm => "dm",
            DmsFormat::Dms => "dms",
        }
    }

    /// Parse a format tag, falling back to [`DmsFormat::Dms`] for unknown tags
    pub fn from_tag_lenient(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            log::debug!("unknown DMS format tag {tag:?}, using \"dms\"");
            DmsFormat::Dms
        })
    }
}

impl FromStr for DmsFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "d" => Ok(DmsFormat::D),
            "dm" => Ok(DmsFormat::Dm),
            "dms" => Ok(DmsFormat::Dms),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// What a formatted angle represents
///
/// Selects the compass suffix and wraparound rules applied on top of the
/// shared DMS renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateKind {
    /// Two-digit degrees, `N`/`S` suffix
    Latitude,
    /// Three-digit degrees, `E`/`W` suffix
    Longitude,
    /// Normalized to `[0, 360)`, no suffix
    Bearing,
}
