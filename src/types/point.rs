use crate::dms::{self, DmsValue};
use crate::error::{Error, Result};
use crate::types::DmsFormat;
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the surface of a sphere
///
/// Latitude and longitude are stored in signed decimal degrees. The radius
/// (kilometers by convention) scales every distance computed from this point;
/// in binary operations the radius of `self` is used and the other point's
/// radius is ignored.
///
/// Latitude is expected to lie in `[-90, 90]` but is not checked. Longitude may
/// be outside `(-180, 180]`; computed points always have it normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    lat: f64,
    lon: f64,
    radius: f64,
}

impl Point {
    /// Create a point on a sphere with the mean Earth radius
    pub fn new(lat: f64, lon: f64) -> Self {
        Self::with_radius(lat, lon, EARTH_RADIUS_KM)
    }

    /// Create a point on a sphere of the given radius
    pub fn with_radius(lat: f64, lon: f64, radius: f64) -> Self {
        Self { lat, lon, radius }
    }

    /// Create a point from latitude/longitude text
    ///
    /// Both sides accept anything [`dms::parse`] understands, e.g. `"51.4778"`,
    /// `"51° 28′ 40.12″ N"` or `"000 00 05.31 W"`.
    pub fn parse(lat: &str, lon: &str) -> Result<Self> {
        Ok(Self::new(parse_component(lat)?, parse_component(lon)?))
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Sphere radius this point lives on
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Render the latitude, e.g. `51°28′40″N`
    pub fn lat_formatted(&self, format: DmsFormat, decimal_places: Option<usize>) -> String {
        dms::to_lat(self.lat, format, decimal_places)
    }

    /// Render the longitude, e.g. `000°00′05″W`
    pub fn lon_formatted(&self, format: DmsFormat, decimal_places: Option<usize>) -> String {
        dms::to_lon(self.lon, format, decimal_places)
    }

    /// Render both components joined by `", "`
    pub fn to_string_formatted(&self, format: DmsFormat, decimal_places: Option<usize>) -> String {
        format!(
            "{}, {}",
            self.lat_formatted(format, decimal_places),
            self.lon_formatted(format, decimal_places)
        )
    }

    /// Point at the given position on the same sphere as `self`
    pub(crate) fn sibling(&self, lat: f64, lon: f64) -> Self {
        Self::with_radius(lat, lon, self.radius)
    }
}

fn parse_component(text: &str) -> Result<f64> {
    let value = dms::parse(DmsValue::Text(text));
    if value.is_nan() {
        return Err(Error::InvalidCoordinate {
            input: text.to_string(),
        });
    }
    Ok(value)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_formatted(DmsFormat::Dms, None))
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse `"<lat>, <lon>"` where each side is decimal or DMS text
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| Error::MalformedPoint(s.to_string()))?;
        Self::parse(lat, lon)
    }
}
