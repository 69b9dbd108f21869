//! Rhumb-line (loxodrome) calculations
//!
//! A rhumb line crosses every meridian at the same angle, so it is a straight
//! line on a Mercator projection. Distances are measured on the projection
//! and corrected by the stretch factor `q = Δφ/Δψ`.

use crate::types::Point;
use crate::utils::{normalize_bearing_deg, normalize_lon_rad, round_to_precision};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Below this `|Δψ|` the course is treated as due east/west and `q = cos φ1`
const ILL_CONDITIONED_DPSI: f64 = 1e-11;

impl Point {
    /// Distance to `other` along a rhumb line, rounded to 4 significant figures
    ///
    /// Crossing the antimeridian is taken into account: the shorter of the two
    /// longitude differences is used.
    pub fn rhumb_distance_to(&self, other: &Point) -> f64 {
        let lat1 = self.lat().to_radians();
        let lat2 = other.lat().to_radians();
        let d_lat = lat2 - lat1;

        let mut d_lon = (other.lon() - self.lon()).abs().to_radians();
        if d_lon > PI {
            d_lon = 2.0 * PI - d_lon;
        }

        let q = stretch_factor(d_lat, projected_lat_diff(lat1, lat2), lat1);
        let distance = (d_lat * d_lat + q * q * d_lon * d_lon).sqrt() * self.radius();

        round_to_precision(distance, 4)
    }

    /// Constant bearing from `self` to `other`, in `[0, 360)`
    pub fn rhumb_bearing_to(&self, other: &Point) -> f64 {
        let lat1 = self.lat().to_radians();
        let lat2 = other.lat().to_radians();

        let mut d_lon = (other.lon() - self.lon()).to_radians();
        if d_lon.abs() > PI {
            d_lon = if d_lon > 0.0 {
                -(2.0 * PI - d_lon)
            } else {
                2.0 * PI + d_lon
            };
        }

        normalize_bearing_deg(d_lon.atan2(projected_lat_diff(lat1, lat2)).to_degrees())
    }

    /// Point reached by travelling `distance` on a constant `bearing`
    ///
    /// A track running past a pole comes back down on the other side.
    pub fn rhumb_destination_point(&self, bearing: f64, distance: f64) -> Point {
        let angular = distance / self.radius();
        let bearing = bearing.to_radians();
        let lat1 = self.lat().to_radians();
        let lon1 = self.lon().to_radians();

        let d_lat = angular * bearing.cos();
        let mut lat2 = lat1 + d_lat;

        let q = stretch_factor(d_lat, projected_lat_diff(lat1, lat2), lat1);
        let d_lon = angular * bearing.sin() / q;

        if lat2.abs() > FRAC_PI_2 {
            lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
        }

        let lon2 = normalize_lon_rad(lon1 + d_lon);
        self.sibling(lat2.to_degrees(), lon2.to_degrees())
    }

    /// Point half-way along the rhumb line between `self` and `other`
    pub fn rhumb_midpoint_to(&self, other: &Point) -> Point {
        let lat1 = self.lat().to_radians();
        let mut lon1 = self.lon().to_radians();
        let lat2 = other.lat().to_radians();
        let lon2 = other.lon().to_radians();

        // crossing the antimeridian
        if (lon2 - lon1).abs() > PI {
            lon1 += 2.0 * PI;
        }

        let lat3 = (lat1 + lat2) / 2.0;
        let f1 = (FRAC_PI_4 + lat1 / 2.0).tan();
        let f2 = (FRAC_PI_4 + lat2 / 2.0).tan();
        let f3 = (FRAC_PI_4 + lat3 / 2.0).tan();

        let mut lon3 =
            ((lon2 - lon1) * f3.ln() + lon1 * f2.ln() - lon2 * f1.ln()) / (f2 / f1).ln();
        if !lon3.is_finite() {
            // along a parallel of latitude
            lon3 = (lon1 + lon2) / 2.0;
        }

        self.sibling(lat3.to_degrees(), normalize_lon_rad(lon3).to_degrees())
    }
}

/// Latitude difference on the Mercator projection, `Δψ`
fn projected_lat_diff(lat1: f64, lat2: f64) -> f64 {
    ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln()
}

/// Mercator stretch factor `q = Δφ/Δψ`
///
/// `Δφ/Δψ` is 0/0 on an east-west course; the limit there is `cos φ1`.
fn stretch_factor(d_lat: f64, d_psi: f64, lat1: f64) -> f64 {
    if d_psi.abs() > ILL_CONDITIONED_DPSI {
        d_lat / d_psi
    } else {
        log::trace!("ill-conditioned rhumb line (Δψ = {d_psi:e}), using q = cos φ1");
        lat1.cos()
    }
}
