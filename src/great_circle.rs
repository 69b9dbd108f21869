//! Great-circle calculations
//!
//! All methods take and return degrees; trigonometry runs in radians. The
//! radius of `self` scales distances.

use crate::types::Point;
use crate::utils::{normalize_bearing_deg, normalize_lon_rad, round_to_precision};
use std::f64::consts::PI;

impl Point {
    /// Great-circle distance to `other` using the haversine formula
    ///
    /// Rounded to 4 significant figures, the accuracy of a spherical Earth
    /// model.
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_to_precision(other, 4)
    }

    /// Great-circle distance to `other`, rounded to `precision` significant
    /// figures
    pub fn distance_to_precision(&self, other: &Point, precision: usize) -> f64 {
        let lat1 = self.lat().to_radians();
        let lat2 = other.lat().to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon() - self.lon()).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        round_to_precision(self.radius() * c, precision)
    }

    /// Initial bearing from `self` towards `other`, in `[0, 360)`
    pub fn bearing_to(&self, other: &Point) -> f64 {
        initial_bearing(self, other)
    }

    /// Bearing on arrival at `other` when travelling from `self`, in `[0, 360)`
    ///
    /// This is the initial bearing of the reverse path, turned around.
    pub fn final_bearing_to(&self, other: &Point) -> f64 {
        normalize_bearing_deg(initial_bearing(other, self) + 180.0)
    }

    /// Point half-way along the great circle between `self` and `other`
    pub fn midpoint_to(&self, other: &Point) -> Point {
        let lat1 = self.lat().to_radians();
        let lon1 = self.lon().to_radians();
        let lat2 = other.lat().to_radians();
        let d_lon = (other.lon() - self.lon()).to_radians();

        let bx = lat2.cos() * d_lon.cos();
        let by = lat2.cos() * d_lon.sin();

        let lat3 = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
        let lon3 = normalize_lon_rad(lon1 + by.atan2(lat1.cos() + bx));

        self.sibling(lat3.to_degrees(), lon3.to_degrees())
    }

    /// Point reached by travelling `distance` along a great circle starting
    /// at `bearing` degrees
    ///
    /// `distance` is in the same unit as the radius.
    pub fn destination_point(&self, bearing: f64, distance: f64) -> Point {
        let angular = distance / self.radius();
        let bearing = bearing.to_radians();
        let lat1 = self.lat().to_radians();
        let lon1 = self.lon().to_radians();

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        self.sibling(lat2.to_degrees(), normalize_lon_rad(lon2).to_degrees())
    }
}

fn initial_bearing(from: &Point, to: &Point) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_bearing_deg(y.atan2(x).to_degrees())
}

/// Point where the great circle leaving `p1` at `bearing1` meets the one
/// leaving `p2` at `bearing2`
///
/// Returns `None` when there is no unique answer:
///
/// - `p1` and `p2` are the same position,
/// - both paths run along the line `p1`-`p2` (infinitely many intersections),
/// - the paths diverge on opposite sides of `p1`-`p2` (ambiguous).
///
/// The result lies on the sphere of `p1`.
pub fn intersection(p1: &Point, bearing1: f64, p2: &Point, bearing2: f64) -> Option<Point> {
    let lat1 = p1.lat().to_radians();
    let lon1 = p1.lon().to_radians();
    let lat2 = p2.lat().to_radians();
    let lon2 = p2.lon().to_radians();
    let brng13 = bearing1.to_radians();
    let brng23 = bearing2.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let dist12 = 2.0
        * ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
            .sqrt()
            .asin();
    if dist12 == 0.0 {
        log::trace!("no intersection: {p1:?} and {p2:?} coincide");
        return None;
    }

    // initial/final bearings between the two points
    let mut brng_a =
        ((lat2.sin() - lat1.sin() * dist12.cos()) / (dist12.sin() * lat1.cos())).acos();
    if brng_a.is_nan() {
        // acos argument rounded just outside [-1, 1]
        log::trace!("clamping rounding error in bearing p1->p2 to zero");
        brng_a = 0.0;
    }
    let brng_b = ((lat1.sin() - lat2.sin() * dist12.cos()) / (dist12.sin() * lat2.cos()))
        .clamp(-1.0, 1.0)
        .acos();

    let (brng12, brng21) = if (lon2 - lon1).sin() > 0.0 {
        (brng_a, 2.0 * PI - brng_b)
    } else {
        (2.0 * PI - brng_a, brng_b)
    };

    // angles 2-1-3 and 1-2-3; sign matters, so no abs()
    let alpha1 = (brng13 - brng12 + PI) % (2.0 * PI) - PI;
    let alpha2 = (brng21 - brng23 + PI) % (2.0 * PI) - PI;

    if alpha1.sin() == 0.0 && alpha2.sin() == 0.0 {
        log::debug!("no intersection: paths from {p1:?} and {p2:?} coincide");
        return None;
    }
    if alpha1.sin() * alpha2.sin() < 0.0 {
        log::debug!("no intersection: paths from {p1:?} and {p2:?} are ambiguous");
        return None;
    }

    let alpha3 = (-alpha1.cos() * alpha2.cos() + alpha1.sin() * alpha2.sin() * dist12.cos()).acos();
    let dist13 = (dist12.sin() * alpha1.sin() * alpha2.sin())
        .atan2(alpha2.cos() + alpha1.cos() * alpha3.cos());

    let lat3 = (lat1.sin() * dist13.cos() + lat1.cos() * dist13.sin() * brng13.cos()).asin();
    let d_lon13 = (brng13.sin() * dist13.sin() * lat1.cos())
        .atan2(dist13.cos() - lat1.sin() * lat3.sin());
    let lon3 = normalize_lon_rad(lon1 + d_lon13);

    Some(p1.sibling(lat3.to_degrees(), lon3.to_degrees()))
}
