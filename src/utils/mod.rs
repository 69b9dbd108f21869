//! Numeric helpers shared by the geodesy and DMS modules

mod numeric;

pub use numeric::*;
