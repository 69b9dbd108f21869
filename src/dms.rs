//! Degrees/minutes/seconds parsing and formatting
//!
//! [`parse`] turns flexible text like `51° 28′ 40.12″ N`, `51 28 40.12N`,
//! `-0.001475` or `000:00:05.31W` into signed decimal degrees. The `to_*`
//! functions render decimal degrees as zero-padded DMS text with the
//! appropriate compass suffix.
//!
//! Two "no value" signals are kept apart: text that cannot be parsed yields
//! `NaN` (so it can flow into further arithmetic and be checked there), while
//! rendering `NaN` yields `None` from [`to_dms`] and [`NAN_PLACEHOLDER`] from
//! the display-oriented functions.

use crate::types::{CoordinateKind, DmsFormat};
use crate::utils::normalize_bearing_deg;

/// Rendered in place of a coordinate that is `NaN`
pub const NAN_PLACEHOLDER: &str = "\u{2013}";

const DEGREE: char = '\u{00B0}';
const PRIME: char = '\u{2032}';
const DOUBLE_PRIME: char = '\u{2033}';

/// Input accepted by [`parse`]
///
/// Only numbers and text can be parsed; anything else is rejected at compile
/// time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DmsValue<'a> {
    /// Decimal degrees, returned as-is when finite
    Number(f64),
    /// Decimal or DMS text
    Text(&'a str),
}

impl From<f64> for DmsValue<'_> {
    fn from(value: f64) -> Self {
        DmsValue::Number(value)
    }
}

impl<'a> From<&'a str> for DmsValue<'a> {
    fn from(value: &'a str) -> Self {
        DmsValue::Text(value)
    }
}

impl<'a> From<&'a String> for DmsValue<'a> {
    fn from(value: &'a String) -> Self {
        DmsValue::Text(value)
    }
}

/// Parse degrees/minutes/seconds into signed decimal degrees
///
/// Finite numbers are returned unchanged. Text may carry a leading `-` and/or
/// a trailing compass letter (`N`, `S`, `E`, `W`, any case); `-`, `S` and `W`
/// make the result negative. The remaining text is split on any run of
/// characters other than digits and `.` into one to three fields, read as
/// degrees, degrees + minutes, or degrees + minutes + seconds.
///
/// Returns `NaN` for empty input, more than three fields, fields that are not
/// numbers, or non-finite numeric input.
///
/// # Examples
///
/// ```
/// use spherical_geodesy::dms;
///
/// assert!((dms::parse("51° 28′ 40.12″ N") - 51.477_811).abs() < 1e-6);
/// assert!((dms::parse("000° 00′ 05.31″ W") - -0.001_475).abs() < 1e-6);
/// assert!(dms::parse("1 2 3 4").is_nan());
/// ```
pub fn parse<'a>(value: impl Into<DmsValue<'a>>) -> f64 {
    match value.into() {
        DmsValue::Number(number) if number.is_finite() => number,
        DmsValue::Number(_) => f64::NAN,
        DmsValue::Text(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> f64 {
    let text = text.trim();

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let body = unsigned
        .strip_suffix(|c: char| matches!(c.to_ascii_uppercase(), 'N' | 'S' | 'E' | 'W'))
        .unwrap_or(unsigned);

    let fields = body
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|field| !field.is_empty())
        .map(|field| field.parse::<f64>().ok())
        .collect::<Option<Vec<_>>>();

    let degrees = match fields.as_deref() {
        Some(&[d]) => d,
        Some(&[d, m]) => d + m / 60.0,
        Some(&[d, m, s]) => d + m / 60.0 + s / 3600.0,
        _ => {
            log::trace!("unable to parse {text:?} as degrees/minutes/seconds");
            return f64::NAN;
        }
    };

    let negative = text.starts_with('-')
        || text.ends_with(|c: char| matches!(c.to_ascii_uppercase(), 'S' | 'W'));

    if negative { -degrees } else { degrees }
}

/// Render decimal degrees as unsigned, zero-padded DMS text
///
/// The sign is dropped; callers add a compass letter. Degrees are padded to
/// three digits, minutes and seconds to two. `decimal_places` defaults to
/// [`DmsFormat::default_decimal_places`] and applies to the last component.
///
/// Returns `None` if `degrees` is `NaN`.
pub fn to_dms(degrees: f64, format: DmsFormat, decimal_places: Option<usize>) -> Option<String> {
    if degrees.is_nan() {
        return None;
    }

    let dp = decimal_places.unwrap_or_else(|| format.default_decimal_places());
    let degrees = degrees.abs();

    let dms = match format {
        DmsFormat::D => {
            let d = zero_pad(to_fixed(degrees, dp), 3);
            format!("{d}{DEGREE}")
        }
        DmsFormat::Dm => {
            let minutes = round_fixed(degrees * 60.0, dp);
            let d = zero_pad((minutes / 60.0).floor().to_string(), 3);
            let m = zero_pad(to_fixed(minutes % 60.0, dp), 2);
            format!("{d}{DEGREE}{m}{PRIME}")
        }
        DmsFormat::Dms => {
            let seconds = round_fixed(degrees * 3600.0, dp);
            let d = zero_pad((seconds / 3600.0).floor().to_string(), 3);
            let m = zero_pad(((seconds / 60.0).floor() % 60.0).to_string(), 2);
            let s = zero_pad(to_fixed(seconds % 60.0, dp), 2);
            format!("{d}{DEGREE}{m}{PRIME}{s}{DOUBLE_PRIME}")
        }
    };

    Some(dms)
}

/// Render a latitude, e.g. `51°28′40″N`
///
/// Degrees are padded to two digits only.
pub fn to_lat(degrees: f64, format: DmsFormat, decimal_places: Option<usize>) -> String {
    let Some(dms) = to_dms(degrees, format, decimal_places) else {
        return NAN_PLACEHOLDER.to_string();
    };

    let dms = dms.strip_prefix('0').unwrap_or(&dms);
    let suffix = if degrees < 0.0 { 'S' } else { 'N' };
    format!("{dms}{suffix}")
}

/// Render a longitude, e.g. `000°00′05″W`
pub fn to_lon(degrees: f64, format: DmsFormat, decimal_places: Option<usize>) -> String {
    let Some(dms) = to_dms(degrees, format, decimal_places) else {
        return NAN_PLACEHOLDER.to_string();
    };

    let suffix = if degrees < 0.0 { 'W' } else { 'E' };
    format!("{dms}{suffix}")
}

/// Render a bearing, e.g. `127°39′47″`
///
/// The input is normalized to `[0, 360)` first. A value that rounds up to
/// 360° is shown as 0° with the degree field still padded, e.g. `000°00′00″`.
pub fn to_brng(degrees: f64, format: DmsFormat, decimal_places: Option<usize>) -> String {
    let Some(dms) = to_dms(normalize_bearing_deg(degrees), format, decimal_places) else {
        return NAN_PLACEHOLDER.to_string();
    };

    match dms.strip_prefix("360") {
        Some(rest) => format!("000{rest}"),
        None => dms,
    }
}

/// Render an angle according to what it represents
pub fn format(
    degrees: f64,
    kind: CoordinateKind,
    format: DmsFormat,
    decimal_places: Option<usize>,
) -> String {
    match kind {
        CoordinateKind::Latitude => to_lat(degrees, format, decimal_places),
        CoordinateKind::Longitude => to_lon(degrees, format, decimal_places),
        CoordinateKind::Bearing => to_brng(degrees, format, decimal_places),
    }
}

fn to_fixed(value: f64, decimal_places: usize) -> String {
    format!("{value:.decimal_places$}")
}

fn round_fixed(value: f64, decimal_places: usize) -> f64 {
    to_fixed(value, decimal_places).parse().unwrap_or(value)
}

/// Left-pad the integer part of `text` with zeros to `width` digits
fn zero_pad(text: String, width: usize) -> String {
    let int_len = text.find('.').unwrap_or(text.len());
    if int_len >= width {
        text
    } else {
        format!("{}{text}", "0".repeat(width - int_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn parse_number_passthrough() {
        assert_eq!(parse(-12.5), -12.5);
        assert!(parse(f64::NAN).is_nan());
        assert!(parse(f64::INFINITY).is_nan());
    }

    #[test]
    fn parse_decimal_text() {
        assert_close(parse("51.4778"), 51.4778);
        assert_close(parse("-0.0015"), -0.0015);
        assert_close(parse("  12.5  "), 12.5);
    }

    #[test]
    fn parse_dms_with_symbols() {
        assert_close(parse("51° 28′ 40.12″ N"), 51.477_811_111);
        assert_close(parse("000° 00′ 05.31″ W"), -0.001_475);
    }

    #[test]
    fn parse_ascii_separators() {
        assert_close(parse("51 28 40.12"), 51.477_811_111);
        assert_close(parse("51:28:40.12n"), 51.477_811_111);
        assert_close(parse("51d 28' 40.12\" s"), -51.477_811_111);
    }

    #[test]
    fn parse_degrees_minutes() {
        assert_close(parse("51°28.5′E"), 51.475);
        assert_close(parse("-10 30"), -10.5);
    }

    #[test]
    fn parse_suffix_and_sign_negate_once() {
        assert_close(parse("-10 W"), -10.0);
    }

    #[test]
    fn parse_failures() {
        assert!(parse("").is_nan());
        assert!(parse("N").is_nan());
        assert!(parse("1 2 3 4").is_nan());
        assert!(parse("1.2.3").is_nan());
        assert!(parse(".").is_nan());
    }

    #[test]
    fn parse_owned_string() {
        let text = String::from("45 30 N");
        assert_close(parse(&text), 45.5);
    }

    #[test]
    fn dms_default_decimal_places() {
        assert_snapshot!(to_dms(51.477_811, DmsFormat::D, None).unwrap(), @"051.4778°");
        assert_snapshot!(to_dms(51.477_811, DmsFormat::Dm, None).unwrap(), @"051°28.67′");
        assert_snapshot!(to_dms(51.477_811, DmsFormat::Dms, None).unwrap(), @"051°28′40″");
    }

    #[test]
    fn dms_explicit_decimal_places() {
        assert_snapshot!(to_dms(51.477_811, DmsFormat::D, Some(1)).unwrap(), @"051.5°");
        assert_snapshot!(to_dms(51.477_811, DmsFormat::Dms, Some(2)).unwrap(), @"051°28′40.12″");
    }

    #[test]
    fn dms_drops_sign() {
        assert_snapshot!(to_dms(-0.001_475, DmsFormat::Dms, Some(2)).unwrap(), @"000°00′05.31″");
    }

    #[test]
    fn dms_rounding_carries_into_minutes() {
        // 59.9 seconds rounds up to a whole minute
        assert_snapshot!(to_dms(10.0 + 59.9 / 3600.0, DmsFormat::Dms, None).unwrap(), @"010°01′00″");
    }

    #[test]
    fn dms_nan_is_none() {
        assert_eq!(to_dms(f64::NAN, DmsFormat::Dms, None), None);
    }

    #[test]
    fn lat_suffix_and_padding() {
        assert_snapshot!(to_lat(51.477_811, DmsFormat::Dms, None), @"51°28′40″N");
        assert_snapshot!(to_lat(-5.5, DmsFormat::D, Some(1)), @"05.5°S");
        assert_snapshot!(to_lat(0.0, DmsFormat::Dm, None), @"00°00.00′N");
    }

    #[test]
    fn lon_suffix_and_padding() {
        assert_snapshot!(to_lon(-0.001_475, DmsFormat::Dms, None), @"000°00′05″W");
        assert_snapshot!(to_lon(151.2153, DmsFormat::D, None), @"151.2153°E");
    }

    #[test]
    fn nan_placeholder() {
        assert_eq!(to_lat(f64::NAN, DmsFormat::Dms, None), NAN_PLACEHOLDER);
        assert_eq!(to_lon(f64::NAN, DmsFormat::D, None), NAN_PLACEHOLDER);
        assert_eq!(to_brng(f64::NAN, DmsFormat::Dm, None), NAN_PLACEHOLDER);
    }

    #[test]
    fn bearing_normalized() {
        assert_snapshot!(to_brng(-90.0, DmsFormat::Dms, None), @"270°00′00″");
        assert_snapshot!(to_brng(450.25, DmsFormat::D, Some(2)), @"090.25°");
    }

    #[test]
    fn bearing_rounding_to_360_becomes_zero() {
        assert_snapshot!(to_brng(359.999_99, DmsFormat::Dms, None), @"000°00′00″");
        assert_snapshot!(to_brng(359.999_99, DmsFormat::D, Some(2)), @"000.00°");
    }

    #[test]
    fn format_dispatches_by_kind() {
        assert_snapshot!(format(-33.8568, CoordinateKind::Latitude, DmsFormat::D, Some(2)), @"33.86°S");
        assert_snapshot!(format(-33.8568, CoordinateKind::Longitude, DmsFormat::D, Some(2)), @"033.86°W");
        assert_snapshot!(format(-33.8568, CoordinateKind::Bearing, DmsFormat::D, Some(2)), @"326.14°");
    }
}
