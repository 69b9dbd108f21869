use std::f64::consts::PI;

/// Format a number with `precision` significant digits in fixed-point form
///
/// Unlike `{:e}` formatting, the output never uses an exponent: very large
/// magnitudes are padded with trailing zeros, very small ones with leading
/// zeros after the decimal point.
///
/// A precision of `0` is treated as `1`. Zero is rendered as `0.` followed by
/// `precision` zeros. Non-finite values are rendered with their `Display`
/// form (`NaN`, `inf`, `-inf`).
///
/// # Examples
///
/// ```
/// use spherical_geodesy::utils::to_precision_fixed;
///
/// assert_eq!(to_precision_fixed(7.402_94, 4), "7.403");
/// assert_eq!(to_precision_fixed(1.23e21, 4), "1230000000000000000000");
/// assert_eq!(to_precision_fixed(4.56e-10, 4), "0.0000000004560");
/// ```
pub fn to_precision_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = precision.max(1);
    if value == 0.0 {
        return format!("{:.*}", precision, 0.0);
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` rounds correctly, including carries like 9999.7 -> 1.000e4
    let scientific = format!("{:.*e}", precision - 1, value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let int_len = exponent + 1;

    let fixed = if int_len <= 0 {
        format!("0.{}{digits}", "0".repeat(int_len.unsigned_abs() as usize))
    } else {
        let int_len = int_len as usize;
        if int_len >= digits.len() {
            format!("{digits}{}", "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    };

    format!("{sign}{fixed}")
}

/// Round a number to `precision` significant digits
///
/// Returns the value of [`to_precision_fixed`]'s output.
pub fn round_to_precision(value: f64, precision: usize) -> f64 {
    to_precision_fixed(value, precision)
        .parse()
        .unwrap_or(f64::NAN)
}

/// Normalize a longitude in radians via `(λ + 3π) mod 2π − π`
pub fn normalize_lon_rad(lon: f64) -> f64 {
    (lon + 3.0 * PI) % (2.0 * PI) - PI
}

/// Normalize a bearing in degrees to `[0, 360)`
pub fn normalize_bearing_deg(bearing: f64) -> f64 {
    let bearing = bearing.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if bearing >= 360.0 { 0.0 } else { bearing }
}
