use crate::error::ColorFormatError;
use crate::Float;

/// Round the number to the nearest integer and clamp it to `0..=255`.
///
/// Ties round away from zero. Not-a-number becomes zero.
#[inline]
pub(crate) fn clamp_byte(value: Float) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 255.0) as u8
    }
}

/// Clamp the number to `0.0..=1.0` without rounding.
///
/// Not-a-number becomes one, i.e., fully opaque when used for alpha. Negative
/// zero becomes positive zero, so that equal results have equal bits.
#[inline]
pub(crate) fn clamp_unit(value: Float) -> Float {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0) + 0.0
    }
}

/// Reduce the angle in degrees to a fraction of a full turn in `0.0..1.0`.
///
/// The reduction uses the Euclidean remainder, so that negative angles wrap
/// around to positive ones, with `-30°` becoming `330°`.
#[inline]
pub(crate) fn normalize_angle(degrees: Float) -> Float {
    let reduced = degrees.rem_euclid(360.0);
    // rem_euclid may round tiny negative angles up to the divisor.
    if reduced >= 360.0 || reduced.is_nan() {
        0.0
    } else {
        reduced / 360.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the bytes are one or more ASCII digits.
#[inline]
fn is_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// Determine whether the string is a valid numeric literal.
///
/// The literal is an optionally signed integer or decimal with at least one
/// digit after the decimal point, followed by an optional exponent. It must
/// not carry a percent sign.
fn is_number(s: &str) -> bool {
    let s = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let (mantissa, exponent) = s
        .find(|c: char| c == 'e' || c == 'E')
        .map_or((s, None), |index| (&s[..index], Some(&s[index + 1..])));

    let mantissa_ok = mantissa.split_once('.').map_or_else(
        || is_digits(mantissa.as_bytes()),
        |(integral, fraction)| {
            (integral.is_empty() || is_digits(integral.as_bytes()))
                && is_digits(fraction.as_bytes())
        },
    );

    let exponent_ok = exponent.map_or(true, |e| {
        let e = e.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(e);
        is_digits(e.as_bytes())
    });

    mantissa_ok && exponent_ok
}

/// Parse a number token, which may be a percentage.
///
/// This function returns the token's numeric value and whether it had a
/// trailing `%`. The value of a percentage is *not* scaled.
pub(crate) fn parse_number_token(token: &str) -> Result<(Float, bool), ColorFormatError> {
    let (literal, is_percent) = token
        .strip_suffix('%')
        .map_or((token, false), |literal| (literal, true));

    if !is_number(literal) {
        return Err(ColorFormatError::MalformedNumber);
    }

    let value: Float = literal
        .parse()
        .map_err(|_| ColorFormatError::MalformedNumber)?;
    if !value.is_finite() {
        return Err(ColorFormatError::MalformedNumber);
    }

    Ok((value, is_percent))
}

/// Parse a channel token and clamp the result to `0..=max`.
///
/// A percentage is scaled to `max * value / 100`, whereas any other number is
/// used as is.
pub(crate) fn parse_channel_token(token: &str, max: Float) -> Result<Float, ColorFormatError> {
    let (value, is_percent) = parse_number_token(token)?;
    let value = if is_percent { max * value / 100.0 } else { value };
    Ok(value.clamp(0.0, max))
}

/// Parse a hue token into degrees.
///
/// A percentage is a fraction of a full turn. There is no clamping; the caller
/// reduces the angle with [`normalize_angle`].
pub(crate) fn parse_hue_token(token: &str) -> Result<Float, ColorFormatError> {
    let (value, is_percent) = parse_number_token(token)?;
    Ok(if is_percent { 360.0 * value / 100.0 } else { value })
}

/// Parse a saturation, lightness, or value token into a percentage in
/// `0..=100`, with or without the `%`.
pub(crate) fn parse_percent_token(token: &str) -> Result<Float, ColorFormatError> {
    let (value, _) = parse_number_token(token)?;
    Ok(value.clamp(0.0, 100.0))
}

// ====================================================================================================================
