//! The legacy color value algorithm.
//!
//! HTML's legacy color attributes, such as `bgcolor` on `<body>`, accept
//! nearly any text and still produce a color. This module implements the
//! algorithm behind that behavior. After trying keywords and `#RGB`, it
//! munges the text into hexadecimal digits, splits them into three equally
//! long components, and then shrinks the components until each has at most
//! two digits.
//!
//! Each step of the munging is a separate function over either the text or
//! the array of three components. All components always have the same
//! length. Since munging is bounded by the truncation to 128 characters, it
//! takes constant time, no matter how long the input.

use crate::core::{parse_hex3, parse_hex_digits, trim_whitespace};
use crate::{keyword, Color};

/// The maximum number of characters considered by the munging steps.
const MAX_LENGTH: usize = 128;

/// The maximum length of components before truncating to the last digits.
const MAX_COMPONENT_LENGTH: usize = 8;

/// Three components of equal length.
type Components<'a> = [&'a str; 3];

/// Replace every character outside the basic multilingual plane, i.e., every
/// character needing a surrogate pair in UTF-16, with `00`.
fn replace_astral(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if u32::from(c) > 0xffff {
            result.push_str("00");
        } else {
            result.push(c);
        }
    }
    result
}

/// Truncate the string to the given number of characters.
fn truncate_chars(s: &str, length: usize) -> &str {
    match s.char_indices().nth(length) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

/// Replace every character that is not an ASCII hexadecimal digit with `0`.
fn to_hex_digits(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_hexdigit() { c } else { '0' })
        .collect()
}

/// Append `0` until the length is positive and a multiple of three.
fn pad_to_triple(mut digits: String) -> String {
    while digits.is_empty() || digits.len() % 3 != 0 {
        digits.push('0');
    }
    digits
}

/// Split the digits into three equally long components.
///
/// The length of the digits must be a multiple of three. Since the digits are
/// ASCII only, slicing by byte offsets is safe.
fn split_components(digits: &str) -> Components<'_> {
    let length = digits.len() / 3;
    [
        &digits[..length],
        &digits[length..2 * length],
        &digits[2 * length..3 * length],
    ]
}

/// Keep the last eight digits of overly long components.
fn keep_last_digits(components: Components<'_>) -> Components<'_> {
    let length = components[0].len();
    if length <= MAX_COMPONENT_LENGTH {
        return components;
    }

    components.map(|c| &c[length - MAX_COMPONENT_LENGTH..])
}

/// Strip leading zeros for as long as all components start with a zero and
/// have more than two digits.
fn strip_leading_zeros(mut components: Components<'_>) -> Components<'_> {
    while components[0].len() > 2 && components.iter().all(|c| c.starts_with('0')) {
        components = components.map(|c| &c[1..]);
    }
    components
}

/// Keep the first two digits of components that are still too long.
fn keep_first_digits(components: Components<'_>) -> Components<'_> {
    if components[0].len() <= 2 {
        return components;
    }

    components.map(|c| &c[..2])
}

/// Parse the components of one or two digits each as hexadecimal numbers.
fn parse_components(components: Components<'_>) -> Color {
    let [r, g, b] = components.map(|c| u8::from_str_radix(c, 16).unwrap_or(0));
    Color::new(r, g, b)
}

/// Munge arbitrary text into a color.
fn munge(s: &str) -> Color {
    let s = replace_astral(s);
    let s = truncate_chars(&s, MAX_LENGTH);
    let s = s.strip_prefix('#').unwrap_or(s);
    let digits = pad_to_triple(to_hex_digits(s));

    let components = split_components(&digits);
    let components = keep_last_digits(components);
    let components = strip_leading_zeros(components);
    let components = keep_first_digits(components);
    log::trace!("legacy color components {:?}", components);

    parse_components(components)
}

/// Parse text with the legacy color value algorithm.
///
/// This function returns `None` for the empty string and for `transparent`
/// in any case. It returns a color for every other string.
pub(crate) fn parse(text: &str) -> Option<Color> {
    if text.is_empty() {
        return None;
    }

    let s = trim_whitespace(text);
    if s.eq_ignore_ascii_case("transparent") {
        return None;
    }

    if let Some(hex) = keyword::extended(s) {
        log::trace!("legacy color {:?} is a keyword", s);
        return parse_hex_digits(hex)
            .ok()
            .map(|[r, g, b]| Color::new(r, g, b));
    }

    if let Ok([r, g, b]) = parse_hex3(s) {
        log::trace!("legacy color {:?} is #RGB", s);
        return Some(Color::new(r, g, b));
    }

    Some(munge(s))
}

// ====================================================================================================================
