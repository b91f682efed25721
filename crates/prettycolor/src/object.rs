use core::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_byte, clamp_unit, format_alpha, format_hex, hsl_to_rgb, hsv_to_rgb, match_function,
    parse_channel_token, parse_hex3, parse_hex6, parse_hue_token, parse_percent_token, rgb_to_hsl,
    rgb_to_hsv, trim_whitespace, FunctionMatch,
};
use crate::error::ColorFormatError;
use crate::level::{self, CompatibilityLevel};
use crate::{legacy, Float};

/// An sRGB color with alpha.
///
/// Every color has three 8-bit channels for red, green, and blue as well as
/// an alpha value between zero (fully transparent) and one (fully opaque).
///
/// # Invariants
///
/// All four fields are always within range. Constructors taking floating
/// point channels first round to the nearest integer and then clamp to
/// `0..=255`. Alpha is clamped to `0.0..=1.0` without rounding. A
/// not-a-number alpha becomes `1.0` and negative zero becomes positive zero.
///
/// # Equality Testing and Hashing
///
/// Two colors are equal if all four fields are equal. Alpha is compared
/// exactly, without tolerance. Thanks to the normalization of not-a-number and
/// negative zero, hashing alpha's bits is consistent with equality.
///
/// # Parsing
///
/// Colors are created by parsing text in one of several ways:
///
///   * [`Color::parse_hex6`] and [`Color::parse_hex3`] for hashed hexadecimal
///     notation;
///   * [`Color::parse_functional`] for `rgb()`, `rgba()`, `hsl()`, `hsla()`,
///     `hsv()`, and `hsva()`;
///   * [`Color::parse_legacy`] for the permissive algorithm used by HTML's
///     legacy color attributes;
///   * [`Color::parse_at`] for the syntax of a specific
///     [`CompatibilityLevel`];
///   * [`Color as FromStr`](struct.Color.html#impl-FromStr-for-Color), which
///     reports why parsing failed.
///
/// Except for the last, they all return `None` when the text does not denote a
/// color.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettycolor.color")
)]
#[derive(Clone, Copy)]
pub struct Color {
    rgb: [u8; 3],
    alpha: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Create a new color from the given coordinates and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (r, g, b, a=1.0))]
    pub fn py_new(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self::from_rgba(r, g, b, a)
    }

    /// Create a new color from HSL coordinates and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "from_hsl", signature = (h, s, l, a=1.0))]
    pub fn py_from_hsl(h: Float, s: Float, l: Float, a: Float) -> Self {
        Self::from_hsla(h, s, l, a)
    }

    /// Create a new color from HSV coordinates and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "from_hsv", signature = (h, s, v, a=1.0))]
    pub fn py_from_hsv(h: Float, s: Float, v: Float, a: Float) -> Self {
        Self::from_hsva(h, s, v, a)
    }

    /// Parse a color in `#RRGGBB` notation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "parse_hex6")]
    pub fn py_parse_hex6(text: &str) -> Option<Self> {
        Self::parse_hex6(text)
    }

    /// Parse a color in `#RGB` notation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "parse_hex3")]
    pub fn py_parse_hex3(text: &str) -> Option<Self> {
        Self::parse_hex3(text)
    }

    /// Parse a color in functional notation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "parse_functional")]
    pub fn py_parse_functional(text: &str) -> Option<Self> {
        Self::parse_functional(text)
    }

    /// Parse a color with the legacy algorithm. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "parse_legacy")]
    pub fn py_parse_legacy(text: &str) -> Option<Self> {
        Self::parse_legacy(text)
    }

    /// Parse a color at the given compatibility level. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "parse_at")]
    pub fn py_parse_at(level: CompatibilityLevel, text: &str) -> Option<Self> {
        Self::parse_at(level, text)
    }

    /// Parse a color, raising an exception on failure. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(text: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(text)
    }

    /// Get the red channel.
    #[inline]
    pub fn red(&self) -> u8 {
        self.rgb[0]
    }

    /// Get the green channel.
    #[inline]
    pub fn green(&self) -> u8 {
        self.rgb[1]
    }

    /// Get the blue channel.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.rgb[2]
    }

    /// Get the alpha value.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }

    /// Convert this color to HSL.
    ///
    /// The result is the hue in degrees `0..360` as well as saturation and
    /// lightness in percent. Alpha is ignored.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(Color::new(255, 0, 0).to_hsl(), [0.0, 100.0, 50.0]);
    /// ```
    pub fn to_hsl(&self) -> [Float; 3] {
        rgb_to_hsl(&self.rgb)
    }

    /// Convert this color to HSV.
    ///
    /// The result is the hue in degrees `0..360` as well as saturation and
    /// value in percent. Alpha is ignored.
    pub fn to_hsv(&self) -> [Float; 3] {
        rgb_to_hsv(&self.rgb)
    }

    /// Format this color in hashed hexadecimal notation.
    ///
    /// Alpha is ignored. If `shorten` is true and each channel's two digits
    /// are the same, the result uses the three-digit notation.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// let color = Color::new(0xaa, 0xbb, 0xcc);
    /// assert_eq!(color.to_hex_string(false), "#aabbcc");
    /// assert_eq!(color.to_hex_string(true), "#abc");
    /// ```
    pub fn to_hex_string(&self, shorten: bool) -> String {
        format_hex(&self.rgb, shorten)
    }

    /// Format this color as `rgb()` functional notation.
    ///
    /// Alpha is ignored.
    pub fn to_rgb_string(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// Format this color as `rgba()` functional notation.
    ///
    /// Alpha is rounded to two decimals.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// let color = Color::from_rgba(255.0, 128.0, 0.0, 0.125);
    /// assert_eq!(color.to_rgba_string(), "rgba(255, 128, 0, 0.13)");
    /// ```
    pub fn to_rgba_string(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(self.alpha))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its display representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Color {
    /// Create a new, fully opaque color from 24-bit coordinates.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// let teal = Color::new(0, 128, 128);
    /// assert_eq!(teal.green(), 128);
    /// assert_eq!(teal.alpha(), 1.0);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: 1.0,
        }
    }

    /// Create a new, fully opaque color from floating point RGB coordinates.
    ///
    /// Each coordinate is rounded and then clamped to `0..=255`.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(Color::from_rgb(-5.0, 127.5, 300.0), Color::new(0, 128, 255));
    /// ```
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Create a new color from floating point RGB coordinates and alpha.
    ///
    /// Each coordinate is rounded and then clamped to `0..=255`. Alpha is
    /// clamped to `0.0..=1.0`.
    pub fn from_rgba(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self {
            rgb: [clamp_byte(r), clamp_byte(g), clamp_byte(b)],
            alpha: clamp_unit(a),
        }
    }

    /// Create a new, fully opaque color from HSL coordinates.
    ///
    /// The hue is in degrees and wraps around, so that `-30` is the same as
    /// `330`. Saturation and lightness are percentages clamped to `0..=100`.
    /// A saturation of zero always produces black.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(Color::from_hsl(120.0, 100.0, 50.0), Color::new(0, 255, 0));
    /// assert_eq!(Color::from_hsl(-30.0, 100.0, 50.0), Color::from_hsl(330.0, 100.0, 50.0));
    /// assert_eq!(Color::from_hsl(0.0, 0.0, 80.0), Color::new(0, 0, 0));
    /// ```
    pub fn from_hsl(h: Float, s: Float, l: Float) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Create a new color from HSL coordinates and alpha.
    pub fn from_hsla(h: Float, s: Float, l: Float, a: Float) -> Self {
        Self {
            rgb: hsl_to_rgb(h, s, l),
            alpha: clamp_unit(a),
        }
    }

    /// Create a new, fully opaque color from HSV coordinates.
    ///
    /// The conversion goes through HSL and hence shares its treatment of hue,
    /// percentages, and zero saturation.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(Color::from_hsv(240.0, 100.0, 50.0), Color::new(0, 0, 128));
    /// ```
    pub fn from_hsv(h: Float, s: Float, v: Float) -> Self {
        Self::from_hsva(h, s, v, 1.0)
    }

    /// Create a new color from HSV coordinates and alpha.
    pub fn from_hsva(h: Float, s: Float, v: Float, a: Float) -> Self {
        Self {
            rgb: hsv_to_rgb(h, s, v),
            alpha: clamp_unit(a),
        }
    }

    /// Create a new color with the same channels but the given alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            rgb: self.rgb,
            alpha: clamp_unit(alpha),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Parse a color in `#RRGGBB` notation.
    ///
    /// Leading and trailing white space is ignored. Hexadecimal digits may be
    /// upper or lower case.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(Color::parse_hex6("#FF8000"), Some(Color::new(255, 128, 0)));
    /// assert_eq!(Color::parse_hex6("#f80"), None);
    /// ```
    pub fn parse_hex6(text: &str) -> Option<Self> {
        parse_hex6(trim_whitespace(text))
            .ok()
            .map(|[r, g, b]| Self::new(r, g, b))
    }

    /// Parse a color in `#RGB` notation, doubling each digit.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(Color::parse_hex3("#abc"), Some(Color::new(170, 187, 204)));
    /// assert_eq!(Color::parse_hex3("#aabbcc"), None);
    /// ```
    pub fn parse_hex3(text: &str) -> Option<Self> {
        parse_hex3(trim_whitespace(text))
            .ok()
            .map(|[r, g, b]| Self::new(r, g, b))
    }

    /// Parse a color in functional notation.
    ///
    /// This method recognizes `rgb()` and `hsl()` with three arguments,
    /// `rgba()` and `hsla()` with four arguments, and the non-standard `hsv()`
    /// and `hsva()`, again with three and four arguments. Function names are
    /// case-insensitive. Arguments are separated by commas.
    ///
    ///   * RGB channels are numbers or percentages of 255, clamped to
    ///     `0..=255`;
    ///   * hues are degrees, with percentages denoting fractions of a full
    ///     turn;
    ///   * saturation, lightness, and value are percentages whether or not
    ///     they carry a `%`, clamped to `0..=100`;
    ///   * alpha is a number or percentage of one, clamped to `0..=1`.
    ///
    /// Any malformed argument makes the entire color invalid.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(
    ///     Color::parse_functional("rgb(100%, 50%, 0)"),
    ///     Some(Color::new(255, 128, 0))
    /// );
    /// assert_eq!(
    ///     Color::parse_functional("HSLA(240, 100%, 50%, 0.5)"),
    ///     Some(Color::from_rgba(0.0, 0.0, 255.0, 0.5))
    /// );
    /// assert_eq!(Color::parse_functional("rgb(1, 2, three)"), None);
    /// ```
    pub fn parse_functional(text: &str) -> Option<Self> {
        match_function(trim_whitespace(text))
            .and_then(|function| from_function(&function))
            .ok()
    }

    /// Parse a color with the legacy color value algorithm.
    ///
    /// This algorithm turns any text into a color, with two exceptions: The
    /// empty string and `transparent` in any case do not denote a color.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(Color::parse_legacy("chucknorris"), Some(Color::new(0xc0, 0, 0)));
    /// assert_eq!(Color::parse_legacy("  #abc123  "), Some(Color::new(0xab, 0xc1, 0x23)));
    /// assert_eq!(Color::parse_legacy("Transparent"), None);
    /// assert_eq!(Color::parse_legacy(""), None);
    /// ```
    pub fn parse_legacy(text: &str) -> Option<Self> {
        legacy::parse(text)
    }

    /// Parse a color with the syntax of the given compatibility level.
    ///
    /// ```
    /// # use prettycolor::{Color, CompatibilityLevel};
    /// assert_eq!(Color::parse_at(CompatibilityLevel::Basic, "#abc"), None);
    /// assert_eq!(
    ///     Color::parse_at(CompatibilityLevel::Css1, "#abc"),
    ///     Some(Color::new(0xaa, 0xbb, 0xcc))
    /// );
    /// ```
    pub fn parse_at(level: CompatibilityLevel, text: &str) -> Option<Self> {
        level::parse(level, text).ok()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Interpret a function match as a color.
///
/// This function dispatches on the function name and checks the number of
/// arguments before interpreting them with the appropriate channel semantics.
pub(crate) fn from_function(function: &FunctionMatch<'_>) -> Result<Color, ColorFormatError> {
    let args = &function.arguments;
    let (arity, has_alpha) = match function.name.as_str() {
        "rgb" | "hsl" | "hsv" => (3, false),
        "rgba" | "hsla" | "hsva" => (4, true),
        _ => return Err(ColorFormatError::UnknownFunction),
    };
    function.expect_arity(arity)?;

    let alpha = if has_alpha {
        parse_channel_token(args[3], 1.0)?
    } else {
        1.0
    };

    if function.name.starts_with("rgb") {
        let r = parse_channel_token(args[0], 255.0)?;
        let g = parse_channel_token(args[1], 255.0)?;
        let b = parse_channel_token(args[2], 255.0)?;
        Ok(Color::from_rgba(r, g, b, alpha))
    } else {
        let h = parse_hue_token(args[0])?;
        let s = parse_percent_token(args[1])?;
        let x = parse_percent_token(args[2])?;
        if function.name.starts_with("hsl") {
            Ok(Color::from_hsla(h, s, x, alpha))
        } else {
            Ok(Color::from_hsva(h, s, x, alpha))
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Default for Color {
    /// Create an instance of the default color, which is opaque black.
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// This method accepts the syntax of [`CompatibilityLevel::Css3`], i.e.,
    /// hashed hexadecimal notation with three or six digits, the `rgb()`,
    /// `rgba()`, `hsl()`, and `hsla()` functions, the extended color keywords,
    /// and `transparent`. Unlike the other parsing methods, it reports why
    /// parsing failed.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// # use prettycolor::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// assert_eq!(Color::from_str("cornflowerblue"), Ok(Color::new(100, 149, 237)));
    /// assert_eq!(Color::from_str("#12"), Err(ColorFormatError::UnexpectedCharacters));
    /// assert_eq!(Color::from_str("rgb(1, 2)"), Err(ColorFormatError::MissingCoordinate));
    /// assert_eq!(Color::from_str("buttonface"), Err(ColorFormatError::NoColor));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        level::parse(CompatibilityLevel::Css3, s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[u8; 3]> for Color {
    fn as_ref(&self) -> &[u8; 3] {
        &self.rgb
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl core::hash::Hash for Color {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
        self.alpha.to_bits().hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Colors are equal if their channels and alpha are equal. Alpha is
    /// compared exactly.
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.alpha == other.alpha
    }
}

impl Eq for Color {}

impl core::fmt::Debug for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.rgb;
        f.write_fmt(format_args!("Color({}, {}, {}, {})", r, g, b, self.alpha))
    }
}

impl core::fmt::Display for Color {
    /// Format this color.
    ///
    /// Opaque colors are formatted in six-digit hashed hexadecimal notation,
    /// all others as `rgba()` functions.
    ///
    /// ```
    /// # use prettycolor::Color;
    /// assert_eq!(format!("{}", Color::new(255, 0, 0)), "#ff0000");
    /// assert_eq!(
    ///     format!("{}", Color::from_rgba(255.0, 0.0, 0.0, 0.5)),
    ///     "rgba(255, 0, 0, 0.5)"
    /// );
    /// ```
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex_string(false))
        } else {
            f.write_str(&self.to_rgba_string())
        }
    }
}

// ====================================================================================================================
