#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{match_function, parse_hashed, parse_hex6, trim_whitespace, FunctionMatch};
use crate::error::ColorFormatError;
use crate::keyword;
use crate::object::from_function;
use crate::Color;

/// A compatibility level for color syntax.
///
/// Each level corresponds to a historical standard and determines which
/// notations and keywords are accepted. Levels are ordered, with later levels
/// accepting more syntax, though not strictly more: `Css2` and `Css3` reject
/// the system colors, which have no defined RGB value.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prettycolor.color")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompatibilityLevel {
    /// The 16 basic keywords and `#RRGGBB`
    Basic,
    /// Adds `#RGB` and `rgb()` with integers or percentages
    Css1,
    /// Adds `orange` and rejects system colors
    Css2,
    /// Extended keywords, `transparent`, as well as `rgba()`, `hsl()`, and
    /// `hsla()`
    #[default]
    Css3,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl CompatibilityLevel {
    /// Parse the text with this compatibility level's syntax.
    ///
    /// ```
    /// # use prettycolor::{Color, CompatibilityLevel};
    /// assert_eq!(CompatibilityLevel::Css1.parse("rgb(0, 50%, 100%)"), Some(Color::new(0, 128, 255)));
    /// assert_eq!(CompatibilityLevel::Css1.parse("rgba(0, 0, 0, 0)"), None);
    /// assert_eq!(CompatibilityLevel::Css2.parse("Orange"), Some(Color::new(255, 165, 0)));
    /// ```
    pub fn parse(&self, text: &str) -> Option<Color> {
        parse(*self, text).ok()
    }
}

impl core::fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use CompatibilityLevel::*;

        let s = match self {
            Basic => "basic",
            Css1 => "CSS1",
            Css2 => "CSS2",
            Css3 => "CSS3",
        };

        f.write_str(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the text at the given compatibility level.
pub(crate) fn parse(level: CompatibilityLevel, text: &str) -> Result<Color, ColorFormatError> {
    let s = trim_whitespace(text);
    match level {
        CompatibilityLevel::Basic => parse_basic(s),
        CompatibilityLevel::Css1 => parse_css1(s),
        CompatibilityLevel::Css2 => parse_css2(s),
        CompatibilityLevel::Css3 => parse_css3(s),
    }
}

/// The syntactic categories of color text.
enum Notation<'a> {
    Hashed(&'a str),
    Functional(&'a str),
    Keyword(&'a str),
}

fn classify(s: &str) -> Result<Notation<'_>, ColorFormatError> {
    if s.is_empty() {
        Err(ColorFormatError::UnknownFormat)
    } else if s.starts_with('#') {
        Ok(Notation::Hashed(s))
    } else if s.contains('(') {
        Ok(Notation::Functional(s))
    } else {
        Ok(Notation::Keyword(s))
    }
}

/// Look up the keyword and convert its hexadecimal digits.
fn lookup(
    name: &str,
    table: fn(&str) -> Option<&'static str>,
) -> Result<Color, ColorFormatError> {
    let hex = table(name).ok_or(ColorFormatError::UnknownKeyword)?;
    crate::core::parse_hex_digits(hex).map(Color::from)
}

fn reject_system_color(name: &str) -> Result<(), ColorFormatError> {
    if keyword::is_system_color(name) {
        log::debug!("system color {:?} has no RGB value", name);
        Err(ColorFormatError::NoColor)
    } else {
        Ok(())
    }
}

/// Check that every argument is an integer or percentage.
fn expect_integers_or_percentages(function: &FunctionMatch<'_>) -> Result<(), ColorFormatError> {
    let is_integer = |s: &str| {
        let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    };

    if function
        .arguments
        .iter()
        .all(|arg| arg.ends_with('%') || is_integer(arg))
    {
        Ok(())
    } else {
        Err(ColorFormatError::MalformedNumber)
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn parse_basic(s: &str) -> Result<Color, ColorFormatError> {
    match classify(s)? {
        Notation::Hashed(s) => parse_hex6(s).map(Color::from),
        Notation::Functional(s) => match_function(s).and(Err(ColorFormatError::UnknownFunction)),
        Notation::Keyword(s) => lookup(s, keyword::basic),
    }
}

fn parse_css1(s: &str) -> Result<Color, ColorFormatError> {
    match classify(s)? {
        Notation::Hashed(s) => parse_hashed(s).map(Color::from),
        Notation::Functional(s) => {
            let function = match_function(s)?;
            if function.name != "rgb" {
                return Err(ColorFormatError::UnknownFunction);
            }
            expect_integers_or_percentages(&function)?;
            from_function(&function)
        }
        Notation::Keyword(s) => lookup(s, keyword::basic),
    }
}

fn parse_css2(s: &str) -> Result<Color, ColorFormatError> {
    match classify(s)? {
        Notation::Keyword(s) => {
            reject_system_color(s)?;
            if s.eq_ignore_ascii_case("orange") {
                Ok(Color::new(0xff, 0xa5, 0x00))
            } else {
                lookup(s, keyword::basic)
            }
        }
        _ => parse_css1(s),
    }
}

fn parse_css3(s: &str) -> Result<Color, ColorFormatError> {
    match classify(s)? {
        Notation::Hashed(s) => parse_hashed(s).map(Color::from),
        Notation::Functional(s) => {
            let function = match_function(s)?;
            match function.name.as_str() {
                "rgb" | "rgba" | "hsl" | "hsla" => from_function(&function),
                _ => Err(ColorFormatError::UnknownFunction),
            }
        }
        Notation::Keyword(s) => {
            reject_system_color(s)?;
            if s.eq_ignore_ascii_case("transparent") {
                Ok(Color::new(0, 0, 0).with_alpha(0.0))
            } else {
                lookup(s, keyword::extended)
            }
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, CompatibilityLevel};
    use crate::error::ColorFormatError;
    use crate::Color;

    #[test]
    fn test_basic() -> Result<(), ColorFormatError> {
        use CompatibilityLevel::Basic;

        assert_eq!(parse(Basic, "Navy")?, Color::new(0, 0, 128));
        assert_eq!(parse(Basic, " #00FF7f\n")?, Color::new(0, 255, 127));
        assert_eq!(parse(Basic, "#abc"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse(Basic, "orange"), Err(ColorFormatError::UnknownKeyword));
        assert_eq!(parse(Basic, "cornflowerblue"), Err(ColorFormatError::UnknownKeyword));
        assert_eq!(parse(Basic, "rgb(1, 2, 3)"), Err(ColorFormatError::UnknownFunction));
        assert_eq!(parse(Basic, "rgb(1, 2, 3"), Err(ColorFormatError::NoClosingParenthesis));
        assert_eq!(parse(Basic, "  "), Err(ColorFormatError::UnknownFormat));
        Ok(())
    }

    #[test]
    fn test_css1() -> Result<(), ColorFormatError> {
        use CompatibilityLevel::Css1;

        assert_eq!(parse(Css1, "#abc")?, Color::new(0xaa, 0xbb, 0xcc));
        assert_eq!(parse(Css1, "#aabbcc")?, Color::new(0xaa, 0xbb, 0xcc));
        assert_eq!(parse(Css1, "RGB(255, 0, 0)")?, Color::new(255, 0, 0));
        assert_eq!(parse(Css1, "rgb(100%, 50%, -7)")?, Color::new(255, 128, 0));
        assert_eq!(parse(Css1, "rgb(12.5%, 0, 0)")?, Color::new(32, 0, 0));
        assert_eq!(parse(Css1, "rgb(1.5, 0, 0)"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(parse(Css1, "rgb(1e2, 0, 0)"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(parse(Css1, "hsl(0, 100%, 50%)"), Err(ColorFormatError::UnknownFunction));
        assert_eq!(parse(Css1, "rgba(0, 0, 0, 1)"), Err(ColorFormatError::UnknownFunction));
        assert_eq!(parse(Css1, "orange"), Err(ColorFormatError::UnknownKeyword));
        assert_eq!(parse(Css1, "ButtonFace"), Err(ColorFormatError::UnknownKeyword));
        Ok(())
    }

    #[test]
    fn test_css2() -> Result<(), ColorFormatError> {
        use CompatibilityLevel::Css2;

        assert_eq!(parse(Css2, "orange")?, Color::new(255, 165, 0));
        assert_eq!(parse(Css2, "ORANGE")?, Color::new(255, 165, 0));
        assert_eq!(parse(Css2, "teal")?, Color::new(0, 128, 128));
        assert_eq!(parse(Css2, "#f00")?, Color::new(255, 0, 0));
        assert_eq!(parse(Css2, "rgb(0, 0, 100%)")?, Color::new(0, 0, 255));
        assert_eq!(parse(Css2, "ButtonFace"), Err(ColorFormatError::NoColor));
        assert_eq!(parse(Css2, "windowtext"), Err(ColorFormatError::NoColor));
        assert_eq!(parse(Css2, "coral"), Err(ColorFormatError::UnknownKeyword));
        Ok(())
    }

    #[test]
    fn test_css3() -> Result<(), ColorFormatError> {
        use CompatibilityLevel::Css3;

        assert_eq!(parse(Css3, "coral")?, Color::new(255, 127, 80));
        assert_eq!(parse(Css3, "Grey")?, Color::new(128, 128, 128));
        assert_eq!(parse(Css3, "rebeccapurple")?, Color::new(0x66, 0x33, 0x99));
        assert_eq!(parse(Css3, "TRANSPARENT")?, Color::from_rgba(0.0, 0.0, 0.0, 0.0));
        assert_eq!(parse(Css3, "rgb(1.5, 0, 0)")?, Color::new(2, 0, 0));
        assert_eq!(
            parse(Css3, "rgba(255, 0, 0, 0.5)")?,
            Color::from_rgba(255.0, 0.0, 0.0, 0.5)
        );
        assert_eq!(parse(Css3, "hsl(120, 100%, 50%)")?, Color::new(0, 255, 0));
        assert_eq!(
            parse(Css3, "hsla(240, 100%, 50%, 0)")?,
            Color::from_rgba(0.0, 0.0, 255.0, 0.0)
        );
        assert_eq!(parse(Css3, "hsv(0, 100%, 100%)"), Err(ColorFormatError::UnknownFunction));
        assert_eq!(parse(Css3, "rgb(1, 2)"), Err(ColorFormatError::MissingCoordinate));
        assert_eq!(parse(Css3, "rgb(1, 2, 3, 4)"), Err(ColorFormatError::TooManyCoordinates));
        assert_eq!(parse(Css3, "highlight"), Err(ColorFormatError::NoColor));
        assert_eq!(parse(Css3, "#12"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse(Css3, "#12345g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse(Css3, "chucknorris"), Err(ColorFormatError::UnknownKeyword));
        Ok(())
    }

    #[test]
    fn test_level() {
        assert_eq!(CompatibilityLevel::default(), CompatibilityLevel::Css3);
        assert!(CompatibilityLevel::Basic < CompatibilityLevel::Css1);
        assert_eq!(format!("{}", CompatibilityLevel::Css2), "CSS2");
        assert_eq!(CompatibilityLevel::Basic.parse("#abc"), None);
        assert_eq!(
            CompatibilityLevel::Css3.parse("#abc"),
            Some(Color::new(0xaa, 0xbb, 0xcc))
        );
    }
}
