//! Utility module with prettycolor's error.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// The public parsing functions report failure as `None`. This error
/// describes why a strict parse failed and is surfaced only by [`Color as
/// FromStr`](struct.Color.html#impl-FromStr-for-Color) and friends. Like the
/// rest of the crate's errors, it only has unit variants, since PyO3 does not
/// support variants with associated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is neither hashed hexadecimal, nor functional
    /// notation, nor a keyword.
    UnknownFormat,

    /// A hashed hexadecimal color with the wrong number of characters. For
    /// example, `#00` is missing a hexadecimal digit.
    UnexpectedCharacters,

    /// A hashed hexadecimal color with a character that is not a hexadecimal
    /// digit. For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A functional notation without the opening parenthesis after the
    /// function name. For example, `rgb 0, 0, 0)`.
    NoOpeningParenthesis,

    /// A functional notation without the closing parenthesis. For example,
    /// `hsl(0, 0%, 0%`.
    NoClosingParenthesis,

    /// A functional notation with a function name that is not supported in
    /// the current context. For example, `lab(50, 0, 0)`.
    UnknownFunction,

    /// A functional notation with an argument that is neither number nor
    /// percentage. For example, `rgb(1, 2px, 3)`.
    MalformedNumber,

    /// A functional notation with fewer arguments than its function requires.
    /// For example, `rgba(0, 0, 0)` is missing the alpha argument.
    MissingCoordinate,

    /// A functional notation with more arguments than its function accepts.
    /// For example, `rgb(0, 0, 0, 1)` has one argument too many.
    TooManyCoordinates,

    /// A name that is not a color keyword at the current compatibility level.
    UnknownKeyword,

    /// A keyword that deliberately has no color, i.e., `transparent` for the
    /// legacy algorithm and the system colors.
    NoColor,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should be hashed hexadecimal, functional notation, or a keyword",
            ),
            UnexpectedCharacters => {
                f.write_str("hashed hexadecimal color should have 3 or 6 digits but does not")
            }
            MalformedHex => {
                f.write_str("hashed hexadecimal color should contain only hex digits but does not")
            }
            NoOpeningParenthesis => {
                f.write_str("color function should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color function should include a closing parenthesis but has none")
            }
            UnknownFunction => f.write_str("color function should be known but is not"),
            MalformedNumber => f.write_str(
                "color function arguments should be numbers or percentages but are not",
            ),
            MissingCoordinate => {
                f.write_str("color function should have more arguments but is missing one")
            }
            TooManyCoordinates => {
                f.write_str("color function should have fewer arguments but has more")
            }
            UnknownKeyword => f.write_str("color keyword should be known but is not"),
            NoColor => f.write_str("color keyword should denote a color but does not"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
