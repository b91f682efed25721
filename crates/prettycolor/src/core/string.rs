use crate::error::ColorFormatError;

/// The white space characters recognized by HTML and CSS color syntax.
///
/// Notably, Unicode white space such as the no-break space is *not* included.
const WHITESPACE: [char; 5] = [' ', '\t', '\n', '\x0c', '\r'];

/// Strip the five HTML white space characters from both ends of the string.
#[inline]
pub(crate) fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(|c: char| WHITESPACE.contains(&c))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a coordinate of one or two hexadecimal digits.
///
/// A single digit is doubled, e.g., `a` becomes `aa`.
#[inline]
fn parse_coordinate(s: &str) -> Result<u8, ColorFormatError> {
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let n = u8::from_str_radix(s, 16).map_err(|_| ColorFormatError::MalformedHex)?;
    Ok(if s.len() == 1 { 16 * n + n } else { n })
}

/// Parse three or six hexadecimal digits without leading `#` into three
/// unsigned bytes.
pub(crate) fn parse_hex_digits(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if s.len() != 3 && s.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let factor = s.len() / 3;
    let mut coordinates = [0_u8; 3];
    for (index, coordinate) in coordinates.iter_mut().enumerate() {
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        *coordinate = parse_coordinate(t)?;
    }

    Ok(coordinates)
}

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s
        .strip_prefix('#')
        .ok_or(ColorFormatError::UnknownFormat)?;
    parse_hex_digits(digits)
}

/// Parse a color in `#RGB` format only.
pub(crate) fn parse_hex3(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if s.len() != 4 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }
    parse_hashed(s)
}

/// Parse a color in `#RRGGBB` format only.
pub(crate) fn parse_hex6(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }
    parse_hashed(s)
}

// --------------------------------------------------------------------------------------------------------------------

/// The result of matching functional notation.
///
/// The name is converted to ASCII lowercase. The arguments are the raw
/// substrings of the input, stripped of surrounding white space but otherwise
/// uninterpreted. Every argument is known to be a well-formed number or
/// percentage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FunctionMatch<'a> {
    pub name: String,
    pub arguments: Vec<&'a str>,
}

impl FunctionMatch<'_> {
    /// Check that the function has exactly the given number of arguments.
    pub fn expect_arity(&self, arity: usize) -> Result<(), ColorFormatError> {
        match self.arguments.len().cmp(&arity) {
            core::cmp::Ordering::Less => Err(ColorFormatError::MissingCoordinate),
            core::cmp::Ordering::Equal => Ok(()),
            core::cmp::Ordering::Greater => Err(ColorFormatError::TooManyCoordinates),
        }
    }
}

/// Match the string against the generic `name(arg, arg, ...)` notation.
///
/// The name must be a non-empty sequence of ASCII letters immediately followed
/// by the opening parenthesis, and the string must end with the closing
/// parenthesis. Arguments are separated by commas, may be surrounded by white
/// space, and must be integers or decimals, optionally signed, optionally with
/// exponent, and optionally followed by `%`. The function does not trim the
/// string.
pub(crate) fn match_function(s: &str) -> Result<FunctionMatch<'_>, ColorFormatError> {
    let name_length = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    if name_length == 0 {
        return Err(ColorFormatError::UnknownFormat);
    }

    let (name, rest) = s.split_at(name_length);
    let body = rest
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)?
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    // A function without arguments has no argument tokens at all.
    let arguments = if trim_whitespace(body).is_empty() {
        Vec::new()
    } else {
        body.split(',')
            .map(|argument| {
                let token = trim_whitespace(argument);
                crate::core::parse_number_token(token).map(|_| token)
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(FunctionMatch {
        name: name.to_ascii_lowercase(),
        arguments,
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the coordinates in hashed hexadecimal notation.
///
/// If `shorten` is true and each coordinate's two digits are the same, this
/// function uses the three-digit notation.
pub(crate) fn format_hex(coordinates: &[u8; 3], shorten: bool) -> String {
    let [r, g, b] = *coordinates;
    let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
    if shorten {
        shorten_hex(&hex)
    } else {
        hex
    }
}

/// Collapse `#aabbcc` into `#abc`.
///
/// The string is returned unchanged unless it has six hex digits after the
/// `#` and every pair of digits is made up of the same digit twice.
fn shorten_hex(s: &str) -> String {
    let Some(digits) = s.strip_prefix('#') else {
        return s.to_owned();
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return s.to_owned();
    }

    let mut short = String::with_capacity(4);
    short.push('#');
    for pair in digits.as_bytes().chunks_exact(2) {
        match *pair {
            [first, second] if first.eq_ignore_ascii_case(&second) => {
                short.push(char::from(first));
            }
            _ => return s.to_owned(),
        }
    }
    short
}

/// Format the alpha value with up to two decimals and without trailing zeros.
pub(crate) fn format_alpha(alpha: crate::Float) -> String {
    let alpha = (alpha * 100.0).round() / 100.0;
    format!("{}", alpha)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        format_alpha, format_hex, match_function, parse_hashed, parse_hex3, parse_hex6,
        shorten_hex, trim_whitespace, ColorFormatError, FunctionMatch,
    };

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#abc")?, [170_u8, 187, 204]);
        assert_eq!(parse_hashed("#ABCDEF")?, [0xab_u8, 0xcd, 0xef]);
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩0"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#00g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#+1+1+1"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_parse_hex_length() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex3("#fa0")?, [0xff_u8, 0xaa, 0x00]);
        assert_eq!(
            parse_hex3("#ffaa00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hex6("#ffaa00")?, [0xff_u8, 0xaa, 0x00]);
        assert_eq!(
            parse_hex6("#fa0"),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        Ok(())
    }

    #[test]
    fn test_match_function() -> Result<(), ColorFormatError> {
        assert_eq!(
            match_function("RGB(1, 2%,\t3.5e1 )")?,
            FunctionMatch {
                name: "rgb".to_string(),
                arguments: vec!["1", "2%", "3.5e1"],
            }
        );
        assert_eq!(
            match_function("hsla(\n-30,100%,50%,.5\r\n)")?,
            FunctionMatch {
                name: "hsla".to_string(),
                arguments: vec!["-30", "100%", "50%", ".5"],
            }
        );
        assert_eq!(
            match_function("whatever()")?,
            FunctionMatch {
                name: "whatever".to_string(),
                arguments: vec![],
            }
        );

        assert_eq!(
            match_function("(1, 2, 3)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            match_function("rgb 1, 2, 3)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            match_function("rgb (1, 2, 3)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            match_function("rgb(1, 2, 3"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            match_function("rgb(1, 2px, 3)"),
            Err(ColorFormatError::MalformedNumber)
        );
        assert_eq!(
            match_function("rgb(1,, 3)"),
            Err(ColorFormatError::MalformedNumber)
        );
        assert_eq!(
            match_function("rgb(1 2 3)"),
            Err(ColorFormatError::MalformedNumber)
        );
        assert_eq!(
            match_function("rgb(1,\u{a0}2, 3)"),
            Err(ColorFormatError::MalformedNumber)
        );

        Ok(())
    }

    #[test]
    fn test_arity() -> Result<(), ColorFormatError> {
        let rgb = match_function("rgb(1, 2, 3)")?;
        assert_eq!(rgb.expect_arity(3), Ok(()));
        assert_eq!(
            rgb.expect_arity(4),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            rgb.expect_arity(2),
            Err(ColorFormatError::TooManyCoordinates)
        );
        Ok(())
    }

    #[test]
    fn test_format() {
        assert_eq!(trim_whitespace(" \t\n\x0c\r#abc \r"), "#abc");
        assert_eq!(trim_whitespace("\u{a0}#abc"), "\u{a0}#abc");

        assert_eq!(format_hex(&[0xaa, 0xbb, 0xcc], false), "#aabbcc");
        assert_eq!(format_hex(&[0xaa, 0xbb, 0xcc], true), "#abc");
        assert_eq!(format_hex(&[0xaa, 0xbb, 0xcd], true), "#aabbcd");
        assert_eq!(format_hex(&[0, 0, 0], true), "#000");

        assert_eq!(shorten_hex("#AABBCC"), "#ABC");
        assert_eq!(shorten_hex("#aabbc"), "#aabbc");
        assert_eq!(shorten_hex("aabbcc"), "aabbcc");
        assert_eq!(shorten_hex("#aabbcd"), "#aabbcd");
        assert_eq!(shorten_hex("#aabbgg"), "#aabbgg");
        assert_eq!(shorten_hex("#ééé"), "#ééé");

        assert_eq!(format_alpha(1.0), "1");
        assert_eq!(format_alpha(0.0), "0");
        assert_eq!(format_alpha(0.5), "0.5");
        assert_eq!(format_alpha(0.3333), "0.33");
    }
}
