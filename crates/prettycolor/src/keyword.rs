//! The color keyword tables.
//!
//! Each table maps lowercase color names to six-digit hexadecimal strings
//! without the leading `#`. The tables are sorted by name, which makes lookup a
//! binary search. Lookup is ASCII case-insensitive.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The 16 color keywords of HTML 4 and CSS 1.
pub const BASIC_KEYWORDS: [(&str, &str); 16] = [
    ("aqua", "00ffff"),
    ("black", "000000"),
    ("blue", "0000ff"),
    ("fuchsia", "ff00ff"),
    ("gray", "808080"),
    ("green", "008000"),
    ("lime", "00ff00"),
    ("maroon", "800000"),
    ("navy", "000080"),
    ("olive", "808000"),
    ("purple", "800080"),
    ("red", "ff0000"),
    ("silver", "c0c0c0"),
    ("teal", "008080"),
    ("white", "ffffff"),
    ("yellow", "ffff00"),
];

/// The 148 color keywords of CSS Color 3, including the `grey` spellings, plus
/// `rebeccapurple` from CSS Color 4.
pub const EXTENDED_KEYWORDS: [(&str, &str); 148] = [
    ("aliceblue", "f0f8ff"),
    ("antiquewhite", "faebd7"),
    ("aqua", "00ffff"),
    ("aquamarine", "7fffd4"),
    ("azure", "f0ffff"),
    ("beige", "f5f5dc"),
    ("bisque", "ffe4c4"),
    ("black", "000000"),
    ("blanchedalmond", "ffebcd"),
    ("blue", "0000ff"),
    ("blueviolet", "8a2be2"),
    ("brown", "a52a2a"),
    ("burlywood", "deb887"),
    ("cadetblue", "5f9ea0"),
    ("chartreuse", "7fff00"),
    ("chocolate", "d2691e"),
    ("coral", "ff7f50"),
    ("cornflowerblue", "6495ed"),
    ("cornsilk", "fff8dc"),
    ("crimson", "dc143c"),
    ("cyan", "00ffff"),
    ("darkblue", "00008b"),
    ("darkcyan", "008b8b"),
    ("darkgoldenrod", "b8860b"),
    ("darkgray", "a9a9a9"),
    ("darkgreen", "006400"),
    ("darkgrey", "a9a9a9"),
    ("darkkhaki", "bdb76b"),
    ("darkmagenta", "8b008b"),
    ("darkolivegreen", "556b2f"),
    ("darkorange", "ff8c00"),
    ("darkorchid", "9932cc"),
    ("darkred", "8b0000"),
    ("darksalmon", "e9967a"),
    ("darkseagreen", "8fbc8f"),
    ("darkslateblue", "483d8b"),
    ("darkslategray", "2f4f4f"),
    ("darkslategrey", "2f4f4f"),
    ("darkturquoise", "00ced1"),
    ("darkviolet", "9400d3"),
    ("deeppink", "ff1493"),
    ("deepskyblue", "00bfff"),
    ("dimgray", "696969"),
    ("dimgrey", "696969"),
    ("dodgerblue", "1e90ff"),
    ("firebrick", "b22222"),
    ("floralwhite", "fffaf0"),
    ("forestgreen", "228b22"),
    ("fuchsia", "ff00ff"),
    ("gainsboro", "dcdcdc"),
    ("ghostwhite", "f8f8ff"),
    ("gold", "ffd700"),
    ("goldenrod", "daa520"),
    ("gray", "808080"),
    ("green", "008000"),
    ("greenyellow", "adff2f"),
    ("grey", "808080"),
    ("honeydew", "f0fff0"),
    ("hotpink", "ff69b4"),
    ("indianred", "cd5c5c"),
    ("indigo", "4b0082"),
    ("ivory", "fffff0"),
    ("khaki", "f0e68c"),
    ("lavender", "e6e6fa"),
    ("lavenderblush", "fff0f5"),
    ("lawngreen", "7cfc00"),
    ("lemonchiffon", "fffacd"),
    ("lightblue", "add8e6"),
    ("lightcoral", "f08080"),
    ("lightcyan", "e0ffff"),
    ("lightgoldenrodyellow", "fafad2"),
    ("lightgray", "d3d3d3"),
    ("lightgreen", "90ee90"),
    ("lightgrey", "d3d3d3"),
    ("lightpink", "ffb6c1"),
    ("lightsalmon", "ffa07a"),
    ("lightseagreen", "20b2aa"),
    ("lightskyblue", "87cefa"),
    ("lightslategray", "778899"),
    ("lightslategrey", "778899"),
    ("lightsteelblue", "b0c4de"),
    ("lightyellow", "ffffe0"),
    ("lime", "00ff00"),
    ("limegreen", "32cd32"),
    ("linen", "faf0e6"),
    ("magenta", "ff00ff"),
    ("maroon", "800000"),
    ("mediumaquamarine", "66cdaa"),
    ("mediumblue", "0000cd"),
    ("mediumorchid", "ba55d3"),
    ("mediumpurple", "9370db"),
    ("mediumseagreen", "3cb371"),
    ("mediumslateblue", "7b68ee"),
    ("mediumspringgreen", "00fa9a"),
    ("mediumturquoise", "48d1cc"),
    ("mediumvioletred", "c71585"),
    ("midnightblue", "191970"),
    ("mintcream", "f5fffa"),
    ("mistyrose", "ffe4e1"),
    ("moccasin", "ffe4b5"),
    ("navajowhite", "ffdead"),
    ("navy", "000080"),
    ("oldlace", "fdf5e6"),
    ("olive", "808000"),
    ("olivedrab", "6b8e23"),
    ("orange", "ffa500"),
    ("orangered", "ff4500"),
    ("orchid", "da70d6"),
    ("palegoldenrod", "eee8aa"),
    ("palegreen", "98fb98"),
    ("paleturquoise", "afeeee"),
    ("palevioletred", "db7093"),
    ("papayawhip", "ffefd5"),
    ("peachpuff", "ffdab9"),
    ("peru", "cd853f"),
    ("pink", "ffc0cb"),
    ("plum", "dda0dd"),
    ("powderblue", "b0e0e6"),
    ("purple", "800080"),
    ("rebeccapurple", "663399"),
    ("red", "ff0000"),
    ("rosybrown", "bc8f8f"),
    ("royalblue", "4169e1"),
    ("saddlebrown", "8b4513"),
    ("salmon", "fa8072"),
    ("sandybrown", "f4a460"),
    ("seagreen", "2e8b57"),
    ("seashell", "fff5ee"),
    ("sienna", "a0522d"),
    ("silver", "c0c0c0"),
    ("skyblue", "87ceeb"),
    ("slateblue", "6a5acd"),
    ("slategray", "708090"),
    ("slategrey", "708090"),
    ("snow", "fffafa"),
    ("springgreen", "00ff7f"),
    ("steelblue", "4682b4"),
    ("tan", "d2b48c"),
    ("teal", "008080"),
    ("thistle", "d8bfd8"),
    ("tomato", "ff6347"),
    ("turquoise", "40e0d0"),
    ("violet", "ee82ee"),
    ("wheat", "f5deb3"),
    ("white", "ffffff"),
    ("whitesmoke", "f5f5f5"),
    ("yellow", "ffff00"),
    ("yellowgreen", "9acd32"),
];

/// The 28 CSS 2 system colors.
///
/// System colors depend on the user's desktop environment and hence have no
/// fixed RGB value.
pub const SYSTEM_COLORS: [&str; 28] = [
    "activeborder",
    "activecaption",
    "appworkspace",
    "background",
    "buttonface",
    "buttonhighlight",
    "buttonshadow",
    "buttontext",
    "captiontext",
    "graytext",
    "highlight",
    "highlighttext",
    "inactiveborder",
    "inactivecaption",
    "inactivecaptiontext",
    "infobackground",
    "infotext",
    "menu",
    "menutext",
    "scrollbar",
    "threeddarkshadow",
    "threedface",
    "threedhighlight",
    "threedlightshadow",
    "threedshadow",
    "window",
    "windowframe",
    "windowtext",
];

/// Look up the name in the given table.
fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    // No keyword is longer than 20 characters; don't lowercase garbage.
    if name.len() > 20 || !name.is_ascii() {
        return None;
    }

    let name = name.to_ascii_lowercase();
    table
        .binary_search_by(|(key, _)| (*key).cmp(name.as_str()))
        .ok()
        .map(|index| table[index].1)
}

/// Look up the name among the 16 basic color keywords.
///
/// ```
/// # use prettycolor::keyword;
/// assert_eq!(keyword::basic("Teal"), Some("008080"));
/// assert_eq!(keyword::basic("orange"), None);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn basic(name: &str) -> Option<&'static str> {
    lookup(&BASIC_KEYWORDS, name)
}

/// Look up the name among the extended color keywords.
///
/// ```
/// # use prettycolor::keyword;
/// assert_eq!(keyword::extended("CornflowerBlue"), Some("6495ed"));
/// assert_eq!(keyword::extended("transparent"), None);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn extended(name: &str) -> Option<&'static str> {
    lookup(&EXTENDED_KEYWORDS, name)
}

/// Determine whether the name is a CSS 2 system color.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn is_system_color(name: &str) -> bool {
    name.len() <= 20
        && SYSTEM_COLORS
            .iter()
            .any(|system| system.eq_ignore_ascii_case(name))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        basic, extended, is_system_color, BASIC_KEYWORDS, EXTENDED_KEYWORDS, SYSTEM_COLORS,
    };

    #[test]
    fn test_tables_are_sorted() {
        for window in BASIC_KEYWORDS.windows(2) {
            assert!(window[0].0 < window[1].0, "{} before {}", window[0].0, window[1].0);
        }
        for window in EXTENDED_KEYWORDS.windows(2) {
            assert!(window[0].0 < window[1].0, "{} before {}", window[0].0, window[1].0);
        }
        for window in SYSTEM_COLORS.windows(2) {
            assert!(window[0] < window[1], "{} before {}", window[0], window[1]);
        }
    }

    #[test]
    fn test_tables_are_well_formed() {
        for (name, hex) in EXTENDED_KEYWORDS.iter() {
            assert!(name.len() <= 20, "{} is too long", name);
            assert_eq!(hex.len(), 6, "{} has malformed value {}", name, hex);
            assert!(hex.bytes().all(|b| b.is_ascii_hexdigit()));
        }

        // The basic keywords are a subset of the extended keywords.
        for (name, hex) in BASIC_KEYWORDS.iter() {
            assert_eq!(extended(name), Some(*hex));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(basic("black"), Some("000000"));
        assert_eq!(basic("YELLOW"), Some("ffff00"));
        assert_eq!(basic("cornflowerblue"), None);
        assert_eq!(extended("aliceblue"), Some("f0f8ff"));
        assert_eq!(extended("YellowGreen"), Some("9acd32"));
        assert_eq!(extended("grey"), extended("gray"));
        assert_eq!(extended("rebeccapurple"), Some("663399"));
        assert_eq!(extended(" red"), None);
        assert_eq!(extended("réd"), None);
        assert_eq!(extended(""), None);

        assert!(is_system_color("ButtonFace"));
        assert!(is_system_color("windowtext"));
        assert!(!is_system_color("window text"));
        assert!(!is_system_color("red"));
    }
}
